//! Site manifest assembly.
//!
//! The [`SiteManifest`] is the one static object handed to the external
//! site-generation framework: site info, theme, plugin wiring, navigation,
//! sidebar and the redirect rules. Assembled once at startup, serialized
//! as JSON by the build.

use std::collections::BTreeMap;

use docroute_redirects::RedirectRule;
use serde::Serialize;

use crate::nav::{NavEntry, NavError, validate_nav_entries, validate_sidebar};
use crate::options::{PluginOptions, SiteInfo, ThemeOptions};

/// Complete framework-facing configuration object.
#[derive(Clone, Debug, Serialize)]
pub struct SiteManifest {
    /// Core site information.
    pub site: SiteInfo,
    /// Theme options.
    pub theme: ThemeOptions,
    /// Plugin wiring.
    pub plugins: PluginOptions,
    /// Navbar entries, in display order.
    pub navbar: Vec<NavEntry>,
    /// Sidebar trees keyed by path prefix.
    pub sidebar: BTreeMap<String, Vec<NavEntry>>,
    /// Redirect rules, sources normalized.
    pub redirects: Vec<RedirectRule>,
}

impl SiteManifest {
    /// Assemble and validate a manifest.
    ///
    /// # Errors
    ///
    /// Returns [`NavError`] on malformed navigation or, when an enabled
    /// plugin needs it, a hostname that is not an absolute http(s) URL.
    pub fn new(
        site: SiteInfo,
        theme: ThemeOptions,
        plugins: PluginOptions,
        navbar: Vec<NavEntry>,
        sidebar: BTreeMap<String, Vec<NavEntry>>,
        redirects: Vec<RedirectRule>,
    ) -> Result<Self, NavError> {
        validate_nav_entries(&navbar)?;
        validate_sidebar(&sidebar)?;
        if plugins.requires_hostname() {
            site.validate_hostname()?;
        }

        Ok(Self {
            site,
            theme,
            plugins,
            navbar,
            sidebar,
            redirects,
        })
    }

    /// Serialize to pretty-printed JSON for `manifest.json`.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error on failure.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::nav::NavChild;

    fn sample_manifest() -> SiteManifest {
        let site = SiteInfo {
            title: "Go Redis".to_owned(),
            description: "Golang Redis client for Redis Server and Redis Cluster".to_owned(),
            hostname: "https://redis.uptrace.dev".to_owned(),
            ..Default::default()
        };
        let navbar = vec![NavEntry {
            text: "Guide".to_owned(),
            link: Some("/guide/".to_owned()),
            ..Default::default()
        }];
        let mut sidebar = BTreeMap::new();
        sidebar.insert(
            "/".to_owned(),
            vec![NavEntry {
                text: "Guide".to_owned(),
                is_group: true,
                children: vec![NavChild::Link("/guide/README.md".to_owned())],
                ..Default::default()
            }],
        );
        let redirects = vec![RedirectRule {
            source: "/guide/cluster.html/".to_owned(),
            destination: "/guide/go-redis-cluster.html".to_owned(),
        }];

        SiteManifest::new(
            site,
            ThemeOptions::default(),
            PluginOptions::default(),
            navbar,
            sidebar,
            redirects,
        )
        .unwrap()
    }

    #[test]
    fn test_manifest_serialization_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&sample_manifest().to_json_pretty().unwrap()).unwrap();

        assert_eq!(json["site"]["title"], "Go Redis");
        assert_eq!(json["site"]["lang"], "en-US");
        assert_eq!(json["navbar"][0]["link"], "/guide/");
        assert_eq!(json["sidebar"]["/"][0]["isGroup"], true);
        assert_eq!(json["redirects"][0]["source"], "/guide/cluster.html/");
        assert_eq!(json["plugins"]["search"], true);
    }

    #[test]
    fn test_manifest_rejects_invalid_nav() {
        let result = SiteManifest::new(
            SiteInfo {
                hostname: "https://example.com".to_owned(),
                ..Default::default()
            },
            ThemeOptions::default(),
            PluginOptions::default(),
            vec![NavEntry {
                text: "Broken".to_owned(),
                ..Default::default()
            }],
            BTreeMap::new(),
            Vec::new(),
        );
        assert!(matches!(
            result.unwrap_err(),
            NavError::LeafWithoutLink { .. }
        ));
    }

    #[test]
    fn test_manifest_requires_hostname_for_seo() {
        let result = SiteManifest::new(
            SiteInfo::default(),
            ThemeOptions::default(),
            PluginOptions::default(),
            Vec::new(),
            BTreeMap::new(),
            Vec::new(),
        );
        assert!(matches!(
            result.unwrap_err(),
            NavError::InvalidHostname { .. }
        ));
    }

    #[test]
    fn test_manifest_allows_missing_hostname_when_unused() {
        let plugins = PluginOptions {
            analytics_id: None,
            search: true,
            sitemap: false,
            seo: false,
        };
        let result = SiteManifest::new(
            SiteInfo::default(),
            ThemeOptions::default(),
            plugins,
            Vec::new(),
            BTreeMap::new(),
            Vec::new(),
        );
        assert!(result.is_ok());
    }
}
