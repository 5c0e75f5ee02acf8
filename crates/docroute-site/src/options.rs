//! Site, theme and plugin option objects.
//!
//! Static configuration handed to the external framework verbatim. None of
//! these carry runtime behavior beyond serialization; validation is limited
//! to the hostname shape because sitemap/SEO/analytics emission depends on
//! it.

use serde::{Deserialize, Serialize};

use crate::nav::NavError;

/// Core site information.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteInfo {
    /// Site title.
    pub title: String,
    /// Site description (meta description).
    pub description: String,
    /// Site language code.
    pub lang: String,
    /// Absolute site URL, used for sitemap, SEO canonical URLs and
    /// redirect-page canonical links. Empty disables those emissions.
    pub hostname: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            lang: "en-US".to_owned(),
            hostname: String::new(),
        }
    }
}

impl SiteInfo {
    /// Validate the hostname shape.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidHostname`] unless the hostname is an
    /// absolute http(s) URL.
    pub fn validate_hostname(&self) -> Result<(), NavError> {
        if self.hostname.starts_with("http://") || self.hostname.starts_with("https://") {
            Ok(())
        } else {
            Err(NavError::InvalidHostname {
                value: self.hostname.clone(),
            })
        }
    }

    /// Build the canonical URL for an absolute site path.
    ///
    /// Returns `None` when no hostname is configured.
    #[must_use]
    pub fn canonical_url(&self, path: &str) -> Option<String> {
        if self.hostname.is_empty() {
            None
        } else {
            Some(format!("{}{path}", self.hostname.trim_end_matches('/')))
        }
    }
}

/// Theme options for the frontend.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct ThemeOptions {
    /// Logo path (relative to the public assets directory).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Enable the dark mode toggle.
    pub dark_mode: bool,
    /// Show page contributors.
    pub contributors: bool,
    /// Text of the edit-this-page link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link_text: Option<String>,
}

/// Build-plugin wiring.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct PluginOptions {
    /// Google Analytics measurement ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_id: Option<String>,
    /// Enable the search plugin.
    pub search: bool,
    /// Emit a sitemap (requires hostname).
    pub sitemap: bool,
    /// Emit SEO meta tags with canonical URLs (requires hostname).
    pub seo: bool,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            analytics_id: None,
            search: true,
            sitemap: true,
            seo: true,
        }
    }
}

impl PluginOptions {
    /// Whether any enabled plugin needs an absolute hostname.
    #[must_use]
    pub fn requires_hostname(&self) -> bool {
        self.sitemap || self.seo || self.analytics_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_site_info_defaults() {
        let info = SiteInfo::default();
        assert_eq!(info.lang, "en-US");
        assert!(info.hostname.is_empty());
    }

    #[test]
    fn test_validate_hostname_accepts_https() {
        let info = SiteInfo {
            hostname: "https://redis.uptrace.dev".to_owned(),
            ..Default::default()
        };
        assert!(info.validate_hostname().is_ok());
    }

    #[test]
    fn test_validate_hostname_rejects_bare_domain() {
        let info = SiteInfo {
            hostname: "redis.uptrace.dev".to_owned(),
            ..Default::default()
        };
        assert!(matches!(
            info.validate_hostname().unwrap_err(),
            NavError::InvalidHostname { .. }
        ));
    }

    #[test]
    fn test_canonical_url() {
        let info = SiteInfo {
            hostname: "https://redis.uptrace.dev".to_owned(),
            ..Default::default()
        };
        assert_eq!(
            info.canonical_url("/guide/go-redis-cluster.html"),
            Some("https://redis.uptrace.dev/guide/go-redis-cluster.html".to_owned())
        );
    }

    #[test]
    fn test_canonical_url_trims_trailing_slash() {
        let info = SiteInfo {
            hostname: "https://redis.uptrace.dev/".to_owned(),
            ..Default::default()
        };
        assert_eq!(
            info.canonical_url("/guide/"),
            Some("https://redis.uptrace.dev/guide/".to_owned())
        );
    }

    #[test]
    fn test_canonical_url_without_hostname() {
        assert_eq!(SiteInfo::default().canonical_url("/guide/"), None);
    }

    #[test]
    fn test_plugin_defaults() {
        let plugins = PluginOptions::default();
        assert!(plugins.search);
        assert!(plugins.sitemap);
        assert!(plugins.seo);
        assert!(plugins.analytics_id.is_none());
        assert!(plugins.requires_hostname());
    }

    #[test]
    fn test_requires_hostname_all_disabled() {
        let plugins = PluginOptions {
            analytics_id: None,
            search: true,
            sitemap: false,
            seo: false,
        };
        assert!(!plugins.requires_hostname());
    }

    #[test]
    fn test_theme_serializes_camel_case() {
        let theme = ThemeOptions {
            logo: Some("/favicon-32x32.png".to_owned()),
            dark_mode: false,
            contributors: false,
            edit_link_text: Some("Edit this page on GitHub".to_owned()),
        };
        let json = serde_json::to_value(&theme).unwrap();
        assert_eq!(json["darkMode"], false);
        assert_eq!(json["editLinkText"], "Edit this page on GitHub");
    }
}
