//! Environment variable expansion for configuration strings.
//!
//! Supports `${VAR}` (errors when unset) and `${VAR:-default}`. Literal
//! strings without `$` pass through unchanged.

use crate::ConfigError;

/// Expand environment variable references in a configuration value.
///
/// `field` names the configuration field for error messages, e.g.
/// `"site.hostname"`.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(value, lookup)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: e.cause,
        })
}

/// Resolve a `${...}` reference, honoring `VAR:-default` syntax.
fn lookup(raw: &str) -> Result<Option<String>, String> {
    let (name, default) = match raw.split_once(":-") {
        Some((name, default)) => (name, Some(default)),
        None => (raw, None),
    };

    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => match default {
            Some(default) => Ok(Some(default.to_owned())),
            None => Err(format!("${{{name}}} is not set")),
        },
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_literal_unchanged() {
        let result = expand_env("https://redis.uptrace.dev", "site.hostname").unwrap();
        assert_eq!(result, "https://redis.uptrace.dev");
    }

    #[test]
    fn test_expand_set_variable() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCROUTE_TEST_HOST", "0.0.0.0");
        }

        let result = expand_env("${DOCROUTE_TEST_HOST}", "server.host").unwrap();
        assert_eq!(result, "0.0.0.0");

        unsafe {
            std::env::remove_var("DOCROUTE_TEST_HOST");
        }
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCROUTE_TEST_MISSING");
        }

        let result = expand_env("${DOCROUTE_TEST_MISSING:-127.0.0.1}", "server.host").unwrap();
        assert_eq!(result, "127.0.0.1");
    }

    #[test]
    fn test_missing_required_variable() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCROUTE_TEST_MISSING_REQUIRED");
        }

        let err = expand_env("${DOCROUTE_TEST_MISSING_REQUIRED}", "plugins.analytics_id")
            .unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("DOCROUTE_TEST_MISSING_REQUIRED"));
        assert!(err.to_string().contains("plugins.analytics_id"));
    }
}
