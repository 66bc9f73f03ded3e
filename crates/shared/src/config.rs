//! Application configuration management.

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

/// Default upload ceiling: 25 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 25 * 1024 * 1024;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Upload limits.
    #[serde(default)]
    pub upload: UploadConfig,
    /// Destination webhook configuration.
    #[serde(default)]
    pub webhook: WebhookConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory served for unmatched routes.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}

/// Upload configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Largest accepted file, in bytes.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
        }
    }
}

const fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}

/// Destination webhook configuration.
///
/// The URL embeds the webhook secret, so `Debug` never prints it.
#[derive(Clone, Default, Deserialize)]
pub struct WebhookConfig {
    /// Destination URL. Uploads fail with a configuration error while unset.
    #[serde(default)]
    pub url: Option<String>,
}

impl WebhookConfig {
    /// Returns the destination URL when one is configured and non-blank.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

impl fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("url", &self.url().map(|_| "<redacted>"))
            .finish()
    }
}

impl AppConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Later sources win: `config/default`, `config/{RUN_MODE}`,
    /// `UPLINK__*` variables, then the plain `PORT` and
    /// `DISCORD_WEBHOOK_URL` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("UPLINK")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("webhook.url", std::env::var("DISCORD_WEBHOOK_URL").ok())?
            .build()?;

        config.try_deserialize()
    }

    /// Returns `true` when a destination webhook URL is configured.
    #[must_use]
    pub fn webhook_configured(&self) -> bool {
        self.webhook.url().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN_ENV: [(&str, Option<&str>); 6] = [
        ("RUN_MODE", Some("test")),
        ("PORT", None),
        ("DISCORD_WEBHOOK_URL", None),
        ("UPLINK__SERVER__PORT", None),
        ("UPLINK__UPLOAD__MAX_FILE_SIZE", None),
        ("UPLINK__WEBHOOK__URL", None),
    ];

    fn with_env<F: FnOnce()>(overrides: &[(&str, Option<&str>)], f: F) {
        let mut vars: Vec<(&str, Option<&str>)> = CLEAN_ENV.to_vec();
        for (key, value) in overrides {
            vars.retain(|(k, _)| k != key);
            vars.push((*key, *value));
        }
        temp_env::with_vars(vars, f);
    }

    #[test]
    fn test_defaults_without_environment() {
        with_env(&[], || {
            let config = AppConfig::load().expect("config should load");
            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.server.port, 3000);
            assert_eq!(config.server.static_dir, PathBuf::from("public"));
            assert_eq!(config.upload.max_file_size, 26_214_400);
            assert!(config.webhook.url.is_none());
            assert!(!config.webhook_configured());
        });
    }

    #[test]
    fn test_plain_variables_are_honored() {
        with_env(
            &[
                ("PORT", Some("8081")),
                ("DISCORD_WEBHOOK_URL", Some("https://example.com/hook")),
            ],
            || {
                let config = AppConfig::load().expect("config should load");
                assert_eq!(config.server.port, 8081);
                assert_eq!(config.webhook.url(), Some("https://example.com/hook"));
                assert!(config.webhook_configured());
            },
        );
    }

    #[test]
    fn test_prefixed_variables_are_honored() {
        with_env(
            &[
                ("UPLINK__SERVER__PORT", Some("9000")),
                ("UPLINK__UPLOAD__MAX_FILE_SIZE", Some("1024")),
            ],
            || {
                let config = AppConfig::load().expect("config should load");
                assert_eq!(config.server.port, 9000);
                assert_eq!(config.upload.max_file_size, 1024);
            },
        );
    }

    #[test]
    fn test_plain_port_overrides_prefixed_port() {
        with_env(
            &[("UPLINK__SERVER__PORT", Some("9000")), ("PORT", Some("7000"))],
            || {
                let config = AppConfig::load().expect("config should load");
                assert_eq!(config.server.port, 7000);
            },
        );
    }

    #[test]
    fn test_blank_webhook_url_counts_as_unset() {
        let webhook = WebhookConfig {
            url: Some("   ".to_string()),
        };
        assert_eq!(webhook.url(), None);
    }

    #[test]
    fn test_webhook_debug_redacts_url() {
        let webhook = WebhookConfig {
            url: Some("https://discord.com/api/webhooks/1/secret-token".to_string()),
        };
        let rendered = format!("{webhook:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("<redacted>"));
    }
}
