use std::path::PathBuf;
use std::time::Duration;

use qualifier_core::{ArtifactSet, ArtifactSlot, Identity};
use thiserror::Error;
use url::Url;

use crate::runtime_config::{HttpSettings, DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_READ_TIMEOUT_MS};

pub const DEFAULT_REGISTRATION_URL: &str =
    "https://bfhldevapigw.healthrx.co.in/hiring/generateWebhook/JAVA";
pub const DEFAULT_FALLBACK_URL: &str = "https://bfhldevapigw.healthrx.co.in/hiring/testWebhook/JAVA";
const DEFAULT_OUTPUT_PATH: &str = "finalQuery.sql";

const ENV_NAME: &str = "QUALIFIER_NAME";
const ENV_REG_NO: &str = "QUALIFIER_REG_NO";
const ENV_EMAIL: &str = "QUALIFIER_EMAIL";
const ENV_REGISTRATION_URL: &str = "QUALIFIER_REGISTRATION_URL";
const ENV_FALLBACK_URL: &str = "QUALIFIER_FALLBACK_URL";
const ENV_CONNECT_TIMEOUT_MS: &str = "QUALIFIER_CONNECT_TIMEOUT_MS";
const ENV_READ_TIMEOUT_MS: &str = "QUALIFIER_READ_TIMEOUT_MS";
const ENV_ARTIFACT_A_PATH: &str = "QUALIFIER_ARTIFACT_A_PATH";
const ENV_ARTIFACT_B_PATH: &str = "QUALIFIER_ARTIFACT_B_PATH";
const ENV_OUTPUT_PATHS: &str = "QUALIFIER_OUTPUT_PATHS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifierConfig {
    pub identity: Identity,
    pub registration_url: String,
    pub fallback_url: String,
    pub http: HttpSettings,
    pub artifacts: ArtifactSet,
    pub output_paths: Vec<PathBuf>,
}

impl QualifierConfig {
    /// Defaults for everything except the identity.
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            registration_url: DEFAULT_REGISTRATION_URL.to_string(),
            fallback_url: DEFAULT_FALLBACK_URL.to_string(),
            http: HttpSettings::default(),
            artifacts: ArtifactSet::default(),
            output_paths: vec![PathBuf::from(DEFAULT_OUTPUT_PATH)],
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let identity = Identity::new(require(ENV_NAME)?, require(ENV_REG_NO)?, require(ENV_EMAIL)?);
        let mut config = Self::new(identity);

        if let Some(raw) = get(ENV_REGISTRATION_URL) {
            config.registration_url = parse_http_url(ENV_REGISTRATION_URL, &raw)?;
        }
        if let Some(raw) = get(ENV_FALLBACK_URL) {
            config.fallback_url = parse_http_url(ENV_FALLBACK_URL, &raw)?;
        }
        config.http = HttpSettings {
            connect_timeout: timeout_or(
                ENV_CONNECT_TIMEOUT_MS,
                get(ENV_CONNECT_TIMEOUT_MS),
                DEFAULT_CONNECT_TIMEOUT_MS,
            )?,
            read_timeout: timeout_or(
                ENV_READ_TIMEOUT_MS,
                get(ENV_READ_TIMEOUT_MS),
                DEFAULT_READ_TIMEOUT_MS,
            )?,
        };

        let artifact_a = get(ENV_ARTIFACT_A_PATH).map(read_artifact).transpose()?;
        let artifact_b = get(ENV_ARTIFACT_B_PATH).map(read_artifact).transpose()?;
        if artifact_a.is_some() || artifact_b.is_some() {
            let defaults = ArtifactSet::default();
            config.artifacts = ArtifactSet::new(
                artifact_a.unwrap_or_else(|| defaults.get(ArtifactSlot::A).text().to_string()),
                artifact_b.unwrap_or_else(|| defaults.get(ArtifactSlot::B).text().to_string()),
            );
        }

        if let Some(raw) = get(ENV_OUTPUT_PATHS) {
            let paths: Vec<PathBuf> = raw
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .collect();
            if !paths.is_empty() {
                config.output_paths = paths;
            }
        }
        Ok(config)
    }
}

fn parse_http_url(key: &'static str, raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw).map_err(|err| ConfigError::Invalid {
        key,
        reason: err.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid {
            key,
            reason: format!("unsupported scheme {}", url.scheme()),
        });
    }
    Ok(raw.to_string())
}

fn timeout_or(key: &'static str, raw: Option<String>, default_ms: u64) -> Result<Duration, ConfigError> {
    let Some(raw) = raw else {
        return Ok(Duration::from_millis(default_ms));
    };
    let millis = raw.parse::<u64>().map_err(|err| ConfigError::Invalid {
        key,
        reason: err.to_string(),
    })?;
    // Zero would disable the bound entirely.
    if millis == 0 {
        return Err(ConfigError::Invalid {
            key,
            reason: "timeout must be greater than zero".to_string(),
        });
    }
    Ok(Duration::from_millis(millis))
}

fn read_artifact(path: String) -> Result<String, ConfigError> {
    let path = PathBuf::from(path);
    std::fs::read_to_string(&path).map_err(|source| ConfigError::Io { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const IDENTITY: [(&str, &str); 3] = [
        ("QUALIFIER_NAME", "Test Name"),
        ("QUALIFIER_REG_NO", "REG12345"),
        ("QUALIFIER_EMAIL", "test@example.com"),
    ];

    #[test]
    fn identity_only_uses_defaults() {
        let config = QualifierConfig::from_lookup(lookup(&IDENTITY)).expect("config");
        assert_eq!(config.identity, Identity::new("Test Name", "REG12345", "test@example.com"));
        assert_eq!(config.registration_url, DEFAULT_REGISTRATION_URL);
        assert_eq!(config.fallback_url, DEFAULT_FALLBACK_URL);
        assert_eq!(config.http, HttpSettings::default());
        assert_eq!(config.artifacts, ArtifactSet::default());
        assert_eq!(config.output_paths, vec![PathBuf::from("finalQuery.sql")]);
    }

    #[test]
    fn missing_or_blank_identity_is_rejected() {
        let err = QualifierConfig::from_lookup(lookup(&IDENTITY[..2])).expect_err("missing email");
        assert!(matches!(err, ConfigError::Missing("QUALIFIER_EMAIL")));

        let err = QualifierConfig::from_lookup(lookup(&[
            ("QUALIFIER_NAME", "   "),
            ("QUALIFIER_REG_NO", "REG1"),
            ("QUALIFIER_EMAIL", "a@b.c"),
        ]))
        .expect_err("blank name");
        assert!(matches!(err, ConfigError::Missing("QUALIFIER_NAME")));
    }

    #[test]
    fn overrides_are_applied() {
        let mut pairs = IDENTITY.to_vec();
        pairs.extend([
            ("QUALIFIER_REGISTRATION_URL", "http://127.0.0.1:9000/register"),
            ("QUALIFIER_FALLBACK_URL", "http://127.0.0.1:9001/fallback"),
            ("QUALIFIER_CONNECT_TIMEOUT_MS", " 150 "),
            ("QUALIFIER_READ_TIMEOUT_MS", "750"),
            ("QUALIFIER_OUTPUT_PATHS", "out/a.sql, ,b.sql"),
        ]);
        let config = QualifierConfig::from_lookup(lookup(&pairs)).expect("config");
        assert_eq!(config.registration_url, "http://127.0.0.1:9000/register");
        assert_eq!(config.fallback_url, "http://127.0.0.1:9001/fallback");
        assert_eq!(config.http.connect_timeout, Duration::from_millis(150));
        assert_eq!(config.http.read_timeout, Duration::from_millis(750));
        assert_eq!(
            config.output_paths,
            vec![PathBuf::from("out/a.sql"), PathBuf::from("b.sql")]
        );
    }

    #[test]
    fn zero_or_garbage_timeouts_are_rejected() {
        for value in ["0", "soon", "-5"] {
            let mut pairs = IDENTITY.to_vec();
            pairs.push(("QUALIFIER_READ_TIMEOUT_MS", value));
            let err = QualifierConfig::from_lookup(lookup(&pairs)).expect_err(value);
            assert!(
                matches!(err, ConfigError::Invalid { key: "QUALIFIER_READ_TIMEOUT_MS", .. }),
                "{value}: {err}"
            );
        }
    }

    #[test]
    fn non_http_urls_are_rejected() {
        let mut pairs = IDENTITY.to_vec();
        pairs.push(("QUALIFIER_FALLBACK_URL", "ftp://example.com/x"));
        let err = QualifierConfig::from_lookup(lookup(&pairs)).expect_err("ftp");
        assert!(matches!(err, ConfigError::Invalid { key: "QUALIFIER_FALLBACK_URL", .. }));

        let mut pairs = IDENTITY.to_vec();
        pairs.push(("QUALIFIER_REGISTRATION_URL", "not a url"));
        assert!(QualifierConfig::from_lookup(lookup(&pairs)).is_err());
    }

    #[test]
    fn artifact_files_replace_defaults_per_slot() {
        let mut path = std::env::temp_dir();
        path.push(format!("qualifier-config-artifact-b-{}.sql", std::process::id()));
        std::fs::write(&path, "SELECT 2;").expect("write artifact");

        let path_str = path.to_string_lossy().to_string();
        let mut pairs = IDENTITY.to_vec();
        pairs.push(("QUALIFIER_ARTIFACT_B_PATH", path_str.as_str()));
        let config = QualifierConfig::from_lookup(lookup(&pairs)).expect("config");
        assert_eq!(config.artifacts.get(ArtifactSlot::B).text(), "SELECT 2;");
        assert_eq!(
            config.artifacts.get(ArtifactSlot::A),
            ArtifactSet::default().get(ArtifactSlot::A)
        );
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unreadable_artifact_file_is_reported() {
        let mut pairs = IDENTITY.to_vec();
        pairs.push(("QUALIFIER_ARTIFACT_A_PATH", "/definitely/not/here.sql"));
        let err = QualifierConfig::from_lookup(lookup(&pairs)).expect_err("missing file");
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
