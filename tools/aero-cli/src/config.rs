//! CLI configuration.

use std::path::Path;

use aero_commerce::payment::PixConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Contents of `aero.toml` (or `aero.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the cart record lives.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Menu source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Diagnostic output.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Hosting flags carried over from the web build.
    #[serde(default)]
    pub site: SiteConfig,

    /// Pix key offered at checkout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pix: Option<PixConfig>,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Problems that would make commands misbehave. Empty when valid.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.storage.dir.trim().is_empty() {
            problems.push("storage.dir must not be empty".to_string());
        }
        if let Some(ref pix) = self.pix {
            if pix.active && pix.pix_key.trim().is_empty() {
                problems.push("pix is active but pixKey is empty".to_string());
            }
        }

        problems
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for the file-backed store.
    #[serde(default = "default_storage_dir")]
    pub dir: String,
}

fn default_storage_dir() -> String {
    ".aero".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the menu JSON feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

/// Output format for diagnostics on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for development).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

/// Hosting flags of the storefront build. They do not change cart behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    /// Serve images as-is instead of through the optimizer.
    #[serde(default = "default_true")]
    pub images_unoptimized: bool,

    /// Render components twice in development to surface side effects.
    #[serde(default)]
    pub strict_mode: bool,

    /// Let the build succeed despite type errors.
    #[serde(default = "default_true")]
    pub ignore_build_errors: bool,

    /// Let the build succeed despite lint errors.
    #[serde(default = "default_true")]
    pub ignore_lint_errors: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            images_unoptimized: true,
            strict_mode: false,
            ignore_build_errors: true,
            ignore_lint_errors: true,
        }
    }
}

/// Generate a default aero.toml config file.
pub fn generate_default_config() -> String {
    r#"# AeroPizza cart configuration

[storage]
dir = ".aero"

[catalog]
# menu = "menu.json"

[logging]
format = "human"

[site]
images_unoptimized = true
strict_mode = false
ignore_build_errors = true
ignore_lint_errors = true

# [pix]
# key = "main"
# pixKey = "pedidos@aeropizza.com"
# pixType = "email"
# recipient = "AeroPizza"
# active = true
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.storage.dir, ".aero");
        assert!(config.catalog.menu.is_none());
        assert_eq!(config.logging.format, LogFormat::Human);
        assert_eq!(config.site, SiteConfig::default());
        assert!(config.pix.is_none());
        assert!(config.problems().is_empty());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.storage.dir, ".aero");
        assert!(config.site.images_unoptimized);
    }

    #[test]
    fn test_pix_section() {
        let config: CliConfig = toml::from_str(
            r#"
            [pix]
            key = "main"
            pixKey = ""
            pixType = "email"
            recipient = "AeroPizza"
            active = true
            "#,
        )
        .unwrap();
        assert_eq!(config.problems(), vec!["pix is active but pixKey is empty"]);
    }

    #[test]
    fn test_load_json_and_toml() {
        let dir = tempfile::tempdir().expect("tempdir");

        let toml_path = dir.path().join("aero.toml");
        std::fs::write(&toml_path, "[catalog]\nmenu = \"menu.json\"\n[logging]\nformat = \"json\"\n")
            .unwrap();
        let json_path = dir.path().join("aero.json");
        std::fs::write(
            &json_path,
            r#"{"catalog": {"menu": "menu.json"}, "logging": {"format": "json"}}"#,
        )
        .unwrap();

        for path in [toml_path, json_path] {
            let loaded = CliConfig::load(&path).unwrap();
            assert_eq!(loaded.catalog.menu.as_deref(), Some("menu.json"));
            assert_eq!(loaded.logging.format, LogFormat::Json);
            assert_eq!(loaded.storage.dir, ".aero");
        }
    }

    #[test]
    fn test_load_reports_bad_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("aero.toml");
        std::fs::write(&path, "[storage\n").unwrap();
        assert!(CliConfig::load(&path).is_err());
        assert!(CliConfig::load(&dir.path().join("missing.toml")).is_err());
    }
}
