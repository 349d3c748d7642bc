//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The user file is
//! layered over the stock defaults, so it only needs the keys it changes.
//!
//! ## Config File Location
//!
//! ```text
//! content/
//! ├── config.toml      # Theme and build options (optional)
//! ├── site.toml        # Business data and section content
//! └── assets/          # Copied verbatim into the output
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [theme]
//! primary = "#1d4ed8"              # Brand colour: buttons, accents, links
//! primary_foreground = "#ffffff"   # Text drawn on the primary colour
//! secondary = "#f59e0b"            # Badges, highlights, gradients
//! secondary_foreground = "#111827" # Text drawn on the secondary colour
//! font_family = "system-ui, -apple-system, \"Segoe UI\", Roboto, sans-serif"
//!
//! [build]
//! fingerprint_assets = true        # site-<hash>.css instead of site.css
//! lang = "en"                      # <html lang>
//! # title = "Acme Plumbing"        # <title>; defaults to the business name
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Brand colours and typeface.
    pub theme: ThemeConfig,
    /// Output options.
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Validate config values are well formed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in self.theme.colors() {
            if !is_hex_color(value) {
                return Err(ConfigError::Validation(format!(
                    "theme.{key} must be a hex colour like #1d4ed8, got '{value}'"
                )));
            }
        }
        if self.theme.font_family.trim().is_empty() {
            return Err(ConfigError::Validation(
                "theme.font_family must not be empty".into(),
            ));
        }
        if self.build.lang.trim().is_empty() {
            return Err(ConfigError::Validation("build.lang must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub primary: String,
    pub primary_foreground: String,
    pub secondary: String,
    pub secondary_foreground: String,
    pub font_family: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#1d4ed8".to_string(),
            primary_foreground: "#ffffff".to_string(),
            secondary: "#f59e0b".to_string(),
            secondary_foreground: "#111827".to_string(),
            font_family: r#"system-ui, -apple-system, "Segoe UI", Roboto, sans-serif"#.to_string(),
        }
    }
}

impl ThemeConfig {
    /// Colour keys with their values, in declaration order.
    fn colors(&self) -> [(&'static str, &str); 4] {
        [
            ("primary", &self.primary),
            ("primary_foreground", &self.primary_foreground),
            ("secondary", &self.secondary),
            ("secondary_foreground", &self.secondary_foreground),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Embed a content hash in the stylesheet and script names.
    pub fingerprint_assets: bool,
    pub lang: String,
    /// Document title. The business name is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            fingerprint_assets: true,
            lang: "en".to_string(),
            title: None,
        }
    }
}

/// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Shopfront Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
# Brand colour used for buttons, accents, icons and links.
primary = "#1d4ed8"

# Text colour drawn on top of the primary colour.
primary_foreground = "#ffffff"

# Accent colour for badges, highlights and gradients.
secondary = "#f59e0b"

# Text colour drawn on top of the secondary colour.
secondary_foreground = "#111827"

# CSS font stack for the whole page.
font_family = "system-ui, -apple-system, \"Segoe UI\", Roboto, sans-serif"

# ---------------------------------------------------------------------------
# Build
# ---------------------------------------------------------------------------
[build]
# Embed a short content hash in asset names (site-1a2b3c4d.css) so browsers
# never serve a stale stylesheet after a rebuild.
fingerprint_assets = true

# Language of the page (<html lang="...">).
lang = "en"

# Document title. Defaults to the business name.
# title = "Acme Plumbing | Licensed plumbers in Anytown"
"##
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --template-primary: {primary};
    --template-primary-foreground: {primary_foreground};
    --template-secondary: {secondary};
    --template-secondary-foreground: {secondary_foreground};
    --template-font: {font_family};
}}"#,
        primary = theme.primary,
        primary_foreground = theme.primary_foreground,
        secondary = theme.secondary,
        secondary_foreground = theme.secondary_foreground,
        font_family = theme.font_family,
    )
}
