//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Configuration
//! is layered: stock defaults are overridden by the user config file, and
//! the `[content]` section can be overridden again by environment
//! variables — the deployment host injects project id and dataset without
//! touching files.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Chakana Rebelde"
//! tagline = "Un viaje visual a través de la esencia ancestral."
//!
//! [content]
//! project_id = "iawu5ctn"       # Content repository instance
//! dataset = "production"        # Logical dataset within the project
//! api_version = "2024-06-13"    # Date-pinned query API version
//! environment = "development"   # "production" routes reads via the edge cache
//! timeout_ms = 10000            # Transport timeout for the gallery query
//! studio_url = "/studio"        # Where the hosted editing studio lives
//!
//! [gallery]
//! max_photos = 0                # Cap the display set; 0 = unlimited
//! columns = 4                   # Grid density at desktop width
//! narrative_fallback = "Visual" # Stats label when the project omits a style
//! # chapter = "capitulo-1"      # Restrict the gallery to one chapter
//!
//! [colors.light]
//! background = "#f7f5f0"
//! text = "#1a1a1a"
//! text_muted = "#5c5c5c"
//! border = "#d9d4c8"
//! accent = "#b45309"
//!
//! [colors.dark]
//! background = "#0c0a09"
//! text = "#f5f0e8"
//! text_muted = "#a8a29e"
//! border = "#44403c"
//! accent = "#f59e0b"
//! ```
//!
//! ## Environment Overrides
//!
//! Applied on top of the merged file config, `[content]` keys only:
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `CHAKANA_PROJECT_ID` | `content.project_id` |
//! | `CHAKANA_DATASET` | `content.dataset` |
//! | `CHAKANA_API_VERSION` | `content.api_version` |
//! | `CHAKANA_ENV` | `content.environment` |
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only cap the gallery
//! [gallery]
//! max_photos = 26
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
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title, shown in the hero and the page `<title>`.
    pub title: String,
    /// Hero tagline under the title.
    pub tagline: String,
    /// Content repository connection settings.
    pub content: ContentConfig,
    /// Display-set assembly and grid settings.
    pub gallery: GalleryConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Chakana Rebelde".to_string(),
            tagline: "Un viaje visual a través de la esencia ancestral, \
                      capturado en imágenes que hablan sin palabras."
                .to_string(),
            content: ContentConfig::default(),
            gallery: GalleryConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content.project_id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "content.project_id must not be empty".into(),
            ));
        }
        if self.content.dataset.trim().is_empty() {
            return Err(ConfigError::Validation(
                "content.dataset must not be empty".into(),
            ));
        }
        if self.content.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "content.timeout_ms must be non-zero".into(),
            ));
        }
        if self.gallery.columns == 0 {
            return Err(ConfigError::Validation(
                "gallery.columns must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Content repository connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    /// Which content repository instance to target.
    pub project_id: String,
    /// Which logical dataset within the project.
    pub dataset: String,
    /// Date-pinned query API version.
    pub api_version: String,
    /// Runtime environment. `"production"` reads through the edge cache;
    /// anything else bypasses it for fresh content.
    pub environment: String,
    /// Transport timeout for the gallery query, in milliseconds.
    pub timeout_ms: u64,
    /// Where the hosted editing studio lives. The studio is the content
    /// service's own admin application — this site only links to it.
    pub studio_url: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            project_id: "iawu5ctn".to_string(),
            dataset: "production".to_string(),
            api_version: "2024-06-13".to_string(),
            environment: "development".to_string(),
            timeout_ms: 10_000,
            studio_url: "/studio".to_string(),
        }
    }
}

impl ContentConfig {
    /// Whether reads should go through the content service's edge cache.
    pub fn use_edge_cache(&self) -> bool {
        self.environment == "production"
    }
}

/// Display-set assembly and grid settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Cap the display set to the first N photos. 0 means unlimited.
    /// The curated reportage edit sets this to its exact photo count.
    pub max_photos: usize,
    /// Restrict the gallery to photos tagged with this chapter.
    /// Unset means all chapters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    /// Grid density at desktop width.
    pub columns: u32,
    /// Stats label used when the project record carries no narrative style.
    pub narrative_fallback: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            max_photos: 0,
            chapter: None,
            columns: 4,
            narrative_fallback: "Visual".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background color.
    pub background: String,
    /// Primary text color.
    pub text: String,
    /// Muted/secondary text color (taglines, captions, footer).
    pub text_muted: String,
    /// Card and tile border color.
    pub border: String,
    /// Accent color (index badges, stats figures, links).
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#f7f5f0".to_string(),
            text: "#1a1a1a".to_string(),
            text_muted: "#5c5c5c".to_string(),
            border: "#d9d4c8".to_string(),
            accent: "#b45309".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0c0a09".to_string(),
            text: "#f5f0e8".to_string(),
            text_muted: "#a8a29e".to_string(),
            border: "#44403c".to_string(),
            accent: "#f59e0b".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_dark()
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

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
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

/// Load config from the given path, then apply environment overrides.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    let mut config = resolve_config(base, overlay)?;
    apply_env_overrides(&mut config.content, |key| std::env::var(key).ok());
    config.validate()?;
    Ok(config)
}

/// Apply environment-variable overrides to the `[content]` section.
///
/// Takes the lookup as a closure so tests can inject variables without
/// mutating process state.
pub fn apply_env_overrides<F>(content: &mut ContentConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup("CHAKANA_PROJECT_ID") {
        content.project_id = v;
    }
    if let Some(v) = lookup("CHAKANA_DATASET") {
        content.dataset = v;
    }
    if let Some(v) = lookup("CHAKANA_API_VERSION") {
        content.api_version = v;
    }
    if let Some(v) = lookup("CHAKANA_ENV") {
        content.environment = v;
    }
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Chakana Rebelde Configuration
# =============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# The [content] section can also be set per-deployment via environment
# variables, which win over this file:
#   CHAKANA_PROJECT_ID, CHAKANA_DATASET, CHAKANA_API_VERSION, CHAKANA_ENV
#
# Unknown keys will cause an error.

# Site title, shown in the hero and the page <title>.
title = "Chakana Rebelde"

# Hero tagline under the title.
tagline = "Un viaje visual a través de la esencia ancestral, capturado en imágenes que hablan sin palabras."

# ---------------------------------------------------------------------------
# Content repository
# ---------------------------------------------------------------------------
[content]
# Which content repository instance to target.
project_id = "iawu5ctn"

# Which logical dataset within the project.
dataset = "production"

# Date-pinned query API version.
api_version = "2024-06-13"

# "production" reads through the edge cache; anything else bypasses it
# so editors see fresh content immediately.
environment = "development"

# Transport timeout for the gallery query, in milliseconds.
timeout_ms = 10000

# Where the hosted editing studio lives (linked from the footer).
studio_url = "/studio"

# ---------------------------------------------------------------------------
# Gallery
# ---------------------------------------------------------------------------
[gallery]
# Cap the display set to the first N photos. 0 = unlimited.
# The curated reportage edit uses 26 for an exact count.
max_photos = 0

# Restrict the gallery to photos tagged with one chapter.
# chapter = "capitulo-1"

# Grid density at desktop width.
columns = 4

# Stats label used when the project record carries no narrative style.
narrative_fallback = "Visual"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#f7f5f0"
text = "#1a1a1a"
text_muted = "#5c5c5c"    # Taglines, captions, footer
border = "#d9d4c8"
accent = "#b45309"        # Badges, stats figures, links

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0c0a09"
text = "#f5f0e8"
text_muted = "#a8a29e"
border = "#44403c"
accent = "#f59e0b"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-accent: {light_accent};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-accent: {dark_accent};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_accent = colors.light.accent,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_accent = colors.dark.accent,
    )
}

/// Generate CSS custom properties from gallery layout config.
pub fn generate_layout_css(gallery: &GalleryConfig) -> String {
    format!(
        r#":root {{
    --grid-columns: {columns};
}}"#,
        columns = gallery.columns,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_colors() {
        let config = SiteConfig::default();
        assert_eq!(config.colors.light.background, "#f7f5f0");
        assert_eq!(config.colors.dark.background, "#0c0a09");
    }

    #[test]
    fn default_config_has_content_settings() {
        let config = SiteConfig::default();
        assert_eq!(config.content.project_id, "iawu5ctn");
        assert_eq!(config.content.dataset, "production");
        assert_eq!(config.content.api_version, "2024-06-13");
        assert!(!config.content.use_edge_cache());
    }

    #[test]
    fn default_gallery_is_uncapped() {
        let config = SiteConfig::default();
        assert_eq!(config.gallery.max_photos, 0);
        assert!(config.gallery.chapter.is_none());
        assert_eq!(config.gallery.columns, 4);
        assert_eq!(config.gallery.narrative_fallback, "Visual");
    }

    #[test]
    fn production_environment_uses_edge_cache() {
        let mut content = ContentConfig::default();
        content.environment = "production".to_string();
        assert!(content.use_edge_cache());
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[gallery]
max_photos = 26
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        // Overridden value
        assert_eq!(config.gallery.max_photos, 26);
        // Default values preserved
        assert_eq!(config.gallery.columns, 4);
        assert_eq!(config.content.dataset, "production");
        assert_eq!(config.title, "Chakana Rebelde");
    }

    #[test]
    fn unknown_keys_rejected() {
        let toml = r##"
[gallery]
max_fotos = 26
"##;
        let result: Result<SiteConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn validation_rejects_empty_project_id() {
        let mut config = SiteConfig::default();
        config.content.project_id = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_zero_timeout() {
        let mut config = SiteConfig::default();
        config.content.timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_zero_columns() {
        let mut config = SiteConfig::default();
        config.gallery.columns = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let mut colors = ColorConfig::default();
        colors.light.background = "#f0f0f0".to_string();
        colors.dark.accent = "#ffcc00".to_string();

        let css = generate_color_css(&colors);
        assert!(css.contains("--color-bg: #f0f0f0"));
        assert!(css.contains("--color-accent: #ffcc00"));
    }

    #[test]
    fn generate_layout_css_uses_columns() {
        let mut gallery = GalleryConfig::default();
        gallery.columns = 3;
        let css = generate_layout_css(&gallery);
        assert!(css.contains("--grid-columns: 3"));
    }

    #[test]
    fn env_overrides_win_over_file_values() {
        let mut content = ContentConfig::default();
        apply_env_overrides(&mut content, |key| match key {
            "CHAKANA_PROJECT_ID" => Some("zx9abc12".to_string()),
            "CHAKANA_ENV" => Some("production".to_string()),
            _ => None,
        });
        assert_eq!(content.project_id, "zx9abc12");
        assert_eq!(content.environment, "production");
        // Untouched keys keep their config values
        assert_eq!(content.dataset, "production");
        assert_eq!(content.api_version, "2024-06-13");
    }

    #[test]
    fn env_overrides_absent_leaves_config_alone() {
        let mut content = ContentConfig::default();
        let before = content.clone();
        apply_env_overrides(&mut content, |_| None);
        assert_eq!(content.project_id, before.project_id);
        assert_eq!(content.environment, before.environment);
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("config.toml")).unwrap();

        assert_eq!(config.title, "Chakana Rebelde");
        assert_eq!(config.content.project_id, "iawu5ctn");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");

        fs::write(
            &config_path,
            r##"
title = "Chakana Rebelde — Edición Curada"

[gallery]
max_photos = 26
columns = 3
"##,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.title, "Chakana Rebelde — Edición Curada");
        assert_eq!(config.gallery.max_photos, 26);
        assert_eq!(config.gallery.columns, 3);
        // Defaults preserved
        assert_eq!(config.content.dataset, "production");
    }

    #[test]
    fn load_config_rejects_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "not = [valid").unwrap();

        assert!(matches!(
            load_config(&config_path),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn merge_preserves_base_keys_absent_from_overlay() {
        let base = stock_defaults_value();
        let overlay: toml::Value = toml::from_str(
            r##"
[content]
dataset = "staging"
"##,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let config: SiteConfig = merged.try_into().unwrap();
        assert_eq!(config.content.dataset, "staging");
        assert_eq!(config.content.project_id, "iawu5ctn");
    }
}
