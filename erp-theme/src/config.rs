//! # Theme Configuration
//!
//! This module defines the declarative configuration the engine turns into a
//! [StyleSpec](crate::style::StyleSpec): a display [ThemeMode], a visual
//! [ThemeVariant] and a set of optional [ThemeParameters].
//!
//! ## Overview
//!
//! - **[ThemeConfig]**: The single source of truth. An immutable value; every
//!   update produces a new one through [ThemeConfig::merged].
//! - **[ThemeParameters]**: Independently settable tuning knobs. Merging is a
//!   shallow union through [ThemeParameters::union].
//! - **Startup Sources**: Initial values may come from a TOML file or from
//!   environment variables. Nothing is ever written back.
//!
//! ## Usage Examples
//!
//! ```rust
//! use erp_theme::config::{ThemeConfig, ThemeMode, ThemeVariant};
//!
//! let config = ThemeConfig::default();
//! assert_eq!(config.mode, ThemeMode::Light);
//! assert_eq!(config.variant, ThemeVariant::Odoo);
//! ```
//!
//! ### Configuration File Format
//!
//! ```toml
//! [theme]
//! mode = "dark"
//! variant = "odoo"
//!
//! [theme.parameters]
//! font_size = "large"
//! primary_color = "#7c7bad"
//! ```
//!
//! ## Environment Variables
//!
//! - `ERP_THEME_CONFIG`: Path to a TOML configuration file
//! - `ERP_THEME_MODE`: Overrides the mode (`light`, `dark`, `high-contrast`)
//! - `ERP_THEME_VARIANT`: Overrides the variant (`odoo`, `default`, `modern`, `classic`)

use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use vello::peniko::Color;

use crate::error::{ThemeError, ThemeResult};

/// Environment variable holding the path to a TOML configuration file.
pub const ENV_THEME_CONFIG: &str = "ERP_THEME_CONFIG";
/// Environment variable overriding the startup mode.
pub const ENV_THEME_MODE: &str = "ERP_THEME_MODE";
/// Environment variable overriding the startup variant.
pub const ENV_THEME_VARIANT: &str = "ERP_THEME_VARIANT";

/// Declares a closed, string-named configuration enum.
///
/// Generates `as_str`, `ALL`, [Display](fmt::Display) and a [FromStr] that
/// accepts exactly the lower-case names (as serde does) and rejects anything
/// else with [ThemeError::InvalidValue].
macro_rules! config_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every accepted value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The configuration name of this value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ThemeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s == $text {
                        return Ok($name::$variant);
                    }
                )+
                Err(ThemeError::invalid_value($field, s, &[$($text),+]))
            }
        }
    };
}

config_enum! {
    /// Display mode. `HighContrast` overrides the variant choice.
    ThemeMode as "mode" {
        /// Light backgrounds.
        Light => "light",
        /// Dark backgrounds.
        Dark => "dark",
        /// Fixed accessibility palette.
        HighContrast => "high-contrast",
    }
}

config_enum! {
    /// A named palette/typography family.
    ThemeVariant as "variant" {
        /// Odoo inspired purple/orange look.
        Odoo => "odoo",
        /// Material default look.
        Default => "default",
        /// Currently an alias of [ThemeVariant::Default].
        Modern => "modern",
        /// Currently an alias of [ThemeVariant::Odoo].
        Classic => "classic",
    }
}

config_enum! {
    /// Typography scale.
    FontSize as "fontSize" {
        /// Scale by 0.9.
        Small => "small",
        /// Unscaled.
        Medium => "medium",
        /// Scale by 1.1.
        Large => "large",
    }
}

config_enum! {
    /// Spacing unit preset.
    Spacing as "spacing" {
        /// 6px.
        Compact => "compact",
        /// 8px.
        Normal => "normal",
        /// 10px.
        Comfortable => "comfortable",
    }
}

config_enum! {
    /// Corner radius preset.
    BorderRadius as "borderRadius" {
        /// 0px.
        None => "none",
        /// 4px.
        Small => "small",
        /// 8px.
        Medium => "medium",
        /// 16px.
        Large => "large",
    }
}

config_enum! {
    /// Layout density hint.
    VisualDensity as "visualDensity" {
        /// Score -1.
        Low => "low",
        /// Score 0.
        Medium => "medium",
        /// Score 1.
        High => "high",
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::Light
    }
}

impl Default for ThemeVariant {
    fn default() -> Self {
        Self::Odoo
    }
}

/// Optional tuning parameters applied on top of a resolved variant.
///
/// Every field is independent. `None` means "keep whatever the variant
/// resolves to".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeParameters {
    /// Replaces the `main` shade of the primary palette slot.
    #[serde(with = "crate::serde_color::option", skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<Color>,
    /// Replaces the `main` shade of the secondary palette slot.
    #[serde(with = "crate::serde_color::option", skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<Color>,
    /// Typography scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
    /// Spacing unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    /// Shape radius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BorderRadius>,
    /// Font family string, replaced wholesale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Layout density hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_density: Option<VisualDensity>,
}

impl ThemeParameters {
    /// Mid-range parameters used at startup.
    pub fn defaults() -> Self {
        Self {
            font_size: Some(FontSize::Medium),
            spacing: Some(Spacing::Normal),
            border_radius: Some(BorderRadius::Small),
            visual_density: Some(VisualDensity::Medium),
            ..Self::default()
        }
    }

    /// Returns `true` if no parameter is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow union: keys set in `overlay` win, keys absent from it are kept.
    pub fn union(&self, overlay: &ThemeParameters) -> ThemeParameters {
        ThemeParameters {
            primary_color: overlay.primary_color.or(self.primary_color),
            secondary_color: overlay.secondary_color.or(self.secondary_color),
            font_size: overlay.font_size.or(self.font_size),
            spacing: overlay.spacing.or(self.spacing),
            border_radius: overlay.border_radius.or(self.border_radius),
            font_family: overlay
                .font_family
                .clone()
                .or_else(|| self.font_family.clone()),
            visual_density: overlay.visual_density.or(self.visual_density),
        }
    }
}

/// A typed partial configuration, merged into the current [ThemeConfig].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeUpdate {
    /// Replaces the mode if set.
    pub mode: Option<ThemeMode>,
    /// Replaces the variant if set.
    pub variant: Option<ThemeVariant>,
    /// Shallow-unioned into the current parameters.
    pub parameters: ThemeParameters,
}

impl ThemeUpdate {
    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mode.
    pub fn with_mode(mut self, mode: ThemeMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the variant.
    pub fn with_variant(mut self, variant: ThemeVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Set the parameter overlay.
    pub fn with_parameters(mut self, parameters: ThemeParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Returns `true` if merging this update would change no field.
    pub fn is_empty(&self) -> bool {
        self.mode.is_none() && self.variant.is_none() && self.parameters.is_empty()
    }
}

/// The theme configuration: mode, variant and parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Display mode.
    #[serde(default)]
    pub mode: ThemeMode,
    /// Visual variant.
    #[serde(default)]
    pub variant: ThemeVariant,
    /// Tuning parameters.
    #[serde(default = "ThemeParameters::defaults")]
    pub parameters: ThemeParameters,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    theme: ThemeConfig,
}

impl ThemeConfig {
    /// Create a configuration with the documented defaults
    /// (`light`, `odoo`, mid-range parameters).
    pub fn new() -> Self {
        Self {
            mode: ThemeMode::Light,
            variant: ThemeVariant::Odoo,
            parameters: ThemeParameters::defaults(),
        }
    }

    /// Set the mode.
    pub fn with_mode(mut self, mode: ThemeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the variant.
    pub fn with_variant(mut self, variant: ThemeVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Replace the parameters.
    pub fn with_parameters(mut self, parameters: ThemeParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Produce the configuration that results from applying `update`.
    ///
    /// `mode` and `variant` are replaced when present; parameters are a
    /// shallow union (see [ThemeParameters::union]). `self` is not modified.
    pub fn merged(&self, update: &ThemeUpdate) -> ThemeConfig {
        ThemeConfig {
            mode: update.mode.unwrap_or(self.mode),
            variant: update.variant.unwrap_or(self.variant),
            parameters: self.parameters.union(&update.parameters),
        }
    }

    /// Load a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::file_not_found(path));
        }

        if path.extension().and_then(|s| s.to_str()) != Some("toml") {
            return Err(ThemeError::parse_error(
                "Unsupported configuration file format. Use .toml",
            ));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a configuration from TOML content with a `[theme]` table.
    ///
    /// Missing keys fall back to the defaults.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        let file: ThemeFile = toml::from_str(content)?;
        Ok(file.theme)
    }

    /// Build the startup configuration from the process environment.
    ///
    /// See the module documentation for the recognised variables.
    pub fn from_env_or_default() -> Self {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Build the startup configuration from an arbitrary variable lookup.
    ///
    /// Unreadable or invalid sources are logged and skipped.
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(path) = lookup(ENV_THEME_CONFIG) {
            match Self::from_file(&path) {
                Ok(file_config) => config = file_config,
                Err(err) => log::warn!("ThemeConfig: ignoring {}={}: {}", ENV_THEME_CONFIG, path, err),
            }
        }

        if let Some(mode) = lookup(ENV_THEME_MODE) {
            match mode.parse() {
                Ok(mode) => config.mode = mode,
                Err(err) => log::warn!("ThemeConfig: ignoring {}: {}", ENV_THEME_MODE, err),
            }
        }

        if let Some(variant) = lookup(ENV_THEME_VARIANT) {
            match variant.parse() {
                Ok(variant) => config.variant = variant,
                Err(err) => log::warn!("ThemeConfig: ignoring {}: {}", ENV_THEME_VARIANT, err),
            }
        }

        config
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.mode, ThemeMode::Light);
        assert_eq!(config.variant, ThemeVariant::Odoo);
        assert_eq!(config.parameters.font_size, Some(FontSize::Medium));
        assert_eq!(config.parameters.spacing, Some(Spacing::Normal));
        assert_eq!(config.parameters.border_radius, Some(BorderRadius::Small));
        assert_eq!(config.parameters.visual_density, Some(VisualDensity::Medium));
        assert_eq!(config.parameters.primary_color, None);
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("high-contrast".parse::<ThemeMode>().unwrap(), ThemeMode::HighContrast);
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!("classic".parse::<ThemeVariant>().unwrap(), ThemeVariant::Classic);

        let err = "huge".parse::<FontSize>().unwrap_err();
        match err {
            ThemeError::InvalidValue { field, value, .. } => {
                assert_eq!(field, "fontSize");
                assert_eq!(value, "huge");
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_enum_parsing_is_exact() {
        for input in ["Dark", " dark", "dark ", "DARK", "  DARK "] {
            assert!(
                matches!(
                    input.parse::<ThemeMode>(),
                    Err(ThemeError::InvalidValue { field: "mode", .. })
                ),
                "{input:?} was accepted"
            );
        }
        assert!("Classic".parse::<ThemeVariant>().is_err());
        assert!("LARGE".parse::<FontSize>().is_err());
        assert!("High-Contrast".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_merge_replaces_only_mentioned_fields() {
        let current = ThemeConfig::new().with_variant(ThemeVariant::Default);
        let next = current.merged(&ThemeUpdate::new().with_mode(ThemeMode::Dark));

        assert_eq!(next.mode, ThemeMode::Dark);
        assert_eq!(next.variant, ThemeVariant::Default);
        assert_eq!(next.parameters, current.parameters);
        // The original value is untouched.
        assert_eq!(current.mode, ThemeMode::Light);
    }

    #[test]
    fn test_parameter_union() {
        let current = ThemeParameters {
            font_size: Some(FontSize::Large),
            spacing: Some(Spacing::Compact),
            ..ThemeParameters::default()
        };
        let overlay = ThemeParameters {
            spacing: Some(Spacing::Comfortable),
            ..ThemeParameters::default()
        };

        let merged = current.union(&overlay);
        assert_eq!(merged.font_size, Some(FontSize::Large));
        assert_eq!(merged.spacing, Some(Spacing::Comfortable));
        assert_eq!(merged.border_radius, None);
    }

    #[test]
    fn test_from_toml() {
        let config = ThemeConfig::from_toml(
            r##"
            [theme]
            mode = "dark"
            variant = "default"

            [theme.parameters]
            font_size = "large"
            primary_color = "#7c7bad"
            "##,
        )
        .unwrap();

        assert_eq!(config.mode, ThemeMode::Dark);
        assert_eq!(config.variant, ThemeVariant::Default);
        assert_eq!(config.parameters.font_size, Some(FontSize::Large));
        assert_eq!(config.parameters.primary_color, Some(Color::from_rgb8(0x7c, 0x7b, 0xad)));
        assert_eq!(config.parameters.spacing, None);
    }

    #[test]
    fn test_from_toml_missing_keys_use_defaults() {
        let config = ThemeConfig::from_toml("[theme]\nmode = \"high-contrast\"\n").unwrap();
        assert_eq!(config.mode, ThemeMode::HighContrast);
        assert_eq!(config.variant, ThemeVariant::Odoo);
        assert_eq!(config.parameters, ThemeParameters::defaults());
    }

    #[test]
    fn test_from_toml_rejects_unknown_values() {
        assert!(matches!(
            ThemeConfig::from_toml("[theme]\nmode = \"sepia\"\n"),
            Err(ThemeError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_from_env_with() {
        let vars: HashMap<&str, &str> =
            HashMap::from([(ENV_THEME_MODE, "dark"), (ENV_THEME_VARIANT, "not-a-variant")]);
        let config = ThemeConfig::from_env_with(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.mode, ThemeMode::Dark);
        // Invalid values are skipped.
        assert_eq!(config.variant, ThemeVariant::Odoo);
    }

    #[test]
    fn test_from_file_missing() {
        assert!(matches!(
            ThemeConfig::from_file("/definitely/not/here/theme.toml"),
            Err(ThemeError::ThemeFileNotFound { .. })
        ));
    }
}
