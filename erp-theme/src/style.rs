//! # Style Specification
//!
//! This module provides the [StyleSpec] the engine produces for the rendering
//! layer: a fully populated [Palette], a [Typography] scale, shape and spacing
//! units, a density hint, and per-component [Style] maps.
//!
//! ## Overview
//!
//! - **[StyleSpec]**: The complete, deterministic output of a configuration
//! - **[Palette]**: Every color slot the dashboard renders with
//! - **[Typography]**: Font family plus an ordered map of [TextRole] styles
//! - **[ComponentStyles]**: Overrides for buttons, cards, tables, chips and tabs
//! - **[Style]** / **[StyleVal]**: Ordered property maps for component overrides
//!
//! A spec serializes to JSON (colors as hex strings) through
//! [StyleSpec::to_json].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use vello::peniko::Color;

use crate::error::ThemeResult;

/// Whether the palette is meant for a light or a dark surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteMode {
    /// Dark text on light surfaces.
    Light,
    /// Light text on dark surfaces.
    Dark,
}

/// One palette slot with its shades.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaletteColor {
    /// The main shade.
    #[serde(with = "crate::serde_color")]
    pub main: Color,
    /// The lighter shade.
    #[serde(with = "crate::serde_color")]
    pub light: Color,
    /// The darker shade.
    #[serde(with = "crate::serde_color")]
    pub dark: Color,
    /// Text drawn on top of `main`.
    #[serde(with = "crate::serde_color")]
    pub contrast_text: Color,
}

impl PaletteColor {
    /// Create a palette slot.
    pub const fn new(main: Color, light: Color, dark: Color, contrast_text: Color) -> Self {
        Self {
            main,
            light,
            dark,
            contrast_text,
        }
    }
}

/// Background colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackgroundColors {
    /// Page background.
    #[serde(with = "crate::serde_color")]
    pub default: Color,
    /// Raised surfaces.
    #[serde(with = "crate::serde_color")]
    pub paper: Color,
}

/// Text colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextColors {
    /// Main text.
    #[serde(with = "crate::serde_color")]
    pub primary: Color,
    /// Muted text.
    #[serde(with = "crate::serde_color")]
    pub secondary: Color,
}

/// Dashboard chrome surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceColors {
    /// Header bar.
    #[serde(with = "crate::serde_color")]
    pub header: Color,
    /// Navigation sidebar.
    #[serde(with = "crate::serde_color")]
    pub sidebar: Color,
    /// Dashboard cards.
    #[serde(with = "crate::serde_color")]
    pub card: Color,
    /// Hovered list rows.
    #[serde(with = "crate::serde_color")]
    pub hover: Color,
}

/// The full color palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Light or dark surface.
    pub mode: PaletteMode,
    /// Brand color.
    pub primary: PaletteColor,
    /// Accent color.
    pub secondary: PaletteColor,
    /// Positive status.
    pub success: PaletteColor,
    /// Informational status.
    pub info: PaletteColor,
    /// Warning status.
    pub warning: PaletteColor,
    /// Error status.
    pub error: PaletteColor,
    /// Backgrounds.
    pub background: BackgroundColors,
    /// Text colors.
    pub text: TextColors,
    /// Separator lines.
    #[serde(with = "crate::serde_color")]
    pub divider: Color,
    /// Header, sidebar, card and hover surfaces.
    pub surfaces: SurfaceColors,
}

/// Named typography roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextRole {
    /// Page title.
    H1,
    /// Section title.
    H2,
    /// Sub-section title.
    H3,
    /// Card title.
    H4,
    /// Widget title.
    H5,
    /// Smallest heading.
    H6,
    /// Secondary heading line.
    Subtitle1,
    /// Body text.
    Body1,
    /// Button labels.
    Button,
}

impl TextRole {
    /// Every role, in the order variants declare them.
    pub const ALL: [TextRole; 9] = [
        TextRole::H1,
        TextRole::H2,
        TextRole::H3,
        TextRole::H4,
        TextRole::H5,
        TextRole::H6,
        TextRole::Subtitle1,
        TextRole::Body1,
        TextRole::Button,
    ];
}

/// Text case transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    /// Leave the text as written.
    None,
    /// Render in upper case.
    Uppercase,
}

/// Style for a single typography role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Size in rem.
    pub font_size: f32,
    /// CSS-like font weight.
    pub font_weight: u16,
    /// Text color override.
    #[serde(with = "crate::serde_color::option", skip_serializing_if = "Option::is_none", default)]
    pub color: Option<Color>,
    /// Case transformation.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text_transform: Option<TextTransform>,
    /// Bottom margin in rem.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub margin_bottom: Option<f32>,
}

impl TextStyle {
    /// A role with a size and weight only.
    pub fn new(font_size: f32, font_weight: u16) -> Self {
        Self {
            font_size,
            font_weight,
            color: None,
            text_transform: None,
            margin_bottom: None,
        }
    }

    /// Set the text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the case transformation.
    pub fn with_transform(mut self, transform: TextTransform) -> Self {
        self.text_transform = Some(transform);
        self
    }

    /// Set the bottom margin.
    pub fn with_margin_bottom(mut self, margin: f32) -> Self {
        self.margin_bottom = Some(margin);
        self
    }
}

/// Font family plus per-role text styles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    /// CSS font family list.
    pub font_family: String,
    /// Text styles keyed by role, in declaration order.
    pub roles: IndexMap<TextRole, TextStyle>,
}

impl Typography {
    /// Create a typography scale from a family and role styles.
    pub fn new(
        font_family: impl Into<String>,
        roles: impl IntoIterator<Item = (TextRole, TextStyle)>,
    ) -> Self {
        Self {
            font_family: font_family.into(),
            roles: roles.into_iter().collect(),
        }
    }

    /// Get the style of a role.
    pub fn role(&self, role: TextRole) -> Option<&TextStyle> {
        self.roles.get(&role)
    }
}

/// A style value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleVal {
    /// A color style value.
    Color(#[serde(with = "crate::serde_color")] Color),
    /// An unsigned int style value.
    UInt(u32),
    /// A float style value (pixels, rem or unitless).
    Float(f32),
    /// A textual style value (shadows, padding shorthands, keywords).
    Text(String),
}

/// An ordered map of style properties for one component.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style {
    map: IndexMap<String, StyleVal>,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self {
            map: IndexMap::with_capacity(8),
        }
    }

    /// Insert a style value with the given name into the style map.
    pub fn with_value(mut self, name: impl ToString, value: StyleVal) -> Self {
        self.map.insert(name.to_string(), value);
        self
    }

    /// Insert a color.
    pub fn with_color(self, name: impl ToString, color: Color) -> Self {
        self.with_value(name, StyleVal::Color(color))
    }

    /// Insert a float.
    pub fn with_float(self, name: impl ToString, value: f32) -> Self {
        self.with_value(name, StyleVal::Float(value))
    }

    /// Insert an unsigned int.
    pub fn with_uint(self, name: impl ToString, value: u32) -> Self {
        self.with_value(name, StyleVal::UInt(value))
    }

    /// Insert text.
    pub fn with_text(self, name: impl ToString, value: impl Into<String>) -> Self {
        self.with_value(name, StyleVal::Text(value.into()))
    }

    /// Set a style value by name.
    pub fn set(&mut self, name: impl ToString, value: StyleVal) {
        self.map.insert(name.to_string(), value);
    }

    /// Get a style value by name. Returns [None] if the value name does not exist.
    pub fn get(&self, name: &str) -> Option<&StyleVal> {
        self.map.get(name)
    }

    /// Get a color style value by name.
    pub fn get_color(&self, name: &str) -> Option<Color> {
        match self.map.get(name) {
            Some(StyleVal::Color(color)) => Some(*color),
            _ => None,
        }
    }

    /// Get a float style value by name.
    pub fn get_float(&self, name: &str) -> Option<f32> {
        match self.map.get(name) {
            Some(StyleVal::Float(value)) => Some(*value),
            _ => None,
        }
    }

    /// Get a textual style value by name.
    pub fn get_text(&self, name: &str) -> Option<&str> {
        match self.map.get(name) {
            Some(StyleVal::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the style holds no properties.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Component-level style overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentStyles {
    /// Every button.
    pub button: Style,
    /// Contained (filled) buttons.
    pub button_contained: Style,
    /// Dashboard cards.
    pub card: Style,
    /// Top app bar.
    pub app_bar: Style,
    /// Tables.
    pub table: Style,
    /// Table header cells.
    pub table_head: Style,
    /// Status chips.
    pub chip: Style,
    /// Tabs.
    pub tab: Style,
}

/// The fully resolved style specification consumers render from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSpec {
    /// Colors.
    pub palette: Palette,
    /// Fonts.
    pub typography: Typography,
    /// Corner radius in px.
    pub shape_radius: f32,
    /// Spacing unit in px.
    pub spacing_unit: f32,
    /// Density hint: -1, 0 or 1.
    pub visual_density: i8,
    /// Component overrides.
    pub components: ComponentStyles,
}

impl StyleSpec {
    /// Spacing in px for `factor` spacing units.
    pub fn spacing(&self, factor: f32) -> f32 {
        self.spacing_unit * factor
    }

    /// Serialize the spec to pretty-printed JSON.
    pub fn to_json(&self) -> ThemeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_map_keeps_order_and_types() {
        let style = Style::new()
            .with_float("border_radius", 4.0)
            .with_text("padding", "6px 16px")
            .with_color("border_color", Color::from_rgb8(255, 255, 255));

        let keys: Vec<&str> = style.map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["border_radius", "padding", "border_color"]);
        assert_eq!(style.get_float("border_radius"), Some(4.0));
        assert_eq!(style.get_text("padding"), Some("6px 16px"));
        assert_eq!(style.get_color("padding"), None);
    }

    #[test]
    fn test_style_serializes_as_flat_map() {
        let style = Style::new()
            .with_uint("font_weight", 500)
            .with_color("border_color", Color::from_rgb8(0xff, 0xff, 0x00));

        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r##"{"font_weight":500,"border_color":"#ffff00"}"##);
    }
}
