//! # Parameter Application
//!
//! Applies [ThemeParameters] on top of a resolved base [StyleSpec]. Every
//! parameter touches its own field, so the order of application does not
//! matter and no two parameters interact.
//!
//! | parameter | effect |
//! |---|---|
//! | `primary_color` / `secondary_color` | replaces the `main` shade only |
//! | `font_size` | scales every typography role size (0.9 / 1.0 / 1.1) |
//! | `spacing` | spacing unit 6 / 8 / 10 px |
//! | `border_radius` | shape radius 0 / 4 / 8 / 16 px |
//! | `font_family` | replaces the font family |
//! | `visual_density` | density score -1 / 0 / 1 |
//!
//! Color overrides do not regenerate the `light`/`dark` shades or the
//! contrast text. Contrast is the caller's responsibility.

use crate::config::{BorderRadius, FontSize, Spacing, ThemeParameters, VisualDensity};
use crate::style::StyleSpec;

impl FontSize {
    /// Factor applied to every typography size.
    pub fn scale_factor(self) -> f32 {
        match self {
            FontSize::Small => 0.9,
            FontSize::Medium => 1.0,
            FontSize::Large => 1.1,
        }
    }
}

impl Spacing {
    /// Spacing unit in px.
    pub fn unit(self) -> f32 {
        match self {
            Spacing::Compact => 6.0,
            Spacing::Normal => 8.0,
            Spacing::Comfortable => 10.0,
        }
    }
}

impl BorderRadius {
    /// Shape radius in px.
    pub fn radius(self) -> f32 {
        match self {
            BorderRadius::None => 0.0,
            BorderRadius::Small => 4.0,
            BorderRadius::Medium => 8.0,
            BorderRadius::Large => 16.0,
        }
    }
}

impl VisualDensity {
    /// Density score consumed by layout.
    pub fn score(self) -> i8 {
        match self {
            VisualDensity::Low => -1,
            VisualDensity::Medium => 0,
            VisualDensity::High => 1,
        }
    }
}

/// Apply `parameters` to `base`, producing the final spec.
///
/// `None` or an empty parameter set returns `base` unchanged.
pub fn apply(mut base: StyleSpec, parameters: Option<&ThemeParameters>) -> StyleSpec {
    let Some(parameters) = parameters else {
        return base;
    };

    if let Some(color) = parameters.primary_color {
        base.palette.primary.main = color;
    }

    if let Some(color) = parameters.secondary_color {
        base.palette.secondary.main = color;
    }

    if let Some(font_size) = parameters.font_size {
        let factor = font_size.scale_factor();
        for style in base.typography.roles.values_mut() {
            style.font_size *= factor;
        }
    }

    if let Some(spacing) = parameters.spacing {
        base.spacing_unit = spacing.unit();
    }

    if let Some(radius) = parameters.border_radius {
        base.shape_radius = radius.radius();
    }

    if let Some(family) = &parameters.font_family {
        base.typography.font_family = family.clone();
    }

    if let Some(density) = parameters.visual_density {
        base.visual_density = density.score();
    }

    base
}
