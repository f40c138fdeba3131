//! # Variant Resolution
//!
//! This module maps a ([ThemeVariant], [ThemeMode]) pair to the base
//! [StyleSpec] that parameters are later applied to.
//!
//! ## Overview
//!
//! The resolver consists of:
//!
//! - **[resolve]**: Total function over every variant/mode pair
//! - **Odoo look**: Violet/orange palette, regular-weight headings, no button case change
//! - **Material look**: Blue/pink palette, semi-bold headings, uppercase buttons
//! - **High contrast**: Fixed white/yellow-on-black spec with 2px borders
//!
//! ## Precedence
//!
//! [ThemeMode::HighContrast] wins over the variant. Accessibility overrides
//! aesthetic choice, so every variant resolves to the same spec in that mode:
//!
//! ```rust
//! use erp_theme::config::{ThemeMode, ThemeVariant};
//! use erp_theme::theme::resolve;
//!
//! assert_eq!(
//!     resolve(ThemeVariant::Odoo, ThemeMode::HighContrast),
//!     resolve(ThemeVariant::Default, ThemeMode::HighContrast),
//! );
//! ```
//!
//! ## Aliases
//!
//! [ThemeVariant::Modern] resolves like [ThemeVariant::Default] and
//! [ThemeVariant::Classic] like [ThemeVariant::Odoo]. Distinct palettes for
//! them are a feature request, not a fix.

use crate::config::{ThemeMode, ThemeVariant};
use crate::style::{Palette, StyleSpec};

/// The palette tables.
pub mod palette;

mod high_contrast;
mod material;
mod odoo;

/// Resolve the base style specification for a variant in a mode.
///
/// The result is fully populated and depends on nothing but the arguments.
pub fn resolve(variant: ThemeVariant, mode: ThemeMode) -> StyleSpec {
    log::debug!("VariantResolver: resolving {} in {} mode", variant, mode);

    match (variant, mode) {
        (_, ThemeMode::HighContrast) => high_contrast::spec(),
        (ThemeVariant::Odoo | ThemeVariant::Classic, ThemeMode::Light) => {
            odoo::spec(Palette::odoo_light())
        },
        (ThemeVariant::Odoo | ThemeVariant::Classic, ThemeMode::Dark) => {
            odoo::spec(Palette::odoo_dark())
        },
        (ThemeVariant::Default | ThemeVariant::Modern, ThemeMode::Light) => {
            material::spec(Palette::material_light())
        },
        (ThemeVariant::Default | ThemeVariant::Modern, ThemeMode::Dark) => {
            material::spec(Palette::material_dark())
        },
    }
}
