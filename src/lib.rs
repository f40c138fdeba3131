#![warn(missing_docs)]

//! Theme configuration engine of the ERP dashboard.

pub use vello::peniko as color;

pub use erp_theme as theme;

/// A "prelude" for users of the dashboard theme engine.
///
/// Importing this module brings into scope the most common types
/// needed to drive the theme from an application or an agent.
///
/// ```rust
/// use erp_dash::prelude::*;
///
/// let mut manager = ThemeManager::new();
/// manager.merge_config(&ThemeUpdate::new().with_mode(ThemeMode::Dark));
/// ```
pub mod prelude {
    pub use crate::theme::config::{
        BorderRadius, FontSize, Spacing, ThemeConfig, ThemeMode, ThemeParameters, ThemeUpdate,
        ThemeVariant, VisualDensity,
    };
    pub use crate::theme::error::{ThemeError, ThemeResult};
    pub use crate::theme::interpreter::interpret;
    pub use crate::theme::manager::{
        compose, create_shared_theme_manager, SharedThemeManager, SubscriptionId, ThemeManager,
    };
    pub use crate::theme::request::{ParameterRequest, ThemeUpdateRequest};
    pub use crate::theme::style::{Palette, StyleSpec, TextRole};

    // Color
    pub use crate::color::Color;
}
