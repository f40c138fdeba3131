//! Structured update requests as sent by an external agent.
//!
//! A [ThemeUpdateRequest] carries raw strings. Converting it into a
//! [ThemeUpdate] is the validation boundary: any value outside its defined
//! set is rejected here and never reaches the resolver or the applier.

use serde::{Deserialize, Serialize};

use crate::config::{ThemeParameters, ThemeUpdate};
use crate::error::{ThemeError, ThemeResult};
use crate::serde_color::parse_hex_color;

/// Untyped parameter overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParameterRequest {
    /// Hex color for the primary slot.
    pub primary_color: Option<String>,
    /// Hex color for the secondary slot.
    pub secondary_color: Option<String>,
    /// `small`, `medium` or `large`.
    pub font_size: Option<String>,
    /// `compact`, `normal` or `comfortable`.
    pub spacing: Option<String>,
    /// `none`, `small`, `medium` or `large`.
    pub border_radius: Option<String>,
    /// Free font family string.
    pub font_family: Option<String>,
    /// `low`, `medium` or `high`.
    pub visual_density: Option<String>,
}

/// An untyped partial configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeUpdateRequest {
    /// `light`, `dark` or `high-contrast`.
    pub mode: Option<String>,
    /// `odoo`, `default`, `modern` or `classic`.
    pub variant: Option<String>,
    /// Parameter overrides.
    pub parameters: Option<ParameterRequest>,
}

impl ThemeUpdateRequest {
    /// Parse a request from JSON.
    pub fn from_json(content: &str) -> ThemeResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Validate the request into a typed update.
    pub fn validate(&self) -> ThemeResult<ThemeUpdate> {
        let parameters = match &self.parameters {
            Some(parameters) => parameters.validate()?,
            None => ThemeParameters::default(),
        };

        Ok(ThemeUpdate {
            mode: self.mode.as_deref().map(str::parse).transpose()?,
            variant: self.variant.as_deref().map(str::parse).transpose()?,
            parameters,
        })
    }
}

impl ParameterRequest {
    /// Validate the overrides into typed parameters.
    pub fn validate(&self) -> ThemeResult<ThemeParameters> {
        let color = |field: &'static str, value: &Option<String>| {
            value
                .as_deref()
                .map(|hex| {
                    parse_hex_color(hex).map_err(|details| ThemeError::invalid_color(field, hex, details))
                })
                .transpose()
        };

        Ok(ThemeParameters {
            primary_color: color("primaryColor", &self.primary_color)?,
            secondary_color: color("secondaryColor", &self.secondary_color)?,
            font_size: self.font_size.as_deref().map(str::parse).transpose()?,
            spacing: self.spacing.as_deref().map(str::parse).transpose()?,
            border_radius: self.border_radius.as_deref().map(str::parse).transpose()?,
            font_family: self.font_family.clone(),
            visual_density: self.visual_density.as_deref().map(str::parse).transpose()?,
        })
    }
}

impl TryFrom<ThemeUpdateRequest> for ThemeUpdate {
    type Error = ThemeError;

    fn try_from(request: ThemeUpdateRequest) -> Result<Self, Self::Error> {
        request.validate()
    }
}
