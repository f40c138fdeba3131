//! End-to-end tests for the theme manager

use erp_theme::config::{FontSize, Spacing, ThemeConfig, ThemeMode, ThemeParameters, ThemeUpdate, ThemeVariant};
use erp_theme::manager::{compose, ThemeManager};
use erp_theme::parameters::apply;
use erp_theme::style::PaletteMode;
use erp_theme::theme::resolve;

fn assert_close(actual: f32, expected: f32) {
    assert!((actual - expected).abs() < 1e-5, "{actual} != {expected}");
}

#[test]
fn test_german_command_end_to_end() {
    let mut manager = ThemeManager::new();
    let baseline = resolve(ThemeVariant::Odoo, ThemeMode::Light);

    let spec = manager.apply_natural_language_command(
        "Aktiviere den Dunkelmodus und mache die Schrift groß",
    );

    assert_eq!(manager.config().mode, ThemeMode::Dark);
    assert_eq!(manager.config().variant, ThemeVariant::Odoo);
    assert_eq!(manager.config().parameters.font_size, Some(FontSize::Large));
    assert_eq!(spec.palette.mode, PaletteMode::Dark);

    for (role, style) in &baseline.typography.roles {
        assert_close(manager.style_spec().typography.roles[role].font_size, style.font_size * 1.1);
    }
    assert_eq!(manager.style_spec().typography.font_family, baseline.typography.font_family);
}

#[test]
fn test_parameter_shallow_union() {
    let mut manager = ThemeManager::with_config(ThemeConfig::new().with_parameters(ThemeParameters {
        font_size: Some(FontSize::Large),
        spacing: Some(Spacing::Compact),
        ..ThemeParameters::default()
    }));

    manager.merge_config(&ThemeUpdate::new().with_parameters(ThemeParameters {
        spacing: Some(Spacing::Comfortable),
        ..ThemeParameters::default()
    }));

    assert_eq!(
        manager.config().parameters,
        ThemeParameters {
            font_size: Some(FontSize::Large),
            spacing: Some(Spacing::Comfortable),
            ..ThemeParameters::default()
        }
    );
    assert_eq!(manager.style_spec().spacing_unit, 10.0);
}

#[test]
fn test_unmatched_command_is_noop() {
    let mut manager = ThemeManager::new();
    let before = manager.config().clone();

    manager.apply_natural_language_command("xyzzy");

    assert_eq!(manager.config(), &before);
}

#[test]
fn test_spec_is_pure_function_of_config() {
    for &variant in ThemeVariant::ALL {
        for &mode in ThemeMode::ALL {
            let config = ThemeConfig::new().with_variant(variant).with_mode(mode);
            let expected = apply(resolve(variant, mode), Some(&config.parameters));

            assert_eq!(compose(&config), expected);
            assert_eq!(ThemeManager::with_config(config.clone()).style_spec(), &expected);
        }
    }
}

#[test]
fn test_high_contrast_command_overrides_variant() {
    let mut manager = ThemeManager::new();
    manager.apply_natural_language_command("modern look please");
    let modern = manager.apply_natural_language_command("high contrast");
    let default = manager.apply_natural_language_command("standard");

    assert_eq!(manager.config().variant, ThemeVariant::Default);
    assert_eq!(manager.config().mode, ThemeMode::HighContrast);
    assert_eq!(modern.palette, default.palette);
}

#[test]
fn test_style_spec_json() {
    let manager = ThemeManager::new();
    let json = manager.style_spec().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["palette"]["primary"]["main"], "#7c7bad");
    assert_eq!(value["palette"]["mode"], "light");
    assert_eq!(value["spacing_unit"], 8.0);
    assert_eq!(value["typography"]["roles"]["h1"]["font_size"], 2.5);
    assert_eq!(value["components"]["chip"]["border_radius"], 3.0);
}
