use crate::style::{
    ComponentStyles, Palette, PaletteMode, Style, StyleSpec, TextRole, TextStyle, TextTransform,
    Typography,
};
use crate::theme::palette::rgb;

const ODOO_FONT_STACK: &str =
    "Roboto,Lato,\"Open Sans\",-apple-system,BlinkMacSystemFont,\"Segoe UI\",Arial,sans-serif";

fn typography(palette: &Palette) -> Typography {
    Typography::new(
        ODOO_FONT_STACK,
        [
            (TextRole::H1, TextStyle::new(2.5, 400).with_margin_bottom(1.0)),
            (TextRole::H2, TextStyle::new(2.0, 400).with_margin_bottom(0.75)),
            (TextRole::H3, TextStyle::new(1.75, 400).with_margin_bottom(0.5)),
            (TextRole::H4, TextStyle::new(1.5, 500).with_margin_bottom(0.5)),
            (TextRole::H5, TextStyle::new(1.25, 500)),
            (TextRole::H6, TextStyle::new(1.0, 500)),
            (
                TextRole::Subtitle1,
                TextStyle::new(1.0, 400).with_color(palette.text.secondary),
            ),
            (TextRole::Body1, TextStyle::new(0.9, 400)),
            (
                TextRole::Button,
                TextStyle::new(0.875, 500).with_transform(TextTransform::None),
            ),
        ],
    )
}

fn components(palette: &Palette) -> ComponentStyles {
    let head_background = match palette.mode {
        PaletteMode::Dark => rgb(0x262634),
        PaletteMode::Light => rgb(0xf8f9fa),
    };

    ComponentStyles {
        button: Style::new()
            .with_text("text_transform", "none")
            .with_float("border_radius", 3.0)
            .with_text("padding", "8px 16px")
            .with_text("box_shadow", "none")
            .with_uint("font_weight", 500)
            .with_text(
                "hover_box_shadow",
                "0 1px 3px rgba(0,0,0,0.12), 0 1px 2px rgba(0,0,0,0.24)",
            ),
        button_contained: Style::new().with_text("box_shadow", "0 1px 2px rgba(0,0,0,0.05)"),
        card: Style::new()
            .with_float("border_radius", 4.0)
            .with_text("box_shadow", "0 1px 3px rgba(0,0,0,0.1)")
            .with_text("transition", "box-shadow 0.3s ease-in-out")
            .with_text("hover_box_shadow", "0 3px 6px rgba(0,0,0,0.15)"),
        app_bar: Style::new().with_text("box_shadow", "0 1px 3px rgba(0,0,0,0.1)"),
        table: Style::new()
            .with_text("border_collapse", "separate")
            .with_float("border_spacing", 0.0),
        table_head: Style::new()
            .with_color("background_color", head_background)
            .with_uint("font_weight", 500),
        chip: Style::new().with_float("border_radius", 3.0),
        tab: Style::new()
            .with_text("text_transform", "none")
            .with_uint("font_weight", 500)
            .with_float("font_size", 0.9),
    }
}

/// Odoo look for a light or dark palette.
pub(crate) fn spec(palette: Palette) -> StyleSpec {
    StyleSpec {
        typography: typography(&palette),
        components: components(&palette),
        shape_radius: 4.0,
        spacing_unit: 8.0,
        visual_density: 0,
        palette,
    }
}
