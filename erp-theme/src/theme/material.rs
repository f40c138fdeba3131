use crate::style::{
    ComponentStyles, Palette, PaletteMode, Style, StyleSpec, TextRole, TextStyle, TextTransform,
    Typography,
};
use crate::theme::palette::rgb;

/// System font stack shared by the material and high-contrast looks.
pub(crate) const SYSTEM_FONT_STACK: &str =
    "-apple-system,BlinkMacSystemFont,\"Segoe UI\",Roboto,Arial,sans-serif";

/// Material look with semi-bold headings and uppercase buttons.
pub(crate) fn typography(palette: &Palette) -> Typography {
    Typography::new(
        SYSTEM_FONT_STACK,
        [
            (TextRole::H1, TextStyle::new(2.5, 600)),
            (TextRole::H2, TextStyle::new(2.0, 600)),
            (TextRole::H3, TextStyle::new(1.75, 600)),
            (TextRole::H4, TextStyle::new(1.5, 600)),
            (TextRole::H5, TextStyle::new(1.25, 600)),
            (TextRole::H6, TextStyle::new(1.0, 600)),
            (
                TextRole::Subtitle1,
                TextStyle::new(1.0, 400).with_color(palette.text.secondary),
            ),
            (TextRole::Body1, TextStyle::new(1.0, 400)),
            (
                TextRole::Button,
                TextStyle::new(0.875, 500).with_transform(TextTransform::Uppercase),
            ),
        ],
    )
}

fn components(palette: &Palette) -> ComponentStyles {
    let head_background = match palette.mode {
        PaletteMode::Dark => rgb(0x2c2c2c),
        PaletteMode::Light => rgb(0xf5f5f5),
    };

    ComponentStyles {
        button: Style::new()
            .with_float("border_radius", 4.0)
            .with_text("padding", "6px 16px")
            .with_uint("font_weight", 500),
        button_contained: Style::new().with_text(
            "box_shadow",
            "0px 3px 1px -2px rgba(0,0,0,0.2), 0px 2px 2px 0px rgba(0,0,0,0.14), 0px 1px 5px 0px rgba(0,0,0,0.12)",
        ),
        card: Style::new().with_float("border_radius", 4.0).with_text(
            "box_shadow",
            "0px 2px 1px -1px rgba(0,0,0,0.2), 0px 1px 1px 0px rgba(0,0,0,0.14), 0px 1px 3px 0px rgba(0,0,0,0.12)",
        ),
        app_bar: Style::new().with_text(
            "box_shadow",
            "0px 2px 4px -1px rgba(0,0,0,0.2), 0px 4px 5px 0px rgba(0,0,0,0.14), 0px 1px 10px 0px rgba(0,0,0,0.12)",
        ),
        table: Style::new().with_text("border_collapse", "collapse"),
        table_head: Style::new()
            .with_color("background_color", head_background)
            .with_uint("font_weight", 600),
        chip: Style::new().with_float("border_radius", 16.0),
        tab: Style::new()
            .with_text("text_transform", "none")
            .with_uint("font_weight", 500)
            .with_float("font_size", 0.875),
    }
}

/// Material look for a light or dark palette.
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
