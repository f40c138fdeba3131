use crate::style::{ComponentStyles, Palette, Style, StyleSpec, TextRole, TextStyle, TextTransform};
use crate::theme::material;
use crate::theme::palette::rgb;

const BORDER: &str = "2px solid white";

fn components() -> ComponentStyles {
    ComponentStyles {
        button: Style::new()
            .with_float("border_radius", 4.0)
            .with_text("padding", "6px 16px")
            .with_uint("font_weight", 500)
            .with_text("border", BORDER)
            .with_text("text_transform", "uppercase"),
        button_contained: Style::new().with_text("box_shadow", "none"),
        card: Style::new()
            .with_float("border_radius", 4.0)
            .with_text("border", BORDER),
        app_bar: Style::new()
            .with_text("box_shadow", "none")
            .with_text("border_bottom", BORDER),
        table: Style::new().with_text("border_collapse", "collapse"),
        table_head: Style::new()
            .with_color("background_color", rgb(0x000000))
            .with_color("color", rgb(0xffff00))
            .with_uint("font_weight", 700),
        chip: Style::new().with_text("border", BORDER),
        tab: Style::new()
            .with_text("text_transform", "uppercase")
            .with_uint("font_weight", 600)
            .with_float("font_size", 0.875),
    }
}

/// The fixed accessibility spec. Independent of the requested variant.
pub(crate) fn spec() -> StyleSpec {
    let palette = Palette::high_contrast();

    let mut typography = material::typography(&palette);
    typography.roles.insert(
        TextRole::Subtitle1,
        TextStyle::new(1.0, 400).with_color(palette.secondary.main),
    );
    typography.roles.insert(
        TextRole::Button,
        TextStyle::new(0.875, 500).with_transform(TextTransform::Uppercase),
    );

    StyleSpec {
        palette,
        typography,
        shape_radius: 4.0,
        spacing_unit: 8.0,
        visual_density: 0,
        components: components(),
    }
}
