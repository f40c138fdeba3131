use vello::peniko::Color;

use crate::style::{BackgroundColors, Palette, PaletteColor, PaletteMode, SurfaceColors, TextColors};

/// Build a color from a `0xRRGGBB` literal.
pub(crate) fn rgb(hex: u32) -> Color {
    Color::from_rgb8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

fn slot(main: u32, light: u32, dark: u32, contrast_text: u32) -> PaletteColor {
    PaletteColor::new(rgb(main), rgb(light), rgb(dark), rgb(contrast_text))
}

impl Palette {
    /// Odoo palette for light surfaces (violet brand, orange accent).
    pub fn odoo_light() -> Self {
        Self {
            mode: PaletteMode::Light,
            primary: slot(0x7c7bad, 0x9d9bc5, 0x5d5a8d, 0xffffff),
            secondary: slot(0xf0ad4e, 0xf8c885, 0xd08e29, 0x212529),
            success: slot(0x28a745, 0x48c765, 0x1e7e34, 0xffffff),
            info: slot(0x5bc0de, 0x7dcde8, 0x31b0d5, 0x212529),
            warning: slot(0xf0ad4e, 0xf4c37d, 0xec971f, 0x212529),
            error: slot(0xdc3545, 0xe35d6a, 0xbd2130, 0xffffff),
            background: BackgroundColors {
                default: rgb(0xf9f9f9),
                paper: rgb(0xffffff),
            },
            text: TextColors {
                primary: rgb(0x212529),
                secondary: rgb(0x6c757d),
            },
            divider: rgb(0xe9ecef),
            surfaces: SurfaceColors {
                header: rgb(0xffffff),
                sidebar: rgb(0xf8f9fa),
                card: rgb(0xffffff),
                hover: rgb(0xf1f3f5),
            },
        }
    }

    /// Odoo palette for dark surfaces.
    pub fn odoo_dark() -> Self {
        Self {
            mode: PaletteMode::Dark,
            primary: slot(0x9d9bc5, 0xbdbcda, 0x7c7bad, 0x000000),
            secondary: slot(0xf8c885, 0xfbddb3, 0xf0ad4e, 0x000000),
            success: slot(0x48c765, 0x6fd487, 0x28a745, 0x000000),
            info: slot(0x7dcde8, 0xa3dcef, 0x5bc0de, 0x000000),
            warning: slot(0xf4c37d, 0xf8d7a8, 0xf0ad4e, 0x000000),
            error: slot(0xe35d6a, 0xea8590, 0xdc3545, 0x000000),
            background: BackgroundColors {
                default: rgb(0x1e1e2a),
                paper: rgb(0x2a2a38),
            },
            text: TextColors {
                primary: rgb(0xf1f3f5),
                secondary: rgb(0xadb5bd),
            },
            divider: rgb(0x3a3a4a),
            surfaces: SurfaceColors {
                header: rgb(0x262634),
                sidebar: rgb(0x1a1a24),
                card: rgb(0x2a2a38),
                hover: rgb(0x34344a),
            },
        }
    }

    /// Material palette for light surfaces (blue brand, pink accent).
    pub fn material_light() -> Self {
        Self {
            mode: PaletteMode::Light,
            primary: slot(0x1976d2, 0x42a5f5, 0x1565c0, 0xffffff),
            secondary: slot(0xdc004e, 0xff4081, 0xc51162, 0xffffff),
            success: slot(0x2e7d32, 0x4caf50, 0x1b5e20, 0xffffff),
            info: slot(0x0288d1, 0x29b6f6, 0x01579b, 0xffffff),
            warning: slot(0xed6c02, 0xff9800, 0xe65100, 0xffffff),
            error: slot(0xd32f2f, 0xef5350, 0xc62828, 0xffffff),
            background: BackgroundColors {
                default: rgb(0xf5f5f5),
                paper: rgb(0xffffff),
            },
            text: TextColors {
                primary: rgb(0x212121),
                secondary: rgb(0x757575),
            },
            divider: rgb(0xe0e0e0),
            surfaces: SurfaceColors {
                header: rgb(0xffffff),
                sidebar: rgb(0xf5f5f5),
                card: rgb(0xffffff),
                hover: rgb(0xf0f0f0),
            },
        }
    }

    /// Material palette for dark surfaces.
    pub fn material_dark() -> Self {
        Self {
            mode: PaletteMode::Dark,
            primary: slot(0x90caf9, 0xe3f2fd, 0x42a5f5, 0x000000),
            secondary: slot(0xf48fb1, 0xfce4ec, 0xff4081, 0x000000),
            success: slot(0x4caf50, 0x81c784, 0x2e7d32, 0x000000),
            info: slot(0x29b6f6, 0x4fc3f7, 0x0288d1, 0x000000),
            warning: slot(0xffc107, 0xffcd38, 0xe69500, 0x000000),
            error: slot(0xf44336, 0xe57373, 0xd32f2f, 0xffffff),
            background: BackgroundColors {
                default: rgb(0x121212),
                paper: rgb(0x1e1e1e),
            },
            text: TextColors {
                primary: rgb(0xffffff),
                secondary: rgb(0xb0b0b0),
            },
            divider: rgb(0x424242),
            surfaces: SurfaceColors {
                header: rgb(0x1a1a1a),
                sidebar: rgb(0x2c2c2c),
                card: rgb(0x2c2c2c),
                hover: rgb(0x3c3c3c),
            },
        }
    }

    /// Fixed accessibility palette: white and yellow on black.
    pub fn high_contrast() -> Self {
        Self {
            mode: PaletteMode::Dark,
            primary: slot(0xffffff, 0xffffff, 0xcccccc, 0x000000),
            secondary: slot(0xffff00, 0xffff33, 0xcccc00, 0x000000),
            success: slot(0x00ff00, 0x66ff66, 0x00cc00, 0x000000),
            info: slot(0x00ffff, 0x66ffff, 0x00cccc, 0x000000),
            warning: slot(0xffa500, 0xffc04d, 0xcc8400, 0x000000),
            error: slot(0xff4040, 0xff7373, 0xcc0000, 0x000000),
            background: BackgroundColors {
                default: rgb(0x000000),
                paper: rgb(0x333333),
            },
            text: TextColors {
                primary: rgb(0xffffff),
                secondary: rgb(0xffff00),
            },
            divider: rgb(0xffffff),
            surfaces: SurfaceColors {
                header: rgb(0x000000),
                sidebar: rgb(0x000000),
                card: rgb(0x000000),
                hover: rgb(0x333333),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_literal() {
        assert_eq!(rgb(0x7c7bad), Color::from_rgb8(0x7c, 0x7b, 0xad));
        assert_eq!(rgb(0x000000), Color::from_rgb8(0, 0, 0));
    }
}
