use serde::Serialize;

use crate::Color;

/// Colors shared by a theme's background and environment.
///
/// The array fields have fixed arity: the sky is always a three-stop
/// gradient (top, middle, horizon), platforms and leaves always come in
/// light/dark pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub sky: [Color; 3],
    pub ground: Color,
    pub ground_accent: Color,
    pub platform: [Color; 2],
    pub stars: Color,
    pub tree_leaf: [Color; 2],
    pub tree_trunk: Color,
}

impl ColorPalette {
    pub const SUNNY_GROVE: ColorPalette = ColorPalette {
        sky: [Color::hex(0x7DD3FC), Color::hex(0xBAE6FD), Color::hex(0xFEF3C7)],
        ground: Color::hex(0x65A30D),
        ground_accent: Color::hex(0x4D7C0F),
        platform: [Color::hex(0xD6A56C), Color::hex(0xA47148)],
        stars: Color::hex(0xFFFFFF),
        tree_leaf: [Color::hex(0x15803D), Color::hex(0x166534)],
        tree_trunk: Color::hex(0x78350F),
    };

    pub const MOONLIT_HOLLOW: ColorPalette = ColorPalette {
        sky: [Color::hex(0x0F172A), Color::hex(0x1E293B), Color::hex(0x334155)],
        ground: Color::hex(0x14532D),
        ground_accent: Color::hex(0x052E16),
        platform: [Color::hex(0x78716C), Color::hex(0x57534E)],
        stars: Color::hex(0xFDE68A),
        tree_leaf: [Color::hex(0x064E3B), Color::hex(0x022C22)],
        tree_trunk: Color::hex(0x292524),
    };

    pub const AUTUMN_GLADE: ColorPalette = ColorPalette {
        sky: [Color::hex(0xFDBA74), Color::hex(0xFED7AA), Color::hex(0xFFF7ED)],
        ground: Color::hex(0xA16207),
        ground_accent: Color::hex(0x854D0E),
        platform: [Color::hex(0xC2410C), Color::hex(0x9A3412)],
        stars: Color::hex(0xFFFBEB),
        tree_leaf: [Color::hex(0xEA580C), Color::hex(0xB91C1C)],
        tree_trunk: Color::hex(0x451A03),
    };

    pub const SNOWY_PINES: ColorPalette = ColorPalette {
        sky: [Color::hex(0x94A3B8), Color::hex(0xCBD5E1), Color::hex(0xF1F5F9)],
        ground: Color::hex(0xF8FAFC),
        ground_accent: Color::hex(0xE2E8F0),
        platform: [Color::hex(0x93C5FD), Color::hex(0x60A5FA)],
        stars: Color::hex(0xFFFFFF),
        tree_leaf: [Color::hex(0x1E3A2F), Color::hex(0x14532D)],
        tree_trunk: Color::hex(0x44403C),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_sky_darkens_towards_the_top() {
        let sky = ColorPalette::MOONLIT_HOLLOW.sky;
        let brightness = |c: Color| c.r as u32 + c.g as u32 + c.b as u32;
        assert!(brightness(sky[0]) < brightness(sky[1]));
        assert!(brightness(sky[1]) < brightness(sky[2]));
    }

    #[test]
    fn palette_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(ColorPalette::SUNNY_GROVE).unwrap();
        assert_eq!(json["groundAccent"], "#4D7C0F");
        assert_eq!(json["sky"].as_array().unwrap().len(), 3);
    }
}
