// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the weather screens.

- **Palette**: Base and sky colors
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Icon and panel sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

```
use iced_weather::ui::design_tokens::{palette, spacing};

let padding = spacing::MD; // 16px
let text = palette::WHITE;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_500: Color = Color::from_rgb(0.56, 0.56, 0.58);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Sky (day gradient)
    pub const SKY_BLUE: Color = Color::from_rgb(0.0, 0.478, 1.0);
    pub const LIGHT_BLUE: Color = Color::from_rgb(0.68, 0.85, 0.98);

    // Night gradient
    pub const NIGHT_TOP: Color = BLACK;
    pub const NIGHT_BOTTOM: Color = GRAY_500;

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Day slot icon.
    pub const ICON_DAY: f32 = 40.0;
    /// Prompt and error icons.
    pub const ICON_PROMPT: f32 = 100.0;
    /// Main weather status icon.
    pub const ICON_HERO: f32 = 180.0;

    pub const BUTTON_WIDTH: f32 = 280.0;
    pub const BUTTON_HEIGHT: f32 = 50.0;

    pub const PANEL_MAX_WIDTH: f32 = 360.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Current temperature
    pub const HERO: f32 = 70.0;

    /// City name
    pub const TITLE_LG: f32 = 32.0;

    /// Day slot temperature
    pub const TITLE_MD: f32 = 28.0;

    /// Button labels
    pub const TITLE_SM: f32 = 20.0;

    /// Day slot weekday
    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 10.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(sizing::ICON_HERO > sizing::ICON_PROMPT);
    assert!(sizing::ICON_PROMPT > sizing::ICON_DAY);

    assert!(typography::HERO > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn day_and_night_gradients_differ() {
        assert_ne!(palette::SKY_BLUE, palette::NIGHT_TOP);
        assert_ne!(palette::LIGHT_BLUE, palette::NIGHT_BOTTOM);
    }
}
