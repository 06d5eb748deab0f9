//! Fixed brand palette: light-grey page, white cards, blue primary buttons.

use gpui::{App, Hsla, rgb};
use gpui_component::Theme;
use tracing::debug;

const PRIMARY_BLUE: u32 = 0x007bff;
const PAGE_BACKGROUND: u32 = 0xf9f9f9;
const CARD_BACKGROUND: u32 = 0xffffff;
const INPUT_BORDER: u32 = 0xdddddd;
const TEXT: u32 = 0x1a1a1a;

/// Top and bottom of the landing screen gradient.
pub const LANDING_GRADIENT: (u32, u32) = (0xe6f2ff, 0xffffff);

fn hsla(hex: u32) -> Hsla {
    rgb(hex).into()
}

fn hover_variant(base: Hsla) -> Hsla {
    let shift = if base.l > 0.5 { -0.05 } else { 0.05 };
    Hsla {
        l: (base.l + shift).clamp(0.0, 1.0),
        ..base
    }
}

fn active_variant(base: Hsla) -> Hsla {
    let shift = if base.l > 0.5 { -0.10 } else { 0.10 };
    Hsla {
        l: (base.l + shift).clamp(0.0, 1.0),
        ..base
    }
}

pub fn apply_booking_theme(cx: &mut App) {
    let colors = &mut Theme::global_mut(cx).colors;

    let primary = hsla(PRIMARY_BLUE);
    colors.primary = primary;
    colors.primary_foreground = hsla(CARD_BACKGROUND);
    colors.primary_hover = hover_variant(primary);
    colors.primary_active = active_variant(primary);
    colors.caret = primary;
    colors.ring = primary;

    colors.background = hsla(PAGE_BACKGROUND);
    colors.foreground = hsla(TEXT);
    colors.popover = hsla(CARD_BACKGROUND);
    colors.popover_foreground = hsla(TEXT);
    colors.group_box = hsla(CARD_BACKGROUND);
    colors.group_box_foreground = hsla(TEXT);

    colors.border = hsla(INPUT_BORDER);
    colors.input = hsla(INPUT_BORDER);

    debug!("booking theme applied");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_darkens_light_colors_and_lightens_dark_ones() {
        let light = hsla(CARD_BACKGROUND);
        let dark = hsla(TEXT);

        assert!(hover_variant(light).l < light.l);
        assert!(hover_variant(dark).l > dark.l);
    }

    #[test]
    fn active_shifts_further_than_hover() {
        let primary = hsla(PRIMARY_BLUE);

        let hover_shift = (hover_variant(primary).l - primary.l).abs();
        let active_shift = (active_variant(primary).l - primary.l).abs();

        assert!(active_shift > hover_shift);
    }
}
