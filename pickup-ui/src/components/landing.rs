use gpui::{
    App, ClickEvent, InteractiveElement, IntoElement, ParentElement, StatefulInteractiveElement,
    Styled, Window, div, linear_color_stop, linear_gradient, px, rgb,
};
use gpui_component::v_flex;

use crate::assets::LogoSource;
use crate::components::logo_element;
use crate::theme::LANDING_GRADIENT;

/// Full-window splash: the logo centred on a light gradient. The logo is the
/// only tap target.
pub fn render_landing(
    logo: &LogoSource,
    on_logo_tap: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> impl IntoElement {
    let (top, bottom) = LANDING_GRADIENT;

    v_flex()
        .size_full()
        .items_center()
        .justify_center()
        .bg(linear_gradient(
            180.,
            linear_color_stop(rgb(top), 0.),
            linear_color_stop(rgb(bottom), 1.),
        ))
        .child(
            div()
                .id("landing-logo")
                .cursor_pointer()
                .on_click(on_logo_tap)
                .child(logo_element(logo, px(150.))),
        )
}
