pub mod booking_screen;
pub mod item_grid;
pub mod landing;
pub mod window;

use gpui::{
    AnyElement, App, ClickEvent, Div, IntoElement, ParentElement, Pixels, SharedString, Size,
    Styled, StyledImage, Window, div, img, px,
};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{Sizable, StyledExt, v_flex};

pub use booking_screen::BookingScreen;
pub use window::AppWindow;

use crate::assets::LogoSource;
use crate::config::WindowConfig;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl From<&WindowConfig> for WindowPreferences {
    fn from(config: &WindowConfig) -> Self {
        Self {
            size: Size {
                width: px(config.width),
                height: px(config.height),
            },
        }
    }
}

/// Creates a primary-styled button with a custom click handler.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .primary()
        .large()
        .w_full()
        .label(label.into())
        .on_click(on_click)
}

/// White card with a heading, used for each group of the booking form.
pub fn make_section(title: impl Into<SharedString>) -> Div {
    v_flex()
        .gap_2()
        .p_4()
        .rounded_lg()
        .border_1()
        .child(div().text_lg().font_semibold().child(title.into()))
}

/// The logo image at `size`, or the placeholder text when the file is
/// missing or fails to load.
pub fn logo_element(
    logo: &LogoSource,
    size: Pixels,
) -> AnyElement {
    let text = logo.fallback_text();
    match logo {
        LogoSource::Image(path) => img(path.clone())
            .size(size)
            .with_fallback(move || div().child(text).into_any_element())
            .into_any_element(),
        LogoSource::Placeholder(_) => div().child(text).into_any_element(),
    }
}
