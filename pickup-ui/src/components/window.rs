use gpui::{
    App, AppContext, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Subscription, Window, div,
};
use tracing::info;

use crate::assets::LogoSource;
use crate::components::BookingScreen;
use crate::components::landing::render_landing;
use crate::state::Route;
#[cfg(not(target_os = "linux"))]
use crate::{Quit, quit};

/// Root view of the main window. Shows one screen at a time.
pub struct AppWindow {
    _window_close_subscription: Subscription,
    route: Route,
    logo: LogoSource,
    /// Present only while the booking route is active, so leaving the
    /// screen discards its form state.
    booking: Option<Entity<BookingScreen>>,
}

impl AppWindow {
    pub fn new(
        logo: LogoSource,
        cx: &mut Context<Self>,
    ) -> Self {
        let subscription = cx.on_window_closed(|_cx: &mut App| {
            info!("Window closed callback");
            #[cfg(not(target_os = "linux"))]
            quit(&Quit, _cx);
        });

        info!("Window constructed");
        Self {
            _window_close_subscription: subscription,
            route: Route::default(),
            logo,
            booking: None,
        }
    }

    pub fn navigate(
        &mut self,
        route: Route,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if route == self.route {
            return;
        }
        info!(from = ?self.route, to = ?route, "navigating");

        self.booking = match route {
            Route::Booking => {
                let logo = self.logo.clone();
                Some(cx.new(|screen_cx| BookingScreen::new(logo, window, screen_cx)))
            }
            Route::Landing => None,
        };
        self.route = route;
        window.set_window_title(route.window_title());
        cx.notify();
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let content = match (self.route, &self.booking) {
            (Route::Booking, Some(screen)) => screen.clone().into_any_element(),
            _ => render_landing(
                &self.logo,
                cx.listener(|this, _: &ClickEvent, window, cx| {
                    let next = this.route.after_logo_tap();
                    this.navigate(next, window, cx);
                }),
            )
            .into_any_element(),
        };

        div().size_full().child(content)
    }
}
