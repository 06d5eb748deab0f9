//! Screen routing for the booking app.

/// Which screen the main window is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    /// Logo splash. Tapping the logo moves on to [`Route::Booking`].
    #[default]
    Landing,
    Booking,
}

impl Route {
    /// Where a tap on the landing logo leads.
    pub fn after_logo_tap(self) -> Route {
        match self {
            Route::Landing => Route::Booking,
            Route::Booking => Route::Booking,
        }
    }

    pub fn window_title(&self) -> &'static str {
        match self {
            Route::Landing => "Mattress Pickup",
            Route::Booking => "Mattress Pickup - Booking",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn app_starts_on_landing() {
        assert_eq!(Route::default(), Route::Landing);
    }

    #[test]
    fn logo_tap_opens_booking() {
        assert_eq!(Route::Landing.after_logo_tap(), Route::Booking);
        assert_eq!(Route::Booking.after_logo_tap(), Route::Booking);
    }
}
