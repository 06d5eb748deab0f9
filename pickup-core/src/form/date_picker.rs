use chrono::NaiveDate;

/// Visibility of the pickup date picker.
///
/// Opening shows it; any close, picked or cancelled, hides it again. Only a
/// real pick replaces the stored date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatePickerState {
    visible: bool,
}

impl DatePickerState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Hides the picker and folds `selection` into `current`.
    pub fn close(
        &mut self,
        selection: Option<NaiveDate>,
        current: &mut Option<NaiveDate>,
    ) {
        self.visible = false;
        if let Some(date) = selection {
            *current = Some(date);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!DatePickerState::default().is_visible());
    }

    #[test]
    fn cancel_keeps_previous_date() {
        let previous = NaiveDate::from_ymd_opt(2026, 11, 3);
        let mut current = previous;
        let mut picker = DatePickerState::default();

        picker.open();
        picker.close(None, &mut current);

        assert!(!picker.is_visible());
        assert_eq!(current, previous);
    }

    #[test]
    fn pick_overwrites_date() {
        let picked = NaiveDate::from_ymd_opt(2026, 11, 4);
        let mut current = None;
        let mut picker = DatePickerState::default();

        picker.open();
        picker.close(picked, &mut current);

        assert_eq!(current, picked);
    }
}
