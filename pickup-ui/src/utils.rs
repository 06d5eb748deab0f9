use chrono::{Local, NaiveDate};
use gpui::SharedString;
use gpui_component::{IndexPath, calendar::Date};
use pickup_core::TimeSlot;

/// Dropdown entries for the pickup time, in display order.
pub fn time_slot_labels() -> Vec<SharedString> {
    TimeSlot::ALL
        .iter()
        .map(|slot| SharedString::from(slot.as_str()))
        .collect()
}

/// Dropdown row selected when the booking screen opens.
pub fn default_time_slot_row() -> IndexPath {
    IndexPath::default().row(TimeSlot::default().position())
}

/// The date a picker change carries, if any. Ranges yield their start.
pub fn picked_date(date: &Date) -> Option<NaiveDate> {
    match date {
        Date::Single(day) => *day,
        Date::Range(start, _) => *start,
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn time_slot_labels_are_in_order() {
        let labels: Vec<String> = time_slot_labels().iter().map(|s| s.to_string()).collect();

        assert_eq!(labels, ["08:00", "09:00", "10:00", "11:00", "12:00"]);
    }

    #[test]
    fn default_row_points_at_eight() {
        let label = &time_slot_labels()[default_time_slot_row().row];

        assert_eq!(label.as_ref(), "08:00");
    }

    #[test]
    fn picked_date_reads_single_dates() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 21);

        assert_eq!(picked_date(&Date::Single(day)), day);
        assert_eq!(picked_date(&Date::Single(None)), None);
    }

    #[test]
    fn picked_date_uses_range_start() {
        let start = NaiveDate::from_ymd_opt(2026, 10, 21);
        let end = NaiveDate::from_ymd_opt(2026, 10, 23);

        assert_eq!(picked_date(&Date::Range(start, end)), start);
    }
}
