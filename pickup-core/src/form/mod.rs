//! Booking form state.
//!
//! [`BookingForm`] owns everything the booking screen shows. Input widgets
//! translate user actions into [`FormEvent`]s and hand them to
//! [`BookingForm::apply`]; the quote summary is recomputed whenever an event
//! changes the item counts, so [`BookingForm::summary`] is always current.

mod date_picker;

use chrono::NaiveDate;
use tracing::debug;

pub use date_picker::DatePickerState;

use crate::calculations::QuoteCalculator;
use crate::models::{
    BedSize, BookingRequest, Category, ContactInfo, DROP_OFF_ADDRESS, PickupInfo, QuoteSummary,
    RecycleItems, TimeSlot,
};

/// A single user input on the booking screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    FullNameChanged(String),
    EmailChanged(String),
    MobileChanged(String),
    PickupAddressChanged(String),
    DatePickerOpened,
    /// The picker closed. `None` when it was dismissed without a pick.
    DatePickerClosed(Option<NaiveDate>),
    TimeSlotSelected(TimeSlot),
    ItemCountChanged {
        category: Category,
        size: BedSize,
        raw_text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    contact: ContactInfo,
    pickup: PickupInfo,
    date_picker: DatePickerState,
    items: RecycleItems,
    calculator: QuoteCalculator,
    summary: QuoteSummary,
}

impl BookingForm {
    /// An empty form priced at the standard rates.
    pub fn new() -> Self {
        Self::with_calculator(QuoteCalculator::standard())
    }

    pub fn with_calculator(calculator: QuoteCalculator) -> Self {
        let items = RecycleItems::default();
        let summary = calculator.calculate(&items);

        Self {
            contact: ContactInfo::default(),
            pickup: PickupInfo::default(),
            date_picker: DatePickerState::default(),
            items,
            calculator,
            summary,
        }
    }

    /// Applies one input event. The event is fully processed, summary
    /// included, before this returns.
    pub fn apply(
        &mut self,
        event: FormEvent,
    ) {
        debug!(?event, "applying form event");

        match event {
            FormEvent::FullNameChanged(value) => self.contact.full_name = value,
            FormEvent::EmailChanged(value) => self.contact.email = value,
            FormEvent::MobileChanged(value) => self.contact.mobile = value,
            FormEvent::PickupAddressChanged(value) => self.pickup.address = value,
            FormEvent::DatePickerOpened => self.date_picker.open(),
            FormEvent::DatePickerClosed(selection) => {
                self.date_picker.close(selection, &mut self.pickup.date);
            }
            FormEvent::TimeSlotSelected(slot) => self.pickup.time = slot,
            FormEvent::ItemCountChanged {
                category,
                size,
                raw_text,
            } => {
                self.items = self.items.update_item(category, size, &raw_text);
                self.summary = self.calculator.calculate(&self.items);
                debug!(total_items = self.summary.total_items, "quote recomputed");
            }
        }
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn pickup(&self) -> &PickupInfo {
        &self.pickup
    }

    pub fn items(&self) -> &RecycleItems {
        &self.items
    }

    pub fn summary(&self) -> &QuoteSummary {
        &self.summary
    }

    pub fn is_date_picker_visible(&self) -> bool {
        self.date_picker.is_visible()
    }

    /// Canonical text for an item input: the stored count in base 10.
    pub fn item_text(
        &self,
        category: Category,
        size: BedSize,
    ) -> String {
        self.items.get(category, size).to_string()
    }

    /// Bundles the current state for a booking hand-off.
    pub fn booking_request(&self) -> BookingRequest {
        BookingRequest {
            contact: self.contact.clone(),
            pickup: self.pickup.clone(),
            drop_off_address: DROP_OFF_ADDRESS.to_string(),
            items: self.items,
            quote: self.summary.clone(),
        }
    }
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn set_count(
        form: &mut BookingForm,
        category: Category,
        size: BedSize,
        raw_text: &str,
    ) {
        form.apply(FormEvent::ItemCountChanged {
            category,
            size,
            raw_text: raw_text.to_string(),
        });
    }

    #[test]
    fn new_form_has_zero_summary_and_default_time() {
        let form = BookingForm::new();

        assert_eq!(form.summary().total_items, 0);
        assert_eq!(form.summary().delivery_fee, dec!(0));
        assert_eq!(form.pickup().time, TimeSlot::Eight);
        assert_eq!(form.pickup().date, None);
        assert!(!form.is_date_picker_visible());
    }

    #[test]
    fn item_change_recomputes_summary() {
        let mut form = BookingForm::new();

        set_count(&mut form, Category::Mattress, BedSize::Single, "4");

        assert_eq!(form.summary().total_items, 4);
        assert_eq!(form.summary().delivery_fee, dec!(40));
        assert_eq!(form.summary().recycling_fee, dec!(20));
    }

    #[test]
    fn item_text_reflects_stripped_count() {
        let mut form = BookingForm::new();

        set_count(&mut form, Category::Bases, BedSize::Double, "0x2");

        assert_eq!(form.item_text(Category::Bases, BedSize::Double), "2");
    }

    #[test]
    fn contact_and_address_events_do_not_touch_summary() {
        let mut form = BookingForm::new();
        set_count(&mut form, Category::Mattress, BedSize::King, "1");
        let before = form.summary().clone();

        form.apply(FormEvent::FullNameChanged("Ada Lovelace".to_string()));
        form.apply(FormEvent::EmailChanged("not-an-email".to_string()));
        form.apply(FormEvent::MobileChanged("0400 000 000".to_string()));
        form.apply(FormEvent::PickupAddressChanged("1 Main Rd".to_string()));

        assert_eq!(form.summary(), &before);
        assert_eq!(form.contact().full_name, "Ada Lovelace");
        assert_eq!(form.contact().email, "not-an-email");
        assert_eq!(form.contact().mobile, "0400 000 000");
        assert_eq!(form.pickup().address, "1 Main Rd");
    }

    #[test]
    fn time_slot_selection_is_stored() {
        let mut form = BookingForm::new();

        form.apply(FormEvent::TimeSlotSelected(TimeSlot::Eleven));

        assert_eq!(form.pickup().time, TimeSlot::Eleven);
    }

    #[test]
    fn opening_picker_makes_it_visible() {
        let mut form = BookingForm::new();

        form.apply(FormEvent::DatePickerOpened);

        assert!(form.is_date_picker_visible());
    }

    #[test]
    fn booking_request_bundles_current_state() {
        let mut form = BookingForm::new();
        form.apply(FormEvent::FullNameChanged("Sam".to_string()));
        form.apply(FormEvent::TimeSlotSelected(TimeSlot::Ten));
        set_count(&mut form, Category::Mattress, BedSize::Queen, "2");

        let request = form.booking_request();

        assert_eq!(request.contact.full_name, "Sam");
        assert_eq!(request.pickup.time, TimeSlot::Ten);
        assert_eq!(request.drop_off_address, "123 Static Street, City");
        assert_eq!(request.items.get(Category::Mattress, BedSize::Queen), 2);
        assert_eq!(request.quote, *form.summary());
    }
}
