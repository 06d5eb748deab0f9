use gpui::{
    AppContext, ClickEvent, Context, Entity, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Subscription, Window, div, px,
};
use gpui_component::{
    StyledExt,
    button::Button,
    date_picker::{DatePicker, DatePickerEvent, DatePickerState},
    h_flex,
    input::{Input, InputEvent, InputState},
    select::{Select, SelectEvent, SelectState},
    v_flex,
};
use pickup_core::{BedSize, BookingForm, Category, FormEvent, TimeSlot};
use tracing::{info, warn};

use crate::assets::LogoSource;
use crate::components::item_grid::{ItemInput, item_grid};
use crate::components::{logo_element, make_button, make_section};
use crate::utils::{default_time_slot_row, picked_date, time_slot_labels, today};

/// The booking form screen. Owns the [`BookingForm`] and the widgets bound
/// to it; every widget event is turned into a [`FormEvent`].
pub struct BookingScreen {
    form: BookingForm,
    logo: LogoSource,

    // Contact details
    full_name: Entity<InputState>,
    email: Entity<InputState>,
    mobile: Entity<InputState>,

    // Pickup & drop off
    pickup_address: Entity<InputState>,
    pickup_date: Entity<DatePickerState>,
    pickup_time: Entity<SelectState<Vec<SharedString>>>,

    // Items to recycle, one input per (category, size)
    item_inputs: Vec<ItemInput>,

    _subscriptions: Vec<Subscription>,
}

impl BookingScreen {
    pub fn new(
        logo: LogoSource,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let form = BookingForm::new();
        let mut subscriptions = Vec::new();

        let full_name = make_text_input("Full Name", window, cx);
        let email = make_text_input("Email", window, cx);
        let mobile = make_text_input("Mobile", window, cx);
        let pickup_address = make_text_input("Pickup Address", window, cx);

        subscriptions.push(subscribe_text(&full_name, FormEvent::FullNameChanged, window, cx));
        subscriptions.push(subscribe_text(&email, FormEvent::EmailChanged, window, cx));
        subscriptions.push(subscribe_text(&mobile, FormEvent::MobileChanged, window, cx));
        subscriptions.push(subscribe_text(
            &pickup_address,
            FormEvent::PickupAddressChanged,
            window,
            cx,
        ));

        // The picker keeps its last value, so seeding it once covers every
        // later opening.
        let initial_date = form.pickup().picker_initial_date(today());
        let pickup_date = cx.new(|picker_cx| {
            let mut picker = DatePickerState::new(window, picker_cx);
            picker.set_date(initial_date, window, picker_cx);
            picker
        });
        subscriptions.push(cx.subscribe_in(
            &pickup_date,
            window,
            |this, _, event: &DatePickerEvent, _, cx| {
                if !this.form.is_date_picker_visible() {
                    return;
                }
                if let DatePickerEvent::Change(date) = event {
                    this.apply(FormEvent::DatePickerClosed(picked_date(date)), cx);
                }
            },
        ));

        let pickup_time = cx.new(|select_cx| {
            SelectState::new(
                time_slot_labels(),
                Some(default_time_slot_row()),
                window,
                select_cx,
            )
        });
        subscriptions.push(cx.subscribe_in(
            &pickup_time,
            window,
            |this, _, event: &SelectEvent<Vec<SharedString>>, _, cx| {
                if let SelectEvent::Confirm(Some(value)) = event {
                    match TimeSlot::try_from(value.as_ref()) {
                        Ok(slot) => this.apply(FormEvent::TimeSlotSelected(slot), cx),
                        Err(error) => warn!(%error, "ignoring time slot selection"),
                    }
                }
            },
        ));

        let mut item_inputs = Vec::with_capacity(Category::COUNT * BedSize::COUNT);
        for category in Category::ALL {
            for size in BedSize::ALL {
                let initial = form.item_text(category, size);
                let state = cx.new(|input_cx| {
                    InputState::new(window, input_cx).default_value(initial)
                });
                subscriptions.push(subscribe_item(&state, category, size, window, cx));
                item_inputs.push(ItemInput {
                    category,
                    size,
                    state,
                });
            }
        }

        Self {
            form,
            logo,
            full_name,
            email,
            mobile,
            pickup_address,
            pickup_date,
            pickup_time,
            item_inputs,
            _subscriptions: subscriptions,
        }
    }

    fn apply(
        &mut self,
        event: FormEvent,
        cx: &mut Context<Self>,
    ) {
        self.form.apply(event);
        cx.notify();
    }

    /// "Book & Continue" has no booking service behind it yet; the bundled
    /// request is logged and nothing is sent.
    fn book_and_continue(&self) {
        let request = self.form.booking_request();
        info!(?request, "booking request assembled; no booking service configured");
    }
}

impl Render for BookingScreen {
    fn render(
        &mut self,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let pickup = self.form.pickup();

        let date_button = Button::new("pickup-date")
            .w_full()
            .label(pickup.date_label())
            .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                this.apply(FormEvent::DatePickerOpened, cx);
            }));

        let date_picker_row = self.form.is_date_picker_visible().then(|| {
            h_flex()
                .gap_2()
                .child(div().flex_1().child(DatePicker::new(&self.pickup_date)))
                .child(
                    Button::new("pickup-date-cancel")
                        .label("Cancel")
                        .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                            this.apply(FormEvent::DatePickerClosed(None), cx);
                        })),
                )
        });

        let summary_rows = self.form.summary().lines().map(|(label, value)| {
            h_flex()
                .gap_2()
                .child(div().font_medium().child(format!("{label}:")))
                .child(value)
        });

        div()
            .id("booking-scroll")
            .size_full()
            .overflow_y_scroll()
            .p_5()
            .child(
                v_flex()
                    .gap_5()
                    .child(
                        h_flex()
                            .justify_center()
                            .child(logo_element(&self.logo, px(120.))),
                    )
                    .child(
                        make_section("Contact Details")
                            .child(Input::new(&self.full_name))
                            .child(Input::new(&self.email))
                            .child(Input::new(&self.mobile)),
                    )
                    .child(
                        make_section("Pickup & Drop Off")
                            .child(Input::new(&self.pickup_address))
                            .child(date_button)
                            .children(date_picker_row)
                            .child(Select::new(&self.pickup_time).w_full())
                            .child(
                                div()
                                    .text_sm()
                                    .mt_1()
                                    .child(format!(
                                        "Drop-off Address: {}",
                                        pickup.drop_off_address()
                                    )),
                            ),
                    )
                    .child(
                        make_section("Items to Recycle").children(
                            Category::ALL.map(|category| item_grid(category, &self.item_inputs)),
                        ),
                    )
                    .child(make_section("Quote Summary").children(summary_rows))
                    .child(make_button(
                        "book-and-continue",
                        "Book & Continue",
                        cx.listener(|this, _: &ClickEvent, _, _| this.book_and_continue()),
                    )),
            )
    }
}

fn make_text_input(
    placeholder: impl Into<SharedString>,
    window: &mut Window,
    cx: &mut Context<BookingScreen>,
) -> Entity<InputState> {
    let placeholder = placeholder.into();
    cx.new(|input_cx| InputState::new(window, input_cx).placeholder(placeholder))
}

/// Forwards every edit of a free-text input as `to_event(text)`.
fn subscribe_text(
    input: &Entity<InputState>,
    to_event: fn(String) -> FormEvent,
    window: &mut Window,
    cx: &mut Context<BookingScreen>,
) -> Subscription {
    cx.subscribe_in(
        input,
        window,
        move |this, state: &Entity<InputState>, event: &InputEvent, _, cx| {
            if let InputEvent::Change = event {
                let text = state.read(cx).value().to_string();
                this.apply(to_event(text), cx);
            }
        },
    )
}

/// Forwards edits of an item-count input, then rewrites the input to the
/// stored count so stripped characters disappear from view.
fn subscribe_item(
    input: &Entity<InputState>,
    category: Category,
    size: BedSize,
    window: &mut Window,
    cx: &mut Context<BookingScreen>,
) -> Subscription {
    cx.subscribe_in(
        input,
        window,
        move |this, state: &Entity<InputState>, event: &InputEvent, window, cx| {
            if let InputEvent::Change = event {
                let raw_text = state.read(cx).value().to_string();
                this.apply(
                    FormEvent::ItemCountChanged {
                        category,
                        size,
                        raw_text: raw_text.clone(),
                    },
                    cx,
                );

                let canonical = this.form.item_text(category, size);
                if canonical != raw_text {
                    state.update(cx, |input, input_cx| {
                        input.set_value(canonical, window, input_cx)
                    });
                }
            }
        },
    )
}
