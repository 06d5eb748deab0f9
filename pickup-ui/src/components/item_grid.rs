use gpui::{Div, Entity, ParentElement, Styled, div};
use gpui_component::{
    StyledExt, h_flex,
    input::{Input, InputState},
    v_flex,
};
use pickup_core::{BedSize, Category};

/// Text input bound to one item-count cell.
pub struct ItemInput {
    pub category: Category,
    pub size: BedSize,
    pub state: Entity<InputState>,
}

/// Lays out the six size inputs of `category` as three rows of two.
pub fn item_grid(
    category: Category,
    inputs: &[ItemInput],
) -> Div {
    let rows = BedSize::GRID_ROWS.into_iter().map(|(left, right)| {
        h_flex()
            .gap_3()
            .child(item_cell(category, left, inputs))
            .child(item_cell(category, right, inputs))
    });

    v_flex()
        .gap_2()
        .child(div().mt_2().font_medium().child(category.title()))
        .children(rows)
}

fn item_cell(
    category: Category,
    size: BedSize,
    inputs: &[ItemInput],
) -> Div {
    let cell = v_flex().flex_1().gap_1().child(size.label());

    match find_input(inputs, category, size) {
        Some(input) => cell.child(Input::new(&input.state)),
        None => cell,
    }
}

pub fn find_input(
    inputs: &[ItemInput],
    category: Category,
    size: BedSize,
) -> Option<&ItemInput> {
    inputs
        .iter()
        .find(|input| input.category == category && input.size == size)
}
