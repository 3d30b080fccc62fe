//! Batch list editor.
//!
//! One compact input row per dimension set, a remove button per row, and an
//! add button that disappears at capacity. The list itself guarantees it
//! never empties and never exceeds the cap; this view only emits the events.

use iced::widget::{button, column, row, text, text_input, Column, Row, Space};
use iced::{Alignment, Element, Length, Padding};

use steeldraw_core::workflow::{BatchList, MAX_BATCH_ROWS};

use crate::Message;

pub fn view(list: &BatchList) -> Element<'_, Message> {
    let family = list.family();

    let mut header: Row<'_, Message> = row![].spacing(4);
    for &name in family.field_names() {
        header = header.push(
            text(short_label(name))
                .size(10)
                .width(Length::Fixed(90.0)),
        );
    }
    header = header.push(Space::new().width(Length::Fixed(32.0)));

    let mut rows: Column<'_, Message> = column![header].spacing(4);

    for (i, set) in list.rows().iter().enumerate() {
        let mut entry: Row<'_, Message> = row![].spacing(4).align_y(Alignment::Center);
        for &name in family.field_names() {
            entry = entry.push(
                text_input(short_label(name), set.field(name))
                    .on_input(move |s| Message::FieldEdited {
                        row: i,
                        field: name,
                        value: s,
                    })
                    .width(Length::Fixed(90.0))
                    .padding(3)
                    .size(10),
            );
        }
        entry = entry.push(
            button(text("x").size(10))
                .on_press(Message::RemoveRow(i))
                .padding(Padding::from([2, 8]))
                .style(button::danger),
        );
        rows = rows.push(entry);
    }

    if !list.is_full() {
        rows = rows.push(
            button(text("+ Add Item").size(11))
                .on_press(Message::AddRow)
                .padding(Padding::from([4, 10]))
                .style(button::secondary),
        );
    }

    rows = rows.push(
        text(format!("{} of {} items", list.len(), MAX_BATCH_ROWS))
            .size(10)
            .color([0.5, 0.5, 0.5]),
    );

    rows.into()
}

/// Compact column heading matching the drawing convention (H, B, tw, tf / W, H).
fn short_label(field: &str) -> &'static str {
    match field {
        "total_depth" | "height" => "H",
        "flange_width" => "B",
        "web_thickness" => "tw",
        "flange_thickness" => "tf",
        "width" => "W",
        _ => "?",
    }
}
