//! Shape family tabs and the upload control.
//!
//! Switching tabs is a pure selection change; each family keeps its own
//! single and batch data, so nothing entered here is ever lost by flipping
//! between Beam and Column.

use iced::widget::{button, row, text, Row, Space};
use iced::{Alignment, Element, Length, Padding};

use steeldraw_core::shapes::ShapeFamily;

use crate::Message;

pub fn view(active: ShapeFamily, in_flight: bool) -> Element<'static, Message> {
    let mut tab_row: Row<'static, Message> = row![].spacing(4).align_y(Alignment::Center);

    for family in ShapeFamily::ALL {
        let style = if family == active {
            button::primary
        } else {
            button::secondary
        };
        tab_row = tab_row.push(
            button(text(family.display_name()).size(12))
                .on_press(Message::FamilySelected(family))
                .padding(Padding::from([5, 14]))
                .style(style),
        );
    }

    tab_row = tab_row.push(Space::new().width(Length::Fill));
    tab_row = tab_row.push(
        button(text("Upload DXF").size(11))
            .on_press_maybe((!in_flight).then_some(Message::UploadPressed))
            .padding(Padding::from([4, 10]))
            .style(button::secondary),
    );

    tab_row.into()
}
