//! Application header strip.

use iced::widget::{column, text};
use iced::Element;

use crate::Message;

pub fn view() -> Element<'static, Message> {
    column![
        text("SteelDraw").size(28),
        text("Structural Section DXF Generator")
            .size(12)
            .color([0.5, 0.5, 0.5]),
    ]
    .spacing(2)
    .into()
}
