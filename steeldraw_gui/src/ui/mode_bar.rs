//! Single vs. batch mode toggle.

use iced::widget::checkbox;
use iced::Element;

use steeldraw_core::workflow::Mode;

use crate::Message;

pub fn view(mode: Mode) -> Element<'static, Message> {
    checkbox(mode == Mode::Batch)
        .label("Batch Generation Mode (Multi-Value)")
        .on_toggle(Message::BatchModeToggled)
        .text_size(12)
        .into()
}
