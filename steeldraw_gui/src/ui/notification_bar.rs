//! Transient notification strip.
//!
//! Shows the current error or success message. Expiry is driven by the
//! update loop's timers, not here; an absent notification keeps the row
//! height stable so the form does not jump.

use iced::widget::{container, text, Space};
use iced::{Element, Length, Padding};

use steeldraw_core::workflow::{Notification, NotificationKind};

use crate::Message;

pub fn view(notification: Option<&Notification>) -> Element<'_, Message> {
    let Some(notification) = notification else {
        return Space::new().height(Length::Fixed(26.0)).into();
    };

    let color = match notification.kind {
        NotificationKind::Error => [0.80, 0.20, 0.20],
        NotificationKind::Success => [0.10, 0.55, 0.25],
    };

    container(text(&notification.message).size(11).color(color))
        .padding(Padding::from([4, 8]))
        .style(container::bordered_box)
        .into()
}
