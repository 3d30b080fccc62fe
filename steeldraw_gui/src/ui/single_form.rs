//! Single-mode dimension editors.
//!
//! Inputs hold raw text while the user types; nothing is parsed or rejected
//! here. The validation gate runs at submit time.

use iced::widget::{column, row, text, text_input};
use iced::{Alignment, Element, Length};

use steeldraw_core::shapes::DimensionSet;

use crate::Message;

pub fn view(set: &DimensionSet) -> Element<'_, Message> {
    let form = match set {
        DimensionSet::Beam(d) => column![
            labeled_input("Total Depth (H):", "H", &d.total_depth, "total_depth"),
            labeled_input("Flange Width (B):", "B", &d.flange_width, "flange_width"),
            labeled_input("Web Thickness (tw):", "tw", &d.web_thickness, "web_thickness"),
            labeled_input(
                "Flange Thickness (tf):",
                "tf",
                &d.flange_thickness,
                "flange_thickness"
            ),
        ],
        DimensionSet::Column(d) => column![
            labeled_input("Width (W):", "W", &d.width, "width"),
            labeled_input("Height (H):", "H", &d.height, "height"),
        ],
    };
    form.spacing(6).into()
}

fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    field: &'static str,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(150.0)),
        text_input(placeholder, value)
            .on_input(move |s| Message::FieldEdited {
                row: 0,
                field,
                value: s,
            })
            .width(Length::Fixed(120.0))
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .spacing(6)
    .into()
}
