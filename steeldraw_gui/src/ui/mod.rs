//! UI module for the SteelDraw GUI
//!
//! One module per screen region, each exposing a `view` function that reads
//! the relevant slice of state and emits `Message`s:
//!
//! - `header` - application title strip
//! - `tabs` - Beam/Column family tabs plus the Upload DXF button
//! - `mode_bar` - single vs. batch mode toggle
//! - `single_form` - labeled dimension inputs for the active family
//! - `batch_list` - the 1..=5 row batch editor with add/remove controls
//! - `notification_bar` - transient error/success strip at the bottom

pub mod batch_list;
pub mod header;
pub mod mode_bar;
pub mod notification_bar;
pub mod single_form;
pub mod tabs;
