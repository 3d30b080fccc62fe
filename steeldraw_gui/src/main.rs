//! # SteelDraw GUI Application
//!
//! Desktop client for the DXF generation service. The user describes I-beam
//! or column cross-sections (one at a time or as a batch of up to five),
//! generates drawing files through the remote service, or uploads an existing
//! drawing to have its dimensions extracted back into the form.
//!
//! All state lives in `steeldraw_core::WorkflowState`; this crate supplies the
//! Iced message loop, the HTTP calls, and the file dialogs.

use iced::widget::{button, column, container, scrollable, text};
use iced::{Element, Length, Padding, Task};

use steeldraw_core::api::ParsedDimensions;
use steeldraw_core::delivery::DeliveredFile;
use steeldraw_core::errors::{RequestError, ValidationError};
use steeldraw_core::shapes::ShapeFamily;
use steeldraw_core::validation;
use steeldraw_core::workflow::{Mode, Notification, WorkflowState};

mod api;
mod download;
mod ui;

use download::PickedFile;

pub fn main() -> iced::Result {
    init_logging();
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .run()
}

fn init_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[derive(Debug, Clone)]
pub enum Message {
    // Tab/mode selection
    FamilySelected(ShapeFamily),
    BatchModeToggled(bool),

    // Editing
    FieldEdited {
        row: usize,
        field: &'static str,
        value: String,
    },
    AddRow,
    RemoveRow(usize),

    // Generate workflow
    GeneratePressed,
    GenerateFinished {
        family: ShapeFamily,
        result: Result<DeliveredFile, RequestError>,
    },
    SaveFinished(Result<Option<String>, String>),

    // Parse (upload) workflow
    UploadPressed,
    DrawingPicked(Option<PickedFile>),
    ParseFinished {
        file_name: String,
        result: Result<ParsedDimensions, RequestError>,
    },

    // Notifications
    NotificationExpired(u64),
}

pub struct App {
    state: WorkflowState,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        (
            App {
                state: WorkflowState::new(),
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        "SteelDraw - Section DXF Generator".to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FamilySelected(family) => {
                self.state.set_family(family);
                Task::none()
            }
            Message::BatchModeToggled(batch) => {
                self.state
                    .set_mode(if batch { Mode::Batch } else { Mode::Single });
                Task::none()
            }
            Message::FieldEdited { row, field, value } => {
                self.state.set_field(row, field, value);
                Task::none()
            }
            Message::AddRow => {
                self.state.add_row();
                Task::none()
            }
            Message::RemoveRow(index) => {
                self.state.remove_row(index);
                Task::none()
            }
            Message::GeneratePressed => self.start_generate(),
            Message::GenerateFinished { family, result } => self.finish_generate(family, result),
            Message::SaveFinished(result) => match result {
                Ok(Some(path)) => {
                    tracing::info!(path = %path, "drawing saved");
                    Task::none()
                }
                // Dialog dismissed: the user chose not to keep the file.
                Ok(None) => Task::none(),
                Err(reason) => {
                    tracing::warn!(error = %reason, "save failed");
                    let notification = self
                        .state
                        .notify_error(format!("Failed to save file: {reason}"));
                    expire_later(notification)
                }
            },
            Message::UploadPressed => {
                if self.state.in_flight() {
                    return Task::none();
                }
                Task::perform(download::pick_drawing(), Message::DrawingPicked)
            }
            Message::DrawingPicked(None) => Task::none(),
            Message::DrawingPicked(Some(picked)) => {
                // A generate request may have started while the dialog was open.
                if !self.state.begin_request() {
                    return Task::none();
                }
                tracing::info!(file = %picked.name, "parse request");
                let file_name = picked.name.clone();
                Task::perform(api::parse_dxf(picked), move |result| {
                    Message::ParseFinished {
                        file_name: file_name.clone(),
                        result,
                    }
                })
            }
            Message::ParseFinished { file_name, result } => {
                self.state.finish_request();
                match result {
                    Ok(parsed) => {
                        let family = parsed.family();
                        self.state.apply_parsed(&parsed.into_payload());
                        tracing::info!(family = family.tag(), file = %file_name, "parse succeeded");
                        let notification = self.state.notify_success(format!(
                            "Successfully parsed {} dimensions from {}",
                            family.display_name(),
                            file_name
                        ));
                        expire_later(notification)
                    }
                    Err(err) => {
                        tracing::warn!(file = %file_name, error = %err, "parse failed");
                        let notification = self
                            .state
                            .notify_error(format!("Failed to parse DXF: {err}"));
                        expire_later(notification)
                    }
                }
            }
            Message::NotificationExpired(seq) => {
                self.state.expire_notification(seq);
                Task::none()
            }
        }
    }

    fn start_generate(&mut self) -> Task<Message> {
        if self.state.in_flight() {
            return Task::none();
        }
        let family = self.state.family();
        match self.state.mode() {
            Mode::Single => {
                let payload = match validation::single_payload(self.state.active_single()) {
                    Ok(payload) => payload,
                    Err(err) => return self.report_validation(err),
                };
                if !self.state.begin_request() {
                    return Task::none();
                }
                tracing::info!(family = family.tag(), mode = "single", "generate request");
                Task::perform(api::generate_single(family, payload), move |result| {
                    Message::GenerateFinished { family, result }
                })
            }
            Mode::Batch => {
                let items = match validation::batch_payloads(self.state.active_batch()) {
                    Ok(items) => items,
                    Err(err) => return self.report_validation(err),
                };
                if !self.state.begin_request() {
                    return Task::none();
                }
                tracing::info!(
                    family = family.tag(),
                    mode = "batch",
                    items = items.len(),
                    "generate request"
                );
                Task::perform(api::generate_batch(family, items), move |result| {
                    Message::GenerateFinished { family, result }
                })
            }
        }
    }

    fn finish_generate(
        &mut self,
        family: ShapeFamily,
        result: Result<DeliveredFile, RequestError>,
    ) -> Task<Message> {
        self.state.finish_request();
        match result {
            Ok(file) => {
                tracing::info!(file = %file.file_name, "generate succeeded");
                self.state.reset_family(family);
                let notification = self.state.notify_success("DXF generated successfully");
                Task::batch([
                    Task::perform(download::save(file), Message::SaveFinished),
                    expire_later(notification),
                ])
            }
            Err(err) => {
                tracing::warn!(family = family.tag(), error = %err, "generate failed");
                let notification = self.state.notify_error(format!(
                    "Failed to generate {} DXF: {err}",
                    family.display_name()
                ));
                expire_later(notification)
            }
        }
    }

    fn report_validation(&mut self, err: ValidationError) -> Task<Message> {
        tracing::debug!(error = %err, "validation blocked submission");
        let notification = self.state.notify_error(err.to_string());
        expire_later(notification)
    }

    fn view(&self) -> Element<'_, Message> {
        let state = &self.state;

        let form: Element<'_, Message> = match state.mode() {
            Mode::Single => ui::single_form::view(state.active_single()),
            Mode::Batch => ui::batch_list::view(state.active_batch()),
        };

        let generate_label = if state.in_flight() {
            "Generating..."
        } else {
            "Generate DXF"
        };
        let generate_button = button(text(generate_label).size(13))
            .on_press_maybe((!state.in_flight()).then_some(Message::GeneratePressed))
            .padding(Padding::from([6, 14]))
            .style(button::primary);

        let content = column![
            ui::header::view(),
            ui::tabs::view(state.family(), state.in_flight()),
            ui::mode_bar::view(state.mode()),
            form,
            generate_button,
            ui::notification_bar::view(state.notification()),
        ]
        .spacing(12)
        .padding(16)
        .max_width(760.0);

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(8)
            .into()
    }
}

/// Schedule the auto-clear for a notification. The sequence number keeps a
/// superseded notification's timer from clearing a newer message.
fn expire_later(notification: Notification) -> Task<Message> {
    let seq = notification.seq;
    let ttl = notification.ttl();
    Task::perform(async move { tokio::time::sleep(ttl).await }, move |_| {
        Message::NotificationExpired(seq)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use steeldraw_core::shapes::{BeamPayload, ColumnPayload, DxfPayload};
    use steeldraw_core::workflow::NotificationKind;

    fn app() -> App {
        App {
            state: WorkflowState::new(),
        }
    }

    fn edit(app: &mut App, row: usize, field: &'static str, value: &str) {
        let _ = app.update(Message::FieldEdited {
            row,
            field,
            value: value.to_string(),
        });
    }

    fn fill_single_beam(app: &mut App) {
        edit(app, 0, "total_depth", "300");
        edit(app, 0, "flange_width", "150");
        edit(app, 0, "web_thickness", "8");
        edit(app, 0, "flange_thickness", "12");
    }

    #[test]
    fn test_generate_sets_in_flight_and_blocks_resubmit() {
        let mut app = app();
        fill_single_beam(&mut app);
        let _ = app.update(Message::GeneratePressed);
        assert!(app.state.in_flight());

        // Second submit while in flight is ignored.
        let _ = app.update(Message::GeneratePressed);
        assert!(app.state.in_flight());
        assert!(app.state.notification().is_none());
    }

    #[test]
    fn test_validation_failure_blocks_without_in_flight() {
        let mut app = app();
        edit(&mut app, 0, "total_depth", "300");
        let _ = app.update(Message::GeneratePressed);
        assert!(!app.state.in_flight());
        let notification = app.state.notification().unwrap();
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(
            notification.message,
            "Please enter a valid positive number for flange width"
        );
    }

    #[test]
    fn test_batch_validation_names_row() {
        let mut app = app();
        let _ = app.update(Message::FamilySelected(ShapeFamily::Column));
        let _ = app.update(Message::BatchModeToggled(true));
        edit(&mut app, 0, "width", "100");
        edit(&mut app, 0, "height", "100");
        let _ = app.update(Message::AddRow);
        edit(&mut app, 1, "width", "0");
        edit(&mut app, 1, "height", "50");

        let _ = app.update(Message::GeneratePressed);
        assert!(!app.state.in_flight());
        assert_eq!(
            app.state.notification().unwrap().message,
            "Please enter a valid positive number for all fields in Row 2"
        );
    }

    #[test]
    fn test_generate_success_resets_active_family_only() {
        let mut app = app();
        fill_single_beam(&mut app);
        let _ = app.update(Message::FamilySelected(ShapeFamily::Column));
        edit(&mut app, 0, "width", "200");
        let _ = app.update(Message::FamilySelected(ShapeFamily::Beam));
        let _ = app.update(Message::GeneratePressed);

        let file = DeliveredFile::single(
            &DxfPayload::Beam(BeamPayload {
                total_depth: 300.0,
                flange_width: 150.0,
                web_thickness: 8.0,
                flange_thickness: 12.0,
            }),
            vec![1, 2, 3],
        );
        let _ = app.update(Message::GenerateFinished {
            family: ShapeFamily::Beam,
            result: Ok(file),
        });

        assert!(!app.state.in_flight());
        assert_eq!(app.state.active_single().field("total_depth"), "");
        assert_eq!(
            app.state.single_for(ShapeFamily::Column).field("width"),
            "200"
        );
        let notification = app.state.notification().unwrap();
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.message, "DXF generated successfully");
    }

    #[test]
    fn test_generate_failure_keeps_data_and_reports_family() {
        let mut app = app();
        fill_single_beam(&mut app);
        let _ = app.update(Message::GeneratePressed);
        let _ = app.update(Message::GenerateFinished {
            family: ShapeFamily::Beam,
            result: Err(RequestError::Service {
                detail: "Web thickness exceeds flange width".to_string(),
            }),
        });

        assert!(!app.state.in_flight());
        assert_eq!(app.state.active_single().field("total_depth"), "300");
        assert_eq!(
            app.state.notification().unwrap().message,
            "Failed to generate Beam DXF: Web thickness exceeds flange width"
        );
    }

    #[test]
    fn test_parse_success_switches_family_and_mode() {
        let mut app = app();
        let _ = app.update(Message::BatchModeToggled(true));
        let _ = app.update(Message::DrawingPicked(Some(PickedFile {
            name: "col.dxf".to_string(),
            bytes: vec![0],
        })));
        assert!(app.state.in_flight());

        let parsed: ParsedDimensions =
            serde_json::from_str(r#"{"type": "column", "data": {"width": 200, "height": 300}}"#)
                .unwrap();
        let _ = app.update(Message::ParseFinished {
            file_name: "col.dxf".to_string(),
            result: Ok(parsed),
        });

        assert!(!app.state.in_flight());
        assert_eq!(app.state.family(), ShapeFamily::Column);
        assert_eq!(app.state.mode(), Mode::Single);
        assert_eq!(app.state.active_single().field("width"), "200");
        assert_eq!(app.state.active_single().field("height"), "300");
        assert_eq!(
            app.state.notification().unwrap().message,
            "Successfully parsed Column dimensions from col.dxf"
        );
    }

    #[test]
    fn test_parse_failure_wording() {
        let mut app = app();
        let _ = app.update(Message::DrawingPicked(Some(PickedFile {
            name: "bad.dxf".to_string(),
            bytes: vec![0],
        })));
        let _ = app.update(Message::ParseFinished {
            file_name: "bad.dxf".to_string(),
            result: Err(RequestError::decode("Unexpected parse response: truncated")),
        });
        assert_eq!(
            app.state.notification().unwrap().message,
            "Failed to parse DXF: Unexpected parse response: truncated"
        );
    }

    #[test]
    fn test_upload_rejected_while_generate_in_flight() {
        let mut app = app();
        fill_single_beam(&mut app);
        let _ = app.update(Message::GeneratePressed);
        assert!(app.state.in_flight());

        // The picked file arrives after a generate claimed the slot.
        let _ = app.update(Message::DrawingPicked(Some(PickedFile {
            name: "col.dxf".to_string(),
            bytes: vec![0],
        })));
        // Still the generate request; a parse completion must not be pending.
        assert!(app.state.in_flight());
        let _ = app.update(Message::GenerateFinished {
            family: ShapeFamily::Beam,
            result: Ok(DeliveredFile::single(
                &DxfPayload::Column(ColumnPayload {
                    width: 1.0,
                    height: 1.0,
                }),
                Vec::new(),
            )),
        });
        assert!(!app.state.in_flight());
    }

    #[test]
    fn test_stale_notification_timer_is_ignored() {
        let mut app = app();
        edit(&mut app, 0, "total_depth", "-1");
        let _ = app.update(Message::GeneratePressed);
        let first_seq = app.state.notification().unwrap().seq;

        edit(&mut app, 0, "total_depth", "");
        let _ = app.update(Message::GeneratePressed);
        let second_seq = app.state.notification().unwrap().seq;
        assert_ne!(first_seq, second_seq);

        let _ = app.update(Message::NotificationExpired(first_seq));
        assert!(app.state.notification().is_some());
        let _ = app.update(Message::NotificationExpired(second_seq));
        assert!(app.state.notification().is_none());
    }
}
