//! # Workflow State Machine
//!
//! The aggregate state behind the generator screen: which family and mode are
//! active, the four data slices (single + batch for each family, all retained
//! while only one is visible), the single in-flight request flag, and the
//! transient notification.
//!
//! Invariants enforced here, not in views:
//! - a batch list always holds between 1 and [`MAX_BATCH_ROWS`] rows
//! - switching family or mode never clears data
//! - only one request may be in flight at a time
//! - a new notification supersedes the previous one (its expiry is keyed by a
//!   sequence number, so a stale timer can never clear a newer message)

use std::time::Duration;

use crate::shapes::{DimensionSet, DxfPayload, ShapeFamily};

/// Upper bound on batch rows, matching the service's per-request limit.
pub const MAX_BATCH_ROWS: usize = 5;

/// How long an error notification stays on screen.
pub const ERROR_NOTIFICATION_TTL: Duration = Duration::from_secs(10);

/// How long a success notification stays on screen.
pub const SUCCESS_NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Whether one dimension set or a batch of them is edited and submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Single,
    Batch,
}

/// One value per shape family. Both are retained while only one is active,
/// so switching tabs never loses work.
#[derive(Debug, Clone, PartialEq)]
pub struct PerFamily<T> {
    pub beam: T,
    pub column: T,
}

impl<T> PerFamily<T> {
    pub fn get(&self, family: ShapeFamily) -> &T {
        match family {
            ShapeFamily::Beam => &self.beam,
            ShapeFamily::Column => &self.column,
        }
    }

    pub fn get_mut(&mut self, family: ShapeFamily) -> &mut T {
        match family {
            ShapeFamily::Beam => &mut self.beam,
            ShapeFamily::Column => &mut self.column,
        }
    }
}

/// An ordered list of same-family dimension sets, never empty and never
/// longer than [`MAX_BATCH_ROWS`].
#[derive(Debug, Clone, PartialEq)]
pub struct BatchList {
    family: ShapeFamily,
    rows: Vec<DimensionSet>,
}

impl BatchList {
    /// A list holding a single blank row.
    pub fn new(family: ShapeFamily) -> Self {
        BatchList {
            family,
            rows: vec![DimensionSet::blank(family)],
        }
    }

    pub fn family(&self) -> ShapeFamily {
        self.family
    }

    pub fn rows(&self) -> &[DimensionSet] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        false // invariant: at least one row
    }

    pub fn is_full(&self) -> bool {
        self.rows.len() >= MAX_BATCH_ROWS
    }

    /// Append one blank row. Silently ignored when the list is full.
    pub fn add_row(&mut self) {
        if !self.is_full() {
            self.rows.push(DimensionSet::blank(self.family));
        }
    }

    /// Remove the row at `index`. Removing the last remaining row leaves a
    /// single blank row instead of an empty list. The calling surface never
    /// produces an out-of-range index; one is ignored after a debug assert.
    pub fn remove_row(&mut self, index: usize) {
        debug_assert!(index < self.rows.len(), "remove_row index out of range");
        if index >= self.rows.len() {
            return;
        }
        self.rows.remove(index);
        if self.rows.is_empty() {
            self.rows.push(DimensionSet::blank(self.family));
        }
    }

    /// Rewrite one field of the row at `index`.
    pub fn set_field(&mut self, index: usize, name: &str, value: String) {
        debug_assert!(index < self.rows.len(), "set_field index out of range");
        if let Some(row) = self.rows.get_mut(index) {
            row.set_field(name, value);
        }
    }

    pub fn row_mut(&mut self, index: usize) -> &mut DimensionSet {
        &mut self.rows[index]
    }

    /// Reset to a single blank row.
    pub fn clear(&mut self) {
        *self = BatchList::new(self.family);
    }
}

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
}

/// A transient message shown at the bottom of the screen. The sequence
/// number identifies it to its own expiry timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub seq: u64,
}

impl Notification {
    /// How long this notification should stay visible.
    pub fn ttl(&self) -> Duration {
        match self.kind {
            NotificationKind::Error => ERROR_NOTIFICATION_TTL,
            NotificationKind::Success => SUCCESS_NOTIFICATION_TTL,
        }
    }
}

/// The aggregate workflow state for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowState {
    family: ShapeFamily,
    mode: Mode,
    single: PerFamily<DimensionSet>,
    batch: PerFamily<BatchList>,
    in_flight: bool,
    notification: Option<Notification>,
    notification_seq: u64,
}

impl Default for WorkflowState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowState {
    /// All-blank defaults: beam family, single mode, nothing in flight.
    pub fn new() -> Self {
        WorkflowState {
            family: ShapeFamily::Beam,
            mode: Mode::Single,
            single: PerFamily {
                beam: DimensionSet::blank(ShapeFamily::Beam),
                column: DimensionSet::blank(ShapeFamily::Column),
            },
            batch: PerFamily {
                beam: BatchList::new(ShapeFamily::Beam),
                column: BatchList::new(ShapeFamily::Column),
            },
            in_flight: false,
            notification: None,
            notification_seq: 0,
        }
    }

    pub fn family(&self) -> ShapeFamily {
        self.family
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    // ------------------------------------------------------------------
    // Mode/tab selection - pure transitions, never touch data
    // ------------------------------------------------------------------

    pub fn set_family(&mut self, family: ShapeFamily) {
        self.family = family;
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    // ------------------------------------------------------------------
    // Data access
    // ------------------------------------------------------------------

    pub fn active_single(&self) -> &DimensionSet {
        self.single.get(self.family)
    }

    pub fn active_batch(&self) -> &BatchList {
        self.batch.get(self.family)
    }

    pub fn single_for(&self, family: ShapeFamily) -> &DimensionSet {
        self.single.get(family)
    }

    pub fn batch_for(&self, family: ShapeFamily) -> &BatchList {
        self.batch.get(family)
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    /// Rewrite one field of the active slice. In single mode `row` is
    /// ignored; in batch mode it addresses the row being edited.
    pub fn set_field(&mut self, row: usize, name: &str, value: String) {
        match self.mode {
            Mode::Single => self.single.get_mut(self.family).set_field(name, value),
            Mode::Batch => self.batch.get_mut(self.family).set_field(row, name, value),
        }
    }

    pub fn add_row(&mut self) {
        self.batch.get_mut(self.family).add_row();
    }

    pub fn remove_row(&mut self, index: usize) {
        self.batch.get_mut(self.family).remove_row(index);
    }

    /// Blank out both slices of one family, e.g. after a successful generate.
    pub fn reset_family(&mut self, family: ShapeFamily) {
        *self.single.get_mut(family) = DimensionSet::blank(family);
        self.batch.get_mut(family).clear();
    }

    /// Apply a successful parse response: switch to the decoded family,
    /// force single mode, and overwrite that family's single set with the
    /// decoded values converted back to text.
    pub fn apply_parsed(&mut self, payload: &DxfPayload) {
        let family = payload.family();
        self.family = family;
        self.mode = Mode::Single;
        *self.single.get_mut(family) = payload.to_dimensions();
    }

    // ------------------------------------------------------------------
    // Request lifecycle
    // ------------------------------------------------------------------

    /// Claim the in-flight slot. Returns false (and changes nothing) when a
    /// request is already running. Clears any pending notification so a new
    /// outcome never races a stale message.
    pub fn begin_request(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.notification = None;
        true
    }

    /// Release the in-flight slot. Called on success and failure alike.
    pub fn finish_request(&mut self) {
        self.in_flight = false;
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    pub fn notify_error(&mut self, message: impl Into<String>) -> Notification {
        self.push_notification(NotificationKind::Error, message.into())
    }

    pub fn notify_success(&mut self, message: impl Into<String>) -> Notification {
        self.push_notification(NotificationKind::Success, message.into())
    }

    fn push_notification(&mut self, kind: NotificationKind, message: String) -> Notification {
        self.notification_seq += 1;
        let notification = Notification {
            kind,
            message,
            seq: self.notification_seq,
        };
        self.notification = Some(notification.clone());
        notification
    }

    /// Clear the notification identified by `seq`. A stale timer (for a
    /// superseded notification) is a no-op.
    pub fn expire_notification(&mut self, seq: u64) {
        if self.notification.as_ref().is_some_and(|n| n.seq == seq) {
            self.notification = None;
        }
    }
}
