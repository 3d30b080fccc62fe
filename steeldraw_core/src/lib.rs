//! # steeldraw_core - Workflow Core for the SteelDraw DXF Client
//!
//! `steeldraw_core` holds everything about the generation/parsing workflow that
//! does not touch a window or a socket: the shape parameter store, batch list
//! management, the validation gate, wire payload construction, endpoint mapping,
//! and output file naming. The GUI crate drives this state machine and performs
//! the actual HTTP calls.
//!
//! ## Design Philosophy
//!
//! - **Two-stage values**: dimensions are raw text while edited, parsed into
//!   numbers only at submission time
//! - **Central invariants**: batch bounds (1..=5 rows, never empty) and the
//!   single in-flight request live in one place, not scattered across views
//! - **Synchronous and deterministic**: no I/O here, so every rule is unit-testable
//!
//! ## Modules
//!
//! - [`shapes`] - Shape families, edit-time dimension sets, submit-time payloads
//! - [`workflow`] - The aggregate workflow state machine and notifications
//! - [`validation`] - The positive-decimal gate applied before any request
//! - [`api`] - Endpoint map and wire types for the generation service
//! - [`delivery`] - Output file naming for delivered drawings and archives
//! - [`config`] - Service base URL resolution
//! - [`errors`] - Structured error types

pub mod api;
pub mod config;
pub mod delivery;
pub mod errors;
pub mod shapes;
pub mod validation;
pub mod workflow;

// Re-export commonly used types at crate root for convenience
pub use errors::{RequestError, ValidationError};
pub use shapes::{DimensionSet, DxfPayload, ShapeFamily};
pub use workflow::{Mode, Notification, NotificationKind, WorkflowState};
