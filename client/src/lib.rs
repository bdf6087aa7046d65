//! Synchronous client core for the employee record service.
//!
//! # Overview
//! Builds `Request` values and parses `Response` values without touching the
//! network (host-does-IO pattern). The caller executes the actual HTTP
//! round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `EmployeeApi` is stateless and holds only `base_url`.
//! - `App` layers the frontend state on top: the collection snapshot, the
//!   form draft, and the create-vs-update mode switch.
//! - Each operation is split into `build_*` (produces request) and
//!   `apply_*`/`parse_*` (consumes response), so the I/O boundary is explicit.
//! - DTOs are defined independently from the server crate; the wire schema
//!   is the contract.

pub mod api;
pub mod app;
pub mod error;
pub mod http;
pub mod types;

pub use api::EmployeeApi;
pub use app::{App, Draft, Field};
pub use error::{ApiError, DraftError, SubmitError};
pub use http::{Method, Request, Response};
pub use types::{Employee, EmployeePayload};
