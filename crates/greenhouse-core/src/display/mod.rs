//! Display formatting functions and result types.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and operation results are formatted through newtype wrappers so the same
//! data can be rendered differently depending on context. All output is
//! markdown, rendered in the terminal by the CLI.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display Wrapper │    │   Formatted     │
//! │ (Plant, DueTask)│───▶│    Types        │───▶│    Markdown     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers (Plants, Schedule, Profiles, Categories)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use greenhouse_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Plant 1 deleted");
//! assert_eq!(status.to_string(), "Success: Plant 1 deleted\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Categories, Plants, Profiles, Schedule};
pub use datetime::{ActivityTime, LocalDateTime};
pub use models::PlantSummary;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
