//! Entity structs for the checker's domain objects.
//!
//! Entities that appear in reports derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON output and schema validation.

mod file;
mod record;
mod roster;

pub use file::{DiscoveredFile, HIDDEN_FILE_MARKER};
pub use record::{Remark, SubmissionRecord};
pub use roster::{Roster, Student};
