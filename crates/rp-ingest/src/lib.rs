//! # rp-ingest
//!
//! I/O glue that turns user uploads into the auditor's two inputs.
//!
//! - [`guard`]: upload size ceiling, checked before anything is parsed
//! - [`roster`]: CSV / JSON roster loading with required-column checks
//! - [`bundle`]: directory, `.zip` and `.tar.gz` bundle preparation
//! - [`walk`]: recursive, name-sorted file discovery under a bundle root

pub mod bundle;
pub mod error;
pub mod guard;
pub mod roster;
pub mod walk;

pub use bundle::{PreparedBundle, prepare_bundle};
pub use error::IngestError;
pub use guard::ensure_within_limit;
pub use roster::load_roster;
pub use walk::discover_files;
