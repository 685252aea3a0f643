//! # rp-audit
//!
//! The checking core of the RP submission checker.
//!
//! - [`validator`]: compiles naming templates into anchored regexes and tests
//!   file names against them.
//! - [`index`]: attaches discovered files to roster students in one pass.
//! - [`auditor`]: folder placement checks, classification and format
//!   validation per student, producing the [`AuditReport`].
//!
//! Everything here is synchronous and free of I/O.
//!
//! [`AuditReport`]: rp_core::responses::AuditReport

pub mod auditor;
pub mod error;
pub mod index;
pub mod validator;

pub use auditor::Auditor;
pub use error::AuditError;
pub use index::FileIndex;
pub use validator::{FilenameValidator, compile_template, validate_filename};
