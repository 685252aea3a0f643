//! # rp-core
//!
//! Core types and error types for the RP submission checker.
//!
//! This crate provides the foundational types shared across all `rp-*` crates:
//! - Document categories and their fixed naming templates
//! - Template placeholders and the template tokenizer
//! - Roster, student and discovered-file entities
//! - The per-student submission record and its remarks
//! - Report rows and the audit report returned by `rpc check`
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod template;
