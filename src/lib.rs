//! Reader and required-attribute validator for
//! [HTTP Archive (HAR)](http://www.softwareishard.com/blog/har-12-spec/) documents.
//!
//! A HAR document is a JSON envelope around one capture session (the `log`),
//! with pages, request/response entries, and per-request attribute lists.
//! Almost everything in the schema is optional at the JSON level; whether a
//! field is *required* is a contract this crate checks after deserialization:
//!
//! ```text
//! parse(json) → Option<Har> → missing_attributes(har) → Vec<RequiredAttribute>
//!                           → check_required_attributes(har) → Result
//! read(json, check) ────────────────────────────────────────→ Option<Log>
//! ```
//!
//! The model tolerates the artifacts of lenient capture tools: lists may be
//! absent, empty, or contain `null` elements, and the validator reports each
//! missing required attribute as a dotted/indexed path such as
//! `log.entries[1].request.cookies[0]`.
//!
//! # Quick Start
//!
//! ```rust
//! let json = r#"{
//!   "log": {
//!     "version": "1.2",
//!     "creator": { "name": "tool-har", "version": "1.0" },
//!     "entries": []
//!   }
//! }"#;
//!
//! let log = har::read(json, true).expect("valid document");
//! println!("HAR version: {:?}", log.unwrap().version);
//! ```
//!
//! Callers that want the complete list of problems instead of the first one
//! use [`missing_attributes`] directly:
//!
//! ```rust
//! let har = har::parse(r#"{ "log": { "version": "1.2", "entries": [] } }"#).unwrap();
//! let missing = har::missing_attributes(har.as_ref());
//! assert_eq!(missing.len(), 1);
//! assert_eq!(missing[0].attribute, "creator");
//! ```

pub mod error;
pub mod parse;
pub mod reader;
pub mod types;
pub mod validate;

pub(crate) mod timestamp;

pub use error::*;
pub use types::*;

// Re-export entry-point functions at the crate root for convenience.
pub use parse::parse;
pub use reader::read;
pub use validate::{check_required_attributes, missing_attributes};
