//! Read-only introspection of filesystem path metadata.
//!
//! The crate exposes three value objects, each wrapping an immutable path
//! and an error-handling mode:
//!
//! * [`PathInfo`] — lexical path components (parent, base name, stem,
//!   extension), existence and file-type predicates, canonicalization, and
//!   file size. Entry point for the other two views.
//! * [`PermissionInfo`] — readable/writable/executable predicates, raw
//!   permission bits, octal and `rwxr-xr-x` style renderings, and owner and
//!   group ids.
//! * [`TimestampInfo`] — last access, last modification, and last metadata
//!   change times.
//!
//! Every fallible accessor issues a single fresh OS query; nothing is cached
//! across calls. Failures are handled according to the [`ErrorMode`] chosen
//! at construction: [`ErrorMode::Silent`] surfaces a failed query as an
//! absent value, while [`ErrorMode::Raising`] surfaces it as an [`Error`]
//! carrying the OS diagnostic.

mod error;
mod pathinfo;
mod permissions;
mod query;
mod sys;
mod times;
mod trace_categories;

pub use error::Error;
pub use pathinfo::PathInfo;
pub use permissions::PermissionInfo;
pub use query::ErrorMode;
pub use times::TimestampInfo;
