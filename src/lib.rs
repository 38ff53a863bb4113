//! Single-pass parser for nested `group <id>` / `end` tree files with
//! checkbox-style mod entries.
//!
//! One call to [`parser::parse_tree`] scans a stream, records every group
//! (with its parent and root group) and every mod (with its owning group)
//! in a [`registry::Registry`], and can echo the stream to a sink with
//! close markers optionally rewritten to `end <id>`. Registries from
//! independent streams combine with [`registry::Registry::merge`].

pub mod error;
pub mod parser;
pub mod registry;

pub use error::ParseError;
pub use parser::{parse_tree, ParseOptions};
pub use registry::{Group, Mod, Registry};
