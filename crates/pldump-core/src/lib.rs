//! # pldump-core
//!
//! Classification and pretty-printing for property-list documents.
//!
//! A property list holds nested mappings, sequences, and typed scalars
//! (booleans, integers, reals, text, binary blobs, timestamps). This crate
//! takes a deserialized plist tree, resolves every node to one of a closed
//! set of [`Kind`]s, and renders an indented, line-oriented dump annotating
//! each node with its kind. Deserialization itself is delegated to the
//! [`plist`] crate.
//!
//! ## Quick start
//!
//! ```rust
//! use plist::{Dictionary, Value};
//! use pldump_core::{render, PrintOptions};
//!
//! let mut root = Dictionary::new();
//! root.insert("name".into(), Value::String("Ada".into()));
//!
//! let dump = render(&root, &PrintOptions::default());
//! assert!(dump.contains("key: name, type: Text"));
//! assert!(dump.contains("value: Ada, type: Text"));
//! ```
//!
//! ## Modules
//!
//! - [`kind`] — the closed [`Kind`] set and the total [`classify`] function
//! - [`printer`] — recursive tree walk producing the indented dump
//! - [`resolve`] — file-name-to-path resolution and root loading
//! - [`error`] — error types for load failures

pub mod error;
pub mod kind;
pub mod printer;
pub mod resolve;

pub use error::DumpError;
pub use kind::{classify, node_type_name, raw_tag, Kind};
pub use printer::{render, PrintOptions};
pub use resolve::{load, Resolver};
