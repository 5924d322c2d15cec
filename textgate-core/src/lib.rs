//! Bounded-memory, sectioned evaluation of document content
//!
//! This crate tests document content against conditions without ever
//! holding the whole document in memory. Content is read through a
//! boundary-aware [`TextReader`] in sections of at most a configured number
//! of characters; each section is handed to a predicate and evaluation stops
//! at the first section that matches.
//!
//! # Example
//!
//! ```rust
//! use textgate_core::evaluate;
//! use std::io::Cursor;
//!
//! let content = Cursor::new("First paragraph.\n\nSecond paragraph mentions rust.");
//! let matched = evaluate(content, 20, |section, _index| Ok(section.contains("rust")))
//!     .unwrap();
//! assert!(matched);
//! ```
//!
//! Conditions that also need the document's metadata implement
//! [`StringCondition`] and are wrapped in [`Sectioned`]:
//!
//! ```rust
//! use textgate_core::{DocumentCondition, HandlerDoc, ParseState, Sectioned, TextCondition};
//! use std::io::Cursor;
//!
//! let condition = Sectioned::new(TextCondition::ignore_case("needle").unwrap());
//! let mut doc = HandlerDoc::new("file:///haystack.txt");
//! let mut content = Cursor::new("hay hay NEEDLE hay");
//! assert!(condition
//!     .test_document(&mut doc, Some(&mut content), ParseState::Post)
//!     .unwrap());
//! ```

#![warn(missing_docs)]

pub mod condition;
pub mod config;
pub mod document;
pub mod error;
pub mod evaluator;
pub mod reader;
pub mod source;

// Re-export key types
pub use condition::{DocumentCondition, Sectioned, StringCondition, TextCondition};
pub use config::{EvaluatorConfig, EvaluatorConfigBuilder};
pub use document::{HandlerDoc, Metadata, ParseState};
pub use error::{EvalError, Result};
pub use evaluator::{evaluate, SectionedEvaluator};
pub use reader::{TextReader, DEFAULT_MAX_READ_SIZE};
pub use source::ChunkSource;
