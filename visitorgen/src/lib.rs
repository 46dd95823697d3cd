//! # visitorgen
//!
//! Generates `AllNodesVisitor.h`, a C++ visitor class that inherits one
//! `Visitor<Node>` specialization per AST node type and overrides each
//! `visit` with an empty body. Node types come from a plain text list,
//! one name per line.
//!
//! ```text
//! NodesList.txt ──► NodeList ──► HeaderTemplate::render ──► AllNodesVisitor.h
//! ```
//!
//! The [`Generator`] ties the steps together; [`NodeList`] and
//! [`HeaderTemplate`] can be used on their own.

pub mod error;
pub mod generator;
pub mod nodes;
pub mod template;

pub use error::{GenerateError, Result};
pub use generator::{Generator, Outcome, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use nodes::{NodeList, NodeName};
pub use template::{HeaderTemplate, TemplateConfig};
