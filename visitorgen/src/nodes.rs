//! Node list loading
//!
//! The node list is a plain text file with one AST node type name per line.
//! Lines are trimmed and blank lines dropped; everything else is kept verbatim,
//! in file order, duplicates included.

use crate::error::{GenerateError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::Path;

/// Optionally qualified C++ identifier, e.g. `ExprNode` or `ast::ExprNode`.
static CPP_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(::)?[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("identifier pattern is valid")
});

/// Name of one AST node type. Never empty, never padded with whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeName(String);

impl NodeName {
    /// Build a name from a raw line, or `None` if the line is blank.
    pub fn from_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(NodeName(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name would be accepted as a type name by a C++ compiler.
    pub fn is_cpp_identifier(&self) -> bool {
        CPP_IDENTIFIER.is_match(&self.0)
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NodeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered node names, exactly as listed in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeList {
    names: Vec<NodeName>,
}

impl NodeList {
    /// Parse node names out of list text.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn parse(source: &str) -> Self {
        let names = source
            .split(['\n', '\r'])
            .filter_map(NodeName::from_line)
            .collect();
        NodeList { names }
    }

    /// Read and parse a node list file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| GenerateError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::parse(&source);
        log::debug!("loaded {} node names from {}", list.len(), path.display());
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeName> {
        self.names.iter()
    }

    /// The names as plain strings, in order.
    pub fn names(&self) -> Vec<&str> {
        self.names.iter().map(NodeName::as_str).collect()
    }

    /// Names that are not valid C++ identifiers. They are still emitted verbatim.
    pub fn suspicious(&self) -> Vec<&NodeName> {
        self.names
            .iter()
            .filter(|name| !name.is_cpp_identifier())
            .collect()
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = &'a NodeName;
    type IntoIter = std::slice::Iter<'a, NodeName>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<NodeName> for NodeList {
    fn from_iter<I: IntoIterator<Item = NodeName>>(iter: I) -> Self {
        NodeList {
            names: iter.into_iter().collect(),
        }
    }
}
