//! Read the node list, render the header, write it out.

use crate::error::{GenerateError, Result};
use crate::nodes::NodeList;
use crate::template::{HeaderTemplate, TemplateConfig};
use std::fs;
use std::path::{Path, PathBuf};
use visitorgen_config::VisitorGenConfig;

pub const DEFAULT_INPUT: &str = "NodesList.txt";
pub const DEFAULT_OUTPUT: &str = "AllNodesVisitor.h";

/// What a generator run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The header was written with one stub per node.
    Written { path: PathBuf, node_count: usize },
    /// The node list had no names; nothing was written.
    Skipped { input: PathBuf },
}

#[derive(Debug, Clone)]
pub struct Generator {
    input: PathBuf,
    output: PathBuf,
    template: HeaderTemplate,
}

impl Generator {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Generator {
            input: input.into(),
            output: output.into(),
            template: HeaderTemplate::default(),
        }
    }

    pub fn from_config(config: &VisitorGenConfig) -> Self {
        Generator {
            input: config.paths.input.clone(),
            output: config.paths.output.clone(),
            template: HeaderTemplate::new(TemplateConfig::from(config)),
        }
    }

    pub fn with_template(mut self, template: HeaderTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Load the node list and render it, or `None` if the list is empty.
    pub fn render_only(&self) -> Result<Option<String>> {
        let nodes = NodeList::from_path(&self.input)?;
        if nodes.is_empty() {
            self.warn_empty();
            return Ok(None);
        }
        warn_suspicious(&nodes);
        Ok(Some(self.template.render(&nodes)))
    }

    /// Generate the header file.
    ///
    /// An empty node list leaves the output untouched and yields
    /// [`Outcome::Skipped`]. The output is truncated and rewritten otherwise;
    /// an interrupted write can leave it partial.
    pub fn run(&self) -> Result<Outcome> {
        let nodes = NodeList::from_path(&self.input)?;
        if nodes.is_empty() {
            self.warn_empty();
            return Ok(Outcome::Skipped {
                input: self.input.clone(),
            });
        }
        warn_suspicious(&nodes);

        let header = self.template.render(&nodes);
        fs::write(&self.output, header).map_err(|source| GenerateError::WriteOutput {
            path: self.output.clone(),
            source,
        })?;
        log::info!(
            "wrote {} visit stubs to {}",
            nodes.len(),
            self.output.display()
        );

        Ok(Outcome::Written {
            path: self.output.clone(),
            node_count: nodes.len(),
        })
    }

    fn warn_empty(&self) {
        log::warn!(
            "{} is empty or cannot be properly read",
            self.input.display()
        );
    }
}

impl Default for Generator {
    fn default() -> Self {
        Generator::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}

fn warn_suspicious(nodes: &NodeList) {
    for name in nodes.suspicious() {
        log::warn!("node name `{}` is not a valid C++ identifier", name);
    }
}
