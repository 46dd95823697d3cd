//! Header template
//!
//! Renders the all-nodes visitor header. The layout is fixed; only the
//! inheritance list and the visit stubs depend on the node list:
//!
//! ```text
//! #pragma once
//! #include "ASTVisitor.h"
//! #include "ASTNodes.h"
//! namespace Ryntra::Compiler {
//! class AllNodesVisitor : public IVisitor,
//! public Visitor<ExprNode>,
//! public Visitor<StmtNode>
//! {
//! public:
//! virtual ~AllNodesVisitor() = default;
//! virtual void visit(ExprNode &node) override {}
//! virtual void visit(StmtNode &node) override {}
//! };
//! }
//! ```

use crate::nodes::NodeList;
use visitorgen_config::{ClassConfig, HeaderConfig, VisitorGenConfig};

/// Static parts of the generated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateConfig {
    pub includes: Vec<String>,
    pub namespace: String,
    pub class_name: String,
    pub marker_interface: String,
    pub visitor_interface: String,
    pub visit_method: String,
}

impl TemplateConfig {
    pub fn from_sections(header: &HeaderConfig, class: &ClassConfig) -> Self {
        TemplateConfig {
            includes: header.includes.clone(),
            namespace: header.namespace.clone(),
            class_name: class.name.clone(),
            marker_interface: class.marker_interface.clone(),
            visitor_interface: class.visitor_interface.clone(),
            visit_method: class.visit_method.clone(),
        }
    }
}

impl From<&VisitorGenConfig> for TemplateConfig {
    fn from(config: &VisitorGenConfig) -> Self {
        Self::from_sections(&config.header, &config.class)
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        TemplateConfig {
            includes: vec!["ASTVisitor.h".to_string(), "ASTNodes.h".to_string()],
            namespace: "Ryntra::Compiler".to_string(),
            class_name: "AllNodesVisitor".to_string(),
            marker_interface: "IVisitor".to_string(),
            visitor_interface: "Visitor".to_string(),
            visit_method: "visit".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeaderTemplate {
    config: TemplateConfig,
}

impl HeaderTemplate {
    pub fn new(config: TemplateConfig) -> Self {
        HeaderTemplate { config }
    }

    pub fn config(&self) -> &TemplateConfig {
        &self.config
    }

    /// Base class entries: the marker interface first, then one
    /// specialization per node in list order.
    pub fn inheritance_entries(&self, nodes: &NodeList) -> Vec<String> {
        let marker = format!("public {}", self.config.marker_interface);
        std::iter::once(marker)
            .chain(
                nodes
                    .iter()
                    .map(|name| format!("public {}<{}>", self.config.visitor_interface, name)),
            )
            .collect()
    }

    /// One empty override per node, in list order.
    pub fn visit_stubs(&self, nodes: &NodeList) -> Vec<String> {
        nodes
            .iter()
            .map(|name| {
                format!(
                    "virtual void {}({} &node) override {{}}",
                    self.config.visit_method, name
                )
            })
            .collect()
    }

    /// Render the complete header text, ending with a newline.
    pub fn render(&self, nodes: &NodeList) -> String {
        let config = &self.config;
        let mut out = String::new();

        out.push_str("#pragma once\n");
        for include in &config.includes {
            out.push_str(&format!("#include \"{}\"\n", include));
        }
        out.push_str(&format!("namespace {} {{\n", config.namespace));
        out.push_str(&format!(
            "class {} : {}\n",
            config.class_name,
            self.inheritance_entries(nodes).join(",\n")
        ));
        out.push_str("{\npublic:\n");
        out.push_str(&format!("virtual ~{}() = default;\n", config.class_name));
        out.push_str(&self.visit_stubs(nodes).join("\n"));
        out.push('\n');
        out.push_str("};\n}\n");

        out
    }
}
