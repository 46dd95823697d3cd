//! Property-based tests for header generation
//!
//! These tests check the properties the generated header must keep for any
//! node list:
//! - visit stubs appear in input order, duplicates included
//! - padding whitespace and blank lines never reach the output
//! - rendering is deterministic
//! - adding a node only adds its own entry and stub

use proptest::prelude::*;
use regex::Regex;
use visitorgen::{HeaderTemplate, NodeList};

/// Generate valid C++ node type names
fn node_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z][A-Za-z0-9]{0,12}",
        "[A-Z][a-z]{1,8}(Expr|Stmt|Node|Decl)",
        "_[A-Za-z0-9_]{1,10}",
    ]
}

fn node_list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(node_name_strategy(), 1..24)
}

/// Whitespace that trimming must remove
fn padding_strategy() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

/// Parameter types of every visit stub in a rendered header
fn stub_parameters(header: &str) -> Vec<String> {
    let stub = Regex::new(r"^virtual void visit\((.+) &node\) override \{\}$").unwrap();
    header
        .lines()
        .filter_map(|line| stub.captures(line).map(|c| c[1].to_string()))
        .collect()
}

fn render(source: &str) -> String {
    HeaderTemplate::default().render(&NodeList::parse(source))
}

proptest! {
    #[test]
    fn stubs_follow_input_order(names in node_list_strategy()) {
        let header = render(&names.join("\n"));
        prop_assert_eq!(stub_parameters(&header), names);
    }

    #[test]
    fn padding_and_blank_lines_do_not_matter(
        entries in prop::collection::vec(
            (node_name_strategy(), padding_strategy(), padding_strategy(), 0usize..3),
            1..16,
        )
    ) {
        let clean: Vec<String> = entries.iter().map(|(name, ..)| name.clone()).collect();
        let messy: String = entries
            .iter()
            .map(|(name, before, after, blanks)| {
                format!("{}{}{}\n{}", before, name, after, " \n".repeat(*blanks))
            })
            .collect();

        prop_assert_eq!(render(&messy), render(&clean.join("\n")));
    }

    #[test]
    fn rendering_is_deterministic(names in node_list_strategy()) {
        let source = names.join("\n");
        prop_assert_eq!(render(&source), render(&source));
    }

    #[test]
    fn adding_a_node_only_adds_its_lines(
        names in node_list_strategy(),
        extra in node_name_strategy(),
        position in any::<prop::sample::Index>(),
    ) {
        let at = position.index(names.len() + 1);
        let mut extended = names.clone();
        extended.insert(at, extra.clone());

        let template = HeaderTemplate::default();
        let before_nodes = NodeList::parse(&names.join("\n"));
        let after_nodes = NodeList::parse(&extended.join("\n"));
        let before = template.render(&before_nodes);
        let after = template.render(&after_nodes);

        let boilerplate = |header: &str| {
            let lines: Vec<&str> = header.lines().collect();
            let head = lines[..4].join("\n");
            let tail = lines[lines.len() - 2..].join("\n");
            (head, tail)
        };
        prop_assert_eq!(boilerplate(&before), boilerplate(&after));

        let mut entries = template.inheritance_entries(&before_nodes);
        entries.insert(at + 1, format!("public Visitor<{}>", extra));
        prop_assert_eq!(template.inheritance_entries(&after_nodes), entries);

        let mut stubs = template.visit_stubs(&before_nodes);
        stubs.insert(at, format!("virtual void visit({} &node) override {{}}", extra));
        prop_assert_eq!(template.visit_stubs(&after_nodes), stubs);
    }
}
