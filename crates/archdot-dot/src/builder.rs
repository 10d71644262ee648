//! Mapping an architecture onto the DOT block tree.

use archdot_model::{Architecture, Environment, LogicalGroup, Service};

use crate::attrs::{EnvironmentStyles, attr_list};
use crate::dot::DotNode;

/// Statements that open every graph, before the edges.
pub const HEADER_LINES: [&str; 2] = ["rankdir=LR", "node [shape=record style=filled]"];

pub const ROOT_NAME: &str = "digraph";
pub const LEGEND_NAME: &str = "subgraph cluster_01";

/// Build the block tree for an architecture.
///
/// The root holds the header, then one `from -> to` edge per dependency, then
/// the legend cluster followed by one cluster per logical group. Ids are
/// emitted as given; nothing is resolved or reordered.
pub fn build(arch: &Architecture) -> DotNode {
    let styles = EnvironmentStyles::new(arch);

    let mut lines: Vec<String> = HEADER_LINES.iter().map(|line| line.to_string()).collect();
    lines.extend(arch.edges().map(|(from, to)| format!("{from} -> {to}")));

    let mut children = Vec::with_capacity(arch.logical_groups.len() + 1);
    children.push(legend(&arch.environments, &styles));
    children.extend(
        arch.logical_groups
            .iter()
            .enumerate()
            .map(|(index, group)| group_cluster(index, group, arch, &styles)),
    );

    DotNode::new(ROOT_NAME)
        .with_lines(lines)
        .with_children(children)
}

fn legend(environments: &[Environment], styles: &EnvironmentStyles<'_>) -> DotNode {
    let mut node = DotNode::new(LEGEND_NAME)
        .line("label=\"Legend\"")
        .line("style=filled")
        .line("color=lightgrey");

    for env in environments {
        node = node.line(format!(
            "{} [label=\"{}\" tooltip=\"{}\" {}];",
            env.id,
            env.name,
            env.description.as_deref().unwrap_or(""),
            styles.shape(&env.id)
        ));
    }
    node
}

fn group_cluster(
    index: usize,
    group: &LogicalGroup,
    arch: &Architecture,
    styles: &EnvironmentStyles<'_>,
) -> DotNode {
    let mut node = DotNode::new(format!("subgraph cluster_{index}"))
        .line(format!("label=\"{}\"", group.name));

    for svc in arch.services_in_group(&group.id) {
        node = node.line(service_statement(svc, styles));
    }
    node
}

fn service_statement(svc: &Service, styles: &EnvironmentStyles<'_>) -> String {
    let attrs = attr_list(
        &[
            ("label", Some(svc.name.as_str())),
            ("tooltip", svc.description.as_deref()),
            ("URL", svc.url.as_deref()),
        ],
        styles.shape(&svc.deployed_in),
    );
    format!("\"{}\" {};", svc.id, attrs)
}
