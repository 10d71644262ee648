//! Graph rendering for producing DOT format output.
//!
//! An [`Architecture`] is turned into a [`DotNode`] tree by [`build`] and the
//! tree is serialized by [`render`]. Services become nodes, dependencies become
//! edges, environments are listed in a legend cluster and every logical group
//! gets its own `subgraph cluster_<n>`.
//!
//! # Module Structure
//!
//! - [`dot`]: the nested-block tree and its text renderer
//! - [`attrs`]: attribute list construction and environment styling
//! - [`builder`]: mapping an architecture onto the block tree

pub mod attrs;
pub mod builder;
pub mod dot;

use archdot_model::Architecture;

pub use attrs::{EnvironmentStyles, attr_list};
pub use builder::build;
pub use dot::{DotNode, render};

/// Render an architecture to DOT text.
///
/// Pure and total: dangling group, environment or dependency ids never fail,
/// they only change what is emitted. The result has no trailing newline.
pub fn generate_dot(arch: &Architecture) -> String {
    let root = build(arch);
    tracing::debug!(
        edges = root.lines.len().saturating_sub(builder::HEADER_LINES.len()),
        clusters = root.children.len(),
        "architecture graph built"
    );
    render(&root)
}
