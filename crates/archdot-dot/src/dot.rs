//! Nested-block tree and its text renderer.
//!
//! A [`DotNode`] is a block header, the raw statements that belong directly to
//! it, and nested blocks. Rendering produces
//!
//! ```text
//! <name> {
//!   <line>
//!   <child name> {
//!     <child line>
//!   }
//! }
//! ```
//!
//! with two spaces of indentation per nesting level.

/// A block in the DOT output: `name { lines... children... }`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DotNode {
    pub name: String,
    pub lines: Vec<String>,
    pub children: Vec<DotNode>,
}

impl DotNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_lines(mut self, lines: Vec<String>) -> Self {
        self.lines = lines;
        self
    }

    pub fn with_children(mut self, children: Vec<DotNode>) -> Self {
        self.children = children;
        self
    }

    /// Append a single statement.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Append a nested block.
    pub fn child(mut self, child: DotNode) -> Self {
        self.children.push(child);
        self
    }
}

/// Write indentation to output.
fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// Write one statement; embedded line breaks are indented like separate lines.
fn write_line(output: &mut String, line: &str, level: usize) {
    for part in line.split('\n') {
        if !part.is_empty() {
            write_indent(output, level);
            output.push_str(part);
        }
        output.push('\n');
    }
}

fn render_block(output: &mut String, node: &DotNode, level: usize) {
    write_indent(output, level);
    output.push_str(&node.name);
    output.push_str(" {\n");

    // An empty body is one empty line, and so is the gap before children
    // when there are no statements of our own.
    if node.lines.is_empty() {
        output.push('\n');
    }

    for line in &node.lines {
        write_line(output, line, level + 1);
    }

    for child in &node.children {
        render_block(output, child, level + 1);
        output.push('\n');
    }

    write_indent(output, level);
    output.push('}');
}

/// Serialize a block tree to text. No trailing newline is added.
pub fn render(node: &DotNode) -> String {
    let mut output = String::with_capacity(256);
    render_block(&mut output, node, 0);
    output
}
