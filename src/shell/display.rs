use std::io::Write;

use anyhow::Result;
use yansi::Paint;

use crate::render::DisplayNode;

/// Draw a display tree as indented text: label above its children,
/// children top-to-bottom in source order.
pub fn write_tree(out: &mut dyn Write, node: &DisplayNode) -> Result<()> {
    writeln!(out, "{}", painted_label(node))?;
    write_children(out, &node.children, "")?;
    Ok(())
}

fn write_children(out: &mut dyn Write, children: &[DisplayNode], prefix: &str) -> Result<()> {
    for (index, child) in children.iter().enumerate() {
        let last = index + 1 == children.len();
        let connector = if last { "└── " } else { "├── " };
        writeln!(out, "{prefix}{connector}{}", painted_label(child))?;

        let extension = if last { "    " } else { "│   " };
        write_children(out, &child.children, &format!("{prefix}{extension}"))?;
    }
    Ok(())
}

fn painted_label(node: &DisplayNode) -> String {
    let label = node.label_text();
    if node.children.is_empty() {
        label.green().to_string()
    } else {
        label.cyan().bold().to_string()
    }
}
