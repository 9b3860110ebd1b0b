//! Block converters: structural nodes to Markdown fragments.
//!
//! Every converter reads text through [`extract_text`], which works on a
//! pruned copy of the node so the parsed document is never modified.

use crate::node::Node;
use crate::rules::Rules;
use crate::service::ExtractOptions;
use crate::utilities::{heading_level, is_cell_tag, is_list_tag, normalize_whitespace, BOLD_TAGS};

/// Placeholder for cells whose text is empty, so columns never collapse
const EMPTY_CELL: &str = " ";

/// Shared state for one conversion pass
pub(crate) struct Context<'a> {
    pub rules: &'a Rules,
    pub options: &'a ExtractOptions,
}

/// Normalized text of `node` with every noise widget removed.
pub fn extract_text(node: &Node, rules: &Rules) -> String {
    let clean = node.without(&|n| rules.is_noise(n));
    normalize_whitespace(&clean.text_content())
}

/// Convert one structural block to its Markdown fragment.
///
/// Returns `None` for blocks that produce no output (blank paragraphs,
/// tags outside the structural set).
pub(crate) fn block_to_markdown(node: &Node, ctx: &Context) -> Option<String> {
    let tag = node.tag_name();

    if let Some(level) = heading_level(tag) {
        let text = extract_text(node, ctx.rules);
        return Some(format!("\n{} {}\n", "#".repeat(level), text));
    }

    match tag {
        "p" => {
            let text = extract_text(node, ctx.rules);
            if text.is_empty() {
                return None;
            }
            if is_subtitle(node, &text, ctx) {
                Some(format!("\n{}\n", text))
            } else {
                Some(format!("{}\n", text))
            }
        }
        "ul" | "ol" => Some(format!("\n{}\n", list_to_markdown(node, 0, ctx))),
        "table" => Some(format!("\n{}\n", table_to_markdown(node, ctx))),
        _ => {
            tracing::trace!(tag, "no converter for block");
            None
        }
    }
}

/// A paragraph containing bold markup, or already starting with the strong
/// delimiter, is a section sub-title and stands apart from its neighbours.
fn is_subtitle(node: &Node, text: &str, ctx: &Context) -> bool {
    text.starts_with(ctx.options.strong_delimiter.as_str())
        || node
            .find(|n| BOLD_TAGS.iter().any(|tag| n.is_tag(tag)))
            .is_some()
}

/// Convert a list to Markdown bullets, one line per direct item.
///
/// Items are indented by two spaces per `level`. Nested lists are removed
/// from an item's own text and rendered separately one level deeper.
pub(crate) fn list_to_markdown(list: &Node, level: usize, ctx: &Context) -> String {
    let indent = "  ".repeat(level);
    let mut lines = Vec::new();

    for item in list.element_children().filter(|n| n.is_tag("li")) {
        let own = item.without(&|n| n.is_element() && is_list_tag(n.tag_name()));
        let text = extract_text(&own, ctx.rules);
        if !text.is_empty() {
            lines.push(format!("{}{} {}", indent, ctx.options.bullet_list_marker, text));
        }

        for nested in item.element_children().filter(|n| is_list_tag(n.tag_name())) {
            let block = list_to_markdown(nested, level + 1, ctx);
            if !block.is_empty() {
                lines.push(block);
            }
        }
    }

    lines.join("\n")
}

/// Convert a table to a Markdown pipe table.
///
/// The header row and its separator are only written when the table has a
/// `thead` with cells. Body rows come from the first `tbody`; rows without
/// any text are dropped.
pub(crate) fn table_to_markdown(table: &Node, ctx: &Context) -> String {
    let mut lines = Vec::new();

    if let Some(head) = table.find(|n| n.is_tag("thead")) {
        let headers = row_cells(head, ctx);
        if !headers.is_empty() {
            lines.push(pipe_row(&headers));
            lines.push(format!("|{}|", vec!["---"; headers.len()].join("|")));
        }
    }

    if let Some(body) = table.find(|n| n.is_tag("tbody")) {
        for row in body.find_all(|n| n.is_tag("tr")) {
            let cells = row_cells(row, ctx);
            if cells.iter().all(|c| c == EMPTY_CELL) {
                continue;
            }
            lines.push(pipe_row(&cells));
        }
    }

    lines.join("\n")
}

/// Text of every cell below `node`, with blanks replaced by a placeholder
fn row_cells(node: &Node, ctx: &Context) -> Vec<String> {
    node.find_all(|n| n.is_element() && is_cell_tag(n.tag_name()))
        .map(|cell| {
            let text = extract_text(cell, ctx.rules).replace('\n', " ");
            if text.is_empty() {
                EMPTY_CELL.to_string()
            } else {
                text
            }
        })
        .collect()
}

fn pipe_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}
