//! Plain-text painter used by the CLI.

use std::fmt::Write;

use super::{ListView, Row, Tone};

impl ListView {
    /// Render under a heading, one line per row plus indented body/tags
    pub fn to_text(&self, heading: &str) -> String {
        let mut out = format!("== {heading} ==\n");
        match self {
            ListView::Loading => out.push_str("  (loading)\n"),
            ListView::Empty { placeholder } => {
                let _ = writeln!(out, "  {placeholder}");
            }
            ListView::Rows(rows) => {
                for row in rows {
                    write_row(&mut out, row);
                }
            }
        }
        out
    }
}

fn write_row(out: &mut String, row: &Row) {
    let check = if row.checked { "[x]" } else { "[ ]" };
    let marker = match row.tone {
        Tone::Highlighted => "*",
        Tone::Dimmed | Tone::Normal => " ",
    };

    let _ = write!(out, "{check}{marker}{}  ({})", row.label, row.key.id);
    if !row.status.is_empty() {
        let _ = write!(out, "  {}", row.status.to_uppercase());
    }
    if let Some(badge) = &row.badge {
        let _ = write!(out, "  <{badge}>");
    }
    if !row.actions.is_empty() {
        let labels: Vec<&str> = row.actions.iter().map(|a| a.label()).collect();
        let _ = write!(out, "  [{}]", labels.join("|"));
    }
    out.push('\n');

    if let Some(body) = row.body.as_deref().filter(|b| !b.is_empty()) {
        let _ = writeln!(out, "      {body}");
    }
    if !row.tags.is_empty() {
        let _ = writeln!(out, "      {}", row.tags.join(" "));
    }
}
