use std::fmt::Write;

use super::calculator::ResultSet;

/// Alternating row backgrounds, even rows first.
pub const ROW_TINTS: [&str; 2] = ["#f5f5f5", "#ffffff"];

const LABEL_CELL_STYLE: &str = "min-width: 300px; vertical-align: top; padding: 0.25rem;";
const VALUE_CELL_STYLE: &str = "vertical-align: top; padding: 0.25rem;";

/// Somewhere the "results" fragment can be written to or cleared from.
pub trait ResultsTarget {
    fn write(&mut self, fragment: &str);
    fn clear(&mut self);
}

/// In-memory results surface; holds the last fragment written.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HtmlFragment {
    markup: String,
}

impl HtmlFragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.markup
    }

    pub fn is_empty(&self) -> bool {
        self.markup.is_empty()
    }
}

impl ResultsTarget for HtmlFragment {
    fn write(&mut self, fragment: &str) {
        self.markup.clear();
        self.markup.push_str(fragment);
    }

    fn clear(&mut self) {
        self.markup.clear();
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the self-contained results table.
pub fn render_table(results: &ResultSet) -> String {
    let mut html = String::from("<table>\n");

    for (index, row) in results.iter().enumerate() {
        let d = row.descriptor;
        let tint = ROW_TINTS[index % 2];

        // Writing into a String cannot fail
        let _ = writeln!(html, "<tr style=\"background-color: {tint};\">");
        let _ = write!(
            html,
            "<td style=\"{LABEL_CELL_STYLE}\"><strong>{}</strong>",
            escape_html(d.description)
        );
        if let Some(sub) = d.sub_description {
            let _ = write!(html, "<br>({})", escape_html(sub));
        }
        html.push_str("</td>\n");

        let _ = write!(html, "<td style=\"{VALUE_CELL_STYLE}\">{}", escape_html(&row.formatted()));
        if let Some(explanation) = d.explanation {
            let _ = write!(html, "<p>{}</p>", escape_html(explanation));
        }
        html.push_str("</td>\n</tr>\n");
    }

    html.push_str("</table>");
    html
}
