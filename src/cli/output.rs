// Output formatting utilities
//
// Renderers for a resolved matrix: terminal table, per-cell details and an
// HTML table. All of them only read the Matrix; none of them resolve or sort.

use crate::matrix::Matrix;
use crate::models::{DisplayClass, ResolvedCell};
use std::io::IsTerminal;

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

const ANSI_FG_GREEN: &str = "\x1b[32m";
const ANSI_FG_YELLOW: &str = "\x1b[33m";
const ANSI_FG_CYAN: &str = "\x1b[36m";
const ANSI_FG_BRIGHT_BLACK: &str = "\x1b[90m";

/// Tooltip shown for a cell with no stages
pub const NOT_SUPPORTED: &str = "Not supported.";

const FEATURE_HEADER: &str = "Feature";
const MIN_FEATURE_WIDTH: usize = 10;
const COLUMN_GAP: &str = "  ";

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width dynamically
///
/// Uses the `terminal_size` crate, with fallback to the COLUMNS environment
/// variable and a sensible default.
pub fn get_terminal_width() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        if w > 0 {
            return w as usize;
        }
    }

    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 && width < 10000 {
                return width;
            }
        }
    }

    120
}

fn bold_if(text: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", ANSI_BOLD, text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

/// Foreground color for a display class
fn class_color(class: DisplayClass) -> &'static str {
    match class {
        DisplayClass::Supported => ANSI_FG_GREEN,
        DisplayClass::Preview => ANSI_FG_YELLOW,
        DisplayClass::PrivatePreview => ANSI_FG_CYAN,
        DisplayClass::Na => ANSI_FG_BRIGHT_BLACK,
    }
}

/// Text shown inside a table cell
pub fn cell_text(cell: &ResolvedCell) -> String {
    match cell.display_class {
        DisplayClass::Na => "-".to_string(),
        _ if cell.version.trim().is_empty() => cell.display_class.as_str().to_string(),
        _ => cell.version.clone(),
    }
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Pad to `width` characters, truncating with an ellipsis when longer
fn fit(text: &str, width: usize) -> String {
    let len = display_width(text);
    if len <= width {
        format!("{}{}", text, " ".repeat(width - len))
    } else if width == 0 {
        String::new()
    } else {
        let kept: String = text.chars().take(width - 1).collect();
        format!("{}…", kept)
    }
}

/// Options for the terminal table
#[derive(Debug, Clone, Copy)]
pub struct TableOptions {
    pub color: bool,
    pub width: usize,
}

/// Format the matrix as an aligned text table.
///
/// The feature column shrinks (down to a minimum) when the table would not fit
/// the terminal width; IDE columns are never truncated.
pub fn format_matrix_table(matrix: &Matrix, options: TableOptions) -> String {
    if matrix.rows.is_empty() {
        return "No features.\n".to_string();
    }

    let texts: Vec<Vec<String>> = matrix
        .rows
        .iter()
        .map(|row| row.cells.iter().map(cell_text).collect())
        .collect();

    let column_widths: Vec<usize> = matrix
        .columns
        .iter()
        .enumerate()
        .map(|(idx, ide)| {
            texts
                .iter()
                .map(|row| display_width(&row[idx]))
                .chain(std::iter::once(display_width(ide)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let longest_name = matrix
        .rows
        .iter()
        .map(|row| display_width(&row.feature_name))
        .chain(std::iter::once(FEATURE_HEADER.len()))
        .max()
        .unwrap_or(0);
    let ide_total: usize = column_widths.iter().map(|w| w + COLUMN_GAP.len()).sum();
    let available = options.width.saturating_sub(ide_total);
    let feature_width = longest_name.min(available.max(MIN_FEATURE_WIDTH));

    let mut out = String::new();

    let mut header = fit(FEATURE_HEADER, feature_width);
    for (ide, width) in matrix.columns.iter().zip(&column_widths) {
        header.push_str(COLUMN_GAP);
        header.push_str(&fit(ide, *width));
    }
    out.push_str(&bold_if(header.trim_end(), options.color));
    out.push('\n');

    let rule_len = feature_width + ide_total;
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');

    for (row, row_texts) in matrix.rows.iter().zip(&texts) {
        let mut line = fit(&row.feature_name, feature_width);
        for ((cell, text), width) in row.cells.iter().zip(row_texts).zip(&column_widths) {
            line.push_str(COLUMN_GAP);
            let padded = fit(text, *width);
            if options.color {
                line.push_str(&format!("{}{}{}", class_color(cell.display_class), padded, ANSI_RESET));
            } else {
                line.push_str(&padded);
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

/// One-line legend explaining the cell colors/classes
pub fn format_legend(color: bool) -> String {
    [
        DisplayClass::Supported,
        DisplayClass::Preview,
        DisplayClass::PrivatePreview,
        DisplayClass::Na,
    ]
    .iter()
    .map(|class| {
        let name = class.as_str().replace('_', " ");
        if color {
            format!("{}{}{}", class_color(*class), name, ANSI_RESET)
        } else {
            name
        }
    })
    .collect::<Vec<_>>()
    .join("  ")
}

/// Plain-text tooltip: one "LABEL: version (Month YYYY)" line per stage
pub fn tooltip_text(cell: &ResolvedCell) -> String {
    if cell.tooltip.is_empty() {
        return NOT_SUPPORTED.to_string();
    }
    cell.tooltip
        .iter()
        .map(|line| format!("{}: {} ({})", line.label, line.version, line.formatted_date))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Tooltip markup for the HTML renderer
pub fn tooltip_html(cell: &ResolvedCell) -> String {
    if cell.tooltip.is_empty() {
        return NOT_SUPPORTED.to_string();
    }
    let items: String = cell
        .tooltip
        .iter()
        .map(|line| {
            format!(
                "<li><strong>{}</strong>: {} ({})</li>",
                html_escape(&line.label),
                html_escape(&line.version),
                html_escape(&line.formatted_date)
            )
        })
        .collect();
    format!("<ul>{}</ul>", items)
}

/// Escape text for HTML element content and double-quoted attributes
pub fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Every supported cell with its tooltip lines and link, grouped by feature
pub fn format_details(matrix: &Matrix) -> String {
    let mut out = String::new();
    for row in &matrix.rows {
        let supported: Vec<(&str, &ResolvedCell)> = matrix
            .columns
            .iter()
            .zip(&row.cells)
            .filter(|(_, cell)| cell.is_supported_at_all())
            .collect();
        if supported.is_empty() {
            continue;
        }

        out.push_str(&row.feature_name);
        out.push('\n');
        for (ide, cell) in supported {
            out.push_str(&format!("  {}\n", ide));
            for line in tooltip_text(cell).lines() {
                out.push_str(&format!("    {}\n", line));
            }
            if let Some(url) = cell.link() {
                out.push_str(&format!("    {}\n", url));
            }
        }
    }
    out
}

/// Render the matrix as an HTML table.
///
/// Cells carry their display class and a `data-tippy-content` tooltip. Cells
/// with a link carry it in `data-url` and open it in a new tab when clicked.
pub fn format_matrix_html(matrix: &Matrix) -> String {
    let mut out = String::new();
    out.push_str("<table class=\"feature-matrix\">\n");
    out.push_str("  <thead>\n    <tr>\n      <th class=\"border p-2\">Feature</th>\n");
    for ide in matrix.columns.iter() {
        out.push_str(&format!("      <th class=\"border p-2\">{}</th>\n", html_escape(ide)));
    }
    out.push_str("    </tr>\n  </thead>\n  <tbody id=\"table-body\">\n");

    for row in &matrix.rows {
        out.push_str("    <tr>\n");
        out.push_str(&format!(
            "      <td class=\"border p-2 font-medium\">{}</td>\n",
            html_escape(&row.feature_name)
        ));
        for cell in &row.cells {
            let mut classes = format!("border p-2 {}", cell.display_class.as_str());
            // URL only ever appears HTML-escaped inside data-url
            let mut onclick = String::new();
            if let Some(url) = cell.link() {
                classes.push_str(" clickable");
                onclick = format!(
                    " data-url=\"{}\" onclick=\"window.open(this.dataset.url, '_blank')\"",
                    html_escape(url)
                );
            }
            out.push_str(&format!(
                "      <td class=\"{}\" data-tippy-content=\"{}\"{}>{}</td>\n",
                classes,
                html_escape(&tooltip_html(cell)),
                onclick,
                html_escape(&cell.version)
            ));
        }
        out.push_str("    </tr>\n");
    }

    out.push_str("  </tbody>\n</table>\n");
    out
}
