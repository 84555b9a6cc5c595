use crate::display_width::pad_right;
use crate::table_layout::*;

pub fn render(layout: &TableLayout) -> String {
    let mut lines = Vec::with_capacity(layout.rows.len() + 4);
    lines.push(border(&layout.widths, '┌', '┬', '┐'));
    lines.push(row_line(&layout.header, &layout.widths));
    if !layout.rows.is_empty() {
        lines.push(border(&layout.widths, '├', '┼', '┤'));
        for row in &layout.rows {
            lines.push(row_line(row, &layout.widths));
        }
    }
    lines.push(border(&layout.widths, '└', '┴', '┘'));

    lines
        .iter()
        .map(|l| l.trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn border(widths: &[usize; COLUMNS], left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            line.push(mid);
        }
        line.push_str(&"─".repeat(w + 2));
    }
    line.push(right);
    line
}

fn row_line(cells: &[String; COLUMNS], widths: &[usize; COLUMNS]) -> String {
    let mut line = String::from("│");
    for (cell, w) in cells.iter().zip(widths) {
        line.push(' ');
        line.push_str(&pad_right(cell, *w));
        line.push_str(" │");
    }
    line
}
