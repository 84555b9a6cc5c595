use crate::display_width::display_width;
use crate::store::FdStore;

#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub header: [String; COLUMNS],
    pub rows: Vec<[String; COLUMNS]>,
    /// Content width of each column in terminal columns, without padding.
    pub widths: [usize; COLUMNS],
}

pub const COLUMNS: usize = 3;

const HEADER: [&str; COLUMNS] = ["#", "Determinant", "Dependent"];

/// Lay out the store as a table, one row per dependency in store order.
pub fn compute(store: &FdStore) -> TableLayout {
    let header = HEADER.map(str::to_string);
    let rows: Vec<[String; COLUMNS]> = store
        .entries()
        .map(|(id, fd)| {
            [
                id.get().to_string(),
                fd.determinant().to_string(),
                fd.dependent().to_string(),
            ]
        })
        .collect();

    let mut widths = header.clone().map(|h| display_width(&h));
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(display_width(cell));
        }
    }

    TableLayout {
        header,
        rows,
        widths,
    }
}
