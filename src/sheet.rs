use std::borrow::Cow;

/// A single cell as decoded from a workbook, typed at read time instead of
/// being probed at use time.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Render the cell the way a spreadsheet displays it: text as-is, numbers
    /// without a trailing `.0` when they are integral, nothing when empty.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Cell::Empty => Cow::Borrowed(""),
            Cell::Text(text) => Cow::Borrowed(text),
            Cell::Number(value) => Cow::Owned(render_number(*value)),
        }
    }
}

fn render_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// The first sheet of a decoded workbook. Rows are padded to the header
/// width, so a column index valid for `headers` is valid for every row.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}
