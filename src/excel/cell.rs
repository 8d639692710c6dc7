//! Defensive cell coercion
//!
//! Missing or malformed cells never fail a read: numbers fall back to 0.0,
//! text falls back to an empty string.

use super::layout;
use calamine::{Data, Range};

/// Coerce a cell to a number, 0.0 when empty or not numeric
pub fn number(cell: Option<&Data>) -> f64 {
    let value = match cell {
        Some(Data::Float(f)) => *f,
        Some(Data::Int(i)) => *i as f64,
        Some(Data::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Some(Data::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };

    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Coerce a cell to trimmed text, "" when empty
pub fn text(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string().trim().to_string(),
    }
}

/// Read access to one worksheet by Excel coordinates
pub struct SheetGrid<'a> {
    range: &'a Range<Data>,
}

impl<'a> SheetGrid<'a> {
    pub fn new(range: &'a Range<Data>) -> Self {
        Self { range }
    }

    fn cell(&self, col: &str, row: u32) -> Option<&'a Data> {
        self.range.get_value(layout::position(col, row))
    }

    pub fn number(&self, col: &str, row: u32) -> f64 {
        number(self.cell(col, row))
    }

    pub fn text(&self, col: &str, row: u32) -> String {
        text(self.cell(col, row))
    }
}
