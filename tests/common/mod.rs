//! Shared workbook fixtures for integration tests
//!
//! Workbooks are built with rust_xlsxwriter using the same Excel coordinates
//! the extractor reads (1-based rows, column letters).

#![allow(dead_code)]

use pyt_kpi::excel::layout::column_index;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[derive(Debug, Clone)]
pub enum Cell {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct SheetFixture {
    pub name: String,
    pub cells: Vec<(String, u32, Cell)>,
}

impl SheetFixture {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cells: Vec::new(),
        }
    }

    pub fn number(mut self, col: &str, row: u32, value: f64) -> Self {
        self.cells.push((col.to_string(), row, Cell::Number(value)));
        self
    }

    pub fn text(mut self, col: &str, row: u32, value: &str) -> Self {
        self.cells
            .push((col.to_string(), row, Cell::Text(value.to_string())));
        self
    }

    /// Fill the meter columns (D..K) of a row
    pub fn meters(self, row: u32, shift_a: f64, shift_b: f64, total: f64, plan: f64) -> Self {
        self.number("D", row, shift_a)
            .number("E", row, shift_b)
            .number("F", row, total)
            .number("G", row, plan)
    }

    pub fn compliance(self, row: u32, a: f64, b: f64, daily: f64) -> Self {
        self.number("H", row, a)
            .number("I", row, b)
            .number("K", row, daily)
    }
}

#[derive(Debug, Clone, Default)]
pub struct WorkbookBuilder {
    sheets: Vec<SheetFixture>,
}

impl WorkbookBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheet(mut self, sheet: SheetFixture) -> Self {
        self.sheets.push(sheet);
        self
    }

    fn build(&self) -> Workbook {
        let mut workbook = Workbook::new();
        for fixture in &self.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&fixture.name).unwrap();
            for (col, row, cell) in &fixture.cells {
                let r = row - 1;
                let c = column_index(col) as u16;
                match cell {
                    Cell::Number(n) => {
                        worksheet.write_number(r, c, *n).unwrap();
                    }
                    Cell::Text(s) => {
                        worksheet.write_string(r, c, s.as_str()).unwrap();
                    }
                }
            }
        }
        workbook
    }

    pub fn save(&self, path: &Path) {
        self.build().save(path).unwrap();
    }

    pub fn to_buffer(&self) -> Vec<u8> {
        self.build().save_to_buffer().unwrap()
    }
}

/// A day with F09 holding two units and a read (not summed) total row.
///
/// - F09 rows 17/18: PF03 10.0 m, PF07 15.0 m, plan 12.0 each
/// - F09 row 20: a stray TOTAL row inside the equipment range
/// - F09 total row 25: 25.0 / 24.0
/// - F12 row 6: PF21 (with statuses); F10 and F11 have no units
/// - Day total row 34: 100.0 / 120.0 (deliberately not the sum of phases)
/// - ROC rows 38..41 and aggregate row 42
pub fn standard_day(name: &str) -> SheetFixture {
    SheetFixture::new(name)
        .text("B", 4, "Fase")
        .text("C", 4, "Equipo")
        // F12
        .text("B", 6, "F12")
        .text("C", 6, "PF21")
        .meters(6, 20.0, 18.0, 38.0, 40.0)
        .compliance(6, 1.0, 0.9, 0.95)
        .text("M", 6, " Operativa ")
        .text("N", 6, "Mantención")
        .meters(9, 20.0, 18.0, 38.0, 40.0)
        .compliance(9, 1.0, 0.9, 0.95)
        // F10: empty section, only the totals row
        .text("C", 15, "TOTAL")
        .meters(15, 0.0, 0.0, 0.0, 30.0)
        // F09
        .text("C", 17, "PF03")
        .meters(17, 4.0, 6.0, 10.0, 12.0)
        .compliance(17, 0.8, 0.9, 0.873)
        .text("C", 18, "PF07")
        .meters(18, 7.5, 7.5, 15.0, 12.0)
        .text("H", 18, "#N/A")
        .text("C", 20, "TOTAL")
        .number("F", 20, 999.0)
        .text("C", 25, "TOTAL")
        .meters(25, 11.5, 13.5, 25.0, 24.0)
        .compliance(25, 0.95, 1.1, 1.0417)
        // Day total
        .text("C", 34, "TOTAL METROS")
        .meters(34, 40.0, 60.0, 100.0, 120.0)
        .compliance(34, 0.8, 0.86, 0.8333)
        // ROC
        .number("F", 38, 1.5)
        .number("F", 39, 2.5)
        .number("F", 40, 3.5)
        .number("F", 41, 4.5)
        .number("C", 42, 15.0)
        .number("D", 42, 5.0)
        .number("E", 42, 7.0)
        .number("F", 42, 12.0)
}

/// Reference sheet that must never be read as a day
pub fn reference_sheet(name: &str) -> SheetFixture {
    SheetFixture::new(name)
        .text("A", 1, "Equipos")
        .text("C", 17, "NOT A UNIT")
}

/// Workbook with "16-01 ", "15-01", "Datos " and "Patios", saved in a temp dir
pub fn standard_workbook() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("kpi.xlsx");

    WorkbookBuilder::new()
        .sheet(reference_sheet("Datos "))
        .sheet(standard_day("16-01 "))
        .sheet(standard_day("15-01").number("F", 34, 90.0))
        .sheet(reference_sheet("Patios"))
        .save(&path);

    (temp_dir, path)
}

/// Read a BOM-prefixed semicolon CSV into header + rows
pub fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let bytes = std::fs::read(path).unwrap();
    assert!(
        bytes.starts_with(b"\xEF\xBB\xBF"),
        "CSV should start with a UTF-8 BOM"
    );

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(&bytes[3..]);

    let headers = reader
        .headers()
        .unwrap()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(|s| s.to_string()).collect())
        .collect();

    (headers, rows)
}
