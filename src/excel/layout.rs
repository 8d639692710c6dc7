//! Fixed cell layout of a daily KPI sheet
//!
//! Rows are the 1-based numbers shown in Excel, columns are Excel letters.
//! Every coordinate the extractor reads is declared here.

use crate::types::Phase;

/// Equipment / total row columns
pub const COL_NAME: &str = "C";
pub const COL_SHIFT_A: &str = "D";
pub const COL_SHIFT_B: &str = "E";
pub const COL_TOTAL: &str = "F";
pub const COL_PLAN: &str = "G";
pub const COL_COMPLIANCE_A: &str = "H";
pub const COL_COMPLIANCE_B: &str = "I";
pub const COL_COMPLIANCE_DAILY: &str = "K";
pub const COL_STATUS_A: &str = "M";
pub const COL_STATUS_B: &str = "N";

/// Name-cell text marking a total row inside a phase range
pub const TOTAL_MARKER: &str = "TOTAL";

/// One phase section: equipment rows are `first_row..totals_row`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSection {
    pub phase: Phase,
    pub first_row: u32,
    pub totals_row: u32,
}

impl PhaseSection {
    pub fn equipment_rows(&self) -> std::ops::Range<u32> {
        self.first_row..self.totals_row
    }
}

/// Phase sections in sheet order
pub const PHASE_SECTIONS: [PhaseSection; 4] = [
    PhaseSection {
        phase: Phase::F12,
        first_row: 6,
        totals_row: 9,
    },
    PhaseSection {
        phase: Phase::F10,
        first_row: 11,
        totals_row: 15,
    },
    PhaseSection {
        phase: Phase::F09,
        first_row: 17,
        totals_row: 25,
    },
    PhaseSection {
        phase: Phase::F11,
        first_row: 27,
        totals_row: 31,
    },
];

/// TOTAL METROS row (all phases)
pub const DAY_TOTAL_ROW: u32 = 34;

/// ROC meters per phase, read from `COL_TOTAL`
pub const ROC_PHASE_ROWS: [(Phase, u32); 4] = [
    (Phase::F09, 38),
    (Phase::F10, 39),
    (Phase::F11, 40),
    (Phase::F12, 41),
];

/// PLAN DIARIO ROC row: plan in C, shifts in D/E, total in F
pub const ROC_TOTAL_ROW: u32 = 42;
pub const COL_ROC_PLAN: &str = "C";

/// Convert an Excel column letter to a 0-based index (A→0, Z→25, AA→26)
pub fn column_index(letters: &str) -> u32 {
    letters
        .bytes()
        .filter(|b| b.is_ascii_alphabetic())
        .fold(0u32, |acc, b| {
            acc * 26 + u32::from(b.to_ascii_uppercase() - b'A') + 1
        })
        .saturating_sub(1)
}

/// Absolute 0-based (row, col) position of an Excel reference like `F34`
pub fn position(col: &str, row: u32) -> (u32, u32) {
    (row.saturating_sub(1), column_index(col))
}
