//! KPI workbook reader - daily sheets → DayRecord

use super::cell::SheetGrid;
use super::layout::{self, PhaseSection, PHASE_SECTIONS};
use crate::error::{KpiError, KpiResult};
use crate::types::{
    DayCollection, DayRecord, EquipmentRecord, Meters, Phase, PhaseRecord, RocSummary,
};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Sheets that hold reference data instead of a day
pub const DEFAULT_EXCLUDED_SHEETS: [&str; 2] = ["Datos", "Patios"];

/// Result of loading every date sheet
#[derive(Debug, Clone, Default)]
pub struct WorkbookData {
    pub days: DayCollection,
    /// Trimmed date sheet names, in workbook order
    pub date_sheets: Vec<String>,
}

impl WorkbookData {
    pub fn sheet_count(&self) -> usize {
        self.date_sheets.len()
    }
}

/// Result of loading an explicit list of dates
#[derive(Debug, Clone, Default)]
pub struct DateSelection {
    pub days: DayCollection,
    /// Requested dates with no matching sheet
    pub missing: Vec<String>,
}

/// An open KPI workbook. The file handle is released when this is dropped.
pub struct KpiWorkbook<RS: Read + Seek> {
    workbook: Xlsx<RS>,
}

impl KpiWorkbook<BufReader<File>> {
    /// Open a workbook from disk
    pub fn open<P: AsRef<Path>>(path: P) -> KpiResult<Self> {
        let path = path.as_ref();
        let workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
            KpiError::Workbook(format!("Failed to open '{}': {}", path.display(), e))
        })?;
        Ok(Self { workbook })
    }
}

impl<RS: Read + Seek> KpiWorkbook<RS> {
    /// Open a workbook from any seekable reader (e.g. an in-memory buffer)
    pub fn from_reader(reader: RS) -> KpiResult<Self> {
        let workbook = Xlsx::new(reader)?;
        Ok(Self { workbook })
    }

    /// Raw sheet names, untrimmed
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    /// Trimmed names of the sheets that are not excluded, in workbook order
    pub fn date_sheets(&self, excluded: &BTreeSet<String>) -> Vec<String> {
        self.sheet_names()
            .iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !excluded.contains(name))
            .collect()
    }

    /// Find the raw sheet name whose trimmed form equals the trimmed date
    fn find_sheet(&self, date: &str) -> Option<String> {
        let wanted = date.trim();
        self.sheet_names()
            .into_iter()
            .find(|name| name.trim() == wanted)
    }

    /// Read one day by date token
    pub fn read_day(&mut self, date: &str) -> KpiResult<DayRecord> {
        let sheet_name = self
            .find_sheet(date)
            .ok_or_else(|| KpiError::SheetNotFound(date.trim().to_string()))?;
        self.read_sheet(&sheet_name)
    }

    fn read_sheet(&mut self, sheet_name: &str) -> KpiResult<DayRecord> {
        debug!(sheet = sheet_name, "reading daily sheet");
        let range = self.workbook.worksheet_range(sheet_name)?;
        Ok(read_day_from_range(sheet_name, &range))
    }

    /// Read every sheet not in `excluded`, keyed by trimmed sheet name
    pub fn load_all(&mut self, excluded: &BTreeSet<String>) -> KpiResult<WorkbookData> {
        let mut data = WorkbookData::default();

        for sheet_name in self.sheet_names() {
            let date = sheet_name.trim().to_string();
            if excluded.contains(&date) {
                debug!(sheet = %sheet_name, "skipping excluded sheet");
                continue;
            }
            let day = self.read_sheet(&sheet_name)?;
            data.days.insert(date.clone(), day);
            data.date_sheets.push(date);
        }

        Ok(data)
    }

    /// Read the requested dates; unknown ones are collected in `missing`
    pub fn load_dates<S: AsRef<str>>(&mut self, dates: &[S]) -> KpiResult<DateSelection> {
        let mut selection = DateSelection::default();

        for date in dates {
            match self.read_day(date.as_ref()) {
                Ok(day) => {
                    selection.days.insert(day.date.clone(), day);
                }
                Err(KpiError::SheetNotFound(token)) => {
                    warn!(date = %token, "no sheet found for requested date");
                    selection.missing.push(token);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(selection)
    }
}

/// Build a day record from a sheet's cell range
pub fn read_day_from_range(sheet_name: &str, range: &Range<Data>) -> DayRecord {
    let grid = SheetGrid::new(range);

    let phases = PHASE_SECTIONS
        .iter()
        .map(|section| (section.phase, read_phase(&grid, section)))
        .collect::<BTreeMap<_, _>>();

    DayRecord {
        date: sheet_name.trim().to_string(),
        phases,
        totals: read_meters(&grid, layout::DAY_TOTAL_ROW),
        roc: read_roc(&grid),
    }
}

fn read_meters(grid: &SheetGrid, row: u32) -> Meters {
    Meters {
        shift_a: grid.number(layout::COL_SHIFT_A, row),
        shift_b: grid.number(layout::COL_SHIFT_B, row),
        total: grid.number(layout::COL_TOTAL, row),
        plan: grid.number(layout::COL_PLAN, row),
        compliance_a: grid.number(layout::COL_COMPLIANCE_A, row),
        compliance_b: grid.number(layout::COL_COMPLIANCE_B, row),
        compliance_daily: grid.number(layout::COL_COMPLIANCE_DAILY, row),
    }
}

/// Blank name cells and TOTAL rows are not equipment
fn read_equipment(grid: &SheetGrid, row: u32) -> Option<EquipmentRecord> {
    let name = grid.text(layout::COL_NAME, row);
    if name.is_empty() || name == layout::TOTAL_MARKER {
        return None;
    }

    Some(EquipmentRecord {
        name,
        meters: read_meters(grid, row),
        status_a: grid.text(layout::COL_STATUS_A, row),
        status_b: grid.text(layout::COL_STATUS_B, row),
    })
}

fn read_phase(grid: &SheetGrid, section: &PhaseSection) -> PhaseRecord {
    let equipment = section
        .equipment_rows()
        .filter_map(|row| read_equipment(grid, row))
        .collect();

    PhaseRecord {
        phase: section.phase,
        equipment,
        totals: read_meters(grid, section.totals_row),
    }
}

fn read_roc(grid: &SheetGrid) -> RocSummary {
    let mut roc = RocSummary::default();

    for (phase, row) in layout::ROC_PHASE_ROWS {
        let value = grid.number(layout::COL_TOTAL, row);
        match phase {
            Phase::F09 => roc.phase_9 = value,
            Phase::F10 => roc.phase_10 = value,
            Phase::F11 => roc.phase_11 = value,
            Phase::F12 => roc.phase_12 = value,
        }
    }

    let row = layout::ROC_TOTAL_ROW;
    roc.plan = grid.number(layout::COL_ROC_PLAN, row);
    roc.shift_a = grid.number(layout::COL_SHIFT_A, row);
    roc.shift_b = grid.number(layout::COL_SHIFT_B, row);
    roc.total = grid.number(layout::COL_TOTAL, row);
    roc
}

/// Reader bound to a workbook path and an exclusion set.
///
/// Each call opens the workbook, reads, and drops the handle before returning.
#[derive(Debug, Clone)]
pub struct KpiReader {
    path: PathBuf,
    excluded: BTreeSet<String>,
}

impl KpiReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            excluded: DEFAULT_EXCLUDED_SHEETS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Replace the exclusion set (names are trimmed)
    pub fn with_excluded_sheets<I, S>(mut self, sheets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded = sheets
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .collect();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn excluded_sheets(&self) -> &BTreeSet<String> {
        &self.excluded
    }

    pub fn read_day(&self, date: &str) -> KpiResult<DayRecord> {
        let mut workbook = KpiWorkbook::open(&self.path)?;
        workbook.read_day(date)
    }

    pub fn load_all(&self) -> KpiResult<WorkbookData> {
        let mut workbook = KpiWorkbook::open(&self.path)?;
        workbook.load_all(&self.excluded)
    }

    pub fn load_dates<S: AsRef<str>>(&self, dates: &[S]) -> KpiResult<DateSelection> {
        let mut workbook = KpiWorkbook::open(&self.path)?;
        workbook.load_dates(dates)
    }

    pub fn date_sheets(&self) -> KpiResult<Vec<String>> {
        let workbook = KpiWorkbook::open(&self.path)?;
        Ok(workbook.date_sheets(&self.excluded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(range: &mut Range<Data>, col: &str, row: u32, value: Data) {
        range.set_value(layout::position(col, row), value);
    }

    fn text(s: &str) -> Data {
        Data::String(s.to_string())
    }

    fn sample_range() -> Range<Data> {
        let mut range = Range::new((0, 0), (45, 14));

        // F09: two units, a spacer, then a TOTAL row inside the range
        set(&mut range, "C", 17, text("PF03"));
        set(&mut range, "D", 17, Data::Float(4.0));
        set(&mut range, "E", 17, Data::Float(6.0));
        set(&mut range, "F", 17, Data::Float(10.0));
        set(&mut range, "G", 17, Data::Float(12.0));
        set(&mut range, "K", 17, Data::Float(0.833));
        set(&mut range, "M", 17, text(" Operativa "));
        set(&mut range, "C", 18, text("PF07"));
        set(&mut range, "F", 18, Data::Float(15.0));
        set(&mut range, "G", 18, Data::Float(12.0));
        set(&mut range, "H", 18, text("n/a"));
        set(&mut range, "C", 20, text("TOTAL"));
        set(&mut range, "F", 20, Data::Float(999.0));
        set(&mut range, "F", 25, Data::Float(25.0));
        set(&mut range, "G", 25, Data::Float(24.0));

        set(&mut range, "F", 34, Data::Float(100.0));
        set(&mut range, "G", 34, Data::Float(120.0));

        set(&mut range, "F", 38, Data::Float(1.0));
        set(&mut range, "F", 41, Data::Float(4.0));
        set(&mut range, "C", 42, Data::Int(30));
        set(&mut range, "F", 42, Data::Float(5.0));
        range
    }

    #[test]
    fn test_read_day_trims_sheet_name() {
        let day = read_day_from_range("15-01 ", &sample_range());
        assert_eq!(day.date, "15-01");
    }

    #[test]
    fn test_read_day_has_all_four_phases() {
        let day = read_day_from_range("15-01", &sample_range());
        assert_eq!(day.phases.len(), 4);
        assert!(day.phase(Phase::F12).unwrap().equipment.is_empty());
    }

    #[test]
    fn test_read_phase_skips_blank_and_total_rows() {
        let day = read_day_from_range("15-01", &sample_range());
        let f09 = day.phase(Phase::F09).unwrap();
        let names: Vec<&str> = f09.equipment.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["PF03", "PF07"]);
    }

    #[test]
    fn test_read_equipment_fields() {
        let day = read_day_from_range("15-01", &sample_range());
        let pf03 = &day.phase(Phase::F09).unwrap().equipment[0];
        assert_eq!(pf03.meters.shift_a, 4.0);
        assert_eq!(pf03.meters.shift_b, 6.0);
        assert_eq!(pf03.meters.total, 10.0);
        assert_eq!(pf03.meters.compliance_daily, 0.833);
        assert_eq!(pf03.status_a, "Operativa");
        assert_eq!(pf03.status_b, "");

        let pf07 = &day.phase(Phase::F09).unwrap().equipment[1];
        assert_eq!(pf07.meters.compliance_a, 0.0);
    }

    #[test]
    fn test_phase_total_is_read_not_summed() {
        let day = read_day_from_range("15-01", &sample_range());
        let f09 = day.phase(Phase::F09).unwrap();
        assert_eq!(f09.totals.total, 25.0);
        assert_eq!(f09.totals.plan, 24.0);
    }

    #[test]
    fn test_day_total_and_roc() {
        let day = read_day_from_range("15-01", &sample_range());
        assert_eq!(day.totals.total, 100.0);
        assert_eq!(day.totals.plan, 120.0);
        assert_eq!(day.roc.phase_9, 1.0);
        assert_eq!(day.roc.phase_10, 0.0);
        assert_eq!(day.roc.phase_12, 4.0);
        assert_eq!(day.roc.plan, 30.0);
        assert_eq!(day.roc.total, 5.0);
    }

    #[test]
    fn test_read_empty_range() {
        let range: Range<Data> = Range::empty();
        let day = read_day_from_range("01-01", &range);
        assert_eq!(day.equipment_count(), 0);
        assert_eq!(day.totals, Meters::default());
        assert_eq!(day.roc, RocSummary::default());
    }

    #[test]
    fn test_reader_default_exclusions() {
        let reader = KpiReader::new("book.xlsx");
        assert!(reader.excluded_sheets().contains("Datos"));
        assert!(reader.excluded_sheets().contains("Patios"));

        let reader = reader.with_excluded_sheets([" Resumen "]);
        assert_eq!(reader.excluded_sheets().len(), 1);
        assert!(reader.excluded_sheets().contains("Resumen"));
    }

    #[test]
    fn test_reader_keeps_path() {
        let reader = KpiReader::new("data/enero.xlsx");
        assert_eq!(reader.path(), Path::new("data/enero.xlsx"));
    }

    #[test]
    fn test_reader_missing_file_is_workbook_error() {
        let reader = KpiReader::new("does-not-exist.xlsx");
        assert!(matches!(reader.load_all(), Err(KpiError::Workbook(_))));
    }
}
