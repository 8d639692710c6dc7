use std::collections::BTreeMap;
use std::fmt;

//==============================================================================
// Phases
//==============================================================================

/// Drilling phase (zone) code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    F09,
    F10,
    F11,
    F12,
}

impl Phase {
    /// Order in which the phases appear on the daily sheet (top to bottom).
    /// Also the presentation order of the equipment view and console report.
    pub const SHEET_ORDER: [Phase; 4] = [Phase::F12, Phase::F10, Phase::F09, Phase::F11];

    /// Numeric order, used by the ROC block and the daily summary columns.
    pub const NUMERIC_ORDER: [Phase; 4] = [Phase::F09, Phase::F10, Phase::F11, Phase::F12];

    pub fn label(&self) -> &'static str {
        match self {
            Phase::F09 => "F09",
            Phase::F10 => "F10",
            Phase::F11 => "F11",
            Phase::F12 => "F12",
        }
    }

    /// Human name used in the ROC section of the report ("Fase 9", ...)
    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::F09 => "Fase 9",
            Phase::F10 => "Fase 10",
            Phase::F11 => "Fase 11",
            Phase::F12 => "Fase 12",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//==============================================================================
// Records
//==============================================================================

/// Meter figures shared by equipment, phase-total and day-total rows.
///
/// Compliance values are fractions (0..1) exactly as found in the sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Meters {
    pub shift_a: f64,
    pub shift_b: f64,
    pub total: f64,
    pub plan: f64,
    pub compliance_a: f64,
    pub compliance_b: f64,
    pub compliance_daily: f64,
}

/// One drilling unit (perforadora) within a phase
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentRecord {
    pub name: String,
    pub meters: Meters,
    pub status_a: String,
    pub status_b: String,
}

/// A phase section: its equipment rows plus the phase TOTAL row
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseRecord {
    pub phase: Phase,
    pub equipment: Vec<EquipmentRecord>,
    pub totals: Meters,
}

/// ROC (rotary open coring) block of a daily sheet
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RocSummary {
    pub phase_9: f64,
    pub phase_10: f64,
    pub phase_11: f64,
    pub phase_12: f64,
    pub plan: f64,
    pub shift_a: f64,
    pub shift_b: f64,
    pub total: f64,
}

impl RocSummary {
    pub fn phase_value(&self, phase: Phase) -> f64 {
        match phase {
            Phase::F09 => self.phase_9,
            Phase::F10 => self.phase_10,
            Phase::F11 => self.phase_11,
            Phase::F12 => self.phase_12,
        }
    }
}

/// Everything read from one daily sheet
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    /// Trimmed sheet name, e.g. "15-01"
    pub date: String,
    pub phases: BTreeMap<Phase, PhaseRecord>,
    /// The TOTAL METROS row, taken verbatim from the sheet
    pub totals: Meters,
    pub roc: RocSummary,
}

impl DayRecord {
    pub fn phase(&self, phase: Phase) -> Option<&PhaseRecord> {
        self.phases.get(&phase)
    }

    pub fn equipment_count(&self) -> usize {
        self.phases.values().map(|p| p.equipment.len()).sum()
    }
}

/// Day records keyed by date; iterates in ascending key order
pub type DayCollection = BTreeMap<String, DayRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_orders_cover_all_phases() {
        let mut sheet = Phase::SHEET_ORDER.to_vec();
        sheet.sort();
        assert_eq!(sheet, Phase::NUMERIC_ORDER.to_vec());
    }

    #[test]
    fn test_roc_phase_value() {
        let roc = RocSummary {
            phase_9: 1.0,
            phase_10: 2.0,
            phase_11: 3.0,
            phase_12: 4.0,
            ..Default::default()
        };
        let values: Vec<f64> = Phase::NUMERIC_ORDER
            .iter()
            .map(|p| roc.phase_value(*p))
            .collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_equipment_count() {
        let equipment = |name: &str| EquipmentRecord {
            name: name.to_string(),
            meters: Meters::default(),
            status_a: String::new(),
            status_b: String::new(),
        };
        let mut phases = BTreeMap::new();
        phases.insert(
            Phase::F09,
            PhaseRecord {
                phase: Phase::F09,
                equipment: vec![equipment("PF03"), equipment("PF07")],
                totals: Meters::default(),
            },
        );
        phases.insert(
            Phase::F12,
            PhaseRecord {
                phase: Phase::F12,
                equipment: vec![],
                totals: Meters::default(),
            },
        );
        let day = DayRecord {
            date: "15-01".to_string(),
            phases,
            totals: Meters::default(),
            roc: RocSummary::default(),
        };
        assert_eq!(day.equipment_count(), 2);
        assert!(day.phase(Phase::F10).is_none());
    }
}
