//! Flattened CSV row shapes
//!
//! Column names are the ones the dashboards import, so they stay in Spanish.

use crate::types::{DayRecord, Meters, Phase};
use serde::Serialize;

/// Compliance fraction → percentage with one decimal (0.873 → 87.3).
/// Exact ties round to even (0.0625 → 6.2). Zero, missing or non-finite
/// ratios become 0.0.
pub fn percent(ratio: f64) -> f64 {
    if ratio == 0.0 || !ratio.is_finite() {
        return 0.0;
    }
    format!("{:.1}", ratio * 100.0).parse().unwrap_or(0.0)
}

/// Kind of row in the meters view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowKind {
    #[serde(rename = "Equipo")]
    Equipment,
    #[serde(rename = "Total_Fase")]
    PhaseTotal,
    #[serde(rename = "Total_Dia")]
    DayTotal,
}

/// One row of `<base>_metros.csv`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetersRow {
    #[serde(rename = "Fecha")]
    pub date: String,
    #[serde(rename = "Fase")]
    pub phase: String,
    #[serde(rename = "Equipo")]
    pub equipment: String,
    #[serde(rename = "Turno_A")]
    pub shift_a: f64,
    #[serde(rename = "Turno_B")]
    pub shift_b: f64,
    #[serde(rename = "Total")]
    pub total: f64,
    #[serde(rename = "Plan")]
    pub plan: f64,
    #[serde(rename = "Cumplimiento_TA")]
    pub compliance_a: f64,
    #[serde(rename = "Cumplimiento_TB")]
    pub compliance_b: f64,
    #[serde(rename = "Cumplimiento_Diario")]
    pub compliance_daily: f64,
    #[serde(rename = "Estado_TA")]
    pub status_a: String,
    #[serde(rename = "Estado_TB")]
    pub status_b: String,
    #[serde(rename = "Tipo")]
    pub kind: RowKind,
}

impl MetersRow {
    fn new(date: &str, phase: &str, equipment: &str, meters: &Meters, kind: RowKind) -> Self {
        Self {
            date: date.to_string(),
            phase: phase.to_string(),
            equipment: equipment.to_string(),
            shift_a: meters.shift_a,
            shift_b: meters.shift_b,
            total: meters.total,
            plan: meters.plan,
            compliance_a: percent(meters.compliance_a),
            compliance_b: percent(meters.compliance_b),
            compliance_daily: percent(meters.compliance_daily),
            status_a: String::new(),
            status_b: String::new(),
            kind,
        }
    }
}

/// One row of `<base>_roc.csv`. Shift and plan columns are only set on the
/// TOTAL_ROC row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RocRow {
    #[serde(rename = "Fecha")]
    pub date: String,
    #[serde(rename = "Fase")]
    pub phase: String,
    #[serde(rename = "Metros_ROC")]
    pub meters: f64,
    #[serde(rename = "Turno_A_ROC")]
    pub shift_a: Option<f64>,
    #[serde(rename = "Turno_B_ROC")]
    pub shift_b: Option<f64>,
    #[serde(rename = "Plan_Diario_ROC")]
    pub plan: Option<f64>,
}

/// One row of `<base>_resumen_diario.csv`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummaryRow {
    #[serde(rename = "Fecha")]
    pub date: String,
    #[serde(rename = "Total_Turno_A")]
    pub shift_a: f64,
    #[serde(rename = "Total_Turno_B")]
    pub shift_b: f64,
    #[serde(rename = "Total_Metros")]
    pub total: f64,
    #[serde(rename = "Plan_Total")]
    pub plan: f64,
    #[serde(rename = "Cumplimiento_Diario_%")]
    pub compliance_daily: f64,
    #[serde(rename = "ROC_Total")]
    pub roc_total: f64,
    #[serde(rename = "ROC_Plan")]
    pub roc_plan: f64,
    #[serde(rename = "F09_Total")]
    pub f09_total: f64,
    #[serde(rename = "F09_Plan")]
    pub f09_plan: f64,
    #[serde(rename = "F09_Cump_%")]
    pub f09_compliance: f64,
    #[serde(rename = "F10_Total")]
    pub f10_total: f64,
    #[serde(rename = "F10_Plan")]
    pub f10_plan: f64,
    #[serde(rename = "F10_Cump_%")]
    pub f10_compliance: f64,
    #[serde(rename = "F11_Total")]
    pub f11_total: f64,
    #[serde(rename = "F11_Plan")]
    pub f11_plan: f64,
    #[serde(rename = "F11_Cump_%")]
    pub f11_compliance: f64,
    #[serde(rename = "F12_Total")]
    pub f12_total: f64,
    #[serde(rename = "F12_Plan")]
    pub f12_plan: f64,
    #[serde(rename = "F12_Cump_%")]
    pub f12_compliance: f64,
}

/// Equipment rows, then a TOTAL_FASE row per phase (F12, F10, F09, F11),
/// then the TOTAL_DIA row
pub fn meters_rows(day: &DayRecord) -> Vec<MetersRow> {
    let mut rows = Vec::with_capacity(day.equipment_count() + Phase::SHEET_ORDER.len() + 1);

    for phase in Phase::SHEET_ORDER {
        let Some(record) = day.phase(phase) else {
            continue;
        };

        for eq in &record.equipment {
            let mut row = MetersRow::new(
                &day.date,
                phase.label(),
                &eq.name,
                &eq.meters,
                RowKind::Equipment,
            );
            row.status_a = eq.status_a.clone();
            row.status_b = eq.status_b.clone();
            rows.push(row);
        }

        rows.push(MetersRow::new(
            &day.date,
            phase.label(),
            "TOTAL_FASE",
            &record.totals,
            RowKind::PhaseTotal,
        ));
    }

    rows.push(MetersRow::new(
        &day.date,
        "TODAS",
        "TOTAL_DIA",
        &day.totals,
        RowKind::DayTotal,
    ));

    rows
}

/// Four phase rows (F09..F12) and the TOTAL_ROC row
pub fn roc_rows(day: &DayRecord) -> Vec<RocRow> {
    let roc = &day.roc;
    let mut rows: Vec<RocRow> = Phase::NUMERIC_ORDER
        .iter()
        .map(|phase| RocRow {
            date: day.date.clone(),
            phase: phase.label().to_string(),
            meters: roc.phase_value(*phase),
            shift_a: None,
            shift_b: None,
            plan: None,
        })
        .collect();

    rows.push(RocRow {
        date: day.date.clone(),
        phase: "TOTAL_ROC".to_string(),
        meters: roc.total,
        shift_a: Some(roc.shift_a),
        shift_b: Some(roc.shift_b),
        plan: Some(roc.plan),
    });

    rows
}

/// (total, plan, compliance %) of a phase, zeros when the day lacks it
fn phase_figures(day: &DayRecord, phase: Phase) -> (f64, f64, f64) {
    day.phase(phase)
        .map(|p| (p.totals.total, p.totals.plan, percent(p.totals.compliance_daily)))
        .unwrap_or((0.0, 0.0, 0.0))
}

pub fn summary_row(day: &DayRecord) -> DailySummaryRow {
    let (f09_total, f09_plan, f09_compliance) = phase_figures(day, Phase::F09);
    let (f10_total, f10_plan, f10_compliance) = phase_figures(day, Phase::F10);
    let (f11_total, f11_plan, f11_compliance) = phase_figures(day, Phase::F11);
    let (f12_total, f12_plan, f12_compliance) = phase_figures(day, Phase::F12);

    DailySummaryRow {
        date: day.date.clone(),
        shift_a: day.totals.shift_a,
        shift_b: day.totals.shift_b,
        total: day.totals.total,
        plan: day.totals.plan,
        compliance_daily: percent(day.totals.compliance_daily),
        roc_total: day.roc.total,
        roc_plan: day.roc.plan,
        f09_total,
        f09_plan,
        f09_compliance,
        f10_total,
        f10_plan,
        f10_compliance,
        f11_total,
        f11_plan,
        f11_compliance,
        f12_total,
        f12_plan,
        f12_compliance,
    }
}
