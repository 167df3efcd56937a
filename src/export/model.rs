// src/export/model.rs

use crate::core::report::{ReportPhoto, ReportProjection, ReportRow};
use crate::models::{GroomingCheck, RiskState, StaffRow};
use serde::Serialize;

/// Flat report line for CSV export.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ReportExportRow {
    pub phase: String,
    pub section: String,
    pub item: String,
    pub label: String,
    pub reading: String,
    pub evidence: String,
    pub risk: String,
}

fn risk_label(risk: Option<RiskState>) -> String {
    match risk {
        Some(r) if r.is_risk => "riesgo".to_string(),
        Some(r) if r.was_corrected => "corregido".to_string(),
        _ => String::new(),
    }
}

fn evidence(photo: &ReportPhoto) -> String {
    photo
        .photo
        .as_ref()
        .map(|p| p.as_str().to_string())
        .unwrap_or_default()
}

fn staff_reading(row: &StaffRow) -> String {
    let failed: Vec<&str> = GroomingCheck::ALL
        .iter()
        .filter(|c| !row.check(**c))
        .map(|c| c.label())
        .collect();

    if failed.is_empty() {
        "OK".to_string()
    } else {
        format!("Falla: {}", failed.join(", "))
    }
}

struct RowBuilder<'a> {
    phase: &'a str,
    section: &'a str,
    out: Vec<ReportExportRow>,
}

impl RowBuilder<'_> {
    fn push(&mut self, item: &str, label: &str, reading: &str, evidence: String, risk: String) {
        self.out.push(ReportExportRow {
            phase: self.phase.to_string(),
            section: self.section.to_string(),
            item: item.to_string(),
            label: label.to_string(),
            reading: reading.to_string(),
            evidence,
            risk,
        });
    }

    fn list_row(&mut self, row: &ReportRow) {
        let risk = risk_label(row.risk);
        for r in &row.readings {
            self.push(&row.label, &r.label, &r.value, String::new(), risk.clone());
        }
        for p in &row.photos {
            self.push(&row.label, &p.label, "", evidence(p), risk.clone());
        }
    }
}

/// One line per field, roster row, list reading, list photo and section
/// photo, in report order.
pub fn flatten_report(report: &ReportProjection) -> Vec<ReportExportRow> {
    let mut out = Vec::new();

    for phase in &report.phases {
        for section in &phase.sections {
            let mut b = RowBuilder {
                phase: &phase.title,
                section: &section.title,
                out: Vec::new(),
            };

            for f in &section.fields {
                b.push("", &f.label, &f.value, String::new(), String::new());
            }
            for (pos, staff) in section.staff.iter().enumerate() {
                let name = if staff.name.is_empty() {
                    format!("Persona {}", pos + 1)
                } else {
                    staff.name.clone()
                };
                b.push(&name, "Aseo personal", &staff_reading(staff), String::new(), String::new());
            }
            for row in &section.rows {
                b.list_row(row);
            }
            for p in &section.photos {
                b.push("", &p.label, "", evidence(p), String::new());
            }

            out.extend(b.out);
        }
    }

    out
}
