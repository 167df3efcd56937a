//! Terminal and plain-text rendering of entries and reports.

use crate::core::report::{ReportPhoto, ReportProjection, ReportRow, ReportSection};
use crate::core::tally::{self, Fulfillment};
use crate::models::photo::{CLEANING_LABELS, HANDWASH_LABELS};
use crate::models::{GroomingCheck, ListItem, ListName, LogbookEntry, NamedPhoto, StaffRow};
use crate::utils::formatting::{check_mark, separator};
use crate::utils::table::{Column, Table};
use std::fmt::Write;

const WIDTH: usize = 72;
const INDENT: &str = "    ";

fn wrapped(out: &mut String, text: &str, indent: &str) {
    let opts = textwrap::Options::new(WIDTH)
        .initial_indent(indent)
        .subsequent_indent(indent);
    for line in textwrap::wrap(text, opts) {
        out.push_str(&line);
        out.push('\n');
    }
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "--" } else { s }
}

fn photo_line(p: &ReportPhoto) -> String {
    match &p.photo {
        Some(photo) => format!("{} {}: {}", check_mark(true), p.label, photo),
        None => format!("{} {}: sin foto", check_mark(false), p.label),
    }
}

fn row_line(row: &ReportRow) -> String {
    let mut parts = vec![format!("#{} {}", row.id, row.label)];
    parts.extend(
        row.readings
            .iter()
            .map(|r| format!("{}: {}", r.label, or_dash(&r.value))),
    );
    parts.extend(
        row.photos
            .iter()
            .map(|p| format!("{} {}", p.label, check_mark(p.present))),
    );
    if let Some(risk) = row.risk {
        if risk.is_risk {
            parts.push("⚠ RIESGO".to_string());
        } else if risk.was_corrected {
            parts.push("corregido".to_string());
        }
    }
    parts.join(" | ")
}

fn staff_table(staff: &[StaffRow]) -> Table {
    let mut columns = vec![Column::new("ID"), Column::new("Nombre")];
    columns.extend(GroomingCheck::ALL.iter().map(|c| Column::new(c.label())));

    let mut table = Table::new(columns);
    for row in staff {
        let mut cells = vec![format!("#{}", row.id), row.name.clone()];
        cells.extend(
            GroomingCheck::ALL
                .iter()
                .map(|c| check_mark(row.check(*c)).to_string()),
        );
        table.add_row(cells);
    }
    table
}

fn render_section(out: &mut String, section: &ReportSection) {
    let _ = writeln!(out, "[{}] {}", check_mark(section.fulfilled), section.title);

    for f in &section.fields {
        let _ = writeln!(out, "{INDENT}{}: {}", f.label, or_dash(&f.value));
    }

    if !section.staff.is_empty() {
        for line in staff_table(&section.staff).render().lines() {
            let _ = writeln!(out, "{INDENT}{}", line.trim_end());
        }
    }

    for row in &section.rows {
        wrapped(out, &row_line(row), INDENT);
        for p in row.photos.iter().filter(|p| p.present) {
            wrapped(out, &photo_line(p), "        ");
        }
    }

    for p in &section.photos {
        wrapped(out, &photo_line(p), INDENT);
    }
}

/// Plain-text report, suitable for printing or writing to a file.
pub fn render_report(report: &ReportProjection, sep: &str) -> String {
    let mut out = String::new();
    let rule = separator(sep, WIDTH);

    let _ = writeln!(out, "{}", report.title);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Unidad:      {}", report.header.unit);
    let _ = writeln!(out, "Responsable: {}", report.header.responsible);
    let _ = writeln!(out, "Turno:       {}", report.header.shift);
    let _ = writeln!(out, "Fecha:       {}", report.header.date.format("%Y-%m-%d"));
    let _ = writeln!(out, "{}", tally_line(report.fulfillment));

    for phase in &report.phases {
        let _ = writeln!(out, "\n{}", phase.title);
        let _ = writeln!(out, "{}", separator(sep, phase.title.chars().count()));
        for section in &phase.sections {
            render_section(&mut out, section);
        }
    }

    out
}

pub fn tally_line(t: Fulfillment) -> String {
    format!(
        "Cumplimiento: {} de {} apartados con evidencia",
        t.fulfilled, t.applicable
    )
}

fn list_overview<T: ListItem>(out: &mut String, list: ListName, items: &[T]) {
    let _ = writeln!(out, "  {} ({} elementos)", list.key(), items.len());
    for (pos, item) in items.iter().enumerate() {
        let label = match item.name() {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => list.item_label(pos),
        };
        let readings: Vec<String> = item
            .readings()
            .iter()
            .map(|(l, v)| format!("{l}: {}", or_dash(v)))
            .collect();
        let photos: Vec<String> = item
            .photos()
            .iter()
            .map(|(l, p)| format!("{l} {}", check_mark(p.is_some())))
            .collect();
        let mut line = format!("    #{} {}", item.id(), label);
        for part in readings.iter().chain(photos.iter()) {
            line.push_str(" | ");
            line.push_str(part);
        }
        if let Some(risk) = item.risk() {
            if risk.is_risk {
                line.push_str(" | ⚠ RIESGO");
            } else if risk.was_corrected {
                line.push_str(" | corregido");
            }
        }
        let _ = writeln!(out, "{line}");
    }
}

/// Editing overview of an entry: every field with the ids commands need.
pub fn render_overview(id: i64, closed: bool, entry: &LogbookEntry, sep: &str) -> String {
    let mut out = String::new();
    let rule = separator(sep, WIDTH);

    let status = if closed { "cerrada" } else { "abierta" };
    let _ = writeln!(out, "Bitácora #{id} ({status})");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "unit:        {}", entry.unit);
    let _ = writeln!(out, "responsible: {}", entry.responsible);
    let _ = writeln!(out, "shift:       {}", entry.shift);
    let _ = writeln!(out, "date:        {}", entry.date.format("%Y-%m-%d"));
    let _ = writeln!(out, "{}", tally_line(tally::fulfillment(entry)));

    let _ = writeln!(out, "\nApartados:");
    for (key, applies) in entry.applies.iter() {
        let evidence = tally::section_has_evidence(entry, key);
        let _ = writeln!(
            out,
            "  {:<11} aplica: {}  evidencia: {}",
            key.key(),
            check_mark(applies),
            check_mark(evidence)
        );
    }

    let _ = writeln!(out, "\nPersonal (staffCount: {:?}):", entry.staff_count);
    if !entry.staff_list.is_empty() {
        for line in staff_table(&entry.staff_list).render().lines() {
            let _ = writeln!(out, "  {}", line.trim_end());
        }
    }

    let _ = writeln!(out, "\nTexto:");
    let _ = writeln!(out, "  fvTime: {}  fvPpm: {}", entry.fv_time, entry.fv_ppm);
    let _ = writeln!(
        out,
        "  coolFood1: {}  coolFood2: {}",
        entry.cool_food_1, entry.cool_food_2
    );

    let _ = writeln!(out, "\nListas:");
    list_overview(&mut out, ListName::StaffPhotos, &entry.staff_photos);
    list_overview(&mut out, ListName::Retainers, &entry.retainers);
    list_overview(&mut out, ListName::Fridges, &entry.fridges);
    list_overview(&mut out, ListName::Cook, &entry.cook_list);
    list_overview(&mut out, ListName::Reheat, &entry.reheat_list);
    list_overview(&mut out, ListName::Catering, &entry.catering_list);
    list_overview(&mut out, ListName::HotBar, &entry.hot_bar_list);
    list_overview(&mut out, ListName::ColdBar, &entry.cold_bar_list);

    let _ = writeln!(out, "\nRanuras:");
    let handwash: Vec<String> = HANDWASH_LABELS
        .iter()
        .zip(entry.handwash_photos.iter())
        .enumerate()
        .map(|(i, (l, p))| format!("{}.{} {}", i + 1, l, check_mark(p.is_some())))
        .collect();
    wrapped(&mut out, &format!("handwash: {}", handwash.join("  ")), "  ");
    let cleaning: Vec<String> = CLEANING_LABELS
        .iter()
        .zip(entry.cleaning_photos.iter())
        .enumerate()
        .map(|(i, (l, p))| format!("{}.{} {}", i + 1, l, check_mark(p.is_some())))
        .collect();
    wrapped(&mut out, &format!("cleaning: {}", cleaning.join("  ")), "  ");

    let _ = writeln!(out, "\nFotos:");
    for p in NamedPhoto::ALL {
        if let Some(photo) = entry.photo(p) {
            wrapped(&mut out, &format!("{}: {}", p.key(), photo), "  ");
        }
    }
    if entry.photos.is_empty() {
        let _ = writeln!(out, "  (ninguna)");
    }

    out
}
