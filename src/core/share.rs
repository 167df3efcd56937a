use crate::core::tally::Fulfillment;
use crate::models::LogbookEntry;

const DEFAULT_UNIT_LABEL: &str = "Unidad";
const UNSPECIFIED_UNIT: &str = "Sin especificar";

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

/// Suggested file name for the printed report.
pub fn document_name(entry: &LogbookEntry) -> String {
    let unit = or_default(&entry.unit, DEFAULT_UNIT_LABEL);
    format!("{} - {} - {}", unit, entry.date.format("%Y-%m-%d"), entry.shift)
}

/// Short summary meant to be pasted into a chat alongside the PDF.
pub fn share_message(entry: &LogbookEntry, tally: Fulfillment) -> String {
    let unit = or_default(&entry.unit, UNSPECIFIED_UNIT);

    format!(
        "*Reporte: Bitácora Digital*\n\
         📍 Unidad: {unit}\n\
         📅 Fecha: {date}\n\
         ⏰ Turno: {shift}\n\
         \n\
         *Resultados:*\n\
         ✅ Aplicaron {applicable} apartados, de los cuales {fulfilled} se cumplieron.\n\
         \n\
         _Nota: Adjunta el documento PDF de tu reporte a este mensaje._",
        date = entry.date.format("%Y-%m-%d"),
        shift = entry.shift,
        applicable = tally.applicable,
        fulfilled = tally.fulfilled,
    )
}
