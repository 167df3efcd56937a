use bitacora::core::report::REPORT_TITLE;
use bitacora::core::session::{Applied, Session, Update};
use bitacora::core::share::{document_name, share_message};
use bitacora::export::flatten_report;
use bitacora::models::{
    FieldValue, ItemField, ItemTemplate, ListName, NamedPhoto, Phase, Photo, SectionKey, Shift,
    TextField,
};
use bitacora::ui::report_view::render_report;
use chrono::NaiveDate;

fn session() -> Session {
    let mut s = Session::fresh(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    s.apply(Update::SetText(TextField::Unit, "Planta 2".into()))
        .unwrap();
    s.apply(Update::SetShift(Shift::Afternoon)).unwrap();
    s
}

#[test]
fn report_lists_every_applicable_section_in_order() {
    let report = session().report();

    assert_eq!(report.title, REPORT_TITLE);
    assert_eq!(report.phases.len(), 3);
    let keys: Vec<SectionKey> = report.sections().map(|s| s.key).collect();
    assert_eq!(keys, SectionKey::ALL.to_vec());
}

#[test]
fn non_applicable_sections_are_left_out() {
    let mut s = session();
    s.apply(Update::SetApplies(SectionKey::Witness, false))
        .unwrap();
    s.apply(Update::SetApplies(SectionKey::Handover, false))
        .unwrap();

    let report = s.report();
    assert!(report.section(SectionKey::Witness).is_none());
    assert!(report.section(SectionKey::Dishwasher).is_some());

    // the handover phase has a single section, so the phase goes too
    assert_eq!(report.phases.len(), 2);
    assert!(report.phases.iter().all(|p| p.phase != Phase::Handover));
    assert_eq!(report.fulfillment.applicable, SectionKey::COUNT - 2);
}

#[test]
fn risk_flags_reach_the_report() {
    let mut s = session();
    let id = match s
        .apply(Update::AddItem(
            ListName::ColdBar,
            ItemTemplate {
                name: "Gelatina".into(),
                temp: "Mayor a 7°C".into(),
                ..ItemTemplate::default()
            },
        ))
        .unwrap()
    {
        Applied::ItemAdded(id) => id,
        other => panic!("unexpected {:?}", other),
    };

    let report = s.report();
    let row = report
        .section(SectionKey::ColdBar)
        .unwrap()
        .rows
        .iter()
        .find(|r| r.id == id)
        .unwrap();
    assert!(row.risk.unwrap().is_risk);

    // cook rows are not risk-classified
    let cook = report.section(SectionKey::Cook).unwrap();
    assert!(cook.rows.iter().all(|r| r.risk.is_none()));

    let flat = flatten_report(&report);
    assert!(flat.iter().any(|r| r.item == "Gelatina" && r.risk == "riesgo"));
}

#[test]
fn rendered_report_marks_fulfilled_sections() {
    let mut s = session();
    let cook = s.entry().item_ids(ListName::Cook)[0];
    s.apply(Update::UpdateField(
        ListName::Cook,
        cook,
        ItemField::Photo,
        FieldValue::photo(Photo::new("/fotos/pollo.jpg")),
    ))
    .unwrap();
    s.apply(Update::SetPhoto(
        NamedPhoto::HandoverReception,
        Some(Photo::new("/fotos/recepcion.jpg")),
    ))
    .unwrap();

    let text = render_report(&s.report(), "-");
    assert!(text.starts_with("Bitácora Digital\n"));
    assert!(text.contains("Unidad:      Planta 2"));
    assert!(text.contains("Cumplimiento: 2 de 18 apartados con evidencia"));
    assert!(text.contains("/fotos/recepcion.jpg"));
}

#[test]
fn document_name_falls_back_to_generic_unit() {
    let s = session();
    assert_eq!(document_name(s.entry()), "Planta 2 - 2025-03-14 - Vespertino");

    let blank = Session::fresh(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    assert_eq!(document_name(blank.entry()), "Unidad - 2025-03-14 - Matutino");
}

#[test]
fn share_message_reports_the_tally() {
    let mut s = session();
    s.apply(Update::SetPhoto(
        NamedPhoto::ThermoAdjust,
        Some(Photo::new("/fotos/termo.jpg")),
    ))
    .unwrap();

    let msg = share_message(s.entry(), s.fulfillment());
    assert!(msg.starts_with("*Reporte: Bitácora Digital*\n"));
    assert!(msg.contains("📍 Unidad: Planta 2\n"));
    assert!(msg.contains("📅 Fecha: 2025-03-14\n"));
    assert!(msg.contains("⏰ Turno: Vespertino\n"));
    assert!(msg.contains("✅ Aplicaron 18 apartados, de los cuales 1 se cumplieron."));
    assert!(msg.ends_with("_Nota: Adjunta el documento PDF de tu reporte a este mensaje._"));

    let blank = Session::fresh(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    let msg = share_message(blank.entry(), blank.fulfillment());
    assert!(msg.contains("📍 Unidad: Sin especificar\n"));
}
