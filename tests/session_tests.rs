use bitacora::core::roster::{MAX_HEADCOUNT, parse_headcount};
use bitacora::core::session::{Applied, Session, Update};
use bitacora::core::tally::{Fulfillment, section_has_evidence};
use bitacora::errors::AppError;
use bitacora::models::{
    FieldValue, GroomingCheck, ItemField, ItemId, ItemTemplate, ListName, LogbookEntry,
    NamedPhoto, Photo, SectionKey, SlotArray, StaffField, TextField,
};
use chrono::NaiveDate;
use std::collections::HashSet;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}

fn session() -> Session {
    Session::fresh(date())
}

fn add(s: &mut Session, list: ListName, template: ItemTemplate) -> ItemId {
    match s.apply(Update::AddItem(list, template)).unwrap() {
        Applied::ItemAdded(id) => id,
        other => panic!("expected ItemAdded, got {:?}", other),
    }
}

fn set_temp(s: &mut Session, list: ListName, id: ItemId, reading: &str) {
    let applied = s
        .apply(Update::UpdateField(list, id, ItemField::Temp, FieldValue::text(reading)))
        .unwrap();
    assert_eq!(applied, Applied::Changed);
}

fn all_ids(entry: &LogbookEntry) -> Vec<ItemId> {
    let mut ids: Vec<ItemId> = ListName::ALL
        .iter()
        .flat_map(|l| entry.item_ids(*l))
        .collect();
    ids.extend(entry.staff_list.iter().map(|r| r.id));
    ids
}

#[test]
fn fresh_entry_has_domain_defaults() {
    let s = session();
    let e = s.entry();

    assert_eq!(e.date, date());
    assert_eq!(e.shift.label(), "Matutino");
    assert_eq!(e.fv_ppm, "50");
    assert!(SectionKey::ALL.iter().all(|k| e.applies.applies(*k)));

    for list in [
        ListName::Cook,
        ListName::Reheat,
        ListName::Catering,
        ListName::HotBar,
        ListName::ColdBar,
        ListName::Retainers,
    ] {
        assert_eq!(e.item_ids(list).len(), 1, "list {}", list);
    }
    assert_eq!(e.fridges.len(), 4);
    assert!(e.staff_list.is_empty());
    assert!(e.staff_photos.is_empty());
    assert_eq!(e.handwash_photos.len(), 6);
    assert_eq!(e.cleaning_photos.len(), 4);
}

#[test]
fn ids_stay_unique_under_interleaved_add_and_remove() {
    let mut s = session();
    let mut seen: HashSet<ItemId> = all_ids(s.entry()).into_iter().collect();

    for round in 0..5 {
        let a = add(&mut s, ListName::Cook, ItemTemplate::named(format!("a{round}")));
        let b = add(&mut s, ListName::HotBar, ItemTemplate::default());
        assert!(seen.insert(a), "id {} handed out twice", a);
        assert!(seen.insert(b), "id {} handed out twice", b);

        assert_eq!(
            s.apply(Update::RemoveItem(ListName::Cook, a)).unwrap(),
            Applied::Changed
        );

        // removing the newest item must not let its id come back
        let c = add(&mut s, ListName::Cook, ItemTemplate::default());
        assert!(seen.insert(c), "id {} handed out twice", c);
    }

    s.apply(Update::SetHeadcount("3".into())).unwrap();
    for id in s.entry().staff_list.iter().map(|r| r.id) {
        assert!(seen.insert(id), "roster id {} collides", id);
    }

    let current = all_ids(s.entry());
    let unique: HashSet<ItemId> = current.iter().copied().collect();
    assert_eq!(current.len(), unique.len());
}

#[test]
fn removing_unknown_id_is_a_no_op() {
    let mut s = session();
    let before = s.entry().clone();

    let applied = s
        .apply(Update::RemoveItem(ListName::Cook, ItemId(9999)))
        .unwrap();

    assert_eq!(applied, Applied::NoMatch);
    assert_eq!(s.entry(), &before);
}

#[test]
fn updating_one_field_keeps_the_others() {
    let mut s = session();
    let id = add(
        &mut s,
        ListName::Catering,
        ItemTemplate {
            name: "Sopa".into(),
            temp_out: "80".into(),
            ..ItemTemplate::default()
        },
    );

    s.apply(Update::UpdateField(
        ListName::Catering,
        id,
        ItemField::TempIn,
        FieldValue::text("72"),
    ))
    .unwrap();

    let item = s
        .entry()
        .catering_list
        .iter()
        .find(|i| i.id == id)
        .unwrap();
    assert_eq!(item.name, "Sopa");
    assert_eq!(item.temp_out, "80");
    assert_eq!(item.temp_in, "72");
}

#[test]
fn field_outside_item_shape_is_rejected() {
    let mut s = session();
    let fridge = s.entry().item_ids(ListName::Fridges)[0];
    let before = s.entry().clone();

    let err = s
        .apply(Update::UpdateField(
            ListName::Fridges,
            fridge,
            ItemField::Temp,
            FieldValue::text("4°C"),
        ))
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidField { .. }));
    assert_eq!(s.entry(), &before);
}

#[test]
fn reading_outside_the_scale_is_rejected() {
    let mut s = session();
    let id = s.entry().item_ids(ListName::ColdBar)[0];

    let err = s
        .apply(Update::UpdateField(
            ListName::ColdBar,
            id,
            ItemField::Temp,
            FieldValue::text("63°C"),
        ))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidReading { .. }));

    // free-text lists take anything
    let cook = s.entry().item_ids(ListName::Cook)[0];
    set_temp(&mut s, ListName::Cook, cook, "74 grados");
}

#[test]
fn slot_index_out_of_range_is_rejected() {
    let mut s = session();

    let err = s
        .apply(Update::SetSlot(SlotArray::Cleaning, 4, Some(Photo::new("/x.jpg"))))
        .unwrap_err();
    assert!(matches!(err, AppError::SlotOutOfRange { index: 4, len: 4, .. }));

    s.apply(Update::SetSlot(SlotArray::Handwash, 5, Some(Photo::new("/x.jpg"))))
        .unwrap();
    assert_eq!(s.entry().handwash_photos.len(), 6);
    assert_eq!(s.entry().handwash_photos.filled(), 1);
}

#[test]
fn ppm_must_be_one_of_the_options() {
    let mut s = session();

    s.apply(Update::SetText(TextField::FvPpm, "150".into()))
        .unwrap();
    assert_eq!(s.entry().fv_ppm, "150");

    let err = s
        .apply(Update::SetText(TextField::FvPpm, "75".into()))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidPpm(_)));
    assert_eq!(s.entry().fv_ppm, "150");
}

#[test]
fn headcount_grows_and_shrinks_preserving_rows() {
    let mut s = session();

    assert_eq!(
        s.apply(Update::SetHeadcount("2".into())).unwrap(),
        Applied::Headcount(2)
    );
    let first = s.entry().staff_list[0].id;
    s.apply(Update::UpdateStaff(first, StaffField::Name("Luis".into())))
        .unwrap();

    s.apply(Update::SetHeadcount("4".into())).unwrap();
    let e = s.entry();
    assert_eq!(e.staff_list.len(), 4);
    assert_eq!(e.staff_list[0].name, "Luis");
    assert!(e.staff_list[1..].iter().all(|r| r.name.is_empty() && r.all_passed()));

    s.apply(Update::SetHeadcount("1".into())).unwrap();
    let e = s.entry();
    assert_eq!(e.staff_list.len(), 1);
    assert_eq!(e.staff_list[0].id, first);
    assert_eq!(e.staff_list[0].name, "Luis");
    assert_eq!(e.staff_count, "1");
}

#[test]
fn malformed_headcount_counts_as_zero() {
    assert_eq!(parse_headcount(""), 0);
    assert_eq!(parse_headcount("abc"), 0);
    assert_eq!(parse_headcount("-3"), 0);
    assert_eq!(parse_headcount(" 7 personas"), 7);
    assert_eq!(parse_headcount("1000000"), MAX_HEADCOUNT);

    let mut s = session();
    s.apply(Update::SetHeadcount("3".into())).unwrap();
    assert_eq!(
        s.apply(Update::SetHeadcount("tres".into())).unwrap(),
        Applied::Headcount(0)
    );
    assert!(s.entry().staff_list.is_empty());
    assert_eq!(s.entry().staff_count, "tres");
}

#[test]
fn roster_scenario_uncheck_then_shrink() {
    let mut s = session();

    s.apply(Update::SetHeadcount("3".into())).unwrap();
    let rows = s.entry().staff_list.clone();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.all_passed()));

    s.apply(Update::UpdateStaff(
        rows[1].id,
        StaffField::Check(GroomingCheck::Mask, false),
    ))
    .unwrap();

    let after = &s.entry().staff_list;
    assert!(!after[1].check(GroomingCheck::Mask));
    assert!(after[1].check(GroomingCheck::Uniform));
    assert_eq!(after[0], rows[0]);
    assert_eq!(after[2], rows[2]);

    s.apply(Update::SetHeadcount("1".into())).unwrap();
    assert_eq!(s.entry().staff_list, vec![rows[0].clone()]);
}

#[test]
fn staff_update_on_unknown_row_is_a_no_op() {
    let mut s = session();
    s.apply(Update::SetHeadcount("1".into())).unwrap();
    let before = s.entry().clone();

    let applied = s
        .apply(Update::UpdateStaff(
            ItemId(4242),
            StaffField::Check(GroomingCheck::Watch, false),
        ))
        .unwrap();

    assert_eq!(applied, Applied::NoMatch);
    assert_eq!(s.entry(), &before);
}

#[test]
fn was_corrected_is_sticky() {
    let mut s = session();
    let id = add(&mut s, ListName::ColdBar, ItemTemplate::named("Ensalada"));
    let item = |s: &Session| s.entry().single_item(ListName::ColdBar, id).unwrap().clone();

    set_temp(&mut s, ListName::ColdBar, id, "5°C");
    assert!(!item(&s).risk.unwrap().is_risk);
    assert!(!item(&s).risk.unwrap().was_corrected);

    set_temp(&mut s, ListName::ColdBar, id, "Mayor a 7°C");
    assert!(item(&s).risk.unwrap().is_risk);
    assert!(!item(&s).risk.unwrap().was_corrected);

    set_temp(&mut s, ListName::ColdBar, id, "4°C");
    assert!(!item(&s).risk.unwrap().is_risk);
    assert!(item(&s).risk.unwrap().was_corrected);

    // back to risk and out again: the mark stays
    set_temp(&mut s, ListName::ColdBar, id, "Mayor a 7°C");
    assert!(item(&s).risk.unwrap().is_risk);
    assert!(item(&s).risk.unwrap().was_corrected);

    set_temp(&mut s, ListName::ColdBar, id, "");
    assert!(!item(&s).risk.unwrap().is_risk);
    assert!(item(&s).risk.unwrap().was_corrected);
}

#[test]
fn risk_is_not_evaluated_on_unclassified_lists() {
    let mut s = session();
    let id = s.entry().item_ids(ListName::Reheat)[0];

    set_temp(&mut s, ListName::Reheat, id, "Menor a 60°C");

    let item = s.entry().single_item(ListName::Reheat, id).unwrap();
    assert!(item.risk.is_none());
}

#[test]
fn risk_fields_are_kept_off_unclassified_lists() {
    let s = session();
    let json = serde_json::to_value(s.entry()).unwrap();

    for key in ["cookList", "reheatList"] {
        let item = &json[key][0];
        assert!(item.get("isRisk").is_none(), "{key}: {item}");
        assert!(item.get("wasCorrected").is_none(), "{key}: {item}");
    }
    for key in ["hotBarList", "coldBarList"] {
        assert_eq!(json[key][0]["isRisk"], false, "{key}");
        assert_eq!(json[key][0]["wasCorrected"], false, "{key}");
    }
}

#[test]
fn staff_photo_batch_entries_need_a_photo() {
    let mut s = session();
    let before = s.entry().clone();

    let err = s
        .apply(Update::AddItem(ListName::StaffPhotos, ItemTemplate::named("Juan")))
        .unwrap_err();
    assert!(matches!(err, AppError::PhotoRequired(_)));
    assert_eq!(s.entry(), &before);

    let template = ItemTemplate {
        photo: Some(Photo::new("/fotos/juan.jpg")),
        ..ItemTemplate::named("Juan")
    };
    add(&mut s, ListName::StaffPhotos, template);
    assert_eq!(s.entry().item_ids(ListName::StaffPhotos).len(), 1);
}

#[test]
fn hot_bar_scenario_risk_correction_and_evidence() {
    let mut s = session();
    let id = add(&mut s, ListName::HotBar, ItemTemplate::named("Arroz"));

    set_temp(&mut s, ListName::HotBar, id, "Menor a 60°C");
    assert!(s.entry().single_item(ListName::HotBar, id).unwrap().risk.unwrap().is_risk);

    s.apply(Update::UpdateField(
        ListName::HotBar,
        id,
        ItemField::Photo,
        FieldValue::photo(Photo::new("/fotos/arroz.jpg")),
    ))
    .unwrap();

    set_temp(&mut s, ListName::HotBar, id, "63°C");
    let item = s.entry().single_item(ListName::HotBar, id).unwrap();
    let risk = item.risk.unwrap();
    assert!(!risk.is_risk);
    assert!(risk.was_corrected);
    assert_eq!(item.name, "Arroz");

    assert!(s.entry().applies.applies(SectionKey::HotBar));
    assert!(section_has_evidence(s.entry(), SectionKey::HotBar));
    assert!(s.report().section(SectionKey::HotBar).unwrap().fulfilled);
}

fn only(section: SectionKey) -> Session {
    let mut s = session();
    for key in SectionKey::ALL {
        s.apply(Update::SetApplies(key, key == section)).unwrap();
    }
    s
}

#[test]
fn tally_nothing_applies() {
    let mut s = session();
    for key in SectionKey::ALL {
        s.apply(Update::SetApplies(key, false)).unwrap();
    }
    s.apply(Update::SetPhoto(NamedPhoto::HandoverSalon, Some(Photo::new("/a.jpg"))))
        .unwrap();

    assert_eq!(
        s.fulfillment(),
        Fulfillment {
            applicable: 0,
            fulfilled: 0
        }
    );
}

#[test]
fn tally_applicable_without_evidence() {
    let s = only(SectionKey::Chlorine);
    assert_eq!(
        s.fulfillment(),
        Fulfillment {
            applicable: 1,
            fulfilled: 0
        }
    );
}

#[test]
fn tally_applicable_with_evidence() {
    let mut s = only(SectionKey::Chlorine);
    s.apply(Update::SetPhoto(
        NamedPhoto::ChlorineMeasure,
        Some(Photo::new("/cloro.jpg")),
    ))
    .unwrap();

    assert_eq!(
        s.fulfillment(),
        Fulfillment {
            applicable: 1,
            fulfilled: 1
        }
    );

    s.apply(Update::SetPhoto(NamedPhoto::ChlorineMeasure, None))
        .unwrap();
    assert_eq!(s.fulfillment().fulfilled, 0);
}

#[test]
fn slot_and_list_photos_count_as_evidence() {
    let mut s = session();
    assert_eq!(s.fulfillment().fulfilled, 0);
    assert_eq!(s.fulfillment().applicable, SectionKey::COUNT);

    s.apply(Update::SetSlot(SlotArray::Handwash, 0, Some(Photo::new("/h.jpg"))))
        .unwrap();
    let fridge = s.entry().item_ids(ListName::Fridges)[2];
    s.apply(Update::UpdateField(
        ListName::Fridges,
        fridge,
        ItemField::PhotoFood,
        FieldValue::photo(Photo::new("/f.jpg")),
    ))
    .unwrap();

    assert!(section_has_evidence(s.entry(), SectionKey::Handwash));
    assert!(section_has_evidence(s.entry(), SectionKey::Fridge));
    assert_eq!(s.fulfillment().fulfilled, 2);
}

#[test]
fn applicability_round_trips_through_json() {
    let mut s = session();
    s.apply(Update::SetApplies(SectionKey::Witness, false))
        .unwrap();

    let json = serde_json::to_string(s.entry()).unwrap();
    let back: LogbookEntry = serde_json::from_str(&json).unwrap();
    assert!(!back.applies.applies(SectionKey::Witness));
    assert!(back.applies.applies(SectionKey::Cooling));

    // ids keep counting after a reload
    let mut reloaded = Session::new(back);
    let fresh = add(&mut reloaded, ListName::Cook, ItemTemplate::default());
    assert!(!all_ids(s.entry()).contains(&fresh));
}
