//! Staff roster sized by the headcount field.

use crate::models::{ItemId, LogbookEntry, StaffField, StaffRow};

/// Upper bound for the roster size; larger inputs are clamped to it.
pub const MAX_HEADCOUNT: usize = 999;

/// Read a headcount the way a lenient numeric input does: leading whitespace
/// and an optional sign, then the leading digits. Anything that does not
/// start with a number, or is negative, counts as zero.
pub fn parse_headcount(raw: &str) -> usize {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if digits.is_empty() || negative {
        return 0;
    }

    digits
        .parse::<usize>()
        .unwrap_or(MAX_HEADCOUNT)
        .min(MAX_HEADCOUNT)
}

/// Store the raw headcount and resize the roster to match.
///
/// Growing appends default rows after the existing ones. Shrinking keeps the
/// first `n` rows and drops the rest; dropped rows are gone for good.
/// Returns the new roster length.
pub fn set_headcount(entry: &mut LogbookEntry, raw: &str) -> usize {
    let count = parse_headcount(raw);

    if count > entry.staff_list.len() {
        let missing = count - entry.staff_list.len();
        for _ in 0..missing {
            let id = entry.allocate_id();
            entry.staff_list.push(StaffRow::new(id));
        }
    } else {
        entry.staff_list.truncate(count);
    }

    entry.staff_count = raw.to_string();
    count
}

/// Update the name or one check of the row with `id`. Returns `false` when
/// no row matches.
pub fn update_staff(entry: &mut LogbookEntry, id: ItemId, field: StaffField) -> bool {
    let Some(row) = entry.staff_list.iter_mut().find(|r| r.id == id) else {
        return false;
    };

    match field {
        StaffField::Name(name) => row.name = name,
        StaffField::Check(check, value) => row.set_check(check, value),
    }
    true
}
