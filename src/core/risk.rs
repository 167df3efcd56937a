use crate::models::{RiskState, TemperatureScale};

/// Reclassify a reading after its temperature changed.
///
/// An at-risk reading sets `is_risk` and leaves `was_corrected` alone. A safe
/// reading clears `is_risk`; when the previous reading was at risk the item
/// is marked corrected, and that mark is never taken back.
pub fn reclassify(state: &mut RiskState, scale: TemperatureScale, reading: &str) {
    if scale.is_risk(reading) {
        state.is_risk = true;
    } else {
        if state.is_risk {
            state.was_corrected = true;
        }
        state.is_risk = false;
    }
}
