pub mod entry;
pub mod items;
pub mod photo;
pub mod section;
pub mod shift;
pub mod staff;
pub mod temperature;

pub use entry::{LogbookEntry, TextField};
pub use items::{
    FieldValue, FridgeUnit, ItemField, ItemId, ItemTemplate, ListItem, ListName,
    PairedEvidenceItem, PhotoItem, RiskState, SingleEvidenceItem,
};
pub use photo::{NamedPhoto, Photo, PhotoSlots, SlotArray};
pub use section::{ApplicabilityMap, Phase, SectionKey};
pub use shift::Shift;
pub use staff::{GroomingCheck, StaffField, StaffRow};
pub use temperature::TemperatureScale;
