pub mod phone;
pub mod reference;

pub use phone::{normalize_phone, PhoneNumber};
pub use reference::ReferenceEntry;
