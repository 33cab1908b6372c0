//! Core contact data model.

mod method;
mod phone;
mod record;
mod version;

pub(crate) use method::email_code;
pub use method::{ContactMethodEntry, ContactMethodKind};
pub use phone::{PhoneEntry, PhoneType};
pub use record::{ContactRecord, OrganizationEntry, Photo};
pub use version::VcardVersion;
