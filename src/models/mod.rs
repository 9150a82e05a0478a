//! Request payloads sent by the API test suite.
//!
//! Each type is default-constructible, serializes with the API's wire names,
//! and exposes those same names to the populator, so exclusion sets are
//! written the way the payload reads on the wire.

mod categories;
mod client_settings;
mod emv;
mod sla;
mod users;

pub use categories::{
    CategoryCreateRequest, CategoryMakeDefaultRequest, CategoryMoveRequest, CategoryRenameRequest,
    CategoryToggleRequest,
};
pub use client_settings::{
    ClientProfileCreateRequest, ClientProfileDeleteRequest, ClientProfileUpdateRequest,
    HotStampCreateRequest, HotStampUpdateRequest,
};
pub use emv::{EmvCardProfileCreateRequest, EmvCardProfileUpdateRequest};
pub use sla::{SlaCreateRequest, SlaUpdateRequest};
pub use users::{UsersCreateRequest, UsersUpdateRequest};
