//! Extras resources
//!
//! Handles: tags (`netbox_tag`), custom fields (`netbox_custom_field`)

pub mod custom_field;
pub mod tag;
