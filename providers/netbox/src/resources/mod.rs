//! Resource adapters, organized by NetBox API section:
//! - `ipam`: aggregates, RIRs, IPAM roles, VRFs
//! - `dcim`: sites, manufacturers, platforms
//! - `circuits`: circuit types
//! - `virtualization`: cluster groups, cluster types
//! - `tenancy`: tenant groups
//! - `extras`: tags, custom fields
//! - `users`: API tokens

pub mod circuits;
pub mod dcim;
pub mod extras;
pub mod ipam;
pub mod tenancy;
pub mod users;
pub mod virtualization;

pub use circuits::{CircuitTypeConfig, CircuitTypeResource, CircuitTypeState};
pub use dcim::manufacturer::{ManufacturerConfig, ManufacturerResource, ManufacturerState};
pub use dcim::platform::{PlatformConfig, PlatformResource, PlatformState};
pub use dcim::site::{SiteConfig, SiteResource, SiteState};
pub use extras::custom_field::{CustomFieldConfig, CustomFieldResource, CustomFieldState};
pub use extras::tag::{TagConfig, TagResource, TagState};
pub use ipam::aggregate::{AggregateConfig, AggregateResource, AggregateState};
pub use ipam::rir::{RirConfig, RirResource, RirState};
pub use ipam::role::{IpamRoleConfig, IpamRoleResource, IpamRoleState};
pub use ipam::vrf::{VrfConfig, VrfResource, VrfState};
pub use tenancy::{TenantGroupConfig, TenantGroupResource, TenantGroupState};
pub use users::{TokenConfig, TokenResource, TokenState};
pub use virtualization::{
    ClusterGroupConfig, ClusterGroupResource, ClusterGroupState, ClusterTypeConfig, ClusterTypeResource,
    ClusterTypeState,
};

use crate::schema::{Attribute, Constraint};

/// `slug` attribute: optional, computed from the name when unset
pub(crate) fn slug_attribute(min: usize, max: usize) -> Attribute {
    Attribute::optional_computed_string().with_constraint(Constraint::StringLength { min, max })
}
