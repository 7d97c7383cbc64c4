//! Reference data: the WMI registry, fixed year/plant/model tables, name
//! normalization, and dataset diagnostics.

pub mod model;
pub mod normalize;
pub mod plant;
pub mod registry;
pub mod validate;
pub mod wmi;
pub mod year;

pub use self::normalize::manufacturer_key;
pub use self::registry::{ReferenceData, RegistryStatus};
pub use self::wmi::{WmiEntry, DEFAULT_WMI_REGISTRY_PATH};
