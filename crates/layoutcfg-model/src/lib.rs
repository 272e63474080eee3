pub mod device;
pub mod enums;
pub mod error;
pub mod qualifier;
pub mod qualifier_set;
pub mod resource;

pub use device::{Device, DeviceConfig};
pub use enums::{
    Density, KeyboardState, NavigationMethod, ScreenDimension, ScreenOrientation,
    TextInputMethod, TouchScreen,
};
pub use error::{ModelError, Result};
pub use qualifier::{LOCALE_SENTINEL, QualifierKind, ResourceQualifier};
pub use qualifier_set::QualifierSet;
pub use resource::{ConfiguredResources, ResourceMap, ResourceType, ResourceValue, resource_map};
