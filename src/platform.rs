mod adapters;
pub mod factory;
pub mod types;

pub use adapters::{
    DeviceIdentity, ScreenLauncher, SharedDeviceIdentity, SharedScreenLauncher,
};
pub use factory::default_platform;
pub use types::NavigationTarget;
