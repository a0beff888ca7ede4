pub mod command;
pub mod error;
pub mod platform;
pub mod vendor;

pub use crate::command::{Command, CommandKind, CommandProcessor, Outcome, CHANNEL_NAME};
pub use crate::error::{CoreError, CoreResult};
pub use crate::platform::{
    default_platform, DeviceIdentity, NavigationTarget, ScreenLauncher, SharedDeviceIdentity,
    SharedScreenLauncher,
};
pub use crate::vendor::VendorTable;
