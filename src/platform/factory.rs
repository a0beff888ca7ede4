use std::sync::Arc;

use super::adapters::portable::PortablePlatform;
use super::adapters::{SharedDeviceIdentity, SharedScreenLauncher};

/// Default port wiring for hosts that do not inject their own platform.
pub fn default_platform() -> (SharedDeviceIdentity, SharedScreenLauncher) {
    let platform = Arc::new(PortablePlatform::new());
    let identity: SharedDeviceIdentity = platform.clone();
    let launcher: SharedScreenLauncher = platform;
    (identity, launcher)
}
