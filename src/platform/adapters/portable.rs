use super::{DeviceIdentity, ScreenLauncher};
use crate::error::{CoreError, CoreResult};
use crate::platform::types::NavigationTarget;

/// Fallback adapter for hosts without a native activity layer. Reports no
/// manufacturer and rejects every launch.
#[derive(Debug, Default)]
pub struct PortablePlatform;

impl PortablePlatform {
    pub fn new() -> Self {
        Self
    }
}

impl DeviceIdentity for PortablePlatform {
    fn manufacturer(&self) -> String {
        String::new()
    }
}

impl ScreenLauncher for PortablePlatform {
    fn launch_detached(&self, _target: Option<&NavigationTarget>) -> CoreResult<()> {
        Err(CoreError::Internal(
            "activity launch not supported on this platform".to_string(),
        ))
    }
}
