use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::platform::{NavigationTarget, SharedDeviceIdentity, SharedScreenLauncher};
use crate::vendor::VendorTable;

use super::types::{Command, CommandKind, Outcome};

/// Dispatches inbound plugin commands and contains every platform-level
/// launch fault as a reported `false`.
pub struct CommandProcessor {
    table: VendorTable,
    identity: SharedDeviceIdentity,
    launcher: SharedScreenLauncher,
}

impl CommandProcessor {
    pub fn new(identity: SharedDeviceIdentity, launcher: SharedScreenLauncher) -> Self {
        Self {
            table: VendorTable::new(),
            identity,
            launcher,
        }
    }

    /// Handle one command end-to-end and produce its outcome.
    pub fn handle(&self, command: &Command) -> Outcome {
        let handled = match CommandKind::from_name(&command.name) {
            Some(CommandKind::CustomSetComponent) => self.custom_set_component(&command.args),
            Some(CommandKind::NavigateAutoStartSetting) => Ok(self.navigate_auto_start_setting()),
            Some(CommandKind::AutoStartSettingIsAvailable) => {
                Ok(self.auto_start_setting_is_available())
            }
            None => return Outcome::NotImplemented,
        };
        handled.unwrap_or_else(Outcome::from)
    }

    /// Launch a caller-supplied component, but only when the caller's
    /// manufacturer claim matches the running device. On a mismatch the
    /// launch is attempted with no component at all, which the platform
    /// rejects.
    fn custom_set_component(&self, args: &Value) -> CoreResult<Outcome> {
        let manufacturer = required_string(args, "manufacturer")?;
        let pkg = required_string(args, "pkg")?;
        let cls = required_string(args, "cls")?;

        let device = self.identity.manufacturer();
        let target = if device.eq_ignore_ascii_case(&manufacturer) {
            Some(NavigationTarget::new(&pkg, &cls))
        } else {
            None
        };
        Ok(self.attempt_launch(target.as_ref()))
    }

    fn navigate_auto_start_setting(&self) -> Outcome {
        let device = self.identity.manufacturer();
        match self.table.lookup(&device) {
            Some(target) => self.attempt_launch(Some(target)),
            None => {
                tracing::debug!("no autostart screen known for manufacturer {device:?}");
                Outcome::Success(false)
            }
        }
    }

    fn auto_start_setting_is_available(&self) -> Outcome {
        Outcome::Success(self.table.is_supported(&self.identity.manufacturer()))
    }

    fn attempt_launch(&self, target: Option<&NavigationTarget>) -> Outcome {
        match self.launcher.launch_detached(target) {
            Ok(()) => Outcome::Success(true),
            Err(error) => {
                tracing::warn!("autostart launch failed: {error}");
                Outcome::Success(false)
            }
        }
    }
}

fn required_string(input: &Value, key: &str) -> CoreResult<String> {
    input
        .get(key)
        .and_then(|raw| raw.as_str())
        .map(|value| value.to_string())
        .ok_or_else(|| CoreError::InvalidArguments(format!("missing {key}")))
}
