use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::CoreError;

/// Channel identifier the host transport registers the plugin under.
pub const CHANNEL_NAME: &str = "android_autostart";

/// One inbound request crossing the plugin boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct Command {
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

impl Command {
    pub fn new(name: &str, args: Value) -> Self {
        Self {
            name: name.to_string(),
            args,
        }
    }
}

/// The closed set of operations this plugin version understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    CustomSetComponent,
    NavigateAutoStartSetting,
    AutoStartSettingIsAvailable,
}

impl CommandKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "customSetComponent" => Some(CommandKind::CustomSetComponent),
            "navigateAutoStartSetting" => Some(CommandKind::NavigateAutoStartSetting),
            "autoStartSettingIsAvailable" => Some(CommandKind::AutoStartSettingIsAvailable),
            _ => None,
        }
    }
}

/// Structured result reported back across the boundary for one command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// `true` when a launch was attempted and not rejected, `false` for any
    /// contained failure or skipped launch.
    Success(bool),
    Error {
        code: String,
        message: String,
        detail: Option<Value>,
    },
    /// The command name is unknown to this plugin version.
    NotImplemented,
}

impl Outcome {
    /// Standardised `{ ok, data }` / `{ ok, error }` response envelope.
    pub fn to_response(&self) -> Value {
        match self {
            Outcome::Success(attempted) => json!({ "ok": true, "data": attempted }),
            Outcome::Error {
                code,
                message,
                detail,
            } => {
                let mut error = json!({ "code": code, "message": message });
                if let Some(detail) = detail {
                    error["detail"] = detail.clone();
                }
                json!({ "ok": false, "error": error })
            }
            Outcome::NotImplemented => json!({
                "ok": false,
                "error": { "code": "not_implemented", "message": "method not implemented" }
            }),
        }
    }
}

impl From<CoreError> for Outcome {
    fn from(error: CoreError) -> Self {
        match &error {
            CoreError::InvalidArguments(detail) => Outcome::Error {
                code: error.code().to_string(),
                message: "Missing required arguments".to_string(),
                detail: Some(Value::String(detail.clone())),
            },
            CoreError::Internal(message) => Outcome::Error {
                code: error.code().to_string(),
                message: message.clone(),
                detail: None,
            },
        }
    }
}
