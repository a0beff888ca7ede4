use serde::{Deserialize, Serialize};

/// Identifies an external screen: an application package and an entry point
/// class within it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationTarget {
    pub package: String,
    pub class: String,
}

impl NavigationTarget {
    pub fn new(package: &str, class: &str) -> Self {
        Self {
            package: package.to_string(),
            class: class.to_string(),
        }
    }
}
