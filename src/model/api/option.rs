use serde::{Deserialize, Serialize};

/// Request body for adding an option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOption {
    pub label: String,
}

#[cfg(test)]
impl NewOption {
    pub fn example() -> Self {
        Self {
            label: "Tunisia".to_string(),
        }
    }
}
