//! ValueEntry: one selectable option of an enum-valued property.

use serde::{Deserialize, Serialize};

/// A display-ready enum value: the stored `name` and the text shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueEntry {
    pub name: String,
    pub display_name: String,
}

impl ValueEntry {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
        }
    }

    /// An entry whose display text is its own name.
    pub fn verbatim(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
        }
    }
}
