use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `CloseOverlay` → `"Escape"`).
    pub bindings: HashMap<KeyAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        Self {
            bindings: HashMap::from([
                (KeyAction::CloseOverlay, "Escape".into()),
                (KeyAction::ToggleDebugCamera, "KeyC".into()),
            ]),
        }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find(|(_, bound)| bound.as_str() == key)
            .map(|(action, _)| *action)
    }

    /// Bind `action` to `key`, replacing its previous key.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
    }
}
