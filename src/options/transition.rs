use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

/// Camera transition timing and curve.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Transition", inline)]
#[serde(default)]
pub struct TransitionOptions {
    /// Length of a mode-to-mode camera move in milliseconds.
    #[schemars(title = "Duration (ms)", range(min = 0, max = 5000), extend("step" = 50))]
    pub duration_ms: u64,
    /// Curve applied to transition progress.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
}

impl TransitionOptions {
    /// Duration as a [`Duration`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            easing: EasingFunction::DEFAULT,
        }
    }
}
