use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::TransformTransition;
use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transition", inline)]
#[serde(default)]
/// Timing of FLIP plays and drag snap-backs.
pub struct TransitionOptions {
    /// Transition length in milliseconds.
    #[schemars(title = "Duration (ms)", range(min = 0, max = 5000), extend("step" = 50))]
    pub duration_ms: u64,
    /// Interpolation curve.
    pub easing: EasingFunction,
}

impl TransitionOptions {
    /// Transition length.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// The configured transition.
    #[must_use]
    pub fn transition(&self) -> TransformTransition {
        TransformTransition::new(self.duration(), self.easing)
    }
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            duration_ms: 500,
            easing: EasingFunction::DEFAULT,
        }
    }
}
