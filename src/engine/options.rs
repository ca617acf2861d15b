//! Options methods for ReorderController

use std::path::Path;
use std::time::Duration;

use super::ReorderController;
use crate::host::Host;
use crate::options::Options;

impl<H: Host> ReorderController<H> {
    /// Replace options and apply them to the FLIP engine.
    ///
    /// Transitions already scheduled keep their old timing; the new values
    /// apply from the next layout cycle on.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.apply_options();
    }

    /// Push current option values to the engine.
    fn apply_options(&mut self) {
        self.flip.set_transition(self.options.transition.transition());
    }

    /// Change the FLIP and snap-back duration.
    pub fn set_transition_duration(&mut self, duration: Duration) {
        self.options.transition.duration_ms =
            u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self.apply_options();
    }

    /// Load options from a TOML preset. Returns true on success.
    pub fn load_options(&mut self, path: &Path) -> bool {
        match Options::load(path) {
            Ok(opts) => {
                log::info!("Loaded options from '{}'", path.display());
                self.set_options(opts);
                true
            }
            Err(e) => {
                log::error!(
                    "Failed to load options from '{}': {e}",
                    path.display()
                );
                false
            }
        }
    }

    /// Save the current options as a TOML preset. Returns true on success.
    pub fn save_options(&self, path: &Path) -> bool {
        match self.options.save(path) {
            Ok(()) => {
                log::info!("Saved options to '{}'", path.display());
                true
            }
            Err(e) => {
                log::error!(
                    "Failed to save options to '{}': {e}",
                    path.display()
                );
                false
            }
        }
    }
}
