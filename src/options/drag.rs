use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Drag", inline)]
#[serde(default)]
/// Drag gesture behavior.
pub struct DragOptions {
    /// Ask the host to suppress its translucent drag preview.
    #[schemars(title = "Hide Drag Image")]
    pub hide_drag_image: bool,
    /// Animate a dropped item back to its slot instead of jumping.
    #[schemars(title = "Snap Back")]
    pub snap_back: bool,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            hide_drag_image: true,
            snap_back: true,
        }
    }
}
