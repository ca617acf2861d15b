use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Seed palette used when no items are configured.
pub const DEFAULT_ITEMS: [&str; 12] = [
    "gray",
    "rebeccapurple",
    "maroon",
    "turquoise",
    "limegreen",
    "black",
    "orange",
    "purple",
    "indigo",
    "green",
    "yellow",
    "red",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "List", inline)]
#[serde(default)]
/// Initial contents and shuffle behavior.
pub struct ListOptions {
    /// Item keys in their initial order.
    #[schemars(skip)]
    pub items: Vec<String>,
    /// Fixed seed for the shuffle trigger; `None` seeds from the OS.
    #[schemars(title = "Shuffle Seed")]
    pub shuffle_seed: Option<u64>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            items: DEFAULT_ITEMS.iter().map(|&key| key.to_owned()).collect(),
            shuffle_seed: None,
        }
    }
}
