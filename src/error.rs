//! Crate-level error types.

use std::fmt;

use crate::item::ItemId;

/// Errors produced by the glidelist crate.
///
/// Every failure is local to one operation and non-fatal: the caller can
/// ignore the error and the controller stays consistent.
#[derive(Debug)]
pub enum GlideError {
    /// The host has no rendered node for this item.
    NotRendered(ItemId),
    /// A swap named an item that is not part of the order.
    InvalidSwap {
        /// First item of the rejected swap.
        a: ItemId,
        /// Second item of the rejected swap.
        b: ItemId,
    },
    /// An item identity appeared twice in an initial order.
    DuplicateItem(ItemId),
    /// A drag event arrived in a state that cannot accept it.
    InvalidDragTransition {
        /// Name of the offending event (`start`, `move`, `enter`, `end`).
        event: &'static str,
        /// Name of the state the machine was in.
        state: &'static str,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for GlideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRendered(item) => {
                write!(f, "item '{item}' is not rendered")
            }
            Self::InvalidSwap { a, b } => {
                write!(f, "cannot swap '{a}' and '{b}': item not in order")
            }
            Self::DuplicateItem(item) => {
                write!(f, "duplicate item '{item}' in order")
            }
            Self::InvalidDragTransition { event, state } => {
                write!(f, "drag '{event}' is not valid while {state}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for GlideError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GlideError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GlideError::InvalidSwap {
            a: ItemId::from("red"),
            b: ItemId::from("blue"),
        };
        assert_eq!(
            err.to_string(),
            "cannot swap 'red' and 'blue': item not in order"
        );

        let err = GlideError::InvalidDragTransition {
            event: "move",
            state: "idle",
        };
        assert_eq!(err.to_string(), "drag 'move' is not valid while idle");
    }

    #[test]
    fn test_io_source() {
        use std::error::Error;

        let err = GlideError::from(std::io::Error::other("boom"));
        assert!(err.source().is_some());
        assert!(GlideError::NotRendered(ItemId::from("x")).source().is_none());
    }
}
