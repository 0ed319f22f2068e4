//! Badge colouring for object statuses.

use serde::{Deserialize, Serialize};

/// Visual category of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BadgeTone {
    Blue,
    Yellow,
    Orange,
    Green,
    Red,
    /// Neutral tone for codes without a dedicated colour.
    Gray,
}

impl BadgeTone {
    /// Returns the utility class used by the web front end.
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeTone::Blue => "bg-blue-500",
            BadgeTone::Yellow => "bg-yellow-500",
            BadgeTone::Orange => "bg-orange-500",
            BadgeTone::Green => "bg-green-500",
            BadgeTone::Red => "bg-red-500",
            BadgeTone::Gray => "bg-gray-500",
        }
    }
}

/// Maps an object status code to its badge tone.
pub fn object_status_badge(status: &str) -> BadgeTone {
    match status {
        "NEW" => BadgeTone::Blue,
        "INTEREST" => BadgeTone::Yellow,
        "CALLBACK" => BadgeTone::Orange,
        "DONE" => BadgeTone::Green,
        "REJECTED" => BadgeTone::Red,
        _ => BadgeTone::Gray,
    }
}
