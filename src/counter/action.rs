//! Actions for the counter.

use serde::{Deserialize, Serialize};

use crate::mvi::{Action, INIT_ACTION_TYPE};

/// Type tag of [`CounterAction::IncreaseCount`].
pub const INCREASE_COUNT: &str = "INCREASE_COUNT";

/// Actions that can be dispatched to the counter reducer.
///
/// On the wire an action is a JSON object with a `type` field, e.g.
/// `{"type":"INCREASE_COUNT"}`. Extra fields are ignored and tags the
/// counter does not know become [`CounterAction::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAction", into = "RawAction")]
pub enum CounterAction {
    /// Store initialization (`@@INIT`).
    Init,

    /// The button was clicked (`INCREASE_COUNT`).
    IncreaseCount,

    /// Any other tag. Absorbed by the reducer.
    Other(String),
}

impl Action for CounterAction {
    fn init() -> Self {
        Self::Init
    }

    fn action_type(&self) -> &str {
        match self {
            Self::Init => INIT_ACTION_TYPE,
            Self::IncreaseCount => INCREASE_COUNT,
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for CounterAction {
    fn from(tag: &str) -> Self {
        match tag {
            INIT_ACTION_TYPE => Self::Init,
            INCREASE_COUNT => Self::IncreaseCount,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
}

impl From<RawAction> for CounterAction {
    fn from(raw: RawAction) -> Self {
        Self::from(raw.kind.as_str())
    }
}

impl From<CounterAction> for RawAction {
    fn from(action: CounterAction) -> Self {
        Self {
            kind: action.action_type().to_string(),
        }
    }
}
