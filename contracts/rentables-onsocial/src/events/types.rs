use near_sdk::serde::Serialize;
use near_sdk::serde_json::{Map, Value};

#[derive(Serialize, Clone, Debug)]
#[serde(crate = "near_sdk::serde")]
pub(crate) struct Event {
    pub(crate) standard: String,
    pub(crate) version: String,
    pub(crate) event: String,
    pub(crate) data: Vec<EventData>,
}

#[derive(Serialize, Clone, Debug)]
#[serde(crate = "near_sdk::serde")]
pub(crate) struct EventData {
    pub(crate) operation: String,
    pub(crate) author: String,
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}

/// NEP-171 envelope: `data` carries the bare field objects, no operation/author.
#[derive(Serialize, Clone, Debug)]
#[serde(crate = "near_sdk::serde")]
pub(crate) struct Nep171Log {
    pub(crate) standard: String,
    pub(crate) version: String,
    pub(crate) event: String,
    pub(crate) data: Vec<Map<String, Value>>,
}
