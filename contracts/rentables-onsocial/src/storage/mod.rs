mod charge;
mod flush;
mod types;

pub(crate) use charge::charge_storage;
pub use types::StorageKey;
