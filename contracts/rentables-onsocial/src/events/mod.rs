mod builder;
mod types;

mod contract;
mod nep171;
mod rental;
mod token;

pub use contract::*;
pub use nep171::*;
pub use rental::*;
pub use token::*;

pub(crate) const STANDARD: &str = "onsocial";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const RENTAL: &str = "RENTAL_UPDATE";
pub(crate) const TOKEN: &str = "TOKEN_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
