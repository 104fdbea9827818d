use near_sdk::json_types::U64;
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, Gas, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;
mod validation;

mod capability;
mod events;
mod metadata;

mod registry;
mod rental;
mod storage;

mod admin;
mod upgrade;


pub use capability::Capability;
pub use constants::*;
pub use errors::RentablesError;
pub use metadata::RentablesContractMetadata;
pub use registry::types::{Token, TokenView};
pub use rental::types::{RentalPolicy, UserInfo, UserRecord};
pub use storage::StorageKey;

/// Token identifiers are assigned sequentially from 1 and never reused.
pub type TokenId = u64;

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/OnSocial-Labs/onsocial-protocol",
        standard(standard = "nep171", version = "1.2.0"),
        standard(standard = "nep177", version = "2.0.0"),
        standard(standard = "nep178", version = "1.0.0"),
        standard(standard = "nep181", version = "1.0.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,

    pub tokens_by_id: IterableMap<TokenId, Token>,
    pub(crate) tokens_per_owner: LookupMap<AccountId, IterableSet<TokenId>>,
    // Account-wide operators: owner -> accounts allowed to act on every token of that owner.
    pub(crate) operators: LookupMap<AccountId, IterableSet<AccountId>>,
    pub next_token_id: TokenId,
    pub next_approval_id: u64,

    // Rental invariant: an entry exists only after `nft_set_user`; burn deletes it.
    pub(crate) users: LookupMap<TokenId, UserRecord>,
    pub rental_policy: RentalPolicy,

    pub contract_metadata: RentablesContractMetadata,
}
