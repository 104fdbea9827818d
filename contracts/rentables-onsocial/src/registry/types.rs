use std::collections::HashMap;

use near_sdk::json_types::U64;
use near_sdk::{AccountId, near};

#[near(serializers = [borsh])]
#[derive(Clone)]
pub struct Token {
    pub owner_id: AccountId,
    pub token_uri: String,
    /// NEP-178 per-token approvals: account -> approval id.
    pub approved_account_ids: HashMap<AccountId, u64>,
    pub minted_at: u64,
}

#[near(serializers = [json])]
#[derive(Clone)]
pub struct TokenView {
    pub token_id: U64,
    pub owner_id: AccountId,
    pub token_uri: String,
    pub approved_account_ids: HashMap<AccountId, u64>,
    pub minted_at: U64,
    /// Live user; `None` once the rental term has passed.
    pub user: Option<AccountId>,
    pub user_expires: U64,
}
