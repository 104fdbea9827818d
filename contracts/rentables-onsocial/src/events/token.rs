use near_sdk::AccountId;

use super::TOKEN;
use super::builder::EventBuilder;
use crate::TokenId;

pub fn emit_approval_granted(
    owner_id: &AccountId,
    token_id: TokenId,
    account_id: &AccountId,
    approval_id: u64,
) {
    EventBuilder::new(TOKEN, "approval_granted", owner_id)
        .field("token_id", token_id)
        .field("account_id", account_id)
        .field("approval_id", approval_id)
        .emit();
}

pub fn emit_approval_revoked(owner_id: &AccountId, token_id: TokenId, account_id: &AccountId) {
    EventBuilder::new(TOKEN, "approval_revoked", owner_id)
        .field("token_id", token_id)
        .field("account_id", account_id)
        .emit();
}

pub fn emit_all_approvals_revoked(owner_id: &AccountId, token_id: TokenId) {
    EventBuilder::new(TOKEN, "all_approvals_revoked", owner_id)
        .field("token_id", token_id)
        .emit();
}

pub fn emit_operator_updated(owner_id: &AccountId, operator_id: &AccountId, approved: bool) {
    EventBuilder::new(TOKEN, "operator_updated", owner_id)
        .field("operator_id", operator_id)
        .field("approved", approved)
        .emit();
}
