use near_sdk::AccountId;

use super::RENTAL;
use super::builder::EventBuilder;
use crate::TokenId;

/// Emitted on every successful `nft_set_user` and whenever a record is cleared
/// by burn or transfer (`user: null, expires: "0"`).
pub fn emit_update_user(
    actor_id: &AccountId,
    token_id: TokenId,
    user: Option<&AccountId>,
    expires: u64,
) {
    EventBuilder::new(RENTAL, "update_user", actor_id)
        .field("token_id", token_id)
        .field("user", user)
        .field("expires", expires)
        .emit();
}
