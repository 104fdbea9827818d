use std::collections::HashMap;

use crate::validation::validate_token_uri;
use crate::*;

#[near]
impl Contract {
    /// Open to any caller; the caller becomes the owner.
    /// Attached deposit must cover the token's storage plus its reserved rental slot.
    #[payable]
    #[handle_result]
    pub fn nft_mint(&mut self, token_uri: String) -> Result<U64, RentablesError> {
        let actor_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();

        let before = self.storage_usage_flushed();
        let token_id = self.mint(&actor_id, token_uri)?;
        let bytes_used = self
            .storage_usage_flushed()
            .saturating_sub(before)
            .saturating_add(USER_RECORD_RESERVED_BYTES);

        storage::charge_storage(&actor_id, bytes_used, deposit)?;
        Ok(U64(token_id))
    }
}

impl Contract {
    // Rental invariant: minting never touches `users`.
    pub(crate) fn mint(
        &mut self,
        actor_id: &AccountId,
        token_uri: String,
    ) -> Result<TokenId, RentablesError> {
        validate_token_uri(&token_uri)?;

        let token_id = self.next_token_id;
        self.next_token_id = self
            .next_token_id
            .checked_add(1)
            .ok_or_else(|| RentablesError::InternalError("Token ID counter overflow".into()))?;

        let token = Token {
            owner_id: actor_id.clone(),
            token_uri,
            approved_account_ids: HashMap::new(),
            minted_at: env::block_timestamp(),
        };
        self.tokens_by_id.insert(token_id, token);
        self.add_token_to_owner(actor_id, token_id);

        events::emit_mint(actor_id.as_str(), &[token_id.to_string()], None);
        Ok(token_id)
    }
}
