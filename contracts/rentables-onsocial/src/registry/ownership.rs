use crate::guards::hash_account_id;
use crate::*;

impl Contract {
    pub(crate) fn token(&self, token_id: TokenId) -> Result<&Token, RentablesError> {
        self.tokens_by_id
            .get(&token_id)
            .ok_or_else(RentablesError::invalid_token)
    }

    pub(crate) fn add_token_to_owner(&mut self, owner_id: &AccountId, token_id: TokenId) {
        self.tokens_per_owner
            .entry(owner_id.clone())
            .or_insert_with(|| {
                IterableSet::new(StorageKey::TokensPerOwnerInner {
                    account_id_hash: hash_account_id(owner_id),
                })
            })
            .insert(token_id);
    }

    // Index invariant: swap-remove, so the last token of the owner takes the freed slot.
    pub(crate) fn remove_token_from_owner(&mut self, owner_id: &AccountId, token_id: TokenId) {
        if let Some(owner_tokens) = self.tokens_per_owner.get_mut(owner_id) {
            owner_tokens.remove(&token_id);
            if owner_tokens.is_empty() {
                self.tokens_per_owner.remove(owner_id);
            }
        }
    }

    pub(crate) fn is_operator(&self, owner_id: &AccountId, operator_id: &AccountId) -> bool {
        self.operators
            .get(owner_id)
            .is_some_and(|ops| ops.contains(operator_id))
    }

    /// Owner, a per-token approved account, or an account-wide operator of the owner.
    pub(crate) fn is_owner_or_approved(&self, actor_id: &AccountId, token: &Token) -> bool {
        actor_id == &token.owner_id
            || token.approved_account_ids.contains_key(actor_id)
            || self.is_operator(&token.owner_id, actor_id)
    }
}
