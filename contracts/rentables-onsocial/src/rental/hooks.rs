use crate::*;

impl Contract {
    // Lifecycle invariant: a token changing hands does not carry its renter along.
    pub(crate) fn clear_user_on_transfer(&mut self, actor_id: &AccountId, token_id: TokenId) {
        if !self.rental_policy.clear_user_on_transfer {
            return;
        }
        if self.users.remove(&token_id).is_some() {
            events::emit_update_user(actor_id, token_id, None, 0);
        }
    }

    // Burn always reports the cleared pair, whether or not a record existed.
    pub(crate) fn clear_user_on_burn(&mut self, actor_id: &AccountId, token_id: TokenId) {
        self.users.remove(&token_id);
        events::emit_update_user(actor_id, token_id, None, 0);
    }
}
