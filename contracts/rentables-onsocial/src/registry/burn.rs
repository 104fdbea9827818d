use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Owner only. A non-owner gets the same `InvalidToken` error as a missing token.
    #[payable]
    #[handle_result]
    pub fn nft_burn(&mut self, token_id: U64) -> Result<(), RentablesError> {
        check_one_yocto()?;
        let actor_id = env::predecessor_account_id();

        self.burn(&actor_id, token_id.0)
    }
}

impl Contract {
    pub(crate) fn burn(&mut self, actor_id: &AccountId, token_id: TokenId) -> Result<(), RentablesError> {
        let owner_id = match self.tokens_by_id.get(&token_id) {
            Some(token) if &token.owner_id == actor_id => token.owner_id.clone(),
            _ => return Err(RentablesError::invalid_token()),
        };

        self.tokens_by_id.remove(&token_id);
        self.remove_token_from_owner(&owner_id, token_id);
        self.clear_user_on_burn(actor_id, token_id);

        events::emit_burn(owner_id.as_str(), &[token_id.to_string()], None);
        Ok(())
    }
}
