use crate::guards::{check_one_yocto, now_secs};
use crate::*;

#[near]
impl Contract {
    /// ERC-4907 `setUser`. `user: None` assigns nobody; a past `expires` is accepted
    /// and yields a record that reads as already expired.
    #[payable]
    #[handle_result]
    pub fn nft_set_user(
        &mut self,
        token_id: U64,
        user: Option<AccountId>,
        expires: U64,
    ) -> Result<(), RentablesError> {
        check_one_yocto()?;
        let actor_id = env::predecessor_account_id();

        self.set_user(&actor_id, token_id.0, user, expires.0)
    }
}

impl Contract {
    pub(crate) fn set_user(
        &mut self,
        actor_id: &AccountId,
        token_id: TokenId,
        user: Option<AccountId>,
        expires: u64,
    ) -> Result<(), RentablesError> {
        let token = self.token(token_id)?;
        if !self.is_owner_or_approved(actor_id, token) {
            return Err(RentablesError::not_owner_nor_approved());
        }

        if !self.rental_policy.allow_owner_override_of_active_renter {
            // Re-assigning the current renter (e.g. extending the term) is still allowed.
            if let Some(current) = self.active_user(token_id) {
                if user.as_ref() != Some(current) {
                    return Err(RentablesError::already_rented());
                }
            }
        }

        self.users.insert(
            token_id,
            UserRecord {
                user: user.clone(),
                expires,
            },
        );

        events::emit_update_user(actor_id, token_id, user.as_ref(), expires);
        Ok(())
    }

    pub(crate) fn active_user(&self, token_id: TokenId) -> Option<&AccountId> {
        self.users
            .get(&token_id)
            .and_then(|record| record.active_user(now_secs()))
    }

    pub(crate) fn user_expires(&self, token_id: TokenId) -> u64 {
        self.users.get(&token_id).map_or(0, |record| record.expires)
    }
}
