use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: U64,
        approval_id: Option<u64>,
        memo: Option<String>,
    ) -> Result<(), RentablesError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();

        self.transfer(&sender_id, &receiver_id, token_id.0, approval_id, memo)
    }
}

impl Contract {
    pub(crate) fn transfer(
        &mut self,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        token_id: TokenId,
        approval_id: Option<u64>,
        memo: Option<String>,
    ) -> Result<(), RentablesError> {
        let token = self.token(token_id)?;

        if &token.owner_id == receiver_id {
            return Err(RentablesError::InvalidInput(
                "Current and next owner must differ".into(),
            ));
        }

        let authorized = sender_id != &token.owner_id;
        if authorized {
            match token.approved_account_ids.get(sender_id) {
                Some(actual) => {
                    if approval_id.is_some_and(|expected| expected != *actual) {
                        return Err(RentablesError::NotAuthorized("Invalid approval ID".into()));
                    }
                }
                None if self.is_operator(&token.owner_id, sender_id) => {}
                None => {
                    return Err(RentablesError::NotAuthorized(
                        "Sender not authorized to transfer token".into(),
                    ));
                }
            }
        }

        let mut token = token.clone();
        let old_owner_id = token.owner_id.clone();

        self.remove_token_from_owner(&old_owner_id, token_id);

        token.owner_id = receiver_id.clone();
        token.approved_account_ids.clear();

        self.add_token_to_owner(receiver_id, token_id);
        self.tokens_by_id.insert(token_id, token);

        self.clear_user_on_transfer(sender_id, token_id);

        events::emit_transfer(
            old_owner_id.as_str(),
            receiver_id.as_str(),
            &[token_id.to_string()],
            authorized.then_some(sender_id.as_str()),
            memo.as_deref(),
        );
        Ok(())
    }
}
