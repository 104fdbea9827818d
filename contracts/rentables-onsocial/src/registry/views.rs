use crate::*;

#[near]
impl Contract {
    pub fn nft_token(&self, token_id: U64) -> Option<TokenView> {
        self.tokens_by_id
            .get(&token_id.0)
            .map(|token| self.token_view(token_id.0, token))
    }

    pub fn token_exists(&self, token_id: U64) -> bool {
        self.tokens_by_id.contains_key(&token_id.0)
    }

    #[handle_result]
    pub fn owner_of(&self, token_id: U64) -> Result<AccountId, RentablesError> {
        Ok(self.token(token_id.0)?.owner_id.clone())
    }

    #[handle_result]
    pub fn token_uri(&self, token_id: U64) -> Result<String, RentablesError> {
        Ok(self.token(token_id.0)?.token_uri.clone())
    }
}

impl Contract {
    pub(crate) fn token_view(&self, token_id: TokenId, token: &Token) -> TokenView {
        TokenView {
            token_id: U64(token_id),
            owner_id: token.owner_id.clone(),
            token_uri: token.token_uri.clone(),
            approved_account_ids: token.approved_account_ids.clone(),
            minted_at: U64(token.minted_at),
            user: self.active_user(token_id).cloned(),
            user_expires: U64(self.user_expires(token_id)),
        }
    }
}
