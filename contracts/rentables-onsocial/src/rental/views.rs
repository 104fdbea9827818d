use crate::guards::now_secs;
use crate::*;

#[near]
impl Contract {
    /// ERC-4907 `userOf`: `None` when no record exists, the term has passed,
    /// or the token does not exist.
    pub fn nft_user_of(&self, token_id: U64) -> Option<AccountId> {
        self.active_user(token_id.0).cloned()
    }

    /// ERC-4907 `userExpires`: the raw stored expiry, `0` when no record exists.
    /// Not filtered by the current time.
    pub fn nft_user_expires(&self, token_id: U64) -> U64 {
        U64(self.user_expires(token_id.0))
    }

    pub fn nft_user_info(&self, token_id: U64) -> Option<UserInfo> {
        let record = self.users.get(&token_id.0)?;
        Some(UserInfo {
            token_id,
            user: record.user.clone(),
            expires: U64(record.expires),
            is_active: record.is_active(now_secs()),
        })
    }
}
