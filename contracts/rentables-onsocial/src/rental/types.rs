use near_sdk::json_types::U64;
use near_sdk::{AccountId, near};

#[near(serializers = [borsh])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRecord {
    pub user: Option<AccountId>,
    /// Unix seconds. Stored verbatim, including values already in the past.
    pub expires: u64,
}

impl UserRecord {
    /// Expiry is inclusive: at `now == expires` the term is over.
    pub fn is_active(&self, now_secs: u64) -> bool {
        self.user.is_some() && self.expires > now_secs
    }

    pub fn active_user(&self, now_secs: u64) -> Option<&AccountId> {
        self.user.as_ref().filter(|_| self.expires > now_secs)
    }
}

#[near(serializers = [json])]
pub struct UserInfo {
    pub token_id: U64,
    /// Stored user, returned even after expiry; see `is_active`.
    pub user: Option<AccountId>,
    pub expires: U64,
    pub is_active: bool,
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RentalPolicy {
    /// When `false`, a different account cannot be assigned while the current term is live.
    #[serde(default = "crate::validation::default_true")]
    pub allow_owner_override_of_active_renter: bool,
    /// Delete the rental record when the token changes hands.
    #[serde(default = "crate::validation::default_true")]
    pub clear_user_on_transfer: bool,
}

impl Default for RentalPolicy {
    fn default() -> Self {
        Self {
            allow_owner_override_of_active_renter: true,
            clear_user_on_transfer: true,
        }
    }
}
