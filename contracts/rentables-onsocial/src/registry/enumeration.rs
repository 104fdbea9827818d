use crate::*;
use near_sdk::json_types::U128;

fn page(from_index: Option<U128>, limit: Option<u64>) -> (usize, usize) {
    // Saturate so an index past the address space pages to nothing instead of wrapping.
    let start = from_index.map_or(0, |i| usize::try_from(i.0).unwrap_or(usize::MAX));
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT) as usize;
    (start, limit)
}

#[near]
impl Contract {
    pub fn nft_total_supply(&self) -> U128 {
        U128(self.tokens_by_id.len() as u128)
    }

    pub fn nft_tokens(&self, from_index: Option<U128>, limit: Option<u64>) -> Vec<TokenView> {
        let (start, limit) = page(from_index, limit);

        self.tokens_by_id
            .iter()
            .skip(start)
            .take(limit)
            .map(|(token_id, token)| self.token_view(*token_id, token))
            .collect()
    }

    /// ERC-721 `balanceOf`.
    pub fn nft_supply_for_owner(&self, account_id: AccountId) -> U128 {
        U128(self.balance_of(&account_id) as u128)
    }

    pub fn nft_tokens_for_owner(
        &self,
        account_id: AccountId,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<TokenView> {
        let Some(owner_tokens) = self.tokens_per_owner.get(&account_id) else {
            return vec![];
        };
        let (start, limit) = page(from_index, limit);

        owner_tokens
            .iter()
            .skip(start)
            .filter_map(|token_id| {
                self.tokens_by_id
                    .get(token_id)
                    .map(|token| self.token_view(*token_id, token))
            })
            .take(limit)
            .collect()
    }

    #[handle_result]
    pub fn token_of_owner_by_index(&self, owner_id: AccountId, index: U64) -> Result<U64, RentablesError> {
        self.owner_token_at(&owner_id, index.0).map(U64)
    }

    /// Position of `token_id` in the owner's token list, `None` if the owner does not hold it.
    pub fn token_index_of_owner(&self, owner_id: AccountId, token_id: U64) -> Option<U64> {
        self.tokens_per_owner
            .get(&owner_id)?
            .iter()
            .position(|id| *id == token_id.0)
            .map(|pos| U64(pos as u64))
    }
}

impl Contract {
    pub(crate) fn balance_of(&self, owner_id: &AccountId) -> u64 {
        self.tokens_per_owner
            .get(owner_id)
            .map_or(0, |tokens| u64::from(tokens.len()))
    }

    pub(crate) fn owner_token_at(&self, owner_id: &AccountId, index: u64) -> Result<TokenId, RentablesError> {
        let balance = self.balance_of(owner_id);
        if index >= balance {
            return Err(RentablesError::owner_index_out_of_bounds(index, balance));
        }
        self.tokens_per_owner
            .get(owner_id)
            .and_then(|tokens| tokens.iter().nth(index as usize).copied())
            .ok_or_else(|| RentablesError::owner_index_out_of_bounds(index, balance))
    }
}
