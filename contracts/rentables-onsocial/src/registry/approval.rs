use crate::guards::{check_at_least_one_yocto, check_one_yocto, hash_account_id};
use crate::*;

#[near]
impl Contract {
    /// Owner only. Deposit above the storage cost of the approval is refunded.
    #[payable]
    #[handle_result]
    pub fn nft_approve(&mut self, token_id: U64, account_id: AccountId) -> Result<U64, RentablesError> {
        check_at_least_one_yocto()?;
        let owner_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();

        let before = self.storage_usage_flushed();
        let approval_id = self.approve(&owner_id, token_id.0, &account_id)?;
        let bytes_used = self.storage_usage_flushed().saturating_sub(before);

        storage::charge_storage(&owner_id, bytes_used, deposit)?;
        Ok(U64(approval_id))
    }

    #[payable]
    #[handle_result]
    pub fn nft_revoke(&mut self, token_id: U64, account_id: AccountId) -> Result<(), RentablesError> {
        check_one_yocto()?;
        let owner_id = env::predecessor_account_id();

        let mut token = self.owned_token(&owner_id, token_id.0, "revoke approval")?;
        token.approved_account_ids.remove(&account_id);
        self.tokens_by_id.insert(token_id.0, token);

        events::emit_approval_revoked(&owner_id, token_id.0, &account_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn nft_revoke_all(&mut self, token_id: U64) -> Result<(), RentablesError> {
        check_one_yocto()?;
        let owner_id = env::predecessor_account_id();

        let mut token = self.owned_token(&owner_id, token_id.0, "revoke all approvals")?;
        token.approved_account_ids.clear();
        self.tokens_by_id.insert(token_id.0, token);

        events::emit_all_approvals_revoked(&owner_id, token_id.0);
        Ok(())
    }

    /// If `approval_id` is supplied, also validates the exact ID.
    pub fn nft_is_approved(
        &self,
        token_id: U64,
        approved_account_id: AccountId,
        approval_id: Option<u64>,
    ) -> bool {
        let Some(token) = self.tokens_by_id.get(&token_id.0) else {
            return false;
        };

        token
            .approved_account_ids
            .get(&approved_account_id)
            .is_some_and(|actual| approval_id.is_none_or(|id| *actual == id))
    }

    /// Grants or withdraws `operator_id` authority over every token of the caller.
    #[payable]
    #[handle_result]
    pub fn set_approval_for_all(
        &mut self,
        operator_id: AccountId,
        approved: bool,
    ) -> Result<(), RentablesError> {
        check_at_least_one_yocto()?;
        let owner_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();

        let before = self.storage_usage_flushed();
        self.set_operator(&owner_id, &operator_id, approved)?;
        let bytes_used = self.storage_usage_flushed().saturating_sub(before);

        storage::charge_storage(&owner_id, bytes_used, deposit)
    }

    pub fn is_approved_for_all(&self, owner_id: AccountId, operator_id: AccountId) -> bool {
        self.is_operator(&owner_id, &operator_id)
    }
}

impl Contract {
    fn owned_token(
        &self,
        actor_id: &AccountId,
        token_id: TokenId,
        action: &str,
    ) -> Result<Token, RentablesError> {
        let token = self.token(token_id)?;
        if &token.owner_id != actor_id {
            return Err(RentablesError::NotAuthorized(format!(
                "Only token owner can {}",
                action
            )));
        }
        Ok(token.clone())
    }

    pub(crate) fn approve(
        &mut self,
        owner_id: &AccountId,
        token_id: TokenId,
        account_id: &AccountId,
    ) -> Result<u64, RentablesError> {
        let mut token = self.owned_token(owner_id, token_id, "approve")?;

        let approval_id = self.next_approval_id;
        self.next_approval_id = self.next_approval_id.checked_add(1).ok_or_else(|| {
            RentablesError::InternalError("Approval ID counter overflow".into())
        })?;

        token
            .approved_account_ids
            .insert(account_id.clone(), approval_id);
        self.tokens_by_id.insert(token_id, token);

        events::emit_approval_granted(owner_id, token_id, account_id, approval_id);
        Ok(approval_id)
    }

    pub(crate) fn set_operator(
        &mut self,
        owner_id: &AccountId,
        operator_id: &AccountId,
        approved: bool,
    ) -> Result<(), RentablesError> {
        if owner_id == operator_id {
            return Err(RentablesError::InvalidInput(
                "Cannot set yourself as operator".into(),
            ));
        }

        if approved {
            self.operators
                .entry(owner_id.clone())
                .or_insert_with(|| {
                    IterableSet::new(StorageKey::OperatorsInner {
                        account_id_hash: hash_account_id(owner_id),
                    })
                })
                .insert(operator_id.clone());
        } else if let Some(ops) = self.operators.get_mut(owner_id) {
            ops.remove(operator_id);
            if ops.is_empty() {
                self.operators.remove(owner_id);
            }
        }

        events::emit_operator_updated(owner_id, operator_id, approved);
        Ok(())
    }
}
