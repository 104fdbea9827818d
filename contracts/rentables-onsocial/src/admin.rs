use crate::guards::check_one_yocto;
use crate::validation::validate_contract_metadata;
use crate::*;

#[near]
impl Contract {
    // --- Init ---

    #[init]
    pub fn new(
        owner_id: AccountId,
        contract_metadata: Option<RentablesContractMetadata>,
        rental_policy: Option<RentalPolicy>,
    ) -> Self {
        let contract_metadata = contract_metadata.unwrap_or_default();
        if let Err(e) = validate_contract_metadata(&contract_metadata) {
            env::panic_str(&e.to_string());
        }

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            tokens_by_id: IterableMap::new(StorageKey::TokensById),
            tokens_per_owner: LookupMap::new(StorageKey::TokensPerOwner),
            operators: LookupMap::new(StorageKey::Operators),
            next_token_id: FIRST_TOKEN_ID,
            next_approval_id: 0,
            users: LookupMap::new(StorageKey::Users),
            rental_policy: rental_policy.unwrap_or_default(),
            contract_metadata,
        }
    }

    // --- Admin ---

    /// Owner only.
    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), RentablesError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(RentablesError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    /// Owner only.
    #[payable]
    #[handle_result]
    pub fn set_rental_policy(&mut self, policy: RentalPolicy) -> Result<(), RentablesError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.rental_policy = policy;
        events::emit_rental_policy_updated(&self.owner_id, &self.rental_policy);
        Ok(())
    }

    pub fn get_rental_policy(&self) -> RentalPolicy {
        self.rental_policy.clone()
    }

    /// Owner only.
    #[payable]
    #[handle_result]
    pub fn set_contract_metadata(
        &mut self,
        metadata: RentablesContractMetadata,
    ) -> Result<(), RentablesError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        validate_contract_metadata(&metadata)?;
        self.contract_metadata = metadata;
        events::emit_contract_metadata_update();
        Ok(())
    }

    pub fn get_version(&self) -> String {
        self.version.clone()
    }
}
