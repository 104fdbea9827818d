use crate::*;

const MIGRATE_METHOD: &str = "migrate";

#[near]
impl Contract {
    /// Owner only. New wasm is the raw call input; `migrate` runs right after deploy.
    pub fn update_contract(&self) -> Promise {
        near_sdk::require!(
            env::attached_deposit() == ONE_YOCTO,
            "Requires attached deposit of exactly 1 yoctoNEAR"
        );
        near_sdk::require!(
            env::predecessor_account_id() == self.owner_id,
            "Only contract owner can upgrade"
        );
        let code = env::input()
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| env::panic_str("Missing contract code"));

        Promise::new(env::current_account_id())
            .deploy_contract(code)
            .function_call(
                MIGRATE_METHOD.to_string(),
                vec![],
                NearToken::from_near(0),
                Gas::from_tgas(GAS_MIGRATE_TGAS),
            )
            .as_return()
    }

    /// Upgrade receipt entry. Tokens, rentals and policy carry over as stored.
    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        let mut contract: Self = env::state_read()
            .unwrap_or_else(|| env::panic_str("No rentables state to migrate"));
        contract.stamp_build_version();
        contract
    }
}

impl Contract {
    pub(crate) fn stamp_build_version(&mut self) {
        let previous = std::mem::replace(&mut self.version, env!("CARGO_PKG_VERSION").to_string());
        events::emit_contract_upgraded(&env::current_account_id(), &previous, &self.version);
    }
}
