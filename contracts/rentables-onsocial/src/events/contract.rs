use near_sdk::AccountId;

use super::CONTRACT;
use super::builder::EventBuilder;
use crate::RentalPolicy;

pub fn emit_contract_upgraded(contract_id: &AccountId, old_version: &str, new_version: &str) {
    EventBuilder::new(CONTRACT, "contract_upgrade", contract_id)
        .field("old_version", old_version)
        .field("new_version", new_version)
        .emit();
}

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_rental_policy_updated(owner_id: &AccountId, policy: &RentalPolicy) {
    EventBuilder::new(CONTRACT, "rental_policy_updated", owner_id)
        .field(
            "allow_owner_override_of_active_renter",
            policy.allow_owner_override_of_active_renter,
        )
        .field("clear_user_on_transfer", policy.clear_user_on_transfer)
        .emit();
}
