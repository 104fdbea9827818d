use crate::*;

use super::types::storage_byte_cost;

/// Takes the cost of `bytes_used` out of `deposit` and refunds the rest to `payer_id`.
pub(crate) fn charge_storage(
    payer_id: &AccountId,
    bytes_used: u64,
    deposit: u128,
) -> Result<(), RentablesError> {
    let cost = u128::from(bytes_used) * storage_byte_cost();
    if deposit < cost {
        return Err(RentablesError::InsufficientDeposit(format!(
            "Requires {} yoctoNEAR to cover {} bytes of storage, attached {}",
            cost, bytes_used, deposit
        )));
    }
    let refund = deposit - cost;
    if refund > 0 {
        let _ = Promise::new(payer_id.clone()).transfer(NearToken::from_yoctonear(refund));
    }
    Ok(())
}
