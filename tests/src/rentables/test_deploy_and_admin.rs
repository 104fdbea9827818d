// =============================================================================
// Rentables Integration Tests: Deploy & Admin
// =============================================================================
// Initialization defaults, capability probing, ownership and rental policy.

use anyhow::Result;
use serde_json::json;

use super::helpers::*;

#[tokio::test]
async fn test_deploy_and_init_defaults() -> Result<()> {
    let worker = create_sandbox().await?;
    let owner = worker.dev_create_account().await?;
    let contract = deploy_rentables(&worker, &owner).await?;

    assert_eq!(get_owner(&contract).await?, owner.id().to_string());

    let meta = nft_metadata(&contract).await?;
    assert_eq!(meta.spec, "nft-2.0.0");
    assert_eq!(meta.name, "OnSocial Rentables");
    assert_eq!(meta.symbol, "RENT");

    let policy = get_rental_policy(&contract).await?;
    assert!(policy.allow_owner_override_of_active_renter);
    assert!(policy.clear_user_on_transfer);

    assert_eq!(nft_total_supply(&contract).await?, "0");
    Ok(())
}

#[tokio::test]
async fn test_supports_interface() -> Result<()> {
    let worker = create_sandbox().await?;
    let owner = worker.dev_create_account().await?;
    let contract = deploy_rentables(&worker, &owner).await?;

    assert!(supports_interface(&contract, "0x80ac58cd").await?, "ERC-721");
    assert!(supports_interface(&contract, "0xad092b5c").await?, "ERC-4907");
    assert!(supports_interface(&contract, "0x01ffc9a7").await?, "ERC-165");
    assert!(!supports_interface(&contract, "0xffffffff").await?);
    assert!(!supports_interface(&contract, "garbage").await?);

    let ids: Vec<String> = contract.view("supported_interfaces").await?.json()?;
    assert_eq!(ids.len(), 5);
    Ok(())
}

#[tokio::test]
async fn test_transfer_ownership() -> Result<()> {
    let worker = create_sandbox().await?;
    let owner = worker.dev_create_account().await?;
    let next = worker.dev_create_account().await?;
    let contract = deploy_rentables(&worker, &owner).await?;

    let result = next
        .call(contract.id(), "transfer_ownership")
        .args_json(json!({ "new_owner": next.id() }))
        .deposit(ONE_YOCTO)
        .transact()
        .await?;
    assert_failure_contains(result, "Only contract owner");

    owner
        .call(contract.id(), "transfer_ownership")
        .args_json(json!({ "new_owner": next.id() }))
        .deposit(ONE_YOCTO)
        .transact()
        .await?
        .into_result()?;
    assert_eq!(get_owner(&contract).await?, next.id().to_string());
    Ok(())
}

#[tokio::test]
async fn test_set_rental_policy() -> Result<()> {
    let worker = create_sandbox().await?;
    let owner = worker.dev_create_account().await?;
    let contract = deploy_rentables(&worker, &owner).await?;
    let policy = RentalPolicy {
        allow_owner_override_of_active_renter: false,
        clear_user_on_transfer: false,
    };

    owner
        .call(contract.id(), "set_rental_policy")
        .args_json(json!({ "policy": policy }))
        .deposit(ONE_YOCTO)
        .transact()
        .await?
        .into_result()?;

    assert_eq!(get_rental_policy(&contract).await?, policy);
    Ok(())
}
