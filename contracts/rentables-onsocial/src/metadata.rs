use near_sdk::json_types::Base64VecU8;

use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct RentablesContractMetadata {
    pub spec: String,
    pub name: String,
    pub symbol: String,
    pub icon: Option<String>,
    pub base_uri: Option<String>,
    pub reference: Option<String>,
    pub reference_hash: Option<Base64VecU8>,
}

impl Default for RentablesContractMetadata {
    fn default() -> Self {
        Self {
            spec: "nft-2.0.0".to_string(),
            name: "OnSocial Rentables".to_string(),
            symbol: "RENT".to_string(),
            icon: None,
            base_uri: None,
            reference: None,
            reference_hash: None,
        }
    }
}

#[near]
impl Contract {
    pub fn nft_metadata(&self) -> RentablesContractMetadata {
        self.contract_metadata.clone()
    }
}
