use crate::*;

pub(crate) fn validate_token_uri(token_uri: &str) -> Result<(), RentablesError> {
    if token_uri.len() > MAX_TOKEN_URI_LEN {
        return Err(RentablesError::InvalidInput(format!(
            "Token URI exceeds max length of {} bytes",
            MAX_TOKEN_URI_LEN
        )));
    }
    Ok(())
}

pub(crate) fn validate_contract_metadata(
    metadata: &RentablesContractMetadata,
) -> Result<(), RentablesError> {
    if metadata.name.trim().is_empty() || metadata.symbol.trim().is_empty() {
        return Err(RentablesError::InvalidInput(
            "Contract metadata requires a name and a symbol".into(),
        ));
    }
    let fields = [
        Some(metadata.spec.as_str()),
        Some(metadata.name.as_str()),
        Some(metadata.symbol.as_str()),
        metadata.icon.as_deref(),
        metadata.base_uri.as_deref(),
        metadata.reference.as_deref(),
    ];
    if fields
        .into_iter()
        .flatten()
        .any(|f| f.len() > MAX_CONTRACT_METADATA_FIELD_LEN)
    {
        return Err(RentablesError::InvalidInput(format!(
            "Contract metadata fields are limited to {} bytes",
            MAX_CONTRACT_METADATA_FIELD_LEN
        )));
    }
    Ok(())
}

pub fn default_true() -> bool {
    true
}
