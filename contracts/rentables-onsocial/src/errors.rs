use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum RentablesError {
    InvalidToken(String),
    NotAuthorized(String),
    OutOfRange(String),
    InvalidInput(String),
    InvalidState(String),
    InsufficientDeposit(String),
    InternalError(String),
}

impl std::fmt::Display for RentablesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken(msg) => write!(f, "Invalid token: {}", msg),
            Self::NotAuthorized(msg) => write!(f, "Not authorized: {}", msg),
            Self::OutOfRange(msg) => write!(f, "Out of range: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl RentablesError {
    /// Also returned when a non-owner tries to burn; callers cannot tell the two apart.
    pub fn invalid_token() -> Self {
        Self::InvalidToken("Invalid token ID.".into())
    }
    pub fn not_owner_nor_approved() -> Self {
        Self::NotAuthorized("caller is not owner nor approved".into())
    }
    pub fn already_rented() -> Self {
        Self::InvalidState("NFT is already rented".into())
    }
    pub fn only_owner(what: &str) -> Self {
        Self::NotAuthorized(format!("Only {} can perform this action", what))
    }
    pub fn owner_index_out_of_bounds(index: u64, balance: u64) -> Self {
        Self::OutOfRange(format!(
            "owner index {} out of bounds (balance {})",
            index, balance
        ))
    }
}
