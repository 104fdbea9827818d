//! Contract-wide constants.

use near_sdk::NearToken;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// First identifier handed out by `nft_mint`.
pub const FIRST_TOKEN_ID: u64 = 1;

pub const MAX_TOKEN_URI_LEN: usize = 2_048;
pub const MAX_CONTRACT_METADATA_FIELD_LEN: usize = 1_024;

/// Bytes prepaid at mint for the token's rental slot.
/// Covers the largest `UserRecord` (64-byte account ID) plus key and trie overhead,
/// so `nft_set_user` never needs a storage deposit.
pub const USER_RECORD_RESERVED_BYTES: u64 = 200;

// Enumeration paging
pub const DEFAULT_PAGE_LIMIT: u64 = 50;
pub const MAX_PAGE_LIMIT: u64 = 100;

pub const GAS_MIGRATE_TGAS: u64 = 200;
