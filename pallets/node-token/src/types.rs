use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};
use sp_runtime::RuntimeDebug;
use sp_std::prelude::*;

/// A named capability checked by value at call time.
///
/// Every role has exactly one admin role whose members may grant and revoke it.
/// Unless overridden at genesis that admin is [`Role::DefaultAdmin`], which also
/// administers itself.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Encode,
    Decode,
    DecodeWithMemTracking,
    MaxEncodedLen,
    TypeInfo,
    RuntimeDebug,
    Serialize,
    Deserialize,
)]
pub enum Role {
    #[default]
    #[codec(index = 0)]
    DefaultAdmin,
    /// May mint.
    #[codec(index = 1)]
    Minter,
    /// May pause and unpause.
    #[codec(index = 2)]
    Pauser,
}

/// Snapshot returned by `Pallet::token_details`.
#[derive(Clone, PartialEq, Eq, Encode, Decode, TypeInfo, RuntimeDebug)]
pub struct TokenDetails {
    pub name: Vec<u8>,
    pub symbol: Vec<u8>,
    pub decimals: u8,
    pub total_supply: u128,
    pub paused: bool,
}
