//! Weights for pallet-node-token.
//!
//! Placeholder values sized from the storage accesses of each call. Regenerate with
//! `frame-omni-bencher v1 benchmark pallet --pallet pallet_node_token` once the
//! benchmarks have been run on reference hardware.

#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-node-token.
pub trait WeightInfo {
    fn mint() -> Weight;
    fn transfer() -> Weight;
    fn burn() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn grant_role() -> Weight;
    fn revoke_role() -> Weight;
    fn renounce_role() -> Weight;
}

/// Weights for pallet-node-token using the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `NodeToken::Paused` (r:1 w:0)
    /// Storage: `NodeToken::RoleMembers` (r:1 w:0)
    /// Storage: `NodeToken::TotalSupply` (r:1 w:1)
    /// Storage: `NodeToken::Balances` (r:1 w:1)
    fn mint() -> Weight {
        Weight::from_parts(18_000_000, 3_541)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `NodeToken::Paused` (r:1 w:0)
    /// Storage: `NodeToken::Balances` (r:2 w:2)
    fn transfer() -> Weight {
        Weight::from_parts(20_000_000, 6_086)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `NodeToken::Paused` (r:1 w:0)
    /// Storage: `NodeToken::Balances` (r:1 w:1)
    /// Storage: `NodeToken::TotalSupply` (r:1 w:1)
    fn burn() -> Weight {
        Weight::from_parts(16_000_000, 3_541)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `NodeToken::RoleMembers` (r:1 w:0)
    /// Storage: `NodeToken::Paused` (r:1 w:1)
    fn pause() -> Weight {
        Weight::from_parts(12_000_000, 3_517)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `NodeToken::RoleMembers` (r:1 w:0)
    /// Storage: `NodeToken::Paused` (r:1 w:1)
    fn unpause() -> Weight {
        Weight::from_parts(12_000_000, 3_517)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `NodeToken::RoleAdmins` (r:1 w:0)
    /// Storage: `NodeToken::RoleMembers` (r:2 w:1)
    fn grant_role() -> Weight {
        Weight::from_parts(14_000_000, 3_517)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `NodeToken::RoleAdmins` (r:1 w:0)
    /// Storage: `NodeToken::RoleMembers` (r:2 w:1)
    fn revoke_role() -> Weight {
        Weight::from_parts(14_000_000, 3_517)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `NodeToken::RoleMembers` (r:1 w:1)
    fn renounce_role() -> Weight {
        Weight::from_parts(11_000_000, 3_517)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn mint() -> Weight {
        Weight::from_parts(18_000_000, 3_541)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn transfer() -> Weight {
        Weight::from_parts(20_000_000, 6_086)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn burn() -> Weight {
        Weight::from_parts(16_000_000, 3_541)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn pause() -> Weight {
        Weight::from_parts(12_000_000, 3_517)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn unpause() -> Weight {
        Weight::from_parts(12_000_000, 3_517)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn grant_role() -> Weight {
        Weight::from_parts(14_000_000, 3_517)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn revoke_role() -> Weight {
        Weight::from_parts(14_000_000, 3_517)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn renounce_role() -> Weight {
        Weight::from_parts(11_000_000, 3_517)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
}
