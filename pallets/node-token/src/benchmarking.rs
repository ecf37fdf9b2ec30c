//! Benchmarking setup for pallet-node-token

use super::*;

#[allow(unused)]
use crate::Pallet as NodeToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

/// A whitelisted caller holding `role`.
fn holding<T: Config<I>, I: 'static>(role: Role) -> T::AccountId {
    let who: T::AccountId = whitelisted_caller();
    RoleMembers::<T, I>::insert(role, &who, true);
    who
}

#[instance_benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn mint() {
        let minter = holding::<T, I>(Role::Minter);
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(minter), recipient.clone(), amount);

        assert_eq!(Balances::<T, I>::get(&recipient), amount);
        assert_eq!(TotalSupply::<T, I>::get(), amount);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        // Setup: give caller a balance backed by supply
        Balances::<T, I>::insert(&caller, 10_000_000);
        TotalSupply::<T, I>::put(10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount);

        assert_eq!(Balances::<T, I>::get(&caller), 9_000_000);
        assert_eq!(Balances::<T, I>::get(&recipient), amount);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        Balances::<T, I>::insert(&caller, 10_000_000);
        TotalSupply::<T, I>::put(10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), 1_000_000);

        assert_eq!(Balances::<T, I>::get(&caller), 9_000_000);
        assert_eq!(TotalSupply::<T, I>::get(), 9_000_000);
    }

    #[benchmark]
    fn pause() {
        let pauser = holding::<T, I>(Role::Pauser);

        #[extrinsic_call]
        _(RawOrigin::Signed(pauser));

        assert!(Paused::<T, I>::get());
    }

    #[benchmark]
    fn unpause() {
        let pauser = holding::<T, I>(Role::Pauser);
        Paused::<T, I>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(pauser));

        assert!(!Paused::<T, I>::get());
    }

    #[benchmark]
    fn grant_role() {
        let admin = holding::<T, I>(Role::DefaultAdmin);
        let member: T::AccountId = account("member", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), Role::Minter, member.clone());

        assert!(RoleMembers::<T, I>::get(Role::Minter, &member));
    }

    #[benchmark]
    fn revoke_role() {
        let admin = holding::<T, I>(Role::DefaultAdmin);
        let member: T::AccountId = account("member", 0, 0);
        RoleMembers::<T, I>::insert(Role::Minter, &member, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), Role::Minter, member.clone());

        assert!(!RoleMembers::<T, I>::get(Role::Minter, &member));
    }

    #[benchmark]
    fn renounce_role() {
        let member = holding::<T, I>(Role::Pauser);

        #[extrinsic_call]
        _(RawOrigin::Signed(member.clone()), Role::Pauser);

        assert!(!RoleMembers::<T, I>::get(Role::Pauser, &member));
    }

    impl_benchmark_test_suite!(NodeToken, crate::mock::new_test_ext(), crate::mock::Test);
}
