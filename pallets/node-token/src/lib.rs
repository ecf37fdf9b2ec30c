//! # Node Token Pallet
//!
//! A fungible token ledger with three access-control policies layered over plain
//! transfers:
//!
//! - **Mintable**: supply is created by holders of [`Role::Minter`].
//! - **Burnable**: any holder may destroy its own balance.
//! - **Pausable**: holders of [`Role::Pauser`] can halt every balance-changing call.
//!
//! Role membership is managed by the admin role of each role (see [`Role`]), which
//! defaults to [`Role::DefaultAdmin`]. Token metadata and the initial role holders are
//! fixed at genesis.
//!
//! The pallet is instanceable: each instance is an independent ledger with its own
//! metadata, balances, roles and pause switch.

#![cfg_attr(not(feature = "std"), no_std)]
// `#[pallet::getter]` accessors
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::{marker::PhantomData, prelude::*};

pub use pallet::*;
pub use types::{Role, TokenDetails};
pub use weights::WeightInfo;

mod ledger;
mod pause;
mod roles;
mod types;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "runtime::node-token";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config<I: 'static = ()>: frame_system::Config {
        type RuntimeEvent: From<Event<Self, I>>
            + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T, I = ()>(_);

    /// Token name (e.g., "Node")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T: Config<I>, I: 'static = ()> =
        StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "NODE")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T: Config<I>, I: 'static = ()> =
        StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T: Config<I>, I: 'static = ()> = StorageValue<_, u8, ValueQuery>;

    /// Sum of all balances.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T: Config<I>, I: 'static = ()> = StorageValue<_, u128, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config<I>, I: 'static = ()> =
        StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Global circuit breaker. While set, mint, burn and transfer all fail.
    #[pallet::storage]
    #[pallet::getter(fn paused)]
    pub type Paused<T: Config<I>, I: 'static = ()> = StorageValue<_, bool, ValueQuery>;

    /// Role membership. Revoking removes the entry.
    #[pallet::storage]
    pub type RoleMembers<T: Config<I>, I: 'static = ()> = StorageDoubleMap<
        _,
        Twox64Concat,
        Role,
        Blake2_128Concat,
        T::AccountId,
        bool,
        ValueQuery,
    >;

    /// The role whose members may grant and revoke a given role.
    #[pallet::storage]
    #[pallet::getter(fn role_admin)]
    pub type RoleAdmins<T: Config<I>, I: 'static = ()> =
        StorageMap<_, Twox64Concat, Role, Role, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config<I>, I: 'static = ()> {
        /// Balance moved. `from == None` is a mint, `to == None` is a burn.
        Transfer { from: Option<T::AccountId>, to: Option<T::AccountId>, amount: u128 },
        /// Ledger halted
        Paused { account: T::AccountId },
        /// Ledger resumed
        Unpaused { account: T::AccountId },
        /// `account` joined `role`, granted by `sender`
        RoleGranted { role: Role, account: T::AccountId, sender: T::AccountId },
        /// `account` left `role`. `sender == account` when the role was renounced.
        RoleRevoked { role: Role, account: T::AccountId, sender: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T, I = ()> {
        /// Caller is not a member of the required role.
        Unauthorized,
        /// The ledger is paused.
        EnforcedPause,
        InsufficientBalance,
        /// Minting would overflow the total supply.
        SupplyOverflow,
        AlreadyPaused,
        AlreadyActive,
    }

    #[pallet::hooks]
    impl<T: Config<I>, I: 'static> Hooks<BlockNumberFor<T>> for Pallet<T, I> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config<I>, I: 'static> Pallet<T, I> {
        /// Create `amount` new tokens in `to`. Caller must hold [`Role::Minter`].
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let minter = ensure_signed(origin)?;
            Self::do_mint(minter, to, amount)
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_transfer(sender, to, amount)
        }

        /// Destroy `amount` of the caller's own tokens.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let holder = ensure_signed(origin)?;
            Self::do_burn(holder, amount)
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_pause(who)
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_unpause(who)
        }

        /// Add `account` to `role`. Caller must hold the admin role of `role`, even if
        /// `account` is already a member.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::grant_role())]
        pub fn grant_role(
            origin: OriginFor<T>,
            role: Role,
            account: T::AccountId,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_grant_role(sender, role, account)
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::revoke_role())]
        pub fn revoke_role(
            origin: OriginFor<T>,
            role: Role,
            account: T::AccountId,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_revoke_role(sender, role, account)
        }

        /// Drop the caller's own membership of `role`.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::renounce_role())]
        pub fn renounce_role(origin: OriginFor<T>, role: Role) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_renounce_role(who, role)
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config<I>, I: 'static = ()> {
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals (18 for ETH-style)
        pub decimals: u8,
        /// Initial member of [`Role::DefaultAdmin`]
        pub admin: Option<T::AccountId>,
        /// Initial member of [`Role::Minter`]
        pub minter: Option<T::AccountId>,
        /// Initial member of [`Role::Pauser`]
        pub pauser: Option<T::AccountId>,
        /// `(role, admin_role)` overrides. Roles not listed are administered by
        /// [`Role::DefaultAdmin`].
        pub role_admins: Vec<(Role, Role)>,
        #[serde(skip)]
        pub phantom: PhantomData<I>,
    }

    #[pallet::genesis_build]
    impl<T: Config<I>, I: 'static> BuildGenesisConfig for GenesisConfig<T, I> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T, I>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T, I>::put(symbol);

            Decimals::<T, I>::put(self.decimals);

            for (role, admin_role) in &self.role_admins {
                RoleAdmins::<T, I>::insert(role, admin_role);
            }

            let initial_members = [
                (Role::DefaultAdmin, &self.admin),
                (Role::Minter, &self.minter),
                (Role::Pauser, &self.pauser),
            ];
            for (role, account) in initial_members {
                if let Some(account) = account {
                    RoleMembers::<T, I>::insert(role, account, true);
                }
            }
        }
    }
}
