//! Balance accounting. Every operation validates all of its inputs before the first
//! storage write, so a failed call leaves balances and supply untouched.

use frame_support::dispatch::DispatchResult;
use sp_runtime::ArithmeticError;

use crate::{
    Balances, Config, Decimals, Error, Event, Pallet, Paused, Role, TokenDetails, TokenName,
    TokenSymbol, TotalSupply, LOG_TARGET,
};

impl<T: Config<I>, I: 'static> Pallet<T, I> {
    pub(crate) fn do_mint(minter: T::AccountId, to: T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_not_paused()?;
        Self::ensure_role(Role::Minter, &minter)?;

        let supply = TotalSupply::<T, I>::get()
            .checked_add(amount)
            .ok_or(Error::<T, I>::SupplyOverflow)?;
        let balance =
            Balances::<T, I>::get(&to).checked_add(amount).ok_or(Error::<T, I>::SupplyOverflow)?;

        TotalSupply::<T, I>::put(supply);
        Balances::<T, I>::insert(&to, balance);

        log::debug!(target: LOG_TARGET, "minted {amount} to {to:?}, supply now {supply}");
        Self::deposit_event(Event::Transfer { from: None, to: Some(to), amount });
        Ok(())
    }

    pub(crate) fn do_burn(holder: T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_not_paused()?;

        let balance = Balances::<T, I>::get(&holder)
            .checked_sub(amount)
            .ok_or(Error::<T, I>::InsufficientBalance)?;
        let supply =
            TotalSupply::<T, I>::get().checked_sub(amount).ok_or(ArithmeticError::Underflow)?;

        Balances::<T, I>::insert(&holder, balance);
        TotalSupply::<T, I>::put(supply);

        log::debug!(target: LOG_TARGET, "burned {amount} from {holder:?}, supply now {supply}");
        Self::deposit_event(Event::Transfer { from: Some(holder), to: None, amount });
        Ok(())
    }

    /// Moves `amount` from `from` to `to`. A self-transfer passes the same checks and
    /// emits the same event, but leaves the balance as it was.
    pub(crate) fn do_transfer(from: T::AccountId, to: T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_not_paused()?;

        let from_balance = Balances::<T, I>::get(&from)
            .checked_sub(amount)
            .ok_or(Error::<T, I>::InsufficientBalance)?;

        if from != to {
            let to_balance =
                Balances::<T, I>::get(&to).checked_add(amount).ok_or(ArithmeticError::Overflow)?;
            Balances::<T, I>::insert(&from, from_balance);
            Balances::<T, I>::insert(&to, to_balance);
        }

        Self::deposit_event(Event::Transfer { from: Some(from), to: Some(to), amount });
        Ok(())
    }

    pub fn token_details() -> TokenDetails {
        TokenDetails {
            name: TokenName::<T, I>::get().into_inner(),
            symbol: TokenSymbol::<T, I>::get().into_inner(),
            decimals: Decimals::<T, I>::get(),
            total_supply: TotalSupply::<T, I>::get(),
            paused: Paused::<T, I>::get(),
        }
    }

    /// Checks that the balances add up to the total supply.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let sum = Balances::<T, I>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or(sp_runtime::TryRuntimeError::Other("sum of balances overflows u128"))?;

        frame_support::ensure!(
            sum == TotalSupply::<T, I>::get(),
            sp_runtime::TryRuntimeError::Other("sum of balances differs from total supply")
        );
        Ok(())
    }
}
