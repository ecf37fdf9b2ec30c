use frame_support::{dispatch::DispatchResult, ensure};

use crate::{Config, Error, Event, Pallet, Paused, Role, LOG_TARGET};

impl<T: Config<I>, I: 'static> Pallet<T, I> {
    /// Guard run first by every balance-changing operation.
    pub fn ensure_not_paused() -> DispatchResult {
        ensure!(!Paused::<T, I>::get(), Error::<T, I>::EnforcedPause);
        Ok(())
    }

    pub(crate) fn do_pause(who: T::AccountId) -> DispatchResult {
        Self::ensure_role(Role::Pauser, &who)?;
        ensure!(!Paused::<T, I>::get(), Error::<T, I>::AlreadyPaused);

        Paused::<T, I>::put(true);
        log::info!(target: LOG_TARGET, "ledger paused by {who:?}");
        Self::deposit_event(Event::Paused { account: who });
        Ok(())
    }

    pub(crate) fn do_unpause(who: T::AccountId) -> DispatchResult {
        Self::ensure_role(Role::Pauser, &who)?;
        ensure!(Paused::<T, I>::get(), Error::<T, I>::AlreadyActive);

        Paused::<T, I>::put(false);
        log::info!(target: LOG_TARGET, "ledger unpaused by {who:?}");
        Self::deposit_event(Event::Unpaused { account: who });
        Ok(())
    }
}
