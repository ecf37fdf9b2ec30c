//! Role registry: membership sets keyed by [`Role`] plus the admin role that governs
//! each of them.

use frame_support::{dispatch::DispatchResult, ensure};

use crate::{Config, Error, Event, Pallet, Role, RoleMembers, LOG_TARGET};

impl<T: Config<I>, I: 'static> Pallet<T, I> {
    pub fn has_role(role: Role, who: &T::AccountId) -> bool {
        RoleMembers::<T, I>::get(role, who)
    }

    /// Fails with [`Error::Unauthorized`] unless `who` currently holds `role`.
    pub fn ensure_role(role: Role, who: &T::AccountId) -> DispatchResult {
        ensure!(Self::has_role(role, who), Error::<T, I>::Unauthorized);
        Ok(())
    }

    /// The caller is authorized before membership is looked at, so granting a role
    /// the account already holds still fails for a non-admin.
    pub(crate) fn do_grant_role(
        sender: T::AccountId,
        role: Role,
        account: T::AccountId,
    ) -> DispatchResult {
        Self::ensure_role(Self::role_admin(role), &sender)?;

        if Self::has_role(role, &account) {
            return Ok(());
        }

        RoleMembers::<T, I>::insert(role, &account, true);
        log::debug!(target: LOG_TARGET, "{role:?} granted to {account:?} by {sender:?}");
        Self::deposit_event(Event::RoleGranted { role, account, sender });
        Ok(())
    }

    pub(crate) fn do_revoke_role(
        sender: T::AccountId,
        role: Role,
        account: T::AccountId,
    ) -> DispatchResult {
        Self::ensure_role(Self::role_admin(role), &sender)?;
        Self::remove_member(sender, role, account);
        Ok(())
    }

    pub(crate) fn do_renounce_role(who: T::AccountId, role: Role) -> DispatchResult {
        Self::remove_member(who.clone(), role, who);
        Ok(())
    }

    fn remove_member(sender: T::AccountId, role: Role, account: T::AccountId) {
        if !Self::has_role(role, &account) {
            return;
        }

        RoleMembers::<T, I>::remove(role, &account);
        log::debug!(target: LOG_TARGET, "{role:?} revoked from {account:?} by {sender:?}");
        Self::deposit_event(Event::RoleRevoked { role, account, sender });
    }
}
