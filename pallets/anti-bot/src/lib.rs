#![cfg_attr(not(feature = "std"), no_std)]
// Allow deprecated weight constants and getters until benchmarked weights land
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! Anti-bot gate.
//!
//! Keeps a blacklist of accounts and a global enforcement switch. An account is
//! *blacklisted* when it is a member of the set, and *blocked* only when it is
//! blacklisted while enforcement is active. Token pallets consult the gate
//! through [`AntiBotGate`] before moving funds out of an account.

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub const LOG_TARGET: &str = "runtime::anti-bot";

/// Rejection text for a transfer originating from a blocked account.
///
/// Kept byte-for-byte stable so off-chain tooling can match on it.
pub const BOT_ADDRESS_MESSAGE: &str = "AntiBot: From address is defined as a BOT";

/// Policy hook consumed by token pallets.
pub trait AntiBotGate<AccountId> {
    /// Whether blacklist membership is currently enforced.
    fn is_active() -> bool;

    /// `is_active() && who` is blacklisted.
    fn is_blocked(who: &AccountId) -> bool;

    /// Fails with the gate's bot error when `who` is blocked.
    fn ensure_not_blocked(who: &AccountId) -> DispatchResult;

    /// Flip enforcement on behalf of `caller`, who must be the gate admin.
    fn set_active(caller: &AccountId, active: bool) -> DispatchResult;

    /// Install `who` as gate admin so dependent pallets can benchmark admin-only paths.
    #[cfg(feature = "runtime-benchmarks")]
    fn set_admin(who: &AccountId);
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Maximum number of accounts accepted by a single batch call.
        #[pallet::constant]
        type MaxBatchSize: Get<u32>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    #[pallet::type_value]
    pub fn DefaultActive() -> bool {
        true
    }

    /// Blacklisted accounts (cannot send transfers while enforcement is active)
    #[pallet::storage]
    #[pallet::getter(fn is_blacklisted)]
    pub type Blacklist<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Global enforcement switch
    #[pallet::storage]
    #[pallet::getter(fn anti_bot_active)]
    pub type AntiBotActive<T> = StorageValue<_, bool, ValueQuery, DefaultActive>;

    /// Account allowed to edit the blacklist and toggle enforcement
    #[pallet::storage]
    #[pallet::getter(fn admin)]
    pub type Admin<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Account added to the blacklist
        AddBlacklist { account: T::AccountId },
        /// Account removed from the blacklist
        RemoveBlacklist { account: T::AccountId },
        /// Enforcement switched on or off
        AntiBotStateChanged { active: bool },
        /// Admin role handed over
        AdminChanged { old: T::AccountId, new: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the gate admin
        Unauthorized,
        /// AntiBot: From address is defined as a BOT
        FromAddressIsBot,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(10_000)]
        pub fn add_blacklist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_admin(origin)?;
            Self::do_add_blacklist(account);
            Ok(())
        }

        /// Blacklist every account in order. One admin check covers the batch.
        #[pallet::call_index(1)]
        #[pallet::weight(Weight::from_parts(10_000, 0).saturating_mul((accounts.len() as u64).saturating_add(1)))]
        pub fn add_multiple_blacklist(
            origin: OriginFor<T>,
            accounts: BoundedVec<T::AccountId, T::MaxBatchSize>,
        ) -> DispatchResult {
            Self::ensure_admin(origin)?;
            for account in accounts {
                Self::do_add_blacklist(account);
            }
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(10_000)]
        pub fn remove_blacklist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_admin(origin)?;
            Self::do_remove_blacklist(account);
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(Weight::from_parts(10_000, 0).saturating_mul((accounts.len() as u64).saturating_add(1)))]
        pub fn remove_multiple_blacklist(
            origin: OriginFor<T>,
            accounts: BoundedVec<T::AccountId, T::MaxBatchSize>,
        ) -> DispatchResult {
            Self::ensure_admin(origin)?;
            for account in accounts {
                Self::do_remove_blacklist(account);
            }
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(10_000)]
        pub fn set_anti_bot_state(origin: OriginFor<T>, active: bool) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_set_active(&who, active)
        }

        #[pallet::call_index(5)]
        #[pallet::weight(10_000)]
        pub fn transfer_admin(origin: OriginFor<T>, new: T::AccountId) -> DispatchResult {
            let old = Self::ensure_admin(origin)?;
            Admin::<T>::put(&new);
            log::info!(target: LOG_TARGET, "admin changed from {:?} to {:?}", old, new);
            Self::deposit_event(Event::AdminChanged { old, new });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    pub struct GenesisConfig<T: Config> {
        /// Gate admin, normally the deploying account
        pub admin: Option<T::AccountId>,
        /// Accounts to blacklist at genesis
        pub blacklisted: Vec<T::AccountId>,
        /// Initial enforcement state
        pub active: bool,
    }

    impl<T: Config> Default for GenesisConfig<T> {
        fn default() -> Self {
            Self { admin: None, blacklisted: Vec::new(), active: true }
        }
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            if let Some(ref admin) = self.admin {
                Admin::<T>::put(admin);
            }

            for account in &self.blacklisted {
                Blacklist::<T>::insert(account, true);
            }

            AntiBotActive::<T>::put(self.active);
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Raw enforcement decision: blacklisted while the gate is active.
    pub fn is_blocked(who: &T::AccountId) -> bool {
        AntiBotActive::<T>::get() && Blacklist::<T>::get(who)
    }

    fn ensure_admin(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        Self::ensure_is_admin(&who)?;
        Ok(who)
    }

    fn ensure_is_admin(who: &T::AccountId) -> DispatchResult {
        ensure!(Admin::<T>::get().as_ref() == Some(who), Error::<T>::Unauthorized);
        Ok(())
    }

    // Re-adding and re-removing are no-ops on state but still emit.
    fn do_add_blacklist(account: T::AccountId) {
        Blacklist::<T>::insert(&account, true);
        Self::deposit_event(Event::AddBlacklist { account });
    }

    fn do_remove_blacklist(account: T::AccountId) {
        Blacklist::<T>::remove(&account);
        Self::deposit_event(Event::RemoveBlacklist { account });
    }

    fn do_set_active(who: &T::AccountId, active: bool) -> DispatchResult {
        Self::ensure_is_admin(who)?;
        AntiBotActive::<T>::put(active);
        log::info!(target: LOG_TARGET, "anti-bot enforcement set to {} by {:?}", active, who);
        Self::deposit_event(Event::AntiBotStateChanged { active });
        Ok(())
    }
}

impl<T: Config> Error<T> {
    /// Human-readable rejection text.
    pub fn message(&self) -> &'static str {
        match self {
            Error::Unauthorized => "AntiBot: caller is not the admin",
            Error::FromAddressIsBot => BOT_ADDRESS_MESSAGE,
            _ => "AntiBot: unknown error",
        }
    }
}

impl<T: Config> AntiBotGate<T::AccountId> for Pallet<T> {
    fn is_active() -> bool {
        AntiBotActive::<T>::get()
    }

    fn is_blocked(who: &T::AccountId) -> bool {
        Pallet::<T>::is_blocked(who)
    }

    fn ensure_not_blocked(who: &T::AccountId) -> DispatchResult {
        if Pallet::<T>::is_blocked(who) {
            log::debug!(target: LOG_TARGET, "rejecting transfer from blocked account {:?}", who);
            return Err(Error::<T>::FromAddressIsBot.into());
        }
        Ok(())
    }

    fn set_active(caller: &T::AccountId, active: bool) -> DispatchResult {
        Self::do_set_active(caller, active)
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn set_admin(who: &T::AccountId) {
        Admin::<T>::put(who);
    }
}
