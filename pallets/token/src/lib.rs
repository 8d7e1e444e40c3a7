#![cfg_attr(not(feature = "std"), no_std)]
// Allow deprecated weight constants and getters until benchmarked weights land
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! Fungible token ledger.
//!
//! Every transfer is checked against an [`AntiBotGate`] before balances move.
//! Burning is not gated. The ledger owner may mint and hand over or renounce
//! ownership; toggling the gate is authorized by the gate itself, so it keeps
//! working after the ledger owner is gone.

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;
pub use pallet_anti_bot::AntiBotGate;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub const LOG_TARGET: &str = "runtime::token";

/// Fixed number of decimals, ERC-20 style.
pub const DECIMALS: u8 = 18;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Policy consulted before any balance leaves an account
        type AntiBot: AntiBotGate<Self::AccountId>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Dummy Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "DMY")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Total token supply
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Ledger owner, `None` once renounced
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Tokens destroyed by their holder
        Burned { who: T::AccountId, amount: u128 },
        /// New tokens minted
        Minted { to: T::AccountId, amount: u128 },
        /// Ownership handed over or renounced (`new_owner` is `None`)
        OwnershipTransferred { previous_owner: Option<T::AccountId>, new_owner: Option<T::AccountId> },
    }

    #[pallet::error]
    pub enum Error<T> {
        InsufficientBalance,
        /// Caller is not the ledger owner
        Unauthorized,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(10_000)]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            T::AntiBot::ensure_not_blocked(&sender)?;

            let from_balance = Balances::<T>::get(&sender);
            ensure!(from_balance >= amount, Error::<T>::InsufficientBalance);

            if sender != to {
                let to_balance =
                    Balances::<T>::get(&to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
                Balances::<T>::insert(&sender, from_balance - amount);
                Balances::<T>::insert(&to, to_balance);
            }

            Self::deposit_event(Event::Transferred { from: sender, to, amount });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(10_000)]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let balance =
                Balances::<T>::get(&who).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;

            Balances::<T>::insert(&who, balance);
            TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_sub(amount));
            Self::deposit_event(Event::Burned { who, amount });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(10_000)]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            Self::ensure_owner(origin)?;
            let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;

            TotalSupply::<T>::put(supply);
            Balances::<T>::mutate(&to, |bal| *bal = bal.saturating_add(amount));
            Self::deposit_event(Event::Minted { to, amount });
            Ok(())
        }

        /// Toggle the anti-bot gate. Authorized against the gate admin, not the
        /// ledger owner, so it stays usable after `renounce_ownership`.
        #[pallet::call_index(3)]
        #[pallet::weight(10_000)]
        pub fn set_anti_bot_state(origin: OriginFor<T>, active: bool) -> DispatchResult {
            let who = ensure_signed(origin)?;
            T::AntiBot::set_active(&who, active)
        }

        #[pallet::call_index(4)]
        #[pallet::weight(10_000)]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let who = Self::ensure_owner(origin)?;
            Self::set_owner(who, Some(new_owner));
            Ok(())
        }

        /// Leave the ledger without an owner. Irreversible.
        #[pallet::call_index(5)]
        #[pallet::weight(10_000)]
        pub fn renounce_ownership(origin: OriginFor<T>) -> DispatchResult {
            let who = Self::ensure_owner(origin)?;
            Self::set_owner(who, None);
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Deploying account: becomes owner and receives the initial supply
        pub deployer: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Supply minted to the deployer
        pub initial_supply: u128,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            // Set token metadata
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            match self.deployer {
                Some(ref deployer) => {
                    Owner::<T>::put(deployer);
                    Balances::<T>::insert(deployer, self.initial_supply);
                    TotalSupply::<T>::put(self.initial_supply);
                },
                None => assert!(self.initial_supply == 0, "Initial supply requires a deployer"),
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    pub fn decimals() -> u8 {
        DECIMALS
    }

    /// Proxied read of the gate's enforcement flag.
    pub fn anti_bot_active() -> bool {
        T::AntiBot::is_active()
    }

    /// Supply equals the sum of all balances.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let held = Balances::<T>::iter_values().fold(0u128, |acc, bal| acc.saturating_add(bal));
        ensure!(TotalSupply::<T>::get() == held, "TotalSupply does not match the sum of balances");
        Ok(())
    }

    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Owner::<T>::get().as_ref() == Some(&who), Error::<T>::Unauthorized);
        Ok(who)
    }

    fn set_owner(previous: T::AccountId, new_owner: Option<T::AccountId>) {
        match new_owner {
            Some(ref owner) => Owner::<T>::put(owner),
            None => Owner::<T>::kill(),
        }
        log::info!(target: LOG_TARGET, "ownership moved from {:?} to {:?}", previous, new_owner);
        Self::deposit_event(Event::OwnershipTransferred { previous_owner: Some(previous), new_owner });
    }
}
