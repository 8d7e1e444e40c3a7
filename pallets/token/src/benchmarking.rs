//! Benchmarking setup for pallet-token

use super::*;

#[allow(unused)]
use crate::Pallet as Token;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        Balances::<T>::insert(&caller, 10_000_000);
        TotalSupply::<T>::put(10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        Balances::<T>::insert(&caller, 10_000_000);
        TotalSupply::<T>::put(10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), 1_000_000);

        assert_eq!(TotalSupply::<T>::get(), 9_000_000);
    }

    #[benchmark]
    fn mint() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        Owner::<T>::put(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn set_anti_bot_state() {
        let caller: T::AccountId = whitelisted_caller();
        T::AntiBot::set_admin(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), false);

        assert!(!T::AntiBot::is_active());
    }

    #[benchmark]
    fn transfer_ownership() {
        let caller: T::AccountId = whitelisted_caller();
        let new_owner: T::AccountId = account("owner", 0, 0);
        Owner::<T>::put(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner));
    }

    #[benchmark]
    fn renounce_ownership() {
        let caller: T::AccountId = whitelisted_caller();
        Owner::<T>::put(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert_eq!(Owner::<T>::get(), None);
    }

    impl_benchmark_test_suite!(Token, crate::mock::new_test_ext(), crate::mock::Test);
}
