//! Benchmarking setup for pallet-anti-bot

use super::*;

#[allow(unused)]
use crate::Pallet as AntiBot;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn admin<T: Config>() -> T::AccountId {
    let admin: T::AccountId = whitelisted_caller();
    Admin::<T>::put(&admin);
    admin
}

fn accounts<T: Config>(n: u32) -> BoundedVec<T::AccountId, T::MaxBatchSize> {
    let accounts: Vec<T::AccountId> = (0..n).map(|i| account("bot", i, 0)).collect();
    accounts.try_into().expect("n is bounded by MaxBatchSize")
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn add_blacklist() {
        let caller = admin::<T>();
        let bot: T::AccountId = account("bot", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), bot.clone());

        assert!(Blacklist::<T>::get(&bot));
    }

    #[benchmark]
    fn add_multiple_blacklist(n: Linear<1, { T::MaxBatchSize::get() }>) {
        let caller = admin::<T>();
        let bots = accounts::<T>(n);
        let last = bots.last().cloned().expect("n >= 1");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), bots);

        assert!(Blacklist::<T>::get(&last));
    }

    #[benchmark]
    fn remove_blacklist() {
        let caller = admin::<T>();
        let bot: T::AccountId = account("bot", 0, 0);
        Blacklist::<T>::insert(&bot, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), bot.clone());

        assert!(!Blacklist::<T>::get(&bot));
    }

    #[benchmark]
    fn remove_multiple_blacklist(n: Linear<1, { T::MaxBatchSize::get() }>) {
        let caller = admin::<T>();
        let bots = accounts::<T>(n);
        for bot in bots.iter() {
            Blacklist::<T>::insert(bot, true);
        }
        let last = bots.last().cloned().expect("n >= 1");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), bots);

        assert!(!Blacklist::<T>::get(&last));
    }

    #[benchmark]
    fn set_anti_bot_state() {
        let caller = admin::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), false);

        assert!(!AntiBotActive::<T>::get());
    }

    #[benchmark]
    fn transfer_admin() {
        let caller = admin::<T>();
        let new: T::AccountId = account("admin", 1, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), new.clone());

        assert_eq!(Admin::<T>::get(), Some(new));
    }

    impl_benchmark_test_suite!(AntiBot, crate::mock::new_test_ext(), crate::mock::Test);
}
