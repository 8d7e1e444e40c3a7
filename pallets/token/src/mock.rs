use crate as pallet_token;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime with the gate wired into the ledger.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        AntiBot: pallet_anti_bot,
        Token: pallet_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

parameter_types! {
    pub const Deployer: u64 = 1;
    pub const MaxBatchSize: u32 = 16;
}

pub const ACCOUNT1: u64 = 2;
pub const ACCOUNT2: u64 = 3;
pub const INITIAL_SUPPLY: u128 = 5_000;

impl pallet_anti_bot::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type MaxBatchSize = MaxBatchSize;
}

impl pallet_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type AntiBot = AntiBot;
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_anti_bot::GenesisConfig::<Test> {
        admin: Some(Deployer::get()),
        blacklisted: vec![],
        active: true,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_token::GenesisConfig::<Test> {
        deployer: Some(Deployer::get()),
        token_name: b"Dummy Token".to_vec(),
        token_symbol: b"DMY".to_vec(),
        initial_supply: INITIAL_SUPPLY,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext: sp_io::TestExternalities = t.into();
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// Sum of every stored balance, for supply conservation checks.
pub fn sum_of_balances() -> u128 {
    crate::Balances::<Test>::iter_values().sum()
}
