#![cfg_attr(not(feature = "std"), no_std)]

//! Runtime wiring the anti-bot gate into the token ledger.

use frame_support::{construct_runtime, derive_impl, parameter_types};
use pallet_anti_bot as anti_bot;
use pallet_token as token;
use sp_runtime::{
    generic,
    traits::{AccountIdLookup, BlakeTwo256, IdentifyAccount, Verify},
    MultiAddress, MultiSignature,
};

#[cfg(feature = "std")]
pub mod genesis;


pub type Signature = MultiSignature;
pub type AccountId = <<Signature as Verify>::Signer as IdentifyAccount>::AccountId;
pub type Balance = u128;
pub type BlockNumber = u32;
pub type Nonce = u32;
pub type Address = MultiAddress<AccountId, ()>;
pub type Header = generic::Header<BlockNumber, BlakeTwo256>;

pub type TxExtension = (
    frame_system::CheckNonZeroSender<Runtime>,
    frame_system::CheckSpecVersion<Runtime>,
    frame_system::CheckTxVersion<Runtime>,
    frame_system::CheckGenesis<Runtime>,
    frame_system::CheckEra<Runtime>,
    frame_system::CheckNonce<Runtime>,
    frame_system::CheckWeight<Runtime>,
);

pub type UncheckedExtrinsic =
    generic::UncheckedExtrinsic<Address, RuntimeCall, Signature, TxExtension>;
pub type Block = generic::Block<Header, UncheckedExtrinsic>;

construct_runtime!(
    pub enum Runtime {
        System: frame_system,
        AntiBot: anti_bot,
        Token: token,
    }
);

#[derive_impl(frame_system::config_preludes::SolochainDefaultConfig)]
impl frame_system::Config for Runtime {
    type Block = Block;
    type AccountId = AccountId;
    type Lookup = AccountIdLookup<AccountId, ()>;
    type Nonce = Nonce;
}

parameter_types! {
    /// Upper bound for one blacklist batch call
    pub const MaxBlacklistBatch: u32 = 256;
}

impl anti_bot::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type MaxBatchSize = MaxBlacklistBatch;
}

impl token::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type AntiBot = AntiBot;
}
