//! Deployment presets.
//!
//! A [`TokenDeployment`] is the single configuration struct from which both the
//! anti-bot gate and the token ledger are built at genesis. The deployer becomes
//! the gate admin, the ledger owner and the holder of the whole initial supply.
//! The gate is always deployed together with its ledger; there is no gate-only
//! deployment.

use crate::{AccountId, Balance, RuntimeGenesisConfig};
use sp_runtime::{BuildStorage, Storage};

const LOG_TARGET: &str = "runtime::genesis";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenDeployment {
    pub deployer: AccountId,
    pub token_name: String,
    pub token_symbol: String,
    pub initial_supply: Balance,
    /// Accounts blacklisted from the first block
    pub blacklisted: Vec<AccountId>,
    pub anti_bot_active: bool,
}

impl TokenDeployment {
    pub fn new(
        deployer: AccountId,
        token_name: impl Into<String>,
        token_symbol: impl Into<String>,
        initial_supply: Balance,
    ) -> Self {
        Self {
            deployer,
            token_name: token_name.into(),
            token_symbol: token_symbol.into(),
            initial_supply,
            blacklisted: Vec::new(),
            anti_bot_active: true,
        }
    }

    /// Production token.
    pub fn bananace(deployer: AccountId) -> Self {
        Self::new(deployer, "Bananace", "NANA", 696_969_696_969_696)
    }

    /// Small token used by the test suites.
    pub fn dummy(deployer: AccountId) -> Self {
        Self::new(deployer, "Dummy Token", "DMY", 5_000)
    }

    pub fn with_blacklist(mut self, accounts: Vec<AccountId>) -> Self {
        self.blacklisted = accounts;
        self
    }

    pub fn with_anti_bot_active(mut self, active: bool) -> Self {
        self.anti_bot_active = active;
        self
    }

    pub fn runtime_genesis_config(&self) -> RuntimeGenesisConfig {
        RuntimeGenesisConfig {
            system: Default::default(),
            anti_bot: pallet_anti_bot::GenesisConfig {
                admin: Some(self.deployer.clone()),
                blacklisted: self.blacklisted.clone(),
                active: self.anti_bot_active,
            },
            token: pallet_token::GenesisConfig {
                deployer: Some(self.deployer.clone()),
                token_name: self.token_name.as_bytes().to_vec(),
                token_symbol: self.token_symbol.as_bytes().to_vec(),
                initial_supply: self.initial_supply,
            },
        }
    }

    /// Genesis patch in the shape a chain spec consumes.
    pub fn genesis_patch(&self) -> serde_json::Value {
        serde_json::json!({
            "antiBot": {
                "admin": self.deployer,
                "blacklisted": self.blacklisted,
                "active": self.anti_bot_active,
            },
            "token": {
                "deployer": self.deployer,
                "tokenName": self.token_name.as_bytes().to_vec(),
                "tokenSymbol": self.token_symbol.as_bytes().to_vec(),
                "initialSupply": self.initial_supply,
            },
        })
    }

    pub fn build_storage(&self) -> Result<Storage, String> {
        log::info!(
            target: LOG_TARGET,
            "Deploying {} ({}) with supply {} from {}",
            self.token_name,
            self.token_symbol,
            self.initial_supply,
            self.deployer,
        );
        self.runtime_genesis_config().build_storage()
    }
}
