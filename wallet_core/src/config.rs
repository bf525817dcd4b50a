//! Sender configuration with TOML file support.

use std::path::Path;

use multisend_transactions::DEFAULT_GAS;
use multisend_types::{AccountId, NetworkId};
use multisend_utils::LogFormat;
use serde::{Deserialize, Serialize};

use crate::error::WalletError;

/// Configuration for submitting multisend batches.
///
/// Can be loaded from a TOML file via [`SenderConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderConfig {
    /// Which network the contract lives on.
    #[serde(default)]
    pub network: NetworkId,

    /// Account of the multisend contract.
    #[serde(default = "default_contract_id")]
    pub contract_id: AccountId,

    /// Contract method taking `{"operations": [...]}`.
    #[serde(default = "default_method_name")]
    pub method_name: String,

    /// Gas attached to every batch call.
    #[serde(default = "default_gas")]
    pub gas: u64,

    /// JSON-RPC endpoint of the relayer that signs and sends calls.
    #[serde(default = "default_relayer_url")]
    pub relayer_url: String,

    /// Account that signs calls. No account means no session.
    #[serde(default)]
    pub signer_account: Option<AccountId>,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_contract_id() -> AccountId {
    AccountId::new("multisender.testnet").expect("default contract id is a valid account id")
}

fn default_method_name() -> String {
    "send".to_string()
}

fn default_gas() -> u64 {
    DEFAULT_GAS
}

fn default_relayer_url() -> String {
    "http://127.0.0.1:3030".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl SenderConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, WalletError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| WalletError::Config(format!("{}: {e}", path.as_ref().display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, WalletError> {
        toml::from_str(s).map_err(|e| WalletError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, WalletError> {
        toml::to_string_pretty(self).map_err(|e| WalletError::Config(e.to_string()))
    }
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            network: NetworkId::default(),
            contract_id: default_contract_id(),
            method_name: default_method_name(),
            gas: default_gas(),
            relayer_url: default_relayer_url(),
            signer_account: None,
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
