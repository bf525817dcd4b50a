//! JSON-RPC client for a transaction relayer.
//!
//! The relayer holds the signer's keys, signs the function call and waits for
//! the transaction outcome. One request per call; no retries.

use std::time::Duration;

use serde::Deserialize;

use crate::contract::{CallReceipt, ContractCall, ContractCaller};
use crate::error::WalletError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for a relayer that executes contract calls.
#[derive(Clone)]
pub struct RelayerClient {
    http: reqwest::Client,
    relayer_url: String,
}

/// The `result` object of a `function_call` response.
#[derive(Debug, Clone, Deserialize)]
struct FunctionCallResult {
    #[serde(default)]
    transaction_hash: Option<String>,
    #[serde(default = "default_status")]
    status: String,
    #[serde(default)]
    detail: Option<String>,
}

fn default_status() -> String {
    "success".to_string()
}

impl RelayerClient {
    /// Create a client targeting the given relayer URL (e.g. `http://127.0.0.1:3030`).
    pub fn new(relayer_url: impl Into<String>) -> Result<Self, WalletError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| WalletError::Rpc(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            relayer_url: relayer_url.into(),
        })
    }

    pub fn relayer_url(&self) -> &str {
        &self.relayer_url
    }

    async fn rpc_call(&self, body: serde_json::Value) -> Result<serde_json::Value, WalletError> {
        let response = self
            .http
            .post(&self.relayer_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| WalletError::Rpc(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(WalletError::Rpc(format!(
                "relayer returned HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| WalletError::Rpc(format!("invalid JSON response: {e}")))
    }
}

/// JSON body for a `function_call` request.
pub(crate) fn request_body(call: &ContractCall) -> serde_json::Value {
    serde_json::json!({
        "action": "function_call",
        "signer_id": call.signer_id,
        "contract_id": call.contract_id,
        "method_name": call.method_name,
        "args": call.args,
        // Gas travels as a string like every other large integer.
        "gas": call.gas.to_string(),
        "deposit": call.deposit,
    })
}

/// Interpret a relayer response body.
pub(crate) fn parse_response(json: serde_json::Value) -> Result<CallReceipt, WalletError> {
    if let Some(err) = json.get("error") {
        let message = err
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| err.to_string());
        return Err(WalletError::CallRejected(message));
    }

    let result = json.get("result").cloned().unwrap_or(json);
    let result: FunctionCallResult = serde_json::from_value(result)
        .map_err(|e| WalletError::Rpc(format!("invalid function_call response: {e}")))?;

    if result.status != "success" {
        return Err(WalletError::CallRejected(
            result.detail.unwrap_or(result.status),
        ));
    }

    Ok(CallReceipt {
        transaction_hash: result.transaction_hash,
    })
}

impl ContractCaller for RelayerClient {
    async fn call(&self, call: ContractCall) -> Result<CallReceipt, WalletError> {
        let json = self.rpc_call(request_body(&call)).await?;
        parse_response(json)
    }
}
