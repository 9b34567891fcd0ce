use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use starknet_types_core::felt::Felt;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::errors::{DevnetError, DevnetResult};
use crate::rpc_objects::{
    FlushResponse,
    MessageToL2,
    MessagingLoadResponse,
    PostmanFlushParams,
    PostmanLoadParams,
    RestartParams,
    RpcRequest,
    RpcResponse,
    SendMessageToL2Response,
    DEVNET_POSTMAN_FLUSH,
    DEVNET_POSTMAN_LOAD,
    DEVNET_POSTMAN_SEND_MESSAGE_TO_L2,
    DEVNET_RESTART,
    JSON_RPC_VERSION,
};

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

pub const RPC_PATH: &str = "rpc";
pub const IS_ALIVE_PATH: &str = "is_alive";

/// Client of the devnet administrative endpoints.
#[derive(Clone, Debug)]
pub struct DevnetClient {
    base_url: Url,
    rpc_url: Url,
    is_alive_url: Url,
    client: reqwest::Client,
}

impl DevnetClient {
    pub fn new(base_url: Url) -> DevnetResult<Self> {
        let rpc_url = base_url.join(RPC_PATH)?;
        let is_alive_url = base_url.join(IS_ALIVE_PATH)?;
        Ok(Self { base_url, rpc_url, is_alive_url, client: reqwest::Client::new() })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    pub async fn is_alive(&self) -> bool {
        match self.client.get(self.is_alive_url.clone()).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                debug!("Devnet is not alive yet: {err}");
                false
            }
        }
    }

    pub async fn send_rpc_request<P, R>(&self, method: &str, params: Option<P>) -> DevnetResult<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let request = RpcRequest { jsonrpc: JSON_RPC_VERSION, id: 0, method, params };
        debug!("Sending {method} to {}: {}", self.rpc_url, serde_json::to_string(&request)?);

        let response = self.client.post(self.rpc_url.clone()).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DevnetError::HttpStatus { method: method.to_owned(), status });
        }

        let rpc_response: RpcResponse = serde_json::from_str(&response.text().await?)?;
        if let Some(error) = rpc_response.error {
            warn!("{method} failed with {}: {}", error.code, error.message);
            return Err(DevnetError::Rpc {
                method: method.to_owned(),
                code: error.code,
                message: error.message,
                data: error.data,
            });
        }
        Ok(serde_json::from_value(rpc_response.result.unwrap_or(Value::Null))?)
    }

    /// Clears the devnet state: blocks, deployed contracts and pending messages. L1 is untouched.
    #[instrument(skip(self))]
    pub async fn restart(&self, params: RestartParams) -> DevnetResult<()> {
        let _: Value = self.send_rpc_request(DEVNET_RESTART, Some(params)).await?;
        info!("Devnet restarted.");
        Ok(())
    }

    /// Points the postman at an L1 node. Without `messaging_contract_address` the devnet deploys
    /// its mock Starknet messaging contract on L1; with it, the postman attaches to that contract.
    #[instrument(skip(self), fields(network_url = %network_url))]
    pub async fn load_l1_messaging_contract(
        &self,
        network_url: &Url,
        messaging_contract_address: Option<&str>,
    ) -> DevnetResult<MessagingLoadResponse> {
        let params = PostmanLoadParams {
            network_url: network_url.to_string(),
            messaging_contract_address: messaging_contract_address.map(str::to_owned),
        };
        let response: MessagingLoadResponse =
            self.send_rpc_request(DEVNET_POSTMAN_LOAD, Some(params)).await?;
        info!("L1 messaging contract loaded at {}.", response.messaging_contract_address);
        Ok(response)
    }

    /// Delivers the pending L1->L2 messages to L2 and the pending L2->L1 messages to L1.
    #[instrument(skip(self))]
    pub async fn flush(&self) -> DevnetResult<FlushResponse> {
        self.flush_with(PostmanFlushParams { dry_run: false }).await
    }

    /// Reports the pending messages without delivering them.
    #[instrument(skip(self))]
    pub async fn flush_dry_run(&self) -> DevnetResult<FlushResponse> {
        self.flush_with(PostmanFlushParams { dry_run: true }).await
    }

    async fn flush_with(&self, params: PostmanFlushParams) -> DevnetResult<FlushResponse> {
        let response: FlushResponse =
            self.send_rpc_request(DEVNET_POSTMAN_FLUSH, Some(params)).await?;
        info!(
            "Flushed {} messages to L2 and {} messages to L1 (dry run: {}).",
            response.messages_to_l2.len(),
            response.messages_to_l1.len(),
            params.dry_run
        );
        Ok(response)
    }

    /// Executes an L1 handler transaction on L2 as if `message` was sent from L1, without an L1
    /// node. Returns the hash of the generated transaction.
    #[instrument(skip(self))]
    pub async fn send_message_to_l2(&self, message: &MessageToL2) -> DevnetResult<Felt> {
        let response: SendMessageToL2Response =
            self.send_rpc_request(DEVNET_POSTMAN_SEND_MESSAGE_TO_L2, Some(message)).await?;
        Ok(response.transaction_hash)
    }
}
