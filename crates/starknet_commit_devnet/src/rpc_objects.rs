use serde::{Deserialize, Serialize};
use serde_json::Value;
use starknet_types_core::felt::Felt;

pub const JSON_RPC_VERSION: &str = "2.0";

pub const DEVNET_RESTART: &str = "devnet_restart";
pub const DEVNET_POSTMAN_LOAD: &str = "devnet_postmanLoad";
pub const DEVNET_POSTMAN_FLUSH: &str = "devnet_postmanFlush";
pub const DEVNET_POSTMAN_SEND_MESSAGE_TO_L2: &str = "devnet_postmanSendMessageToL2";

#[derive(Debug, Serialize)]
pub struct RpcRequest<'a, P: Serialize> {
    pub jsonrpc: &'a str,
    pub id: u64,
    pub method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<P>,
}

#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: Option<String>,
    pub id: Option<u64>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct RestartParams {
    /// Also forget the loaded messaging contract and the L1 blocks the postman already scanned.
    pub restart_l1_to_l2_messaging: bool,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PostmanLoadParams {
    pub network_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaging_contract_address: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct MessagingLoadResponse {
    pub messaging_contract_address: String,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct PostmanFlushParams {
    pub dry_run: bool,
}

/// A message sent from an L1 contract to an L2 contract.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct MessageToL2 {
    pub l1_contract_address: Felt,
    pub l2_contract_address: Felt,
    pub entry_point_selector: Felt,
    pub payload: Vec<Felt>,
    pub paid_fee_on_l1: Felt,
    pub nonce: Felt,
}

/// A message sent from an L2 contract to an L1 contract.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct MessageToL1 {
    pub from_address: Felt,
    pub to_address: Felt,
    pub payload: Vec<Felt>,
}

/// The messages a flush delivered, in delivery order.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct FlushResponse {
    pub messages_to_l1: Vec<MessageToL1>,
    pub messages_to_l2: Vec<MessageToL2>,
    /// Hashes of the L1 handler transactions executed on L2 for `messages_to_l2`.
    pub generated_l2_transactions: Vec<Felt>,
    pub l1_provider: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SendMessageToL2Response {
    pub transaction_hash: Felt,
}
