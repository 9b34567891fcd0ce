use assert_matches::assert_matches;
use mockito::Matcher;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use starknet_types_core::felt::Felt;
use url::Url;

use crate::client::DevnetClient;
use crate::errors::DevnetError;
use crate::rpc_objects::{MessageToL2, RestartParams};

const MESSAGING_CONTRACT_ADDRESS: &str = "0x5fbdb2315678afecb367f032d93f642f64180aa3";
const L2_CONTRACT_ADDRESS: &str =
    "0x3a2a4a0e1f44f07e5bc6b2b2b6ba9c2dd24f1fa4b1f1ed0342bf4c7ba5d6b0e";

async fn run_devnet_server() -> (mockito::ServerGuard, DevnetClient) {
    let server = mockito::Server::new_async().await;
    let client = DevnetClient::new(Url::parse(&server.url()).unwrap()).unwrap();
    (server, client)
}

async fn mock_rpc_interaction(
    server: &mut mockito::ServerGuard,
    method: &str,
    params: Value,
    response: Value,
) -> mockito::Mock {
    let request_body = json!({
        "jsonrpc": "2.0",
        "id": 0,
        "method": method,
        "params": params,
    });
    server
        .mock("POST", "/rpc")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(request_body))
        .with_status(200)
        .with_body(response.to_string())
        .create_async()
        .await
}

fn success(result: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": 0, "result": result })
}

fn message_to_l2_json(nonce: &str) -> Value {
    json!({
        "l1_contract_address": "0xe7f1725e7734ce288f8367e1bb143e90bb3f0512",
        "l2_contract_address": L2_CONTRACT_ADDRESS,
        "entry_point_selector": "0x2d757788a8d8d6f21d1cd40bce38a8222d70654214e96ff95d8086e684fbee5",
        "payload": ["0x1", "0x2"],
        "paid_fee_on_l1": "0x10d003ff9a00",
        "nonce": nonce,
    })
}

#[tokio::test]
async fn is_alive() {
    let (mut server, client) = run_devnet_server().await;
    assert!(!client.is_alive().await);

    let mock = server.mock("GET", "/is_alive").with_body("Alive!!!").create_async().await;
    assert!(client.is_alive().await);
    mock.assert_async().await;
}

#[tokio::test]
async fn urls_are_derived_from_base_url() {
    let client = DevnetClient::new(Url::parse("http://127.0.0.1:5050").unwrap()).unwrap();
    assert_eq!(client.base_url().as_str(), "http://127.0.0.1:5050/");
    assert_eq!(client.rpc_url().as_str(), "http://127.0.0.1:5050/rpc");
}

#[tokio::test]
async fn load_deploys_new_messaging_contract() {
    let (mut server, client) = run_devnet_server().await;
    let l1_url = Url::parse("http://127.0.0.1:8545").unwrap();
    let mock = mock_rpc_interaction(
        &mut server,
        "devnet_postmanLoad",
        json!({ "network_url": l1_url.as_str() }),
        success(json!({ "messaging_contract_address": MESSAGING_CONTRACT_ADDRESS })),
    )
    .await;

    let response = client.load_l1_messaging_contract(&l1_url, None).await.unwrap();
    assert_eq!(response.messaging_contract_address, MESSAGING_CONTRACT_ADDRESS);
    mock.assert_async().await;
}

#[tokio::test]
async fn load_reattaches_to_existing_messaging_contract() {
    let (mut server, client) = run_devnet_server().await;
    let l1_url = Url::parse("http://127.0.0.1:8545").unwrap();
    let mock = mock_rpc_interaction(
        &mut server,
        "devnet_postmanLoad",
        json!({
            "network_url": l1_url.as_str(),
            "messaging_contract_address": MESSAGING_CONTRACT_ADDRESS,
        }),
        success(json!({ "messaging_contract_address": MESSAGING_CONTRACT_ADDRESS })),
    )
    .await;

    let response =
        client.load_l1_messaging_contract(&l1_url, Some(MESSAGING_CONTRACT_ADDRESS)).await.unwrap();
    assert_eq!(response.messaging_contract_address, MESSAGING_CONTRACT_ADDRESS);
    mock.assert_async().await;
}

#[tokio::test]
async fn flush_returns_delivered_messages_in_order() {
    let (mut server, client) = run_devnet_server().await;
    let mock = mock_rpc_interaction(
        &mut server,
        "devnet_postmanFlush",
        json!({ "dry_run": false }),
        success(json!({
            "messages_to_l1": [],
            "messages_to_l2": [message_to_l2_json("0x0"), message_to_l2_json("0x1")],
            "generated_l2_transactions": ["0xabc", "0xdef"],
            "l1_provider": "http://127.0.0.1:8545/",
        })),
    )
    .await;

    let response = client.flush().await.unwrap();
    assert_eq!(response.messages_to_l2.len(), 2);
    assert_eq!(response.messages_to_l2[0].nonce, Felt::ZERO);
    assert_eq!(response.messages_to_l2[1].nonce, Felt::ONE);
    assert_eq!(response.messages_to_l2[0].payload, vec![Felt::ONE, Felt::TWO]);
    assert_eq!(
        response.generated_l2_transactions,
        vec![Felt::from(0xabc_u64), Felt::from(0xdef_u64)]
    );
    assert!(response.messages_to_l1.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn flush_dry_run_sets_flag() {
    let (mut server, client) = run_devnet_server().await;
    let mock = mock_rpc_interaction(
        &mut server,
        "devnet_postmanFlush",
        json!({ "dry_run": true }),
        success(json!({
            "messages_to_l1": [],
            "messages_to_l2": [message_to_l2_json("0x0")],
            "generated_l2_transactions": [],
            "l1_provider": "dry run",
        })),
    )
    .await;

    let response = client.flush_dry_run().await.unwrap();
    assert_eq!(response.messages_to_l2.len(), 1);
    assert_eq!(response.l1_provider, "dry run");
    mock.assert_async().await;
}

#[tokio::test]
async fn restart_sends_params() {
    let (mut server, client) = run_devnet_server().await;
    let mock = mock_rpc_interaction(
        &mut server,
        "devnet_restart",
        json!({ "restart_l1_to_l2_messaging": false }),
        success(json!({})),
    )
    .await;

    client.restart(RestartParams::default()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn send_message_to_l2_returns_transaction_hash() {
    let (mut server, client) = run_devnet_server().await;
    let message: MessageToL2 = serde_json::from_value(message_to_l2_json("0x7")).unwrap();
    let mock = mock_rpc_interaction(
        &mut server,
        "devnet_postmanSendMessageToL2",
        serde_json::to_value(&message).unwrap(),
        success(json!({ "transaction_hash": "0x123" })),
    )
    .await;

    let transaction_hash = client.send_message_to_l2(&message).await.unwrap();
    assert_eq!(transaction_hash, Felt::from(0x123_u64));
    mock.assert_async().await;
}

#[tokio::test]
async fn rpc_error_is_propagated() {
    let (mut server, client) = run_devnet_server().await;
    let l1_url = Url::parse("http://127.0.0.1:8545").unwrap();
    let message = format!(
        "Alloy error: The specified address ({MESSAGING_CONTRACT_ADDRESS}) contains no contract."
    );
    let mock = mock_rpc_interaction(
        &mut server,
        "devnet_postmanLoad",
        json!({
            "network_url": l1_url.as_str(),
            "messaging_contract_address": MESSAGING_CONTRACT_ADDRESS,
        }),
        json!({ "jsonrpc": "2.0", "id": 0, "error": { "code": -1, "message": message } }),
    )
    .await;

    let result =
        client.load_l1_messaging_contract(&l1_url, Some(MESSAGING_CONTRACT_ADDRESS)).await;
    assert_matches!(
        result,
        Err(DevnetError::Rpc { method, code: -1, message: error_message, data: None })
            if method == "devnet_postmanLoad" && error_message == message
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn http_error_status_is_propagated() {
    let (mut server, client) = run_devnet_server().await;
    let mock = server.mock("POST", "/rpc").with_status(503).create_async().await;

    assert_matches!(
        client.flush().await,
        Err(DevnetError::HttpStatus { status, .. }) if status.as_u16() == 503
    );
    mock.assert_async().await;
}
