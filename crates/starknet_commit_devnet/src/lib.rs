//! A handle to a `starknet-devnet` process and a client for its administrative JSON-RPC methods,
//! most notably the postman, which relays messages between an L1 node and the devnet.

pub mod client;
pub mod config;
pub mod devnet;
pub mod errors;
pub mod rpc_objects;
