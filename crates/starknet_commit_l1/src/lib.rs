pub mod config;
pub mod errors;
pub mod l1_node;
pub mod starknet_commit_contract;
