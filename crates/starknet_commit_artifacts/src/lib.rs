//! Loaders for compiled contract artifacts.
//!
//! * Cairo contracts compiled by Scarb produce two files per contract under the build directory:
//!   the Sierra class (`<name>.contract_class.json`) and the CASM class
//!   (`<name>.compiled_contract_class.json`). See [`compiled_contract`].
//! * Solidity contracts compiled by Hardhat or Foundry produce a single JSON artifact holding the
//!   ABI and the creation bytecode. See [`l1_artifact`].

pub mod compiled_contract;
pub mod errors;
pub mod l1_artifact;
