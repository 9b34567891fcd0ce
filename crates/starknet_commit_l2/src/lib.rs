pub mod commitment;
pub mod config;
pub mod deployer;
pub mod errors;
