pub mod config;
pub mod errors;
pub mod flow_test_setup;
pub mod utils;
