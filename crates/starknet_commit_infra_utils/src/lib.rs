pub mod command;
pub mod path;
pub mod run_until;
pub mod trace_util;
