//! Command handlers. Each translates parsed arguments into core calls and
//! renders the result; no generation rules live here.

pub mod bindings;
pub mod completions;
pub mod config;
pub mod init;
pub mod make;
