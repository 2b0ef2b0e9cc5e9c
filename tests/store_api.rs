//! Store API, CLI command and session tests against an in-process HTTP stub.

#[path = "store/stub.rs"]
mod stub;
#[path = "store/client.rs"]
mod client;
#[path = "store/commands.rs"]
mod commands;
#[path = "store/session_flow.rs"]
mod session_flow;
