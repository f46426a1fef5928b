//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`deploy-check check`, `deploy-check orphans`)
//! - Shared configuration loading
//! - Consistent global flag handling

pub mod check;
pub mod dispatcher;
pub mod orphans;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
