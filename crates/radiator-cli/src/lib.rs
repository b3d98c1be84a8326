//! Radiator configurator CLI library.
//!
//! Terminal styling and output formatting shared by the `radiator-cli`
//! command handlers.

pub mod output;
pub mod terminal;
