//! CLI command handlers, one file per command.

mod completions;
mod config;
mod convert;
mod man;
mod rule_sets;

pub use completions::run_completions;
pub use config::run_config;
pub use convert::{run_convert, ConvertOverrides};
pub use man::run_man;
pub use rule_sets::run_rule_sets;
