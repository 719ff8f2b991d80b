//! Command handler modules for the hilo CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) and, for the
//!   interactive session, the input stream (`&mut dyn BufRead`) are passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod cfg;
mod count;
mod deal;

pub use cfg::handle_cfg_command;
pub use count::handle_count_command;
pub use deal::handle_deal_command;
