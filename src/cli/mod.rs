//! # Command-Line Interface
//!
//! User-facing commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose | Text output |
//! |---------|---------|-------------|
//! | `total <PATH>` | Direct plus indirect orbits in the map | `Total: 42` |
//! | `hops <PATH>` | Transfers between the bodies two objects orbit | `Hops: 4` |
//! | `chain <PATH> <BODY>` | Ancestors of a body, nearest first | `Chain: K -> J -> COM` |
//!
//! ## Output Formats
//!
//! All commands support the `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! The default can be changed with `default_format` in the config file.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! orbit-map --verbose hops input.txt
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod query;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
