//! # BS CLI
//!
//! Interactive front end for the binary search core.
//!
//! ## Flow
//!
//! ```text
//! stdin ──→ TokenReader ──→ size ──→ reserve buffer ──→ elements ──→ target
//!                                                                      │
//!                                                                      ↓
//! stdout ←── report line ←──────────── SearchApi::search ←─────────────┘
//! ```
//!
//! - `config`: command line / environment configuration
//! - `input`: whitespace token reader over any `BufRead`
//! - `driver`: the validation flow, one search per run
//! - `report`: text and JSON result lines
//! - `error`: failure kinds and exit codes
//!
//! Every failure stops the run at the first bad token; nothing is retried.

pub mod config;
pub mod driver;
pub mod error;
pub mod input;
pub mod report;

pub use config::{Args, DriverConfig, OutputFormat};
pub use driver::{run, RunSummary};
pub use error::{DriverError, EXIT_FAILURE, EXIT_SUCCESS};
pub use input::{Token, TokenReader};
pub use report::render;
