//! # Run Flow
//!
//! 1. Read the size (positive `i32`)
//! 2. Reserve the buffer
//! 3. Read exactly `size` elements
//! 4. Read the target
//! 5. Search once and write the result line
//!
//! The first failure ends the run. The buffer is an owned `Vec`, released on
//! every exit path.

use std::io::{BufRead, Write};

use bs_01_binary_search::{SearchApi, SearchOutcome};
use tracing::{debug, info, warn};

use crate::config::DriverConfig;
use crate::error::DriverError;
use crate::input::{Token, TokenReader};
use crate::report::render;

/// What a successful run did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of elements searched
    pub size: usize,
    /// Target that was looked up
    pub target: i32,
    /// Search result
    pub outcome: SearchOutcome,
}

/// Run one read-search-report cycle.
///
/// # Arguments
/// * `input` - Source of size, elements and target tokens
/// * `output` - Prompts and the result line
/// * `service` - Search implementation, invoked exactly once on success
/// * `config` - Prompt and format settings
pub fn run<R, W, S>(
    input: R,
    output: &mut W,
    service: &S,
    config: &DriverConfig,
) -> Result<RunSummary, DriverError>
where
    R: BufRead,
    W: Write,
    S: SearchApi + ?Sized,
{
    let mut tokens = TokenReader::new(input);

    prompt(output, config, "Enter array size: ")?;
    let size = match tokens.next_value()? {
        Token::Value(n) if n > 0 => n as usize,
        other => {
            warn!(token = ?other, "Rejected array size");
            return Err(DriverError::InvalidSize);
        }
    };

    let mut values: Vec<i32> = Vec::new();
    values.try_reserve_exact(size).map_err(|e| {
        warn!(size, error = %e, "Buffer reservation failed");
        DriverError::AllocationFailed { size }
    })?;
    debug!(size, "Buffer reserved");

    prompt(
        output,
        config,
        &format!("Enter {} integers (sorted for binary search):\n", size),
    )?;
    for index in 0..size {
        match tokens.next_value()? {
            Token::Value(value) => values.push(value),
            other => {
                warn!(index, token = ?other, "Rejected element");
                return Err(DriverError::InvalidElement { index });
            }
        }
    }

    prompt(output, config, "Enter target value to search: ")?;
    let target = match tokens.next_value()? {
        Token::Value(value) => value,
        other => {
            warn!(token = ?other, "Rejected target");
            return Err(DriverError::InvalidTarget);
        }
    };

    let outcome = service.search(&values, target);
    info!(size, target, found = ?outcome.index(), "Search finished");

    writeln!(output, "{}", render(outcome, config.format)?)?;
    output.flush()?;

    Ok(RunSummary {
        size,
        target,
        outcome,
    })
}

fn prompt<W: Write>(output: &mut W, config: &DriverConfig, text: &str) -> Result<(), DriverError> {
    if config.prompts {
        output.write_all(text.as_bytes())?;
        output.flush()?;
    }
    Ok(())
}
