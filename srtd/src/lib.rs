//! # Substrate RunTime driver (srtd)
//!
//! Command-line front end for the SRT containers and strings. Each
//! subcommand runs one runtime operation on its arguments and prints the
//! result; `scenarios` runs the reference scenarios end to end.
//!
//! ## Usage
//!
//! ```bash
//! srtd [--budget <bytes>] [--log-level <filter>] <command>
//! srtd format "assert failed: " x
//! srtd replace aaa a b 2
//! srtd substr "hello world" 0 5
//! srtd push 20
//! ```
//!
//! With `--budget` every buffer is accounted against a fixed byte budget, so
//! allocation failures can be provoked on purpose. Errors an operation
//! declares are reported with their status ordinal; conditions the runtime
//! treats as fatal go through the panic path and exit with status 1.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use srt_error::{status_of, ErrorSet};
use srt_foundation::{Array, BoundedVec, BudgetProvider, HeapProvider, MemoryProvider, Str};
use tracing::{debug, info};

/// Substrate RunTime driver CLI arguments
#[derive(Parser, Debug)]
#[command(name = "srtd", version, about)]
pub struct Cli {
    /// Limit all runtime allocations to this many bytes
    #[arg(short, long, global = true)]
    pub budget: Option<usize>,

    /// Log filter, e.g. `debug` or `srt_foundation=trace` (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Runtime operations exposed on the command line
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the reference scenarios and report each result
    Scenarios,
    /// Concatenate a prefix and arguments with a single allocation
    Format {
        /// Leading text
        prefix: String,
        /// Appended in order
        args: Vec<String>,
    },
    /// Replace up to N leftmost occurrences
    Replace {
        /// Source text
        text: String,
        /// Text to search for
        from: String,
        /// Replacement text
        to: String,
        /// Maximum number of replacements
        #[arg(allow_negative_numbers = true)]
        count: i64,
    },
    /// Copy the byte range START..END
    Substr {
        /// Source text
        text: String,
        /// First byte offset
        #[arg(allow_negative_numbers = true)]
        start: i64,
        /// One past the last byte offset
        #[arg(allow_negative_numbers = true)]
        end: i64,
    },
    /// Push 0..COUNT into a bounded vector and report its shape
    Push {
        /// Number of values to push
        #[arg(allow_negative_numbers = true)]
        count: i64,
    },
}

/// Runs commands with every buffer allocated through one provider.
#[derive(Debug, Clone)]
pub struct Driver<P: MemoryProvider> {
    provider: P,
}

impl<P: MemoryProvider> Driver<P> {
    /// Create a driver allocating through `provider`
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    fn text(&self, value: &str) -> Result<Str<P>> {
        Str::from_bytes_in(value.as_bytes(), self.provider.clone())
            .with_context(|| format!("copying argument '{value}' into a runtime string"))
    }

    /// Execute `command` and return what it prints
    ///
    /// # Errors
    ///
    /// Returns an error carrying the operation's status ordinal when a
    /// declared error occurs.
    pub fn execute(&self, command: &Command) -> Result<String> {
        debug!(?command, "executing");
        match command {
            Command::Scenarios => self.scenarios(),
            Command::Format { prefix, args } => self.format(prefix, args),
            Command::Replace { text, from, to, count } => self.replace(text, from, to, *count),
            Command::Substr { text, start, end } => self.substr(text, *start, *end),
            Command::Push { count } => self.push(*count),
        }
    }

    /// Build `prefix` followed by `args`
    ///
    /// # Errors
    ///
    /// Fails if an argument cannot be copied or formatting reports an error.
    pub fn format(&self, prefix: &str, args: &[String]) -> Result<String> {
        let prefix = self.text(prefix)?;
        let values = args.iter().map(|arg| self.text(arg)).collect::<Result<Vec<_>>>()?;
        let args = Array::from_values_in(values, self.provider.clone()).context("allocating argument array")?;

        let result = Str::format(&prefix, &args);
        let status = status_of(&result);
        let formatted = result.with_context(|| format!("format failed with status {status}"))?;
        Ok(formatted.to_string())
    }

    /// Replace up to `count` occurrences of `from` in `text`
    ///
    /// # Errors
    ///
    /// Fails if an argument or the result cannot be allocated.
    pub fn replace(&self, text: &str, from: &str, to: &str, count: i64) -> Result<String> {
        let replaced = self
            .text(text)?
            .replacen(&self.text(from)?, &self.text(to)?, count)
            .context("replacen failed with status 1")?;
        Ok(replaced.to_string())
    }

    /// Copy `start..end` of `text`
    ///
    /// # Errors
    ///
    /// Fails with the declared status for an invalid range or allocation
    /// failure.
    pub fn substr(&self, text: &str, start: i64, end: i64) -> Result<String> {
        let text = self.text(text)?;
        let result = text.get_substr(start, end);
        match result {
            Ok(window) => Ok(window.to_string()),
            Err(err) => {
                let status = err.ordinal();
                Err(anyhow::Error::new(err).context(format!("get_substr failed with status {status}")))
            }
        }
    }

    /// Push `0..count` and describe the resulting vector
    ///
    /// # Errors
    ///
    /// Fails if `count` is negative or the provider refuses a buffer.
    /// Pushing past the capacity cap does not return; it enters the panic
    /// path.
    pub fn push(&self, count: i64) -> Result<String> {
        anyhow::ensure!(count >= 0, "count must not be negative, got {count}");

        let mut values = BoundedVec::<i64, P>::new_in(self.provider.clone()).context("allocating vector")?;
        for value in 0..count {
            values.push(value).with_context(|| format!("push {value} failed with status 1"))?;
        }

        let last = match values.len() {
            0 => String::from("none"),
            len => values.get(len - 1)?.to_string(),
        };
        Ok(format!("len={} capacity={} last={last}", values.len(), values.capacity()))
    }

    /// Run the reference scenarios, one report line per scenario
    ///
    /// # Errors
    ///
    /// Fails on the first scenario whose operation reports an unexpected
    /// error.
    pub fn scenarios(&self) -> Result<String> {
        let mut report = Vec::new();

        let formatted = self.format("assert failed: ", &[String::from("x")])?;
        report.push(check("format", &formatted, "assert failed: x"));

        let window = self.substr("hello world", 0, 5)?;
        report.push(check("substr", &window, "hello"));

        let empty = self.text("hello world")?.get_substr(5, 5);
        let status = status_of(&empty);
        report.push(check("substr-empty", &format!("status {status}"), "status 1"));

        let replaced = self.replace("aaa", "a", "b", 2)?;
        report.push(check("replacen", &replaced, "bba"));

        let pushed = self.push(20)?;
        report.push(check("vec-push", &pushed, "len=20 capacity=32 last=19"));

        let passed = report.iter().filter(|line| line.starts_with("ok")).count();
        info!(passed, total = report.len(), "scenarios finished");
        report.push(format!("{passed}/{} scenarios passed", report.len()));
        Ok(report.join("\n"))
    }
}

fn check(name: &str, actual: &str, expected: &str) -> String {
    if actual == expected {
        format!("ok   {name}: {actual}")
    } else {
        format!("FAIL {name}: expected {expected:?}, got {actual:?}")
    }
}

/// Execute the parsed command line
///
/// # Errors
///
/// Propagates the failure of the selected command.
pub fn run(cli: &Cli) -> Result<String> {
    match cli.budget {
        Some(limit) => {
            let provider = BudgetProvider::new(limit);
            let output = Driver::new(provider.clone()).execute(&cli.command);
            debug!(limit, peak = provider.peak(), refusals = provider.refusals(), "budget usage");
            output
        }
        None => Driver::new(HeapProvider).execute(&cli.command),
    }
}
