//! Print the values matching a parity predicate.

use clap::{Args, ValueEnum};
use tracing::info;

use recordhook_core::config::AppConfig;
use recordhook_core::result::AppResult;
use recordhook_core::types::filter::{Parity, print_filtered};
use recordhook_sink::build_sink;

/// Parity selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParityArg {
    /// Even values
    Even,
    /// Odd values
    Odd,
}

impl From<ParityArg> for Parity {
    fn from(arg: ParityArg) -> Self {
        match arg {
            ParityArg::Even => Parity::Even,
            ParityArg::Odd => Parity::Odd,
        }
    }
}

/// Arguments for the filter command
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Which values to keep
    #[arg(short, long, value_enum)]
    pub parity: ParityArg,

    /// Values to filter
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

/// Execute the filter command
pub fn execute(args: &FilterArgs, config: &AppConfig) -> AppResult<()> {
    let sink = build_sink(&config.sink)?;
    let parity = Parity::from(args.parity);

    let written = print_filtered(&args.values, parity.predicate(), sink.as_ref())?;
    info!(?parity, total = args.values.len(), written, "Values filtered");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_arg_selects_predicate() {
        let even = Parity::from(ParityArg::Even).predicate();
        let odd = Parity::from(ParityArg::Odd).predicate();

        assert!(even(4) && !even(-3));
        assert!(odd(-3) && !odd(4));
    }

    #[test]
    fn test_execute_writes_to_configured_sink() {
        let mut config = AppConfig::default();
        config.sink.kind = "memory".to_string();
        let args = FilterArgs {
            parity: ParityArg::Odd,
            values: vec![1, 2, -3],
        };
        execute(&args, &config).expect("filter");

        config.sink.kind = "carrier-pigeon".to_string();
        let err = execute(&args, &config).expect_err("unknown sink");
        assert_eq!(err.kind, recordhook_core::error::ErrorKind::Configuration);
    }
}
