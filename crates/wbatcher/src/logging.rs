use log::LevelFilter;
use stderrlog::{LogLevelNum, Timestamp};

/// Logging setup arg group.
///
/// Each subcommand picks its own default level; every `-v` raises it by one
/// step and `-q` silences everything.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Raise the log level above the command default (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[clap(long)]
    pub ts: bool,
}

impl LogArgs {
    /// The effective level for a command whose default is `default`.
    pub fn level_filter(
        &self,
        default: LevelFilter,
    ) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        LevelFilter::iter()
            .nth(default as usize + self.verbose as usize)
            .unwrap_or(LevelFilter::Trace)
    }

    /// Install the stderr logger for the library and this binary.
    pub fn setup_logging(
        &self,
        default: LevelFilter,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let verbosity = match self.level_filter(default) {
            LevelFilter::Off => LogLevelNum::Off,
            LevelFilter::Error => LogLevelNum::Error,
            LevelFilter::Warn => LogLevelNum::Warn,
            LevelFilter::Info => LogLevelNum::Info,
            LevelFilter::Debug => LogLevelNum::Debug,
            LevelFilter::Trace => LogLevelNum::Trace,
        };

        stderrlog::new()
            .module(module_path!())
            .module("wordbatcher")
            .quiet(self.quiet)
            .verbosity(verbosity)
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct Harness {
        #[clap(flatten)]
        logging: LogArgs,
    }

    fn level(
        argv: &[&str],
        default: LevelFilter,
    ) -> LevelFilter {
        let mut full = vec!["t"];
        full.extend_from_slice(argv);
        Harness::try_parse_from(full)
            .unwrap()
            .logging
            .level_filter(default)
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(level(&[], LevelFilter::Info), LevelFilter::Info);
        assert_eq!(level(&["-v"], LevelFilter::Warn), LevelFilter::Info);
        assert_eq!(level(&["-vv"], LevelFilter::Info), LevelFilter::Trace);
        assert_eq!(level(&["-vvvvvv"], LevelFilter::Info), LevelFilter::Trace);
        assert_eq!(level(&["-q", "-vv"], LevelFilter::Info), LevelFilter::Off);
    }

    #[test]
    fn test_ts_flag() {
        let h = Harness::try_parse_from(["t", "--ts"]).unwrap();
        assert!(h.logging.ts);
        assert!(!h.logging.quiet);
    }
}
