//! CLI argument definitions.

use clap::Parser;

/// Cubix - find the real roots of a cubic in [-100, 100]
///
/// Reads the coefficients `a b c d` of `a·x³ + b·x² + c·x + d` from standard
/// input and prints up to three roots with two decimals.
#[derive(Parser, Debug)]
#[command(name = "cubix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Returns the default log filter implied by the verbosity flags.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_level_from_flags() {
        let cli = Cli::parse_from(["cubix"]);
        assert_eq!(cli.log_level(), "warn");

        let cli = Cli::parse_from(["cubix", "-vv"]);
        assert_eq!(cli.log_level(), "debug");

        let cli = Cli::parse_from(["cubix", "-vvvv"]);
        assert_eq!(cli.log_level(), "trace");

        let cli = Cli::parse_from(["cubix", "--quiet"]);
        assert_eq!(cli.log_level(), "error");
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["cubix", "-v", "-q"]).is_err());
    }
}
