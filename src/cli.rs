use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "emergence",
    version,
    about = "Checks the emergence-constant formulas against published physical constants"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        short,
        long,
        global = true,
        help = "Log each evaluated check to stderr"
    )]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run every check and print the report (the default)
    Verify {
        #[arg(long, help = "Exit non-zero when any check fails")]
        strict: bool,
    },
    /// List the constant set
    Constants,
    /// Print the nth Fibonacci number
    Fibonacci {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
}

impl Cli {
    /// The requested command; no subcommand runs the report.
    pub fn resolved_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Verify { strict: false })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_verify() {
        let cli = Cli::parse_from(["emergence"]);
        assert!(matches!(cli.resolved_command(), Commands::Verify { strict: false }));
        assert!(!cli.json);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["emergence", "verify", "--strict", "--json"]);
        assert!(cli.json);
        assert!(matches!(cli.resolved_command(), Commands::Verify { strict: true }));
    }

    #[test]
    fn fibonacci_accepts_negative_index() {
        let cli = Cli::parse_from(["emergence", "fibonacci", "-3"]);
        assert!(matches!(cli.resolved_command(), Commands::Fibonacci { n: -3 }));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
