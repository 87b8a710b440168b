use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(flatten)]
    pub verbosity: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    /// Path of the configuration file
    #[clap(long, short)]
    pub config: camino::Utf8PathBuf,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Run the page in the terminal, page events are read from stdin
    Run,

    VerifyConfig,

    /// Print the current date, greeting and time
    Now,

    /// Submit the subscription form once
    Subscribe {
        email: String,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subscribe() {
        let cli = Cli::try_parse_from(["gecko-landing", "-c", "cfg.toml", "subscribe", "a@b.c"]).unwrap();
        assert_eq!(cli.config, "cfg.toml");
        assert!(matches!(cli.command, Command::Subscribe { ref email } if email == "a@b.c"));
    }
}
