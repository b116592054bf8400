//! Command-line flags for the relay binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Overrides;

/// Start the internet-exposed relay, which receives data from clients and
/// does basic validation before forwarding it to the ingest server.
#[derive(Parser, Debug)]
#[command(name = "ingest-relay", version, about, long_about = None)]
pub struct Cli {
    /// Optional config file (.yaml, .yml or .toml). Defaults are used when
    /// omitted; flags given on the command line win over its values.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Port to run the server on [default: 8080]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Enable verbose logging (`--verbose=false` to force it off)
    #[arg(
        short,
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub verbose: Option<bool>,
}

impl Cli {
    /// The values the user set explicitly on the command line.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            port: self.port,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ingest-relay").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_flags_sets_nothing() {
        let cli = parse(&[]);
        assert!(cli.config.is_none());
        assert!(cli.overrides().is_empty());
    }

    #[test]
    fn test_port_flag() {
        assert_eq!(parse(&["--port", "9090"]).overrides().port, Some(9090));
        assert_eq!(parse(&["-p", "0"]).overrides().port, Some(0));
    }

    #[test]
    fn test_verbose_flag() {
        assert_eq!(parse(&["--verbose"]).overrides().verbose, Some(true));
        assert_eq!(parse(&["-v"]).overrides().verbose, Some(true));
        assert_eq!(parse(&["--verbose=false"]).overrides().verbose, Some(false));
    }

    #[test]
    fn test_config_flag() {
        let cli = parse(&["--port", "9090", "--verbose", "--config", "relay.yaml"]);
        assert_eq!(cli.config, Some(PathBuf::from("relay.yaml")));
        assert_eq!(
            cli.overrides(),
            Overrides::default().with_port(9090).with_verbose(true)
        );
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = Cli::try_parse_from(["ingest-relay", "--port", "abc"]);
        assert!(result.is_err());
    }
}
