//! SFR CLI - print prediction results from the command line.

mod cmd;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sfr-cli",
    version,
    about = "Sugar price forecast results client"
)]
struct Cli {
    #[command(flatten)]
    endpoint: cmd::EndpointArgs,

    #[command(subcommand)]
    command: cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cmd::run(cli.endpoint, cli.command).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_results_command() {
        let cli = Cli::try_parse_from(["sfr-cli", "results", "--province", "ON"]).unwrap();
        assert_eq!(cli.endpoint.base_url, "http://localhost:8000");
        assert!(matches!(
            cli.command,
            cmd::Command::Results { ref province } if province == "ON"
        ));
    }

    #[test]
    fn test_parse_endpoint_options() {
        let cli = Cli::try_parse_from([
            "sfr-cli",
            "--base-url",
            "https://forecast.example.com",
            "--horizon",
            "30",
            "table",
        ])
        .unwrap();
        assert_eq!(cli.endpoint.horizon, Some(30));
        assert!(matches!(
            cli.command,
            cmd::Command::Table { ref province } if province == "All"
        ));

        let config = cli.endpoint.config().unwrap();
        assert_eq!(
            config.results_url().as_str(),
            "https://forecast.example.com/results/"
        );
    }

    #[test]
    fn test_invalid_horizon_is_rejected() {
        let cli = Cli::try_parse_from(["sfr-cli", "--horizon", "365", "results"]).unwrap();
        assert!(cli.endpoint.config().is_err());
    }
}
