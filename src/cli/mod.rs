// src/cli/mod.rs
use clap::Parser;

use crate::core::config::Config;

pub mod commands;
pub mod handlers;
pub mod menu;
pub mod render;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Skip starting the API server
    #[arg(long)]
    pub no_api: bool,

    /// API server port
    #[arg(long)]
    pub api_port: Option<u16>,

    /// Run in API-only mode (no interactive meter)
    #[arg(long)]
    pub api_only: bool,

    /// Strength service the meter talks to
    #[arg(long)]
    pub backend_url: Option<String>,
}

impl Args {
    /// Flags win over environment. A custom port without an explicit
    /// backend points the meter at the local server on that port.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(port) = self.api_port {
            config.web_port = port;
            let host = match config.web_address.as_str() {
                "0.0.0.0" => "127.0.0.1",
                address => address,
            };
            config.backend_url = format!("http://{}:{}", host, port);
        }

        if let Some(url) = &self.backend_url {
            config.backend_url = url.trim_end_matches('/').to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_check_command() {
        let args = Args::parse_from(["passmeter", "check", "hunter2"]);
        match args.command {
            Some(CliCommand::Check { password }) => assert_eq!(password, "hunter2"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn api_port_retargets_meter() {
        let args = Args::parse_from(["passmeter", "--api-port", "8081"]);
        let mut config = Config::default();
        args.apply_to(&mut config);
        assert_eq!(config.web_port, 8081);
        assert_eq!(config.backend_url, "http://127.0.0.1:8081");
    }

    #[test]
    fn explicit_backend_url_wins() {
        let args = Args::parse_from([
            "passmeter",
            "--api-port",
            "8081",
            "--backend-url",
            "https://meter.example.com/",
        ]);
        let mut config = Config::default();
        args.apply_to(&mut config);
        assert_eq!(config.backend_url, "https://meter.example.com");
    }
}
