use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "airport-engine")]
#[command(about = "Serves airport database requests as JSON lines")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Airport database to open before reading requests
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// Read requests from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write logs as JSON")]
    pub json_logs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arguments() {
        let config = CliConfig::parse_from([
            "airport-engine",
            "--database",
            "airport.db",
            "-v",
            "--json-logs",
        ]);

        assert_eq!(config.database, Some(PathBuf::from("airport.db")));
        assert!(config.verbose);
        assert!(config.json_logs);
        assert!(config.config.is_none());
        assert!(config.input.is_none());
    }
}
