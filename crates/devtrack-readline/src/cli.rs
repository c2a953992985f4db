use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "devtrack")]
#[command(version, about = "devtrack - track devices and who they are assigned to", long_about = None)]
pub struct Cli {
    /// Devices file to load and save (default: platform data directory)
    #[arg(long, env = "DEVTRACK_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Config file (default: platform config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. "info" or "devtrack_core=debug"
    #[arg(long, env = "DEVTRACK_LOG")]
    pub log_level: Option<String>,

    /// Keep devices in memory only; nothing is written to disk
    #[arg(long)]
    pub in_memory: bool,
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
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "devtrack",
            "--data-file",
            "/tmp/devices.json",
            "--in-memory",
        ]);
        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/devices.json")));
        assert!(cli.in_memory);
    }
}
