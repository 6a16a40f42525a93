use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "marina", bin_name = "marina", version = get_version())]
#[command(about = "Boat storage inventory and billing", long_about = None)]
pub struct Cli {
    /// Boat data file (defaults to `data_file` from the config)
    pub data_file: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, env = "MARINA_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_data_file_and_flags() {
        let cli = Cli::parse_from(["marina", "boats.csv", "-v", "--no-color"]);
        assert_eq!(cli.data_file, Some(PathBuf::from("boats.csv")));
        assert!(cli.verbose);
        assert!(cli.no_color);
    }

    #[test]
    fn test_data_file_is_optional() {
        let cli = Cli::parse_from(["marina"]);
        assert!(cli.data_file.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_rejects_extra_positionals() {
        assert!(Cli::try_parse_from(["marina", "a.csv", "b.csv"]).is_err());
    }
}
