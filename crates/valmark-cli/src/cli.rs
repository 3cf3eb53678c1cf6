//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Valmark - batch submission client for the swap valuation server
#[derive(Debug, Parser)]
#[command(name = "valmark")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Server address, e.g. 127.0.0.1:50051
    pub server: String,

    /// Input file of newline-delimited JSON request bundles
    pub input: PathBuf,

    /// Skip pre-validation of the input bundles
    #[arg(long)]
    pub no_validate: bool,

    /// File the result items are appended to
    #[arg(long, default_value = "mtms.json")]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::parse_from(["valmark", "127.0.0.1:50051", "bundles.ndjson"]);
        assert_eq!(cli.server, "127.0.0.1:50051");
        assert!(!cli.no_validate);
        assert_eq!(cli.output, PathBuf::from("mtms.json"));
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "valmark",
            "localhost:9000",
            "in.ndjson",
            "--no-validate",
            "--output",
            "out.ndjson",
        ]);
        assert!(cli.no_validate);
        assert_eq!(cli.output, PathBuf::from("out.ndjson"));
    }
}
