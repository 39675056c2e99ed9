use clap::Parser;

/// A plain-file journaling app with an interactive terminal UI
#[derive(Parser, Debug)]
#[clap(name = "jotter", about = "A plain-file journaling app with an interactive terminal UI")]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Directory holding the entry files (overrides JOTTER_DIR)
    #[clap(short = 'd', long)]
    pub dir: Option<String>,

    /// Print verbose output
    #[clap(short = 'v', long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(vec!["jotter"]);
        assert!(args.dir.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_dir_option() {
        let args = CliArgs::parse_from(vec!["jotter", "--dir", "/tmp/entries"]);
        assert_eq!(args.dir, Some("/tmp/entries".to_string()));

        // Test short form
        let args = CliArgs::parse_from(vec!["jotter", "-d", "/tmp/entries"]);
        assert_eq!(args.dir, Some("/tmp/entries".to_string()));
    }

    #[test]
    fn test_verbose_flag() {
        let args = CliArgs::parse_from(vec!["jotter", "--verbose"]);
        assert!(args.verbose);

        // Test short form
        let args = CliArgs::parse_from(vec!["jotter", "-v"]);
        assert!(args.verbose);

        // Test with other flags
        let args = CliArgs::parse_from(vec!["jotter", "-d", "/tmp/entries", "-v"]);
        assert_eq!(args.dir, Some("/tmp/entries".to_string()));
        assert!(args.verbose);
    }
}
