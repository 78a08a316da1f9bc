use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Default manifest checked when no file is given
pub const DEFAULT_MANIFEST: &str = "package.json";

/// Keep package.json dependency versions in line with a shared Bill of Materials
#[derive(Parser, Debug)]
#[command(name = "bomlint")]
#[command(version)]
#[command(about = "Keep package.json dependency versions in line with a shared Bill of Materials", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a bomlint.config.yml (defaults to ./bomlint.config.yml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report format: text or json
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report dependencies whose versions differ from the BOM, and version conflicts
    Check(CommonArgs),
    /// Rewrite package files with the versions approved by the BOM
    Fix(CommonArgs),
    /// Add every version used by the package files to the BOM
    Merge(CommonArgs),
    /// Remove BOM entries used by fewer than two package files
    Prune(CommonArgs),
}

impl Command {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Command::Check(args)
            | Command::Fix(args)
            | Command::Merge(args)
            | Command::Prune(args) => args,
        }
    }
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CommonArgs {
    /// BOM file (defaults to the nearest .bomlint.json up to the home directory)
    #[arg(long, value_name = "PATH")]
    pub bom: Option<PathBuf>,

    /// Dependencies allowed to have conflicting versions, comma separated.
    /// Can be specified multiple times: --allow-conflicts react,react-dom --allow-conflicts tslib
    #[arg(long = "allow-conflicts", value_name = "NAMES", value_delimiter = ',')]
    pub allow_conflicts: Vec<String>,

    /// Package files to process
    #[arg(value_name = "FILES", default_value = DEFAULT_MANIFEST)]
    pub files: Vec<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("bomlint").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_check_defaults() {
        let args = parse(&["check"]);
        assert!(matches!(args.command, Command::Check(_)));
        let common = args.command.common();
        assert_eq!(common.files, vec![PathBuf::from("package.json")]);
        assert!(common.bom.is_none());
        assert!(common.allow_conflicts.is_empty());
        assert!(args.format.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_fix_with_files_and_bom() {
        let args = parse(&["fix", "--bom", "../.bomlint.json", "a/package.json", "b/package.json"]);
        assert!(matches!(args.command, Command::Fix(_)));
        let common = args.command.common();
        assert_eq!(common.bom, Some(PathBuf::from("../.bomlint.json")));
        assert_eq!(
            common.files,
            vec![PathBuf::from("a/package.json"), PathBuf::from("b/package.json")]
        );
    }

    #[test]
    fn test_allow_conflicts_comma_delimited_and_repeatable() {
        let args = parse(&[
            "check",
            "--allow-conflicts",
            "react,react-dom",
            "--allow-conflicts",
            "tslib",
        ]);
        assert_eq!(
            args.command.common().allow_conflicts,
            vec!["react", "react-dom", "tslib"]
        );
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = parse(&["merge", "--format", "json", "--config", "ci.yml"]);
        assert!(matches!(args.command, Command::Merge(_)));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.config, Some(PathBuf::from("ci.yml")));
    }

    #[test]
    fn test_prune_subcommand() {
        let args = parse(&["-f", "text", "prune", "p1/package.json", "p2/package.json"]);
        assert!(matches!(args.command, Command::Prune(_)));
        assert_eq!(args.format, Some(OutputFormat::Text));
        assert_eq!(args.command.common().files.len(), 2);
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let result = Args::try_parse_from(["bomlint", "check", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Args::try_parse_from(["bomlint"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Args::try_parse_from(["bomlint", "lint"]).is_err());
    }
}
