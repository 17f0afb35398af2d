use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `tinta` binary.
#[derive(Debug, Parser)]
#[command(name = "tinta", version, about = "Tinta - paint-quantity estimator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Label language: en, es (defaults to config `general.locale`)
    #[arg(long, global = true)]
    pub locale: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            locale: self.locale.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["tinta", "--format", "table", "--verbose", "coverage"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Coverage));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["tinta", "coverage", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["tinta", "--format", "xml", "coverage"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn estimate_requires_dimensions() {
        let parsed = Cli::try_parse_from(["tinta", "estimate", "--width", "2"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn estimate_accepts_raw_form_values() {
        let cli = Cli::try_parse_from([
            "tinta", "estimate", "--width", "2,5", "--height", "2.4", "--walls", "4", "--quality",
            "basica", "--strict",
        ])
        .expect("cli should parse");

        let Commands::Estimate(args) = cli.command else {
            panic!("expected estimate command");
        };
        assert_eq!(args.width, "2,5");
        assert_eq!(args.walls.as_deref(), Some("4"));
        assert_eq!(args.coats, None);
        assert_eq!(args.quality.as_deref(), Some("basica"));
        assert!(args.strict);
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["tinta", "--locale", "es", "coverage"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.locale.as_deref(), Some("es"));
    }
}
