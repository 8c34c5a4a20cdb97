//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use zipbuild_core::domain::ArchiveFormat;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "zipbuild",
    bin_name = "zipbuild",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Zip your <build-dir> directory into <zip-dir>",
    long_about = "zipbuild packs a build output directory into a zip or tar archive \
                  named after the project's name and version.",
    override_usage = "zipbuild [build-dir] [zip-dir] [options]",
    after_help = "EXAMPLES:\n\
        \x20 zipbuild             Zip 'build' directory and put archive under dist directory.\n\
        \x20 zipbuild out backup  Zip 'out' directory and put archive under backup directory.\n\
        \x20 zipbuild -f tar -t '%NAME%-%VERSION%.%EXT%'",
)]
pub struct Cli {
    /// Logging, colour and config flags.
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub pack: PackArgs,
}

/// What to package and how to name it.
///
/// Every value is optional here so the configuration file can supply
/// defaults; see [`crate::config::Defaults`].
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PackArgs {
    /// Directory of your build output [default: build]
    #[arg(value_name = "build-dir")]
    pub build_dir: Option<PathBuf>,

    /// Directory for your zipped backup [default: dist]
    #[arg(value_name = "zip-dir")]
    pub zip_dir: Option<PathBuf>,

    /// Format of output file [default: zip]
    #[arg(short = 'f', long = "format", value_enum, value_name = "FORMAT")]
    pub format: Option<Format>,

    /// Ask for output archive filename
    #[arg(short = 'n', long = "name")]
    pub name: bool,

    /// Template for output archive filename [default: %NAME%_%VERSION%.%EXT%]
    #[arg(short = 't', long = "template", value_name = "TEMPLATE")]
    pub template: Option<String>,
}

/// Archive format as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Zip,
    Tar,
}

impl From<Format> for ArchiveFormat {
    fn from(value: Format) -> Self {
        match value {
            Format::Zip => ArchiveFormat::Zip,
            Format::Tar => ArchiveFormat::Tar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("zipbuild").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_arguments_leaves_everything_to_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.pack.build_dir, None);
        assert_eq!(cli.pack.zip_dir, None);
        assert_eq!(cli.pack.format, None);
        assert!(!cli.pack.name);
        assert_eq!(cli.pack.template, None);
    }

    #[test]
    fn positionals_in_order() {
        let cli = parse(&["out", "backup"]);
        assert_eq!(cli.pack.build_dir, Some(PathBuf::from("out")));
        assert_eq!(cli.pack.zip_dir, Some(PathBuf::from("backup")));
    }

    #[test]
    fn short_flags() {
        let cli = parse(&["-f", "tar", "-n", "-t", "%NAME%.%EXT%"]);
        assert_eq!(cli.pack.format, Some(Format::Tar));
        assert!(cli.pack.name);
        assert_eq!(cli.pack.template.as_deref(), Some("%NAME%.%EXT%"));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["zipbuild", "--format", "rar"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["zipbuild", "-q", "-v"]).is_err());
    }

    #[test]
    fn format_maps_to_domain() {
        assert_eq!(ArchiveFormat::from(Format::Tar), ArchiveFormat::Tar);
        assert_eq!(ArchiveFormat::from(Format::Zip), ArchiveFormat::Zip);
    }
}
