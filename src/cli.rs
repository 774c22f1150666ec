// Command line interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mediaman", version, about = "Scan, rename and scrape a movie library")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Scan all configured datasources into the catalog
    Update,
    /// Rename every unit, or the unit at PATH
    Rename {
        /// Folder of a single media unit
        target: Option<PathBuf>,
        /// Print the new names without touching the disk
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
    /// Fetch metadata and write NFO files
    Scrape {
        /// Folder of a single media unit
        target: Option<PathBuf>,
        /// Metadata provider id (default: tmdb)
        #[arg(long)]
        provider: Option<String>,
    },
    /// List the catalog
    #[command(visible_alias = "ls")]
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, clap::Error> {
        Cli::try_parse_from(std::iter::once("mediaman").chain(args.iter().copied()))
            .map(|cli| cli.command)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse(&["update"]).unwrap(), Command::Update);
        assert_eq!(parse(&["ls"]).unwrap(), Command::List);
        assert_eq!(
            parse(&["rename", "--dry-run", "/movies/Heat"]).unwrap(),
            Command::Rename {
                target: Some(PathBuf::from("/movies/Heat")),
                dry_run: true
            }
        );
        assert_eq!(
            parse(&["rename", "-n"]).unwrap(),
            Command::Rename {
                target: None,
                dry_run: true
            }
        );
    }

    #[test]
    fn test_parse_scrape_provider() {
        assert_eq!(
            parse(&["scrape", "--provider", "tmdb"]).unwrap(),
            Command::Scrape {
                target: None,
                provider: Some("tmdb".to_string())
            }
        );
        assert_eq!(
            parse(&["scrape", "/m/x", "--provider=tmdb"]).unwrap(),
            Command::Scrape {
                target: Some(PathBuf::from("/m/x")),
                provider: Some("tmdb".to_string())
            }
        );
        assert!(parse(&["scrape", "--provider"]).is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["frobnicate"]).is_err());
        assert!(parse(&["update", "extra"]).is_err());
        assert!(parse(&["rename", "--force"]).is_err());
        assert!(parse(&["rename", "/a", "/b"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
