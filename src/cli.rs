use clap::{ArgGroup, Parser, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::sort::{Direction, SortField, SortKey};

const EXAMPLES: &str = "\
Examples:
  difo                      Tree of the current directory
  difo -a ~/projects        Tree including hidden entries
  difo --size .             Size bars for the current directory
  difo --by size --desc     Largest entries first
  difo -t --by date src     Tree with each level ordered by modification time
  difo --slide -f 2 notes   Show a file twice as fast as the default pace

Exit status:
  0  success
  1  invalid argument or other failure
  2  failure accessing a file or directory
  3  failure opening a file";

/// Display mode selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Tree,
    Size,
    Sort,
    Slide,
}

/// Field accepted by `--by`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortBy {
    Name,
    #[value(alias = "time", alias = "modified")]
    Date,
    Size,
}

impl From<SortBy> for SortField {
    fn from(by: SortBy) -> Self {
        match by {
            SortBy::Name => SortField::Name,
            SortBy::Date => SortField::Modified,
            SortBy::Size => SortField::Size,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "difo",
    version,
    about = "Directory information: tree view, size bars and sorted listings",
    after_help = EXAMPLES
)]
#[command(group(ArgGroup::new("mode").multiple(false)))]
pub struct Args {
    /// Directory (or file, for --slide) to inspect
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Display the directory tree (default)
    #[arg(short = 't', long, group = "mode")]
    pub tree: bool,

    /// Display a size bar for every entry of the directory
    #[arg(short = 'z', long, group = "mode")]
    pub size: bool,

    /// Display a sorted listing of the directory
    #[arg(short = 's', long, group = "mode")]
    pub sort: bool,

    /// Display a file's contents one character at a time
    #[arg(short = 'l', long, group = "mode")]
    pub slide: bool,

    /// Field to sort by (implies --sort unless another mode is given)
    #[arg(short = 'b', long = "by", value_enum)]
    pub sort_by: Option<SortBy>,

    /// Sort in ascending order (default)
    #[arg(long = "asc", visible_alias = "ascending")]
    pub ascending: bool,

    /// Sort in descending order
    #[arg(long = "desc", visible_alias = "descending", conflicts_with = "ascending")]
    pub descending: bool,

    /// Show hidden files and directories
    #[arg(short = 'a', long = "all")]
    pub show_hidden: bool,

    /// Max tree depth
    #[arg(short = 'L', long = "level")]
    pub max_depth: Option<usize>,

    /// Slide speed: 1.0 is one character per 20ms
    #[arg(short = 'f', long = "speed", default_value = "1.0")]
    pub speed: f32,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long = "completions", value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Slowest accepted slide speed.
pub const MIN_SPEED: f32 = 0.01;

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            self.speed = 1.0;
        }
        if self.speed < MIN_SPEED {
            self.speed = MIN_SPEED;
        }
        // Respect NO_COLOR env var
        if std::env::var_os("NO_COLOR").is_some() {
            self.no_color = true;
        }
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    pub fn mode(&self) -> Mode {
        if self.tree {
            Mode::Tree
        } else if self.size {
            Mode::Size
        } else if self.slide {
            Mode::Slide
        } else if self.sort || self.sort_by.is_some() {
            Mode::Sort
        } else {
            Mode::Tree
        }
    }

    /// Explicit ordering, if any sort option was given.
    ///
    /// `--sort` alone means name ascending; a direction alone applies to name.
    pub fn sort_key(&self) -> Option<SortKey> {
        if self.sort_by.is_none() && !self.sort && !self.ascending && !self.descending {
            return None;
        }
        let field = self.sort_by.map(SortField::from).unwrap_or_default();
        let direction = if self.descending {
            Direction::Descending
        } else {
            Direction::Ascending
        };
        Some(SortKey::new(field, direction))
    }

    /// Log filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::parse_from(std::iter::once("difo").chain(args.iter().copied()))
    }

    #[test]
    fn default_mode_is_tree_without_sort() {
        let args = parse(&[]);
        assert_eq!(args.mode(), Mode::Tree);
        assert_eq!(args.sort_key(), None);
    }

    #[test]
    fn by_implies_sort_mode() {
        let args = parse(&["--by", "size", "--desc"]);
        assert_eq!(args.mode(), Mode::Sort);
        assert_eq!(
            args.sort_key(),
            Some(SortKey::new(SortField::Size, Direction::Descending))
        );
    }

    #[test]
    fn tree_with_by_keeps_tree_mode() {
        let args = parse(&["-t", "--by", "date"]);
        assert_eq!(args.mode(), Mode::Tree);
        assert_eq!(args.sort_key().map(|k| k.field), Some(SortField::Modified));
    }

    #[test]
    fn modes_are_exclusive() {
        let result = Args::try_parse_from(["difo", "--tree", "--size"]);
        assert!(result.is_err());
    }

    #[test]
    fn asc_and_desc_conflict() {
        let result = Args::try_parse_from(["difo", "--asc", "--desc"]);
        assert!(result.is_err());
    }

    #[test]
    fn speed_floor_enforced() {
        assert_eq!(parse(&["-f", "0.001"]).validated().speed, MIN_SPEED);
        assert_eq!(parse(&["--speed=-3"]).validated().speed, 1.0);
        assert_eq!(parse(&["-f", "2.5"]).validated().speed, 2.5);
    }

    #[test]
    fn quiet_resets_verbose() {
        let args = parse(&["-vv", "--quiet"]).validated();
        assert_eq!(args.verbose, 0);
        assert_eq!(args.log_level(), "error");
        assert_eq!(parse(&["-vv"]).log_level(), "debug");
    }
}
