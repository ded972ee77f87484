//! Command-line interface definition.

use clap::Parser;
use flowtune_core::Region;
use std::{path::PathBuf, str::FromStr};

#[derive(Parser)]
#[command(name = "flowtune", author, version, about, long_about = None)]
pub struct Cli {
    /// Log file or directory (defaults to the platform data dir)
    #[arg(long, global = true, env = "FLOWTUNE_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand)]
pub enum Command {
    /// Apply region corrections non-interactively and write the result
    Apply {
        /// Source G-code file
        #[arg(short, long)]
        input: PathBuf,

        /// Destination for the corrected G-code
        #[arg(short, long)]
        output: PathBuf,

        /// Correction as `x0,y0,x1,y1:ratio`; repeatable, applied in order
        #[arg(long = "op", value_name = "REGION:RATIO", required = true)]
        ops: Vec<OpSpec>,
    },

    /// Edit interactively, reading selection events from stdin
    Edit {
        /// Source G-code file
        #[arg(short, long)]
        input: PathBuf,

        /// Destination for the corrected G-code, written on quit
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print an extraction summary without writing anything
    Stats {
        /// Source G-code file
        #[arg(short, long)]
        input: PathBuf,
    },
}

/// One `--op` argument: a region given by two opposite corners plus the
/// ratio to apply inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct OpSpec {
    pub region: Region,
    pub ratio: f64,
}

impl FromStr for OpSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let usage = || format!("expected x0,y0,x1,y1:ratio, got {s:?}");

        let (corners, ratio) = s.split_once(':').ok_or_else(usage)?;
        let ratio: f64 = ratio.trim().parse().map_err(|_| usage())?;
        if !ratio.is_finite() {
            return Err(usage());
        }

        let coords: Vec<f64> = corners
            .split(',')
            .map(|c| c.trim().parse().map_err(|_| usage()))
            .collect::<Result<_, _>>()?;
        let [x0, y0, x1, y1] = coords[..] else {
            return Err(usage());
        };

        Ok(Self {
            region: Region::from_corners((x0, y0), (x1, y1)),
            ratio,
        })
    }
}
