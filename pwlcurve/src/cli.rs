//! Argument definitions for `pwlcurve`.

use clap::{Args, Parser, Subcommand, ValueEnum};
use pwl_model::Bound;
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write, stdin, stdout},
    path::PathBuf,
};

/// Command-line arguments for the piecewise-linear curve tools.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(short, long, env = "PWL_CONFIG")]
    pub config: Option<PathBuf>,

    /// The operation to perform.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Parse the process arguments, returning clap's error (or help text) on failure.
    pub fn import() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

/// The available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the linear segments of a curve and report their slopes and intercepts
    Segments {
        #[command(flatten)]
        #[allow(missing_docs)]
        io: IOArgs,
    },

    /// Evaluate a curve at one or more points
    Eval {
        #[command(flatten)]
        #[allow(missing_docs)]
        io: IOArgs,

        /// A point to evaluate the curve at (repeatable)
        #[arg(long, required = true, allow_negative_numbers = true)]
        at: Vec<f64>,
    },

    /// Construct the per-site segment constraints of a cost model and export to a standard format
    Export {
        #[command(flatten)]
        #[allow(missing_docs)]
        io: IOArgs,

        /// The file format to use (if omitted, will infer based on filename)
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// The direction of the segment inequalities (overrides the configuration)
        #[arg(short, long)]
        bound: Option<BoundFlag>,
    },

    /// Write the JSON Schema of an input file format
    Schema {
        /// Which input to describe
        kind: SchemaKind,

        /// The output file (defaults to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Most subcommands have a notion of input and output; this standardizes them.
#[derive(Args, Debug)]
pub struct IOArgs {
    /// The input JSON file (defaults to stdin if omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// The output file (defaults to stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl IOArgs {
    /// Open the input file, or stdin
    pub fn read(&self) -> anyhow::Result<Box<dyn Read>> {
        if let Some(path) = &self.input {
            Ok(Box::new(BufReader::new(File::open(path)?)))
        } else {
            Ok(Box::new(stdin().lock()))
        }
    }

    /// Create the output file, or use stdout
    pub fn write(&self) -> anyhow::Result<Box<dyn Write>> {
        write_to(self.output.as_ref())
    }

    /// The extension of the output file, if any
    pub fn extension(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|path| path.extension())
            .and_then(|ext| ext.to_str())
    }
}

/// Create the file at `path`, or use stdout if there is none
pub fn write_to(path: Option<&PathBuf>) -> anyhow::Result<Box<dyn Write>> {
    if let Some(path) = path {
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    } else {
        Ok(Box::new(stdout().lock()))
    }
}

/// The supported export formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Free MPS
    Mps,
    /// CPLEX LP
    Lp,
}

impl ExportFormat {
    /// Infer the format from a file extension
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "mps" => Some(Self::Mps),
            "lp" => Some(Self::Lp),
            _ => None,
        }
    }
}

/// The direction of the segment inequalities, as a flag
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BoundFlag {
    /// Cost bounded above by every segment (concave curves)
    Upper,
    /// Cost bounded below by every segment (convex curves)
    Lower,
}

impl From<BoundFlag> for Bound {
    fn from(value: BoundFlag) -> Self {
        match value {
            BoundFlag::Upper => Bound::Upper,
            BoundFlag::Lower => Bound::Lower,
        }
    }
}

/// The input formats with a JSON Schema
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SchemaKind {
    /// A single piecewise-linear curve
    Curve,
    /// A cost model of curves and sites
    Model,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_segments() {
        let cli = Cli::try_parse_from(["pwlcurve", "segments", "-i", "curve.json"]).unwrap();
        assert!(cli.config.is_none());
        match cli.command {
            Commands::Segments { io } => {
                assert_eq!(io.input, Some(PathBuf::from("curve.json")));
                assert!(io.output.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parse_eval() {
        let cli = Cli::try_parse_from(["pwlcurve", "eval", "--at", "4", "--at", "-1.5"]).unwrap();
        match cli.command {
            Commands::Eval { at, .. } => assert_eq!(at, vec![4.0, -1.5]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn eval_requires_a_point() {
        assert!(Cli::try_parse_from(["pwlcurve", "eval"]).is_err());
    }

    #[test]
    fn parse_export() {
        let cli = Cli::try_parse_from([
            "pwlcurve", "--config", "pwl.toml", "export", "-o", "model.lp", "--bound", "lower",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("pwl.toml")));
        match cli.command {
            Commands::Export { io, format, bound } => {
                assert_eq!(io.extension(), Some("lp"));
                assert_eq!(format, None);
                assert_eq!(bound, Some(BoundFlag::Lower));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parse_schema() {
        let cli = Cli::try_parse_from(["pwlcurve", "schema", "model"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Schema {
                kind: SchemaKind::Model,
                output: None
            }
        ));
    }

    #[test]
    fn extensions() {
        assert_eq!(ExportFormat::from_extension("mps"), Some(ExportFormat::Mps));
        assert_eq!(ExportFormat::from_extension("lp"), Some(ExportFormat::Lp));
        assert_eq!(ExportFormat::from_extension("json"), None);
    }
}
