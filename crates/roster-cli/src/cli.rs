//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Roster: employee data cleaning pipeline
#[derive(Parser)]
#[command(name = "roster")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON configuration file with paths and cleaning bounds
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean the raw table and write the cleaned table
    Clean {
        /// Raw input table (default: data/raw/messy_dataset.csv)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Cleaned output table (default: data/cleaned/cleaned_dataset.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the cleaning report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a cleaned table against every invariant
    Validate {
        /// Cleaned table (default: data/cleaned/cleaned_dataset.csv)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Write the markdown insights document
    Insights {
        /// Cleaned table (default: data/cleaned/cleaned_dataset.csv)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output document (default: reports/insights.md)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the salary charts as SVG
    Figures {
        /// Cleaned table (default: data/cleaned/cleaned_dataset.csv)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory (default: reports/figures)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Run clean, insights and figures in order
    Run,
}
