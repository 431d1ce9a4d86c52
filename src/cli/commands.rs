//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ttxml")]
#[command(about = "Tokenize and tag text into TreeTagger-style XML", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $TTXML_CONFIG, then ./ttxml.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tag files and write the results as a zip archive
    Tag {
        /// Input files or directories (.txt / .xml)
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<PathBuf>,

        /// Language code (JP, EN); overrides the config file
        #[arg(short, long)]
        lang: Option<String>,

        /// Output mode (structure, corpus); overrides the config file
        #[arg(short, long)]
        mode: Option<String>,

        /// Archive path (default: <lang>_tagged_results_xml_ttformat.zip)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Scan input directories recursively
        #[arg(short, long)]
        recursive: bool,
    },

    /// Write a default ttxml.toml
    Init {
        /// Directory to write the config into (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Default language (JP, EN)
        #[arg(short, long, default_value = "JP")]
        lang: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
