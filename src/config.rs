/*!
 * Configuration handling for treescript
 */

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::utils::DEFAULT_IGNORE;
use crate::{bail, ensure};

/// Command-line arguments for treescript
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "treescript",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate a shell script that recreates a directory tree",
    long_about = "Walks a folder and writes a bash script that, when executed, recreates the folder structure and the content of every text file.",
    after_help = "Example:\n  treescript ./my-folder folderAsFile.sh node_modules,.git\n\nNote: 'node_modules', '.git', 'package-lock.json' are always skipped."
)]
pub struct Args {
    /// Path to the folder you want to replicate
    pub source_path: String,

    /// Name of the bash script to generate (e.g. replicate.sh)
    pub output_script: String,

    /// Comma-separated list of files/folders to ignore
    #[clap(value_delimiter = ',')]
    pub extra_ignores: Vec<String>,

    /// Embed every file, including ones with image, archive or media extensions
    #[clap(long)]
    pub no_binary_filter: bool,

    /// Write paths relative to the source folder instead of under its name
    #[clap(long)]
    pub strip_root: bool,

    /// Enable verbose output
    #[clap(short, long)]
    pub verbose: bool,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Folder to replicate
    pub source_dir: PathBuf,

    /// Path of the generated script
    pub output_file: PathBuf,

    /// Names to ignore on top of the defaults
    pub extra_ignores: Vec<String>,

    /// Skip the content of files whose extension marks them as binary
    pub binary_filter: bool,

    /// Emit paths relative to the source folder
    pub strip_root: bool,

    /// Verbose logging
    pub verbose: bool,
}

impl Config {
    /// Create a configuration for `source_dir` with every option at its default
    pub fn new(source_dir: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_file: output_file.into(),
            extra_ignores: Vec::new(),
            binary_filter: true,
            strip_root: false,
            verbose: false,
        }
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            source_dir: PathBuf::from(args.source_path),
            output_file: PathBuf::from(args.output_script),
            extra_ignores: args
                .extra_ignores
                .into_iter()
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
            binary_filter: !args.no_binary_filter,
            strip_root: args.strip_root,
            verbose: args.verbose,
        }
    }

    /// Basename of the output script, always part of the ignore set
    pub fn output_name(&self) -> Option<String> {
        self.output_file
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
    }

    /// Defaults, caller-supplied names and the output script's own name
    pub fn ignore_names(&self) -> BTreeSet<String> {
        let mut names: BTreeSet<String> = DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect();
        names.extend(self.extra_ignores.iter().cloned());
        names.extend(self.output_name());
        names
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.source_dir.exists(),
            PathNotFound,
            "The folder path '{}' does not exist.",
            self.source_dir.display()
        );
        ensure!(
            self.source_dir.is_dir(),
            InvalidArgument,
            "'{}' is not a folder.",
            self.source_dir.display()
        );

        ensure!(
            self.output_name().is_some(),
            InvalidArgument,
            "Output script path '{}' has no file name.",
            self.output_file.display()
        );
        if self.output_file.is_dir() {
            bail!(
                InvalidArgument,
                "Output script path '{}' is a directory.",
                self.output_file.display()
            );
        }

        // Check if output file directory exists
        if let Some(parent) = self.output_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                bail!(
                    PathNotFound,
                    "Output directory not found: {}",
                    parent.display()
                );
            }
        }

        Ok(())
    }
}
