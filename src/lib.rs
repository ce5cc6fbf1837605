/*!
 * treescript - Generate a shell script that recreates a directory tree
 *
 * The generated script recreates every directory with `mkdir -p` and every
 * text file with a quoted here-document, so a folder can travel as a single
 * file and be unpacked anywhere a POSIX shell runs.
 */

pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


use std::sync::Arc;
use std::time::Instant;

use indicatif::ProgressBar;

// Re-export main components for easier access
pub use config::{Args, Config};
pub use error::{Result, TreeScriptError};
pub use report::{Reporter, ScanReport};
pub use scanner::{Scanner, ScannerStatistics};
pub use types::{Entry, EntryPath, SkippedFile, UnreadableFile};
pub use writer::{ScriptBuilder, ScriptWriter};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Validate `config`, scan the source tree and write the script
///
/// The destination is truncated before scanning starts and written once the
/// whole tree has been walked, so a failed scan leaves it empty.
pub fn replicate(config: &Config, progress: Arc<ProgressBar>) -> Result<ScanReport> {
    config.validate()?;

    let start_time = Instant::now();
    let writer = ScriptWriter::create(&config.output_file)?;
    let scanner = Scanner::new(config.clone(), progress);

    let mut script = ScriptBuilder::new();
    let statistics = scanner.scan(&mut script)?;
    writer.finish(script)?;

    Ok(ScanReport {
        output_file: config.output_file.display().to_string(),
        duration: start_time.elapsed(),
        statistics,
    })
}
