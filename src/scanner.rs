/*!
 * Directory traversal and file classification
 */

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use glob_match::glob_match;
use indicatif::ProgressBar;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::Result;
use crate::types::{Entry, EntryPath, SkippedFile, UnreadableFile};
use crate::utils::has_binary_extension;
use crate::writer::{ScriptBuilder, HEREDOC_DELIMITER};

/// Name used for the root when the source path has no final component
const FALLBACK_ROOT_NAME: &str = "root";

/// Scanner statistics
#[derive(Debug, Clone, Default)]
pub struct ScannerStatistics {
    /// Directories recreated by the script, the root included
    pub directories: usize,
    /// Files whose content was embedded
    pub files_written: usize,
    /// Entries left out because of the ignore set
    pub ignored: usize,
    /// Files skipped because of their extension, in traversal order
    pub skipped_binaries: Vec<SkippedFile>,
    /// Files replaced by a comment because they could not be read as text
    pub unreadable: Vec<UnreadableFile>,
    /// Files containing a line equal to the here-document delimiter
    pub delimiter_collisions: Vec<PathBuf>,
}

/// Walks the source tree and feeds a [`ScriptBuilder`]
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Exact names to leave out
    ignore_names: BTreeSet<String>,
    /// Caller-supplied names containing glob metacharacters
    ignore_globs: Vec<String>,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        let ignore_names = config.ignore_names();
        let ignore_globs = config
            .extra_ignores
            .iter()
            .filter(|name| name.contains(['*', '?', '[', '{']))
            .cloned()
            .collect();

        Self {
            config,
            ignore_names,
            ignore_globs,
            progress,
        }
    }

    /// Traverse the source tree in pre-order, appending to `script`
    ///
    /// Directory entries are visited in file name order. The first directory
    /// that cannot be listed aborts the scan.
    pub fn scan(&self, script: &mut ScriptBuilder) -> Result<ScannerStatistics> {
        let mut stats = ScannerStatistics::default();
        let root = self.root_path()?;

        if !self.config.strip_root {
            script.push_directory(&root.target);
            stats.directories += 1;
        }

        let mut pending: Vec<Entry> = self.list_directory(&root, &mut stats)?;
        pending.reverse();

        while let Some(entry) = pending.pop() {
            match entry {
                Entry::Directory(path) => {
                    script.push_directory(&path.target);
                    stats.directories += 1;

                    let children = self.list_directory(&path, &mut stats)?;
                    pending.extend(children.into_iter().rev());
                }
                Entry::File(path) => self.process_file(&path, script, &mut stats),
            }
        }

        log::debug!(
            "scan finished: {} directories, {} files, {} binaries skipped, {} unreadable",
            stats.directories,
            stats.files_written,
            stats.skipped_binaries.len(),
            stats.unreadable.len()
        );

        Ok(stats)
    }

    /// Check if a bare name is in the ignore set
    pub fn should_ignore(&self, name: &str) -> bool {
        if self.ignore_names.contains(name) {
            return true;
        }

        self.ignore_globs
            .iter()
            .any(|pattern| glob_match(pattern, name))
    }

    /// Source path of the root and the path the script recreates it at
    fn root_path(&self) -> Result<EntryPath> {
        let source = self.config.source_dir.clone();
        if self.config.strip_root {
            return Ok(EntryPath::new(source, PathBuf::new()));
        }

        let abs_path = fs::canonicalize(&source)?;
        let root_name = abs_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| FALLBACK_ROOT_NAME.to_string());

        Ok(EntryPath::new(source, root_name))
    }

    /// List the non-ignored children of a directory, sorted by name
    fn list_directory(
        &self,
        dir: &EntryPath,
        stats: &mut ScannerStatistics,
    ) -> Result<Vec<Entry>> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(&dir.source)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy();

            if self.should_ignore(&name) {
                log::debug!("ignoring {}", entry.path().display());
                stats.ignored += 1;
                continue;
            }

            if let Some(classified) = classify(&entry, dir.join(entry.file_name())) {
                entries.push(classified);
            }
        }

        Ok(entries)
    }

    /// Embed a file's content, or record why it was left out
    fn process_file(
        &self,
        path: &EntryPath,
        script: &mut ScriptBuilder,
        stats: &mut ScannerStatistics,
    ) {
        self.progress.inc(1);
        self.progress
            .set_message(format!("Current file: {}", path.target.display()));

        if self.config.binary_filter && has_binary_extension(&path.source) {
            let size = fs::metadata(&path.source).map(|m| m.len()).unwrap_or(0);
            log::info!("skipping binary file {}", path.source.display());
            stats.skipped_binaries.push(SkippedFile {
                path: path.source.clone(),
                size,
            });
            return;
        }

        match read_text(&path.source) {
            Ok(content) => {
                if contains_delimiter_line(&content) {
                    log::warn!(
                        "{} contains a line equal to {}; the generated script will be cut short there",
                        path.source.display(),
                        HEREDOC_DELIMITER
                    );
                    stats.delimiter_collisions.push(path.source.clone());
                }
                script.push_file(&path.target, &content);
                stats.files_written += 1;
            }
            Err(reason) => {
                log::info!("could not read {}: {}", path.source.display(), reason);
                script.push_unreadable(&path.target, &reason);
                stats.unreadable.push(UnreadableFile {
                    path: path.source.clone(),
                    reason,
                });
            }
        }
    }
}

/// Turn a listing entry into a traversal node; `None` for anything not replicated
fn classify(entry: &DirEntry, path: EntryPath) -> Option<Entry> {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return Some(Entry::Directory(path));
    }
    if file_type.is_file() {
        return Some(Entry::File(path));
    }

    if entry.path_is_symlink() {
        match fs::metadata(entry.path()) {
            Ok(target) if target.is_file() => return Some(Entry::File(path)),
            Ok(target) if target.is_dir() => {
                log::warn!(
                    "not following symlinked directory {}",
                    entry.path().display()
                );
                return None;
            }
            Ok(_) => {}
            Err(e) => {
                log::warn!("skipping dangling symlink {}: {}", entry.path().display(), e);
                return None;
            }
        }
    }

    log::warn!("skipping special file {}", entry.path().display());
    None
}

/// Read a file as text a here-document can carry
fn read_text(path: &Path) -> std::result::Result<String, String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    if content.contains('\0') {
        return Err("file contains NUL bytes".to_string());
    }
    Ok(content)
}

fn contains_delimiter_line(content: &str) -> bool {
    content.split('\n').any(|line| line == HEREDOC_DELIMITER)
}
