/*!
 * Shell script generation for treescript
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::utils::shell_quote;

/// Interpreter line and comment every generated script starts with
pub const SCRIPT_HEADER: &str =
    "#!/bin/bash\n\n# Auto-generated bash script to replicate folder structure and content\n\n";

/// Terminator of every here-document in the generated script
pub const HEREDOC_DELIMITER: &str = "EOF";

/// Accumulates the generated script in traversal order
#[derive(Debug, Clone)]
pub struct ScriptBuilder {
    buffer: String,
}

impl Default for ScriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptBuilder {
    /// Create a builder holding only the script header
    pub fn new() -> Self {
        Self {
            buffer: SCRIPT_HEADER.to_string(),
        }
    }

    /// Append a command creating `path` and any missing parents
    pub fn push_directory(&mut self, path: &Path) {
        self.buffer.push_str("mkdir -p -- ");
        self.buffer.push_str(&quote_path(path));
        self.buffer.push('\n');
    }

    /// Append a here-document that writes `content` to `path` byte for byte
    pub fn push_file(&mut self, path: &Path, content: &str) {
        let target = quote_path(path);
        self.buffer.push('\n');

        if content.is_empty() || content.ends_with('\n') {
            self.buffer
                .push_str(&format!("cat << '{HEREDOC_DELIMITER}' > {target}\n"));
            self.buffer.push_str(content);
        } else {
            // The here-document adds a final newline; command substitution strips it again.
            self.buffer
                .push_str(&format!("printf '%s' \"$(cat << '{HEREDOC_DELIMITER}'\n"));
            self.buffer.push_str(content);
            self.buffer.push('\n');
        }

        self.buffer.push_str(HEREDOC_DELIMITER);
        self.buffer.push('\n');

        if !content.is_empty() && !content.ends_with('\n') {
            self.buffer.push_str(&format!(")\" > {target}\n"));
        }
    }

    /// Append a comment standing in for a file whose content was not embedded
    pub fn push_unreadable(&mut self, path: &Path, reason: &str) {
        let comment = format!("# Skipped {}: {}", quote_path(path), reason);
        self.buffer.push('\n');
        self.buffer.push_str(&single_line(&comment));
        self.buffer.push('\n');
    }

    /// The script generated so far
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the builder and return the script
    pub fn into_string(self) -> String {
        self.buffer
    }
}

/// Owns the destination script between truncation and the final flush
#[derive(Debug)]
pub struct ScriptWriter {
    path: PathBuf,
    file: File,
}

impl ScriptWriter {
    /// Create or truncate the destination script
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        log::debug!("truncated {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Write the whole script in one go
    pub fn finish(self, script: ScriptBuilder) -> Result<()> {
        let mut writer = BufWriter::new(self.file);
        writer.write_all(script.as_str().as_bytes())?;
        writer.flush()?;
        log::debug!(
            "wrote {} bytes to {}",
            script.as_str().len(),
            self.path.display()
        );
        Ok(())
    }
}

fn quote_path(path: &Path) -> String {
    shell_quote(&path.to_string_lossy())
}

// A line break would end the comment and turn the rest into commands.
fn single_line(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}
