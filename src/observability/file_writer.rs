//! Append-only line writer with size-based rotation.
//!
//! Trace batches are appended one JSON document per line. When the file
//! grows past the policy limit it is renamed to `<stem>.json.<n>` and a
//! fresh file is started; only the newest backups are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// When to rotate and how many rotated files to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Size after which the next write rotates the file (default 10 MB).
    pub max_bytes: u64,
    /// Number of `.1`..`.N` backups kept; 0 deletes the file instead.
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Thread-safe rotating file writer.
///
/// The file is opened lazily on the first write so construction never
/// fails.
pub struct FileWriter {
    /// Live trace file; backups sit next to it.
    file_path: PathBuf,
    policy: RotationPolicy,
    /// Open handle, `None` until the first write and after each rotation.
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer without touching the filesystem.
    ///
    /// # Parameters
    ///
    /// * `file_path` - File to append to; its parent directory must exist
    /// * `policy` - Rotation size and backup count
    pub const fn new(file_path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            file_path,
            policy,
            writer: Mutex::new(None),
        }
    }

    /// Appends `line` and a newline, rotating first if the file is over the
    /// size limit.
    ///
    /// # Parameters
    ///
    /// * `line` - One complete JSON document, without a trailing newline
    ///
    /// # Errors
    ///
    /// Returns an I/O error if rotation, opening or writing fails, or if the
    /// lock was poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::other(format!("writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *writer = None;
            self.rotate()?;
        }

        if writer.is_none() {
            *writer = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            );
        }
        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::other("trace file unavailable"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.policy.max_bytes)
    }

    /// Shifts `<name>.1` → `<name>.2` and so on, dropping the oldest, then
    /// moves the live file to `<name>.1`.
    fn rotate(&self) -> io::Result<()> {
        if self.policy.max_backups == 0 {
            return fs::remove_file(&self.file_path);
        }

        let oldest = backup_path(&self.file_path, self.policy.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.policy.max_backups).rev() {
            let from = backup_path(&self.file_path, n);
            if from.exists() {
                fs::rename(&from, backup_path(&self.file_path, n + 1))?;
            }
        }
        fs::rename(&self.file_path, backup_path(&self.file_path, 1))
    }
}

fn backup_path(path: &Path, n: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{n}"));
    PathBuf::from(name)
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
