//! Rotating file writer with size-based rotation and backup retention.
//!
//! Backups are numbered: `<name>.1` is the most recent, `<name>.N` the
//! oldest. Rotation shifts every backup up by one and drops the one that
//! falls past the retention limit.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Maximum file size before rotation (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// When to rotate and how many backups to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Rotate before a write once the file has grown past this size.
    pub max_bytes: u64,
    /// Backups kept after rotation.
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            max_bytes: MAX_FILE_SIZE_BYTES,
            max_backups: MAX_BACKUP_FILES,
        }
    }
}

/// Thread-safe rotating line writer.
///
/// The file is opened lazily on the first write, so construction never fails.
pub struct FileWriter {
    file_path: PathBuf,
    policy: RotationPolicy,
    file: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer with the default rotation policy.
    pub fn new(file_path: PathBuf) -> Self {
        Self::with_policy(file_path, RotationPolicy::default())
    }

    /// Creates a writer with a custom rotation policy.
    pub const fn with_policy(file_path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            file_path,
            policy,
            file: Mutex::new(None),
        }
    }

    /// Path of the live file.
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Appends `line` plus a newline, rotating first if the file is too big.
    ///
    /// # Errors
    ///
    /// Returns an error if rotation, opening, writing or flushing fails, or
    /// if the internal lock is poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        let too_big = fs::metadata(&self.file_path)
            .map(|m| m.len() > self.policy.max_bytes)
            .unwrap_or(false);
        if too_big {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            );
        }
        let file = guard
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "trace file not open"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.file_path.clone().into_os_string();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.policy.max_backups == 0 {
            return fs::remove_file(&self.file_path);
        }

        let oldest = self.backup_path(self.policy.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.policy.max_backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        fs::rename(&self.file_path, self.backup_path(1))
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(dir: &Path, max_backups: usize) -> FileWriter {
        FileWriter::with_policy(
            dir.join("trace.json"),
            RotationPolicy {
                max_bytes: 10,
                max_backups,
            },
        )
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let writer = FileWriter::new(dir.path().join("trace.json"));
        writer.write_line("a").expect("write");
        writer.write_line("b").expect("write");
        let content = fs::read_to_string(writer.path()).expect("read");
        assert_eq!(content, "a\nb\n");
    }

    #[test]
    fn rotates_once_over_the_limit() {
        let dir = tempfile::tempdir().expect("tempdir");
        let writer = small(dir.path(), 3);
        writer.write_line("0123456789").expect("write");
        writer.write_line("next").expect("write");

        let live = fs::read_to_string(writer.path()).expect("read live");
        let backup = fs::read_to_string(writer.backup_path(1)).expect("read backup");
        assert_eq!(live, "next\n");
        assert_eq!(backup, "0123456789\n");
    }

    #[test]
    fn keeps_only_max_backups() {
        let dir = tempfile::tempdir().expect("tempdir");
        let writer = small(dir.path(), 2);
        for i in 0..5 {
            writer.write_line(&format!("line-{i}-padding")).expect("write");
        }

        assert!(writer.backup_path(1).exists());
        assert!(writer.backup_path(2).exists());
        assert!(!writer.backup_path(3).exists());

        let newest = fs::read_to_string(writer.backup_path(1)).expect("read");
        let oldest = fs::read_to_string(writer.backup_path(2)).expect("read");
        assert_eq!(newest, "line-3-padding\n");
        assert_eq!(oldest, "line-2-padding\n");
    }

    #[test]
    fn zero_backups_truncates() {
        let dir = tempfile::tempdir().expect("tempdir");
        let writer = small(dir.path(), 0);
        writer.write_line("0123456789").expect("write");
        writer.write_line("fresh").expect("write");
        assert_eq!(fs::read_to_string(writer.path()).expect("read"), "fresh\n");
        assert!(!writer.backup_path(1).exists());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let writer = FileWriter::new(dir.path().join("absent").join("trace.json"));
        assert!(writer.write_line("x").is_err());
    }
}
