//! Rotating file writer with size-based rotation and backup retention.
//!
//! [`FileWriter`] backs the `fmt` layer of the tracing subscriber. Each
//! formatted event is buffered in a [`TraceLine`] and appended to the file in
//! one write when the line is dropped, so rotation never splits an event.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// When the file exceeds the size limit it is renamed with a Unix timestamp
/// suffix (`bookconnect-trace.log.1700000000`) and a fresh file is started.
/// Backups beyond the newest three are removed.
pub struct FileWriter {
    file_path: PathBuf,
    max_size: u64,
    /// Lazily opened on first write.
    writer: Mutex<Option<fs::File>>,
}

impl FileWriter {
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_max_size(file_path, MAX_FILE_SIZE_BYTES)
    }

    #[must_use]
    pub const fn with_max_size(file_path: PathBuf, max_size: u64) -> Self {
        Self {
            file_path,
            max_size,
            writer: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Appends `bytes` to the file, rotating first if it is over the limit.
    ///
    /// # Errors
    ///
    /// Returns I/O errors from opening, renaming or writing the file, or if
    /// the internal lock is poisoned.
    pub fn append(&self, bytes: &[u8]) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(bytes)?;
        file.flush()?;
        drop(writer);

        Ok(())
    }

    fn check_and_rotate(&self, writer: &mut Option<fs::File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_size {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();

        let mut backup_path = self.file_path.clone().into_os_string();
        backup_path.push(format!(".{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, PathBuf::from(backup_path))?;
        }

        self.cleanup_old_backups()
    }

    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;

        let file_name = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;
        let backup_prefix = format!("{file_name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&backup_prefix))
            })
            .collect();

        // Suffixes are timestamps of equal width, so name order is age order.
        backups.sort_by(|a, b| b.cmp(a));

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_size", &self.max_size)
            .finish_non_exhaustive()
    }
}

/// Buffer for one formatted event, flushed to the [`FileWriter`] on drop.
#[derive(Debug)]
pub struct TraceLine<'a> {
    target: &'a FileWriter,
    buffer: Vec<u8>,
}

impl Write for TraceLine<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for TraceLine<'_> {
    fn drop(&mut self) {
        if !self.buffer.is_empty() {
            // Trace output is best effort.
            let _ = self.target.append(&self.buffer);
        }
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = TraceLine<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        TraceLine {
            target: self,
            buffer: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn backups(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter_map(|e| e.file_name().to_str().map(String::from))
            .filter(|name| name.starts_with("trace.log."))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn trace_line_writes_on_drop() {
        let dir = TempDir::new().unwrap();
        let writer = FileWriter::new(dir.path().join("trace.log"));

        {
            let mut line = writer.make_writer();
            write!(line, "hello ").unwrap();
            writeln!(line, "world").unwrap();
            assert!(!writer.path().exists());
        }

        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "hello world\n");
    }

    #[test]
    fn rotates_when_over_limit() {
        let dir = TempDir::new().unwrap();
        let writer = FileWriter::with_max_size(dir.path().join("trace.log"), 8);

        writer.append(b"0123456789\n").unwrap();
        writer.append(b"next\n").unwrap();

        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "next\n");
        assert_eq!(backups(dir.path()).len(), 1);
    }

    #[test]
    fn keeps_three_backups() {
        let dir = TempDir::new().unwrap();
        let writer = FileWriter::with_max_size(dir.path().join("trace.log"), 1);

        for i in 0..6 {
            writer.append(format!("line {i}\n").as_bytes()).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(2));
        }

        assert_eq!(backups(dir.path()).len(), MAX_BACKUP_FILES);
        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "line 5\n");
    }

    #[test]
    fn empty_line_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let writer = FileWriter::new(dir.path().join("trace.log"));

        drop(writer.make_writer());

        assert!(!writer.path().exists());
    }
}
