//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use grog_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{GrogError, GrogResult},
};
use tracing::debug;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> GrogResult<()> {
        debug!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn exists(&self, path: &Path) -> GrogResult<bool> {
        debug!(path = %path.display(), "exists");
        // `try_exists` reports NotFound as Ok(false) and everything else as an error.
        path.try_exists()
            .map_err(|e| map_io_error(path, e, "check existence of"))
    }

    fn read_file(&self, path: &Path) -> GrogResult<String> {
        debug!(path = %path.display(), "read_file");
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> GrogResult<()> {
        debug!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> GrogError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn exists_logs_at_debug() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Program.cs");
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let found = tracing::subscriber::with_default(subscriber, || {
            LocalFilesystem::new().exists(&path)
        });

        assert!(!found.unwrap());
        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("DEBUG"), "{logs}");
        assert!(logs.contains("exists"), "{logs}");
        assert!(logs.contains("Program.cs"), "{logs}");
    }

    #[test]
    fn missing_path_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        assert!(!fs.exists(&dir.path().join("nope.cs")).unwrap());
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("Domain/Ports/Input");
        fs.create_dir_all(&nested).unwrap();

        let file = nested.join("IOrderService.cs");
        fs.write_file(&file, "public interface IOrderService\n").unwrap();

        assert!(fs.exists(&file).unwrap());
        assert_eq!(fs.read_file(&file).unwrap(), "public interface IOrderService\n");
    }

    #[test]
    fn read_of_missing_file_is_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .read_file(&dir.path().join("Program.cs"))
            .unwrap_err();
        assert!(matches!(
            err,
            GrogError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
