//! Stubs read from a directory.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use stubwright_core::{
    application::{ApplicationError, ports::StubStore},
    domain::StubKind,
    error::StubwrightResult,
};

/// Loads `<dir>/<stub file name>` on every call.
///
/// The directory does not need to exist; a missing directory behaves like a
/// directory without the stub.
#[derive(Debug, Clone)]
pub struct DirectoryStubStore {
    dir: PathBuf,
}

impl DirectoryStubStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where `stub` is expected.
    pub fn path_of(&self, stub: StubKind) -> PathBuf {
        self.dir.join(stub.file_name())
    }
}

impl StubStore for DirectoryStubStore {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn load(&self, stub: StubKind) -> StubwrightResult<String> {
        let path = self.path_of(stub);
        match fs::read_to_string(&path) {
            Ok(text) => {
                debug!(path = %path.display(), bytes = text.len(), "stub loaded");
                Ok(text)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(ApplicationError::StubNotFound {
                stub,
                searched: self.dir.display().to_string(),
            }
            .into()),
            Err(e) => Err(ApplicationError::StubUnreadable {
                stub,
                location: path.display().to_string(),
                reason: e.to_string(),
            }
            .into()),
        }
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stubwright_core::error::ErrorCategory;
    use tempfile::TempDir;

    #[test]
    fn loads_stub_by_file_name() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("filter.stub"), "class {{ className }}").unwrap();

        let store = DirectoryStubStore::new(temp.path());
        assert_eq!(store.load(StubKind::Filter).unwrap(), "class {{ className }}");
    }

    #[test]
    fn missing_stub_is_not_found() {
        let temp = TempDir::new().unwrap();
        let store = DirectoryStubStore::new(temp.path());

        let err = store.load(StubKind::RepositoryInterface).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.to_string().contains("repository.interface.stub"));
    }

    #[test]
    fn missing_directory_is_not_found() {
        let store = DirectoryStubStore::new("/definitely/not/here");
        let err = store.load(StubKind::Filter).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn non_utf8_stub_is_unreadable() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("transformer.stub"), [0xff, 0xfe, 0x00]).unwrap();

        let err = DirectoryStubStore::new(temp.path())
            .load(StubKind::Transformer)
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Io);
    }
}
