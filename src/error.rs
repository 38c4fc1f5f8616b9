use std::path::PathBuf;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the application
#[derive(Debug)]
pub enum Error {
    /// The module root is missing or is not a directory. Fatal.
    InvalidInput(String),
    /// A single artifact could not be read. Callers recover from this one.
    FileRead { path: PathBuf, source: std::io::Error },
    /// The output document could not be written. Fatal.
    Write { path: PathBuf, source: std::io::Error },
    SerializationError(String),
}

impl Error {
    /// Whether the run can carry on without the affected artifact.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::FileRead { .. })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::InvalidInput(msg) => write!(f, "无效输入: {}", msg),
            Error::FileRead { path, source } => {
                write!(f, "读取文件失败 {}: {}", path.display(), source)
            }
            Error::Write { path, source } => {
                write!(f, "写入文件失败 {}: {}", path.display(), source)
            }
            Error::SerializationError(msg) => write!(f, "序列化错误: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileRead { source, .. } | Error::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(format!("JSON 序列化错误: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_only_file_read_is_recoverable() {
        let read = Error::FileRead {
            path: PathBuf::from("A.java"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let write = Error::Write {
            path: PathBuf::from("README.md"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(read.is_recoverable());
        assert!(!write.is_recoverable());
        assert!(!Error::InvalidInput("missing".to_string()).is_recoverable());
    }

    #[test]
    fn test_display_includes_path_and_source() {
        let err = Error::Write {
            path: PathBuf::from("/tmp/out/README.md"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        let msg = err.to_string();
        assert!(msg.contains("/tmp/out/README.md"));
        assert!(msg.contains("denied"));
        assert!(err.source().is_some());
    }
}
