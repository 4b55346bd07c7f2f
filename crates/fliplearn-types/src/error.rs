use std::fmt;

/// User-facing failure categories shared by every crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required text field was blank
    EmptyInput,
    /// Reading or writing persistent storage failed
    StorageUnavailable,
    /// Remote translation call failed or returned garbage
    TranslationFailed,
    /// Another stored set already uses the requested name
    NameTaken,
    /// An entry or set index did not exist
    OutOfRange,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::EmptyInput => "empty input",
            ErrorKind::StorageUnavailable => "storage unavailable",
            ErrorKind::TranslationFailed => "translation failed",
            ErrorKind::NameTaken => "name taken",
            ErrorKind::OutOfRange => "out of range",
        };
        f.write_str(label)
    }
}
