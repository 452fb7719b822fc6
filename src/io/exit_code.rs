//! Process exit codes, stable for scripting.

use crate::error::IndexError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    /// Query matched nothing. Distinct from failure so pipelines can
    /// branch on it.
    NotFound = 3,
    ParseError = 4,
    /// I/O failure, mirroring BSD `EX_IOERR`.
    IoError = 74,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        self as u8 as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }
}

impl From<&IndexError> for ExitCode {
    fn from(err: &IndexError) -> Self {
        match err {
            IndexError::Parse(_) => Self::ParseError,
            IndexError::FileRead { .. }
            | IndexError::FileWrite { .. }
            | IndexError::IndexNotFound { .. } => Self::IoError,
            IndexError::Serialize(_) | IndexError::Deserialize { .. } => Self::ParseError,
            IndexError::General(_) => Self::GeneralError,
        }
    }
}
