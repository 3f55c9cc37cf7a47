use crate::mach::Cell;

/// ## Fatal conditions raised by the machine and its host

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    ip: Option<Cell>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $ip:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_ip($ip)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $ip:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_ip($ip)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            ip: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn ip(&self) -> Option<Cell> {
        self.ip
    }

    /// Attach the instruction pointer, keeping one already present.
    pub fn at_ip(self, ip: Cell) -> Error {
        Error {
            ip: self.ip.or(Some(ip)),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        error!(DiskIoError; &error.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    StackUnderflow = 1,
    StackOverflow = 2,
    AddressOutOfRange = 3,
    DivisionByZero = 4,
    UndefinedWord = 5,
    CorruptDictionary = 6,
    ImageNotFound = 10,
    ImageTooLarge = 11,
    DiskIoError = 12,
    BadConfig = 20,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self.code {
            StackUnderflow => "STACK UNDERFLOW",
            StackOverflow => "STACK OVERFLOW",
            AddressOutOfRange => "ADDRESS OUT OF RANGE",
            DivisionByZero => "DIVISION BY ZERO",
            UndefinedWord => "UNDEFINED WORD",
            CorruptDictionary => "CORRUPT DICTIONARY",
            ImageNotFound => "IMAGE NOT FOUND",
            ImageTooLarge => "IMAGE TOO LARGE",
            DiskIoError => "DISK I/O ERROR",
            BadConfig => "BAD CONFIGURATION",
        };
        let mut suffix = String::new();
        if let Some(ip) = self.ip {
            suffix.push_str(&format!(" AT {}", ip));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", code_str, suffix)
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_display() {
        assert_eq!(error!(StackUnderflow).to_string(), "STACK UNDERFLOW");
        assert_eq!(
            error!(AddressOutOfRange, 12; "-7").to_string(),
            "ADDRESS OUT OF RANGE AT 12; -7"
        );
    }

    #[test]
    fn test_first_ip_sticks() {
        let e = error!(DivisionByZero, 3).at_ip(9);
        assert_eq!(e.ip(), Some(3));
    }
}
