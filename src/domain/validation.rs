use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidSmsType { actual: i32 },
    NonceOutOfRange { min: u32, max: u32, actual: u32 },
    InvalidPhoneNumber { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidSmsType { actual } => {
                write!(f, "sms type {actual} error (expected 0 or 1)")
            }
            Self::NonceOutOfRange { min, max, actual } => {
                write!(f, "nonce out of range: {actual} (expected {min}..={max})")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}
