use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Provider result code (`result`).
///
/// `0` means success; any other value is a provider error code and is preserved as-is.
/// `-1` is also synthesized locally when the HTTP exchange does not return `200`.
pub struct ResultCode(i32);

impl ResultCode {
    pub const SUCCESS: Self = Self(0);
    pub const HTTP_FAILURE: Self = Self(-1);

    pub fn new(code: i32) -> Self {
        Self(code)
    }

    pub fn as_i32(self) -> i32 {
        self.0
    }

    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of one send call.
///
/// Multi sends carry one nested entry per recipient in `detail`, in the same shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsSenderResult {
    pub result: ResultCode,
    pub errmsg: String,
    pub ext: String,
    /// Single sends: id of this delivery record.
    pub sid: Option<String>,
    /// Single sends: number of billed messages.
    pub fee: Option<i32>,
    /// Multi-send detail entries: the recipient number.
    pub mobile: Option<String>,
    /// Multi-send detail entries: the recipient nation code.
    pub nationcode: Option<String>,
    /// Multi sends only.
    pub detail: Option<Vec<SmsSenderResult>>,
}

impl SmsSenderResult {
    /// Result for an HTTP exchange that did not return `200`; the body text is kept.
    pub fn http_failure(status: u16, body: &str) -> Self {
        Self {
            result: ResultCode::HTTP_FAILURE,
            errmsg: format!("http error {status} {body}"),
            ext: String::new(),
            sid: None,
            fee: None,
            mobile: None,
            nationcode: None,
            detail: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_success()
    }

    /// Per-recipient entries, empty for single sends.
    pub fn details(&self) -> &[SmsSenderResult] {
        self.detail.as_deref().unwrap_or_default()
    }
}
