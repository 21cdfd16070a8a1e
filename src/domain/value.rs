use std::fmt;

use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// SMS application id (`sdkappid`), the unique identifier of an SMS application.
pub struct SdkAppId(u64);

impl SdkAppId {
    /// Query parameter name used by the SMS API (`sdkappid`).
    pub const FIELD: &'static str = "sdkappid";

    /// Wrap a numeric application id.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying id.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SdkAppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// SMS application key used to sign send requests.
///
/// Invariant: must not be empty (whitespace is preserved and allowed). The key never
/// leaves the process: it only feeds the request signature.
pub struct AppKey(String);

impl AppKey {
    /// Name used in the canonical signing string (`appkey`).
    pub const FIELD: &'static str = "appkey";

    /// Create a validated [`AppKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the key as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AppKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Country calling code without the leading `+` (`nationcode`), e.g. `86`.
///
/// Passed through as given; the service reports malformed codes.
pub struct NationCode(String);

impl NationCode {
    /// JSON field name used by the SMS API (`nationcode`).
    pub const FIELD: &'static str = "nationcode";

    /// Mainland China, used by the domestic shortcut operations.
    pub const CHINA: &'static str = "86";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// `86`.
    pub fn china() -> Self {
        Self(Self::CHINA.to_owned())
    }

    /// Borrow the code as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Mobile number without the country code (`mobile`).
///
/// Passed through as given; use [`Recipient::parse`] to split and validate an
/// international number.
pub struct MobileNumber(String);

impl MobileNumber {
    /// JSON field name used by the SMS API (`mobile`).
    pub const FIELD: &'static str = "mobile";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the number as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// A single addressee: nation code plus national mobile number.
pub struct Recipient {
    nation_code: NationCode,
    mobile: MobileNumber,
}

impl Recipient {
    /// Field name of the recipient descriptor in the request payload (`tel`).
    pub const FIELD: &'static str = "tel";

    pub fn new(nation_code: NationCode, mobile: MobileNumber) -> Self {
        Self {
            nation_code,
            mobile,
        }
    }

    pub fn from_parts(nation_code: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self::new(NationCode::new(nation_code), MobileNumber::new(mobile))
    }

    /// A mainland China (`86`) recipient.
    pub fn china(mobile: impl Into<String>) -> Self {
        Self::new(NationCode::china(), MobileNumber::new(mobile))
    }

    /// Build an ordered batch that shares one nation code.
    ///
    /// The order of `mobiles` is preserved; it is significant for the request signature.
    pub fn batch<I, S>(nation_code: &NationCode, mobiles: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        mobiles
            .into_iter()
            .map(|mobile| Self::new(nation_code.clone(), MobileNumber::new(mobile)))
            .collect()
    }

    /// Parse an international number and split it into nation code and national number.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: MobileNumber::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let code = parsed.code().value().to_string();
        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();
        let national = e164
            .strip_prefix('+')
            .and_then(|rest| rest.strip_prefix(code.as_str()))
            .ok_or_else(|| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        Ok(Self::new(NationCode(code), MobileNumber::new(national)))
    }

    pub fn nation_code(&self) -> &NationCode {
        &self.nation_code
    }

    pub fn mobile(&self) -> &MobileNumber {
        &self.mobile
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Freeform message category (`type`).
pub enum SmsType {
    /// Ordinary (informational) message, wire value `0`.
    #[default]
    Normal,
    /// Marketing message, wire value `1`.
    Marketing,
}

impl SmsType {
    /// JSON field name used by the SMS API (`type`).
    pub const FIELD: &'static str = "type";

    /// Wire value of this category.
    pub fn code(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Marketing => 1,
        }
    }
}

impl TryFrom<i32> for SmsType {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Marketing),
            actual => Err(ValidationError::InvalidSmsType { actual }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Freeform message body (`msg`).
///
/// Sent exactly as given, empty text included; the service decides whether it is acceptable.
/// To use a non-default signature put it into the text as `【signature】`.
pub struct MessageText(String);

impl MessageText {
    /// JSON field name used by the SMS API (`msg`).
    pub const FIELD: &'static str = "msg";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Id of a pre-registered message template (`tpl_id`).
pub struct TemplateId(u32);

impl TemplateId {
    /// JSON field name used by the SMS API (`tpl_id`).
    pub const FIELD: &'static str = "tpl_id";

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS signature text (`sign`), the sender name shown to the recipient.
///
/// An absent signature is sent as `""`, which selects the application's default.
pub struct SmsSign(String);

impl SmsSign {
    /// JSON field name used by the SMS API (`sign`).
    pub const FIELD: &'static str = "sign";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Per-request random number (`random`).
///
/// Invariant: `100000..=999999`.
pub struct Nonce(u32);

impl Nonce {
    /// Query parameter and signing field name (`random`).
    pub const FIELD: &'static str = "random";

    /// Smallest allowed value.
    pub const MIN: u32 = 100_000;
    /// Largest allowed value.
    pub const MAX: u32 = 999_999;

    /// Create a validated nonce.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::NonceOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Unix timestamp in seconds (`time`).
pub struct UnixTime(i64);

impl UnixTime {
    /// JSON field and signing field name (`time`).
    pub const FIELD: &'static str = "time";

    /// Create a timestamp value (no range validation is performed).
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UnixTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
