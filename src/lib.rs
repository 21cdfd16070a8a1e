//! Typed Rust client for the Tencent Cloud SMS API and COS access signatures.
//!
//! The crate is split into a domain layer of strong types, a signing layer with the two
//! authentication schemes, a transport layer for wire-format quirks, and a small client
//! layer orchestrating requests.
//!
//! ```rust,no_run
//! use qcloud::{Recipient, SendOptions, SmsCredentials, SmsSender};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), qcloud::SmsError> {
//!     let client = SmsSender::new(SmsCredentials::new(1400000000, "...")?);
//!     let recipient = Recipient::china("13800000000");
//!     let result = client
//!         .send_freeform(0, recipient, "hello", SendOptions::default())
//!         .await?;
//!     println!("{} {}", result.result, result.errmsg);
//!     Ok(())
//! }
//! ```
//!
//! Storage tokens need no client:
//!
//! ```rust
//! let token = qcloud::storage_signature(1250000000, "AKID...", "secret", 0, "bucket");
//! assert_ne!(token, "-1");
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod sign;
mod transport;

pub use client::{
    HttpResponse, HttpTransport, ReqwestTransport, SmsCredentials, SmsError, SmsSender,
    SmsSenderBuilder,
};
pub use domain::{
    AppKey, FreeformMessage, MessageText, MobileNumber, NationCode, Nonce, Recipient, ResultCode,
    SdkAppId, SendOptions, SendSms, SmsSenderResult, SmsSign, SmsType, TemplateId, TemplateMessage,
    UnixTime, ValidationError,
};
pub use sign::{
    FixedSigningEnv, STORAGE_SIGNATURE_UNAVAILABLE, SigningEnv, StorageCredentials,
    StorageSigner, SystemSigningEnv, sms_signature, storage_signature, storage_signature_once,
};
