//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{FreeformMessage, MultiSend, SendOptions, SendSms, SingleSend, TemplateMessage};
pub use response::{ResultCode, SmsSenderResult};
pub use validation::ValidationError;
pub use value::{
    AppKey, MessageText, MobileNumber, NationCode, Nonce, Recipient, SdkAppId, SmsSign, SmsType,
    TemplateId, UnixTime,
};
