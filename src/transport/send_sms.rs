use serde::{Deserialize, Serialize};

use crate::domain::{
    AppKey, FreeformMessage, Nonce, Recipient, ResultCode, SendSms, SmsSenderResult,
    TemplateMessage, UnixTime,
};
use crate::sign::sms_signature;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which of the two send endpoints a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendEndpoint {
    Single,
    Multi,
}

/// A request body ready to post, signed with `nonce` and `time`.
#[derive(Debug, Clone)]
pub struct EncodedSendSms {
    pub endpoint: SendEndpoint,
    pub nonce: Nonce,
    pub body: Vec<u8>,
}

#[derive(Debug, Serialize)]
struct TelEntry<'a> {
    nationcode: &'a str,
    mobile: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Tel<'a> {
    Single(TelEntry<'a>),
    Multi(Vec<TelEntry<'a>>),
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageFields<'a> {
    Freeform {
        msg: &'a str,
        #[serde(rename = "type")]
        sms_type: u8,
    },
    Template {
        tpl_id: u32,
        params: &'a [String],
        sign: &'a str,
    },
}

#[derive(Debug, Serialize)]
struct SendSmsPayload<'a> {
    tel: Tel<'a>,
    #[serde(flatten)]
    message: MessageFields<'a>,
    sig: String,
    time: i64,
    extend: &'a str,
    ext: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
struct SmsSenderJsonResult {
    result: i32,
    #[serde(default)]
    errmsg: Option<String>,
    #[serde(default)]
    ext: Option<String>,
    #[serde(default)]
    sid: Option<String>,
    #[serde(default)]
    fee: Option<i32>,
    #[serde(default)]
    mobile: Option<String>,
    #[serde(default)]
    nationcode: Option<String>,
    #[serde(default)]
    detail: Option<Vec<SmsSenderJsonResult>>,
}

impl From<SmsSenderJsonResult> for SmsSenderResult {
    fn from(value: SmsSenderJsonResult) -> Self {
        Self {
            result: ResultCode::new(value.result),
            errmsg: value.errmsg.unwrap_or_default(),
            ext: value.ext.unwrap_or_default(),
            sid: value.sid,
            fee: value.fee,
            mobile: value.mobile,
            nationcode: value.nationcode,
            detail: value
                .detail
                .map(|detail| detail.into_iter().map(Self::from).collect()),
        }
    }
}

/// Sign `request` and serialize its JSON body.
///
/// The same `nonce` and `time` feed the signature and the payload; the caller must also
/// put `nonce` into the query string.
pub fn encode_send_sms(
    request: &SendSms,
    app_key: &AppKey,
    nonce: Nonce,
    time: UnixTime,
) -> Result<EncodedSendSms, serde_json::Error> {
    let recipients = request.recipients();
    let sig = sms_signature(
        app_key,
        nonce,
        time,
        recipients.iter().map(Recipient::mobile),
    );

    let (tel, message) = match request {
        SendSms::Freeform(send) => (
            Tel::Single(tel_entry(send.recipient())),
            freeform_fields(send.message()),
        ),
        SendSms::Template(send) => (
            Tel::Single(tel_entry(send.recipient())),
            template_fields(send.message()),
        ),
        SendSms::MultiFreeform(send) => (
            Tel::Multi(send.recipients().iter().map(tel_entry).collect()),
            freeform_fields(send.message()),
        ),
        SendSms::MultiTemplate(send) => (
            Tel::Multi(send.recipients().iter().map(tel_entry).collect()),
            template_fields(send.message()),
        ),
    };

    let options = request.options();
    let payload = SendSmsPayload {
        tel,
        message,
        sig,
        time: time.value(),
        extend: options.extend_or_empty(),
        ext: options.ext_or_empty(),
    };

    let endpoint = if request.is_multi() {
        SendEndpoint::Multi
    } else {
        SendEndpoint::Single
    };

    Ok(EncodedSendSms {
        endpoint,
        nonce,
        body: serde_json::to_vec(&payload)?,
    })
}

fn tel_entry(recipient: &Recipient) -> TelEntry<'_> {
    TelEntry {
        nationcode: recipient.nation_code().as_str(),
        mobile: recipient.mobile().as_str(),
    }
}

fn freeform_fields(message: &FreeformMessage) -> MessageFields<'_> {
    MessageFields::Freeform {
        msg: message.text().as_str(),
        sms_type: message.sms_type().code(),
    }
}

fn template_fields(message: &TemplateMessage) -> MessageFields<'_> {
    MessageFields::Template {
        tpl_id: message.template_id().value(),
        params: message.params(),
        sign: message.sign_or_empty(),
    }
}

/// Parse a `200` response body, nested `detail` entries included.
pub fn decode_send_sms_json_response(json: &str) -> Result<SmsSenderResult, TransportError> {
    let parsed: SmsSenderJsonResult = serde_json::from_str(json)?;
    Ok(parsed.into())
}
