use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageText, Recipient, SmsSign, SmsType, TemplateId};

/// Optional per-request extras echoed around the send.
///
/// `None` is sent as `""`; the payload never carries a `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendOptions {
    /// Extension code (`extend`).
    pub extend: Option<String>,
    /// Opaque session data the server returns unchanged (`ext`).
    pub ext: Option<String>,
}

impl SendOptions {
    pub fn extend_or_empty(&self) -> &str {
        self.extend.as_deref().unwrap_or_default()
    }

    pub fn ext_or_empty(&self) -> &str {
        self.ext.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeformMessage {
    sms_type: SmsType,
    text: MessageText,
}

impl FreeformMessage {
    pub fn new(sms_type: SmsType, text: MessageText) -> Self {
        Self { sms_type, text }
    }

    pub fn sms_type(&self) -> SmsType {
        self.sms_type
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMessage {
    template_id: TemplateId,
    params: Vec<String>,
    sign: Option<SmsSign>,
}

impl TemplateMessage {
    /// `params` fill the template placeholders `{1}`, `{2}`, ... in order.
    pub fn new(template_id: TemplateId, params: Vec<String>, sign: Option<SmsSign>) -> Self {
        Self {
            template_id,
            params,
            sign,
        }
    }

    pub fn template_id(&self) -> TemplateId {
        self.template_id
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn sign(&self) -> Option<&SmsSign> {
        self.sign.as_ref()
    }

    pub fn sign_or_empty(&self) -> &str {
        self.sign.as_ref().map(SmsSign::as_str).unwrap_or_default()
    }
}

/// A message addressed to exactly one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleSend<M> {
    recipient: Recipient,
    message: M,
    options: SendOptions,
}

impl<M> SingleSend<M> {
    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn message(&self) -> &M {
        &self.message
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

/// One message addressed to an ordered, non-empty list of recipients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSend<M> {
    recipients: Vec<Recipient>,
    message: M,
    options: SendOptions,
}

impl<M> MultiSend<M> {
    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    pub fn message(&self) -> &M {
        &self.message
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

/// The four send variants: {single, multi} x {freeform, template}.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendSms {
    Freeform(SingleSend<FreeformMessage>),
    Template(SingleSend<TemplateMessage>),
    MultiFreeform(MultiSend<FreeformMessage>),
    MultiTemplate(MultiSend<TemplateMessage>),
}

impl SendSms {
    pub fn freeform(recipient: Recipient, message: FreeformMessage, options: SendOptions) -> Self {
        Self::Freeform(SingleSend {
            recipient,
            message,
            options,
        })
    }

    pub fn template(recipient: Recipient, message: TemplateMessage, options: SendOptions) -> Self {
        Self::Template(SingleSend {
            recipient,
            message,
            options,
        })
    }

    pub fn multi_freeform(
        recipients: Vec<Recipient>,
        message: FreeformMessage,
        options: SendOptions,
    ) -> Result<Self, ValidationError> {
        ensure_recipients(&recipients)?;
        Ok(Self::MultiFreeform(MultiSend {
            recipients,
            message,
            options,
        }))
    }

    pub fn multi_template(
        recipients: Vec<Recipient>,
        message: TemplateMessage,
        options: SendOptions,
    ) -> Result<Self, ValidationError> {
        ensure_recipients(&recipients)?;
        Ok(Self::MultiTemplate(MultiSend {
            recipients,
            message,
            options,
        }))
    }

    /// Whether this request goes to the multi-recipient endpoint.
    pub fn is_multi(&self) -> bool {
        matches!(self, Self::MultiFreeform(_) | Self::MultiTemplate(_))
    }

    /// Recipients in signing order.
    pub fn recipients(&self) -> &[Recipient] {
        match self {
            Self::Freeform(send) => std::slice::from_ref(&send.recipient),
            Self::Template(send) => std::slice::from_ref(&send.recipient),
            Self::MultiFreeform(send) => &send.recipients,
            Self::MultiTemplate(send) => &send.recipients,
        }
    }

    pub fn options(&self) -> &SendOptions {
        match self {
            Self::Freeform(send) => &send.options,
            Self::Template(send) => &send.options,
            Self::MultiFreeform(send) => &send.options,
            Self::MultiTemplate(send) => &send.options,
        }
    }
}

fn ensure_recipients(recipients: &[Recipient]) -> Result<(), ValidationError> {
    if recipients.is_empty() {
        return Err(ValidationError::Empty {
            field: Recipient::FIELD,
        });
    }
    Ok(())
}
