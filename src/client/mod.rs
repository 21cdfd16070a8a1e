//! Client layer: orchestrates signing, transport calls and response mapping.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::domain::{
    AppKey, FreeformMessage, MessageText, MobileNumber, NationCode, Nonce, Recipient, SdkAppId,
    SendOptions, SendSms, SmsSenderResult, SmsSign, SmsType, TemplateId, TemplateMessage,
    UnixTime, ValidationError,
};
use crate::sign::{SigningEnv, SystemSigningEnv};
use crate::transport::SendEndpoint;

const DEFAULT_SEND_ENDPOINT: &str = "https://yun.tim.qq.com/v5/tlssmssvr/sendsms";
const DEFAULT_MULTI_SEND_ENDPOINT: &str = "https://yun.tim.qq.com/v5/tlssmssvr/sendmultisms2";

const SEND_PATH: &str = "sendsms";
const MULTI_SEND_PATH: &str = "sendmultisms2";

/// The wire protocol declares a form content type for what is actually a JSON body.
const WIRE_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Raw outcome of one HTTP exchange: status code and the fully buffered body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// A single-attempt HTTP POST capability.
///
/// Implementations must not retry; any timeout policy lives here as well.
pub trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

/// [`HttpTransport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(CONTENT_TYPE, WIRE_CONTENT_TYPE)
                .body(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// SMS application credentials, fixed for the lifetime of a client.
pub struct SmsCredentials {
    app_id: SdkAppId,
    app_key: AppKey,
}

impl SmsCredentials {
    /// Create credentials and validate that the app key is non-empty.
    pub fn new(app_id: u64, app_key: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            app_id: SdkAppId::new(app_id),
            app_key: AppKey::new(app_key)?,
        })
    }

    pub fn app_id(&self) -> SdkAppId {
        self.app_id
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsSender`].
///
/// A non-`200` HTTP status is not an error: it is reported as a result with code `-1`.
pub enum SmsError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// A `200` response body could not be parsed as a send result.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The request payload could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// A configured endpoint is not a valid URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Clone)]
/// Builder for [`SmsSender`].
///
/// Use this when you need to customize the endpoints, timeout, user-agent, the
/// signing environment or the HTTP transport.
pub struct SmsSenderBuilder {
    credentials: SmsCredentials,
    send_endpoint: String,
    multi_send_endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    env: Arc<dyn SigningEnv>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl SmsSenderBuilder {
    /// Create a builder with the default endpoints and the system signing environment.
    pub fn new(credentials: SmsCredentials) -> Self {
        Self {
            credentials,
            send_endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            multi_send_endpoint: DEFAULT_MULTI_SEND_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
            env: Arc::new(SystemSigningEnv),
            transport: None,
        }
    }

    /// Point both endpoints at another base URL, e.g. `https://proxy.local/v5/tlssmssvr`.
    pub fn endpoint_base(mut self, base: impl AsRef<str>) -> Self {
        let base = base.as_ref().trim_end_matches('/');
        self.send_endpoint = format!("{base}/{SEND_PATH}");
        self.multi_send_endpoint = format!("{base}/{MULTI_SEND_PATH}");
        self
    }

    /// Override the single-recipient endpoint URL.
    pub fn send_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.send_endpoint = endpoint.into();
        self
    }

    /// Override the multi-recipient endpoint URL.
    pub fn multi_send_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.multi_send_endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a custom [`HttpTransport`] is installed.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a custom [`HttpTransport`] is installed.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Supply the clock and nonce source used for signing.
    pub fn signing_env(mut self, env: Arc<dyn SigningEnv>) -> Self {
        self.env = env;
        self
    }

    /// Use a custom HTTP transport instead of `reqwest`.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build a [`SmsSender`].
    pub fn build(self) -> Result<SmsSender, SmsError> {
        Url::parse(&self.send_endpoint)?;
        Url::parse(&self.multi_send_endpoint)?;

        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }

                let client = builder
                    .build()
                    .map_err(|err| SmsError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport::new(client))
            }
        };

        Ok(SmsSender {
            credentials: self.credentials,
            send_endpoint: self.send_endpoint,
            multi_send_endpoint: self.multi_send_endpoint,
            env: self.env,
            http,
        })
    }
}

#[derive(Clone)]
/// High-level SMS client.
///
/// Each call draws a fresh nonce and timestamp, signs the request, performs exactly one
/// HTTP round trip and returns what the service reported. By default it uses:
/// - `https://yun.tim.qq.com/v5/tlssmssvr/sendsms` for single-recipient sends
/// - `https://yun.tim.qq.com/v5/tlssmssvr/sendmultisms2` for multi-recipient sends
///
/// The client holds only immutable state and can be shared between tasks.
pub struct SmsSender {
    credentials: SmsCredentials,
    send_endpoint: String,
    multi_send_endpoint: String,
    env: Arc<dyn SigningEnv>,
    http: Arc<dyn HttpTransport>,
}

impl SmsSender {
    /// Create a client using the default endpoints.
    ///
    /// For more customization, use [`SmsSender::builder`].
    pub fn new(credentials: SmsCredentials) -> Self {
        Self {
            credentials,
            send_endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            multi_send_endpoint: DEFAULT_MULTI_SEND_ENDPOINT.to_owned(),
            env: Arc::new(SystemSigningEnv),
            http: Arc::new(ReqwestTransport::new(reqwest::Client::new())),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: SmsCredentials) -> SmsSenderBuilder {
        SmsSenderBuilder::new(credentials)
    }

    /// Sign and send one request.
    ///
    /// Errors:
    /// - Returns [`SmsError::Validation`] when the signing environment yields a bad nonce,
    /// - [`SmsError::Transport`] when no HTTP response was received,
    /// - [`SmsError::Parse`] when a `200` body is not a valid result.
    ///
    /// A non-`200` status yields `Ok` with `result == -1` and the status and body in
    /// `errmsg`. Provider error codes are returned unchanged.
    pub async fn send(&self, request: SendSms) -> Result<SmsSenderResult, SmsError> {
        let nonce = Nonce::new(self.env.sms_nonce())?;
        let time = UnixTime::new(self.env.now());

        let encoded =
            crate::transport::encode_send_sms(&request, &self.credentials.app_key, nonce, time)
                .map_err(SmsError::Encode)?;

        let endpoint = match encoded.endpoint {
            SendEndpoint::Single => &self.send_endpoint,
            SendEndpoint::Multi => &self.multi_send_endpoint,
        };
        let url = Url::parse_with_params(
            endpoint,
            [
                (SdkAppId::FIELD, self.credentials.app_id.to_string()),
                (Nonce::FIELD, encoded.nonce.to_string()),
            ],
        )?;

        tracing::debug!(
            endpoint = ?encoded.endpoint,
            app_id = %self.credentials.app_id,
            nonce = %encoded.nonce,
            recipients = request.recipients().len(),
            "dispatching sms send"
        );

        let response = self
            .http
            .post_json(url.as_str(), encoded.body)
            .await
            .map_err(SmsError::Transport)?;

        if response.status != 200 {
            tracing::warn!(
                status = response.status,
                endpoint = ?encoded.endpoint,
                "sms send returned non-200 status"
            );
            return Ok(SmsSenderResult::http_failure(
                response.status,
                &response.body,
            ));
        }

        crate::transport::decode_send_sms_json_response(&response.body)
            .map_err(|err| SmsError::Parse(Box::new(err)))
    }

    /// Send free text to one recipient.
    ///
    /// `sms_type` is `0` for ordinary and `1` for marketing messages; any other value is
    /// rejected before a request is made.
    pub async fn send_freeform(
        &self,
        sms_type: i32,
        recipient: Recipient,
        msg: impl Into<String>,
        options: SendOptions,
    ) -> Result<SmsSenderResult, SmsError> {
        let message = FreeformMessage::new(SmsType::try_from(sms_type)?, MessageText::new(msg));
        self.send(SendSms::freeform(recipient, message, options)).await
    }

    /// Send the same free text to several recipients in one call.
    pub async fn send_multi_freeform(
        &self,
        sms_type: i32,
        recipients: Vec<Recipient>,
        msg: impl Into<String>,
        options: SendOptions,
    ) -> Result<SmsSenderResult, SmsError> {
        let message = FreeformMessage::new(SmsType::try_from(sms_type)?, MessageText::new(msg));
        self.send(SendSms::multi_freeform(recipients, message, options)?).await
    }

    /// Send a registered template to one recipient.
    ///
    /// `sign: None` selects the application's default signature.
    pub async fn send_template(
        &self,
        recipient: Recipient,
        template_id: u32,
        params: Vec<String>,
        sign: Option<String>,
        options: SendOptions,
    ) -> Result<SmsSenderResult, SmsError> {
        let message =
            TemplateMessage::new(TemplateId::new(template_id), params, sign.map(SmsSign::new));
        self.send(SendSms::template(recipient, message, options)).await
    }

    /// Send a registered template to several recipients in one call.
    pub async fn send_multi_template(
        &self,
        recipients: Vec<Recipient>,
        template_id: u32,
        params: Vec<String>,
        sign: Option<String>,
        options: SendOptions,
    ) -> Result<SmsSenderResult, SmsError> {
        let message =
            TemplateMessage::new(TemplateId::new(template_id), params, sign.map(SmsSign::new));
        self.send(SendSms::multi_template(recipients, message, options)?).await
    }

    /// Send an ordinary domestic (`86`) text message.
    pub async fn send_normal_sms(
        &self,
        mobile: impl Into<String>,
        msg: impl Into<String>,
    ) -> Result<SmsSenderResult, SmsError> {
        let recipient = Recipient::new(NationCode::china(), MobileNumber::new(mobile));
        self.send_freeform(0, recipient, msg, SendOptions::default()).await
    }

    /// Send a domestic (`86`) template message with the default signature.
    pub async fn send_sms_with_param(
        &self,
        template_id: u32,
        mobile: impl Into<String>,
        params: Vec<String>,
    ) -> Result<SmsSenderResult, SmsError> {
        self.send_sms_with_sign_and_param(template_id, mobile, "", params).await
    }

    /// Send a domestic (`86`) template message with an explicit signature.
    pub async fn send_sms_with_sign_and_param(
        &self,
        template_id: u32,
        mobile: impl Into<String>,
        sign: impl Into<String>,
        params: Vec<String>,
    ) -> Result<SmsSenderResult, SmsError> {
        let recipient = Recipient::new(NationCode::china(), MobileNumber::new(mobile));
        self.send_template(
            recipient,
            template_id,
            params,
            Some(sign.into()),
            SendOptions::default(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::{Value, json};

    use crate::domain::ResultCode;
    use crate::sign::FixedSigningEnv;

    use super::*;

    const ENV: FixedSigningEnv = FixedSigningEnv {
        now: 1_500_000_000,
        sms_nonce: 654_321,
        storage_nonce: 1,
    };

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        calls: usize,
        last_url: Option<String>,
        last_body: Vec<u8>,
        response_status: u16,
        response_body: String,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    calls: 0,
                    last_url: None,
                    last_body: Vec::new(),
                    response_status,
                    response_body: response_body.into(),
                })),
            }
        }

        fn calls(&self) -> usize {
            self.state.lock().unwrap().calls
        }

        fn last_request(&self) -> (Option<String>, Value) {
            let state = self.state.lock().unwrap();
            let body = serde_json::from_slice(&state.last_body).unwrap_or(Value::Null);
            (state.last_url.clone(), body)
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_json<'a>(
            &'a self,
            url: &'a str,
            body: Vec<u8>,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, body) = {
                    let mut state = self.state.lock().unwrap();
                    state.calls += 1;
                    state.last_url = Some(url.to_owned());
                    state.last_body = body;
                    (state.response_status, state.response_body.clone())
                };
                Ok(HttpResponse { status, body })
            })
        }
    }

    fn make_client(transport: FakeTransport) -> SmsSender {
        SmsSender {
            credentials: SmsCredentials::new(1_400_000_000, "test").unwrap(),
            send_endpoint: "https://example.invalid/v5/tlssmssvr/sendsms".to_owned(),
            multi_send_endpoint: "https://example.invalid/v5/tlssmssvr/sendmultisms2".to_owned(),
            env: Arc::new(ENV),
            http: Arc::new(transport),
        }
    }

    fn expected_sig(mobiles: &str) -> String {
        use sha2::{Digest, Sha256};
        hex::encode(Sha256::digest(format!(
            "appkey=test&random=654321&time=1500000000&mobile={mobiles}"
        )))
    }

    const OK_SINGLE: &str = r#"{"result": 0, "errmsg": "OK", "ext": "", "sid": "s1", "fee": 1}"#;

    #[tokio::test]
    async fn send_freeform_posts_signed_payload_to_single_endpoint() {
        let transport = FakeTransport::new(200, OK_SINGLE);
        let client = make_client(transport.clone());

        let result = client
            .send_freeform(
                0,
                Recipient::china("13800000000"),
                "hello",
                SendOptions::default(),
            )
            .await
            .unwrap();
        assert!(result.is_success());
        assert_eq!(result.sid.as_deref(), Some("s1"));
        assert_eq!(result.fee, Some(1));

        let (url, body) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/v5/tlssmssvr/sendsms?sdkappid=1400000000&random=654321")
        );
        assert_eq!(
            body,
            json!({
                "tel": { "nationcode": "86", "mobile": "13800000000" },
                "msg": "hello",
                "type": 0,
                "sig": expected_sig("13800000000"),
                "time": 1_500_000_000,
                "extend": "",
                "ext": "",
            })
        );
    }

    #[tokio::test]
    async fn invalid_sms_type_fails_before_any_request() {
        let transport = FakeTransport::new(200, OK_SINGLE);
        let client = make_client(transport.clone());

        let err = client
            .send_freeform(
                2,
                Recipient::china("13800000000"),
                "hello",
                SendOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SmsError::Validation(ValidationError::InvalidSmsType { actual: 2 })
        ));

        let recipients = Recipient::batch(&NationCode::china(), ["1", "2"]);
        let err = client
            .send_multi_freeform(-1, recipients, "hello", SendOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SmsError::Validation(_)));

        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn empty_multi_send_fails_before_any_request() {
        let transport = FakeTransport::new(200, OK_SINGLE);
        let client = make_client(transport.clone());

        let err = client
            .send_multi_template(Vec::new(), 1, Vec::new(), None, SendOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SmsError::Validation(ValidationError::Empty { field: "tel" })
        ));
        assert_eq!(transport.calls(), 0);
    }

    // The provider owns content rules; empty values are sent as given.
    #[tokio::test]
    async fn empty_message_and_mobile_reach_the_transport() {
        let transport = FakeTransport::new(200, r#"{"result": 1016, "errmsg": "bad"}"#);
        let client = make_client(transport.clone());

        let result = client
            .send_freeform(0, Recipient::china("13800000000"), "", SendOptions::default())
            .await
            .unwrap();
        assert_eq!(result.result.as_i32(), 1016);
        assert_eq!(transport.calls(), 1);
        let (_, body) = transport.last_request();
        assert_eq!(body["msg"], json!(""));

        client.send_normal_sms("", "hello").await.unwrap();
        assert_eq!(transport.calls(), 2);
        let (_, body) = transport.last_request();
        assert_eq!(body["tel"], json!({ "nationcode": "86", "mobile": "" }));
        assert_eq!(body["sig"], json!(expected_sig("")));

        client.send_sms_with_param(7, "", Vec::new()).await.unwrap();
        assert_eq!(transport.calls(), 3);
    }

    #[tokio::test]
    async fn non_200_status_becomes_result_with_body() {
        let transport = FakeTransport::new(503, "unavailable");
        let client = make_client(transport.clone());

        let result = client
            .send_normal_sms("13800000000", "hello")
            .await
            .unwrap();
        assert_eq!(result.result, ResultCode::HTTP_FAILURE);
        assert_eq!(result.result.as_i32(), -1);
        assert!(result.errmsg.contains("503"));
        assert!(result.errmsg.contains("unavailable"));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn multi_template_parses_detail_entries() {
        let json = r#"
        {
          "result": 0,
          "errmsg": "OK",
          "ext": "",
          "detail": [
            { "result": 0, "errmsg": "OK", "mobile": "13800000001", "nationcode": "86", "sid": "a", "fee": 1 },
            { "result": 1016, "errmsg": "mobile format error", "mobile": "13800000002", "nationcode": "86" }
          ]
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let recipients = Recipient::batch(&NationCode::china(), ["13800000001", "13800000002"]);
        let result = client
            .send_multi_template(
                recipients,
                42,
                vec!["1234".to_owned()],
                None,
                SendOptions {
                    extend: None,
                    ext: Some("order-7".to_owned()),
                },
            )
            .await
            .unwrap();

        let details = result.details();
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].mobile.as_deref(), Some("13800000001"));
        assert_eq!(details[0].result.as_i32(), 0);
        assert_eq!(details[1].mobile.as_deref(), Some("13800000002"));
        assert_eq!(details[1].result.as_i32(), 1016);

        let (url, body) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some(
                "https://example.invalid/v5/tlssmssvr/sendmultisms2?sdkappid=1400000000&random=654321"
            )
        );
        assert_eq!(body["sign"], json!(""));
        assert_eq!(body["ext"], json!("order-7"));
        assert_eq!(body["tpl_id"], json!(42));
        assert_eq!(body["sig"], json!(expected_sig("13800000001,13800000002")));
    }

    #[tokio::test]
    async fn domestic_template_shortcuts_use_china_and_sign() {
        let transport = FakeTransport::new(200, OK_SINGLE);
        let client = make_client(transport.clone());

        client
            .send_sms_with_sign_and_param(7, "13800000000", "Acme", vec!["9".to_owned()])
            .await
            .unwrap();
        let (_, body) = transport.last_request();
        assert_eq!(body["tel"]["nationcode"], json!("86"));
        assert_eq!(body["sign"], json!("Acme"));
        assert_eq!(body["params"], json!(["9"]));

        client
            .send_sms_with_param(7, "13800000000", Vec::new())
            .await
            .unwrap();
        let (_, body) = transport.last_request();
        assert_eq!(body["sign"], json!(""));
        assert_eq!(body["params"], json!([]));
    }

    #[tokio::test]
    async fn provider_error_is_returned_as_ok_result() {
        let transport = FakeTransport::new(200, r#"{"result": 1001, "errmsg": "sig error"}"#);
        let client = make_client(transport);

        let result = client
            .send_normal_sms("13800000000", "hello")
            .await
            .unwrap();
        assert_eq!(result.result.as_i32(), 1001);
        assert_eq!(result.errmsg, "sig error");
    }

    #[tokio::test]
    async fn invalid_json_on_200_is_parse_error() {
        let transport = FakeTransport::new(200, "{ not json }");
        let client = make_client(transport);

        let err = client
            .send_normal_sms("13800000000", "hello")
            .await
            .unwrap_err();
        assert!(matches!(err, SmsError::Parse(_)));
    }

    #[tokio::test]
    async fn out_of_range_nonce_is_rejected() {
        let transport = FakeTransport::new(200, OK_SINGLE);
        let mut client = make_client(transport.clone());
        client.env = Arc::new(FixedSigningEnv {
            sms_nonce: 42,
            ..ENV
        });

        let err = client
            .send_normal_sms("13800000000", "hello")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SmsError::Validation(ValidationError::NonceOutOfRange { actual: 42, .. })
        ));
        assert_eq!(transport.calls(), 0);
    }

    #[test]
    fn credentials_validate_app_key() {
        assert!(SmsCredentials::new(1, "").is_err());
        assert_eq!(
            SmsCredentials::new(1_400_000_000, "k").unwrap().app_id(),
            SdkAppId::new(1_400_000_000)
        );
    }

    #[test]
    fn builder_endpoint_overrides_are_applied() {
        let creds = SmsCredentials::new(1, "key").unwrap();

        let client = SmsSender::builder(creds.clone())
            .endpoint_base("https://example.invalid/v5/tlssmssvr/")
            .build()
            .unwrap();
        assert_eq!(
            client.send_endpoint,
            "https://example.invalid/v5/tlssmssvr/sendsms"
        );
        assert_eq!(
            client.multi_send_endpoint,
            "https://example.invalid/v5/tlssmssvr/sendmultisms2"
        );

        let client = SmsSender::builder(creds.clone())
            .send_endpoint("https://example.invalid/one")
            .multi_send_endpoint("https://example.invalid/many")
            .timeout(Duration::from_secs(5))
            .user_agent("qcloud-test")
            .build()
            .unwrap();
        assert_eq!(client.send_endpoint, "https://example.invalid/one");
        assert_eq!(client.multi_send_endpoint, "https://example.invalid/many");

        let err = SmsSender::builder(creds)
            .send_endpoint("not a url")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SmsError::InvalidEndpoint(_)));
    }
}
