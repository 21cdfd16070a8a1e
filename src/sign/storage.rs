use std::fmt;
use std::sync::Arc;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sha1::Sha1;

use super::{SigningEnv, SystemSigningEnv};

/// Token returned when the secret id or secret key is missing.
pub const STORAGE_SIGNATURE_UNAVAILABLE: &str = "-1";

/// Everything except RFC 3986 unreserved characters is escaped inside a path segment.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

type HmacSha1 = Hmac<Sha1>;

/// Storage (COS) signing credentials.
///
/// Empty secrets are accepted; signing with them yields [`STORAGE_SIGNATURE_UNAVAILABLE`].
#[derive(Clone, PartialEq, Eq)]
pub struct StorageCredentials {
    pub app_id: u64,
    pub secret_id: String,
    pub secret_key: String,
}

impl StorageCredentials {
    pub fn new(app_id: u64, secret_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            app_id,
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl fmt::Debug for StorageCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageCredentials")
            .field("app_id", &self.app_id)
            .field("secret_id", &self.secret_id)
            .field("secret_key", &"***")
            .finish()
    }
}

/// Signs storage access tokens with a fixed set of credentials.
#[derive(Clone)]
pub struct StorageSigner {
    credentials: StorageCredentials,
    env: Arc<dyn SigningEnv>,
}

impl StorageSigner {
    pub fn new(credentials: StorageCredentials) -> Self {
        Self::with_env(credentials, Arc::new(SystemSigningEnv))
    }

    pub fn with_env(credentials: StorageCredentials, env: Arc<dyn SigningEnv>) -> Self {
        Self { credentials, env }
    }

    /// Multi-use token for a bucket, valid until `expired_at` (unix seconds).
    pub fn sign(&self, expired_at: i64, bucket_name: &str) -> String {
        compute_storage_signature(
            self.env.as_ref(),
            &self.credentials,
            expired_at,
            "",
            bucket_name,
        )
    }

    /// Single-use token bound to one object.
    pub fn sign_once(&self, remote_path: &str, bucket_name: &str) -> String {
        let file_id = format!(
            "/{}/{}{}",
            self.credentials.app_id,
            bucket_name,
            encode_remote_path(remote_path)
        );
        compute_storage_signature(
            self.env.as_ref(),
            &self.credentials,
            0,
            &file_id,
            bucket_name,
        )
    }
}

/// Multi-use storage token using the system clock and RNG.
pub fn storage_signature(
    app_id: u64,
    secret_id: &str,
    secret_key: &str,
    expired_at: i64,
    bucket_name: &str,
) -> String {
    StorageSigner::new(StorageCredentials::new(app_id, secret_id, secret_key))
        .sign(expired_at, bucket_name)
}

/// Single-use storage token using the system clock and RNG.
pub fn storage_signature_once(
    app_id: u64,
    secret_id: &str,
    secret_key: &str,
    remote_path: &str,
    bucket_name: &str,
) -> String {
    StorageSigner::new(StorageCredentials::new(app_id, secret_id, secret_key))
        .sign_once(remote_path, bucket_name)
}

/// Compute a storage capability token.
///
/// The plaintext is `a=<app_id>&k=<secret_id>&e=<expired_at>&t=<now>&r=<rand>&f=<file_id>&b=<bucket>`.
/// The token is `base64(hmac_sha1(secret_key, plaintext) || plaintext)`.
pub fn compute_storage_signature(
    env: &dyn SigningEnv,
    credentials: &StorageCredentials,
    expired_at: i64,
    file_id: &str,
    bucket_name: &str,
) -> String {
    if credentials.secret_id.is_empty() || credentials.secret_key.is_empty() {
        tracing::debug!(
            app_id = credentials.app_id,
            "storage signing skipped: missing secret id or secret key"
        );
        return STORAGE_SIGNATURE_UNAVAILABLE.to_owned();
    }

    let plaintext = format!(
        "a={}&k={}&e={}&t={}&r={}&f={}&b={}",
        credentials.app_id,
        credentials.secret_id,
        expired_at,
        env.now(),
        env.storage_nonce(),
        file_id,
        bucket_name
    );

    // SAFETY: HMAC can take a key of any size.
    let mut mac = HmacSha1::new_from_slice(credentials.secret_key.as_bytes()).unwrap();
    mac.update(plaintext.as_bytes());
    let hash = mac.finalize().into_bytes();

    let mut token = Vec::with_capacity(hash.len() + plaintext.len());
    token.extend_from_slice(&hash);
    token.extend_from_slice(plaintext.as_bytes());
    BASE64_STANDARD.encode(token)
}

/// Percent-encode an object path for use in a file id.
///
/// Empty segments are dropped, each remaining segment is escaped, a leading `/` is
/// ensured and a trailing `/` is kept.
pub fn encode_remote_path(remote_path: &str) -> String {
    if remote_path == "/" {
        return remote_path.to_owned();
    }

    let encoded = remote_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string())
        .collect::<Vec<_>>()
        .join("/");

    let trailing = if remote_path.ends_with('/') { "/" } else { "" };
    format!("/{encoded}{trailing}")
}
