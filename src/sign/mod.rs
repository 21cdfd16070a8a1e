//! Signing layer: request signatures and storage capability tokens (no I/O).
//!
//! Both schemes depend on the current time and on a random number. These are read
//! through [`SigningEnv`] so that signatures can be reproduced exactly in tests.

mod sms;
mod storage;

pub use sms::{sms_canonical_string, sms_signature};
pub use storage::{
    STORAGE_SIGNATURE_UNAVAILABLE, StorageCredentials, StorageSigner, compute_storage_signature,
    encode_remote_path, storage_signature, storage_signature_once,
};

use rand::Rng;

use crate::domain::Nonce;

/// Source of the wall clock and of the random numbers mixed into signatures.
pub trait SigningEnv: Send + Sync {
    /// Current unix time in seconds.
    fn now(&self) -> i64;

    /// Random number for SMS requests, expected in `100000..=999999`.
    fn sms_nonce(&self) -> u32;

    /// Random number for storage tokens, in `0..i32::MAX`.
    fn storage_nonce(&self) -> u32;
}

/// Reads the system clock and the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSigningEnv;

impl SigningEnv for SystemSigningEnv {
    fn now(&self) -> i64 {
        time::OffsetDateTime::now_utc().unix_timestamp()
    }

    fn sms_nonce(&self) -> u32 {
        rand::rng().random_range(Nonce::MIN..=Nonce::MAX)
    }

    fn storage_nonce(&self) -> u32 {
        rand::rng().random_range(0..i32::MAX as u32)
    }
}

/// Returns the same values on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSigningEnv {
    pub now: i64,
    pub sms_nonce: u32,
    pub storage_nonce: u32,
}

impl SigningEnv for FixedSigningEnv {
    fn now(&self) -> i64 {
        self.now
    }

    fn sms_nonce(&self) -> u32 {
        self.sms_nonce
    }

    fn storage_nonce(&self) -> u32 {
        self.storage_nonce
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_env_draws_nonces_in_range() {
        let env = SystemSigningEnv;
        for _ in 0..1_000 {
            let nonce = env.sms_nonce();
            assert!((Nonce::MIN..=Nonce::MAX).contains(&nonce), "{nonce}");
            assert!(env.storage_nonce() < i32::MAX as u32);
        }
    }

    #[test]
    fn system_env_clock_is_after_2017() {
        assert!(SystemSigningEnv.now() > 1_500_000_000);
    }
}
