use sha2::{Digest, Sha256};

use crate::domain::{AppKey, MobileNumber, Nonce, UnixTime};

/// Build the string that SMS requests are signed over:
///
/// `appkey=<key>&random=<nonce>&time=<time>&mobile=<m1>,<m2>,...`
///
/// Field order is fixed and nothing is escaped. Mobiles are joined in the given order.
pub fn sms_canonical_string<'a, I>(
    app_key: &AppKey,
    nonce: Nonce,
    time: UnixTime,
    mobiles: I,
) -> String
where
    I: IntoIterator<Item = &'a MobileNumber>,
{
    let mobiles = mobiles
        .into_iter()
        .map(MobileNumber::as_str)
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "{}={}&{}={}&{}={}&{}={}",
        AppKey::FIELD,
        app_key.as_str(),
        Nonce::FIELD,
        nonce,
        UnixTime::FIELD,
        time,
        MobileNumber::FIELD,
        mobiles
    )
}

/// Lowercase hex SHA-256 of [`sms_canonical_string`] (`sig`).
///
/// Freeform and template sends use the same signature.
pub fn sms_signature<'a, I>(app_key: &AppKey, nonce: Nonce, time: UnixTime, mobiles: I) -> String
where
    I: IntoIterator<Item = &'a MobileNumber>,
{
    let canonical = sms_canonical_string(app_key, nonce, time, mobiles);
    hex::encode(Sha256::digest(canonical.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(value: &str) -> AppKey {
        AppKey::new(value).unwrap()
    }

    fn mobiles(values: &[&str]) -> Vec<MobileNumber> {
        values
            .iter()
            .map(|it| MobileNumber::new(*it))
            .collect()
    }

    #[test]
    fn canonical_string_has_fixed_field_order() {
        let canonical = sms_canonical_string(
            &key("k&=y"),
            Nonce::new(123_456).unwrap(),
            UnixTime::new(42),
            &mobiles(&["1", "2"]),
        );
        assert_eq!(canonical, "appkey=k&=y&random=123456&time=42&mobile=1,2");
    }

    #[test]
    fn signature_matches_known_digest() {
        let sig = sms_signature(
            &key("test"),
            Nonce::new(654_321).unwrap(),
            UnixTime::new(1_500_000_000),
            &mobiles(&["13800000000"]),
        );
        let expected = hex::encode(Sha256::digest(
            b"appkey=test&random=654321&time=1500000000&mobile=13800000000",
        ));
        assert_eq!(sig, expected);
    }

    #[test]
    fn signature_is_lowercase_hex_and_deterministic() {
        let numbers = mobiles(&["13800000000"]);
        let nonce = Nonce::new(100_000).unwrap();
        let time = UnixTime::new(1_600_000_000);

        let first = sms_signature(&key("abc"), nonce, time, &numbers);
        let second = sms_signature(&key("abc"), nonce, time, &numbers);
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(
            first
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn signature_depends_on_recipient_order() {
        let nonce = Nonce::new(555_555).unwrap();
        let time = UnixTime::new(1_500_000_000);

        let forward = sms_signature(&key("k"), nonce, time, &mobiles(&["1", "2", "3"]));
        let reversed = sms_signature(&key("k"), nonce, time, &mobiles(&["3", "2", "1"]));
        assert_ne!(forward, reversed);
    }

    #[test]
    fn single_number_batch_signs_like_single_send() {
        let nonce = Nonce::new(555_555).unwrap();
        let time = UnixTime::new(1_500_000_000);
        let numbers = mobiles(&["13800000000"]);

        let single = sms_signature(&key("k"), nonce, time, std::iter::once(&numbers[0]));
        let batch = sms_signature(&key("k"), nonce, time, &numbers);
        assert_eq!(single, batch);
    }
}
