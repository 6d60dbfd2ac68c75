//! AWS Signature Version 4 request signing
//!
//! Implements the header-based variant: canonical request → string to sign
//! → HMAC-SHA256 with a key derived from the secret, date, region and
//! service.

use super::credentials::AwsCredentials;
use chrono::{DateTime, Utc};
use ring::hmac;
use sha2::{Digest, Sha256};

/// Signing algorithm identifier
pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Lowercase hex SHA-256 of `data`
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let key = hmac::Key::new(hmac::HMAC_SHA256, key);
    hmac::sign(&key, data).as_ref().to_vec()
}

/// Derive the per-day, per-service signing key.
pub fn signing_key(secret: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    let k_date = hmac_sha256(format!("AWS4{}", secret).as_bytes(), date.as_bytes());
    let k_region = hmac_sha256(&k_date, region.as_bytes());
    let k_service = hmac_sha256(&k_region, service.as_bytes());
    hmac_sha256(&k_service, b"aws4_request")
}

/// Percent-encode an object key for the canonical URI, one path segment at
/// a time so `/` separators survive.
pub fn encode_path(key: &str) -> String {
    key.split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/")
}

/// Canonical request text plus its signed header list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    pub text: String,
    pub signed_headers: String,
}

/// Build the canonical request.
///
/// Header names are lowercased and sorted; values are trimmed with inner
/// whitespace runs collapsed.
pub fn canonical_request(
    method: &str,
    canonical_uri: &str,
    canonical_query: &str,
    headers: &[(&str, &str)],
    payload_hash: &str,
) -> CanonicalRequest {
    let mut normalized: Vec<(String, String)> = headers
        .iter()
        .map(|(name, value)| {
            (
                name.to_ascii_lowercase(),
                value.split_whitespace().collect::<Vec<_>>().join(" "),
            )
        })
        .collect();
    normalized.sort();

    let canonical_headers: String = normalized
        .iter()
        .map(|(name, value)| format!("{}:{}\n", name, value))
        .collect();
    let signed_headers = normalized
        .iter()
        .map(|(name, _)| name.as_str())
        .collect::<Vec<_>>()
        .join(";");

    let text = format!(
        "{}\n{}\n{}\n{}\n{}\n{}",
        method, canonical_uri, canonical_query, canonical_headers, signed_headers, payload_hash
    );

    CanonicalRequest {
        text,
        signed_headers,
    }
}

/// `date/region/service/aws4_request`
pub fn credential_scope(date: &str, region: &str, service: &str) -> String {
    format!("{}/{}/{}/aws4_request", date, region, service)
}

/// The string that gets HMAC-signed
pub fn string_to_sign(amz_date: &str, scope: &str, canonical_request: &str) -> String {
    format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        amz_date,
        scope,
        sha256_hex(canonical_request.as_bytes())
    )
}

/// Hex signature of `string_to_sign`
pub fn signature(secret: &str, date: &str, region: &str, service: &str, string_to_sign: &str) -> String {
    let key = signing_key(secret, date, region, service);
    hex::encode(hmac_sha256(&key, string_to_sign.as_bytes()))
}

/// Signs requests for one service in one region
pub struct Signer<'a> {
    credentials: &'a AwsCredentials,
    region: &'a str,
    service: &'a str,
}

impl<'a> Signer<'a> {
    /// Create a signer
    pub fn new(credentials: &'a AwsCredentials, region: &'a str, service: &'a str) -> Self {
        Self {
            credentials,
            region,
            service,
        }
    }

    /// Sign a request and return the headers to attach.
    ///
    /// `host` is signed but not returned; the HTTP client derives it from
    /// the URL. `extra_headers` are signed and returned.
    #[allow(clippy::too_many_arguments)]
    pub fn sign(
        &self,
        method: &str,
        host: &str,
        canonical_uri: &str,
        canonical_query: &str,
        extra_headers: &[(&str, &str)],
        payload: &[u8],
        now: DateTime<Utc>,
    ) -> Vec<(String, String)> {
        let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
        let date = now.format("%Y%m%d").to_string();
        let payload_hash = sha256_hex(payload);

        let mut headers: Vec<(&str, &str)> = vec![
            ("host", host),
            ("x-amz-content-sha256", payload_hash.as_str()),
            ("x-amz-date", amz_date.as_str()),
        ];
        if let Some(token) = self.credentials.session_token() {
            headers.push(("x-amz-security-token", token));
        }
        headers.extend_from_slice(extra_headers);

        let canonical = canonical_request(
            method,
            canonical_uri,
            canonical_query,
            &headers,
            &payload_hash,
        );
        let scope = credential_scope(&date, self.region, self.service);
        let to_sign = string_to_sign(&amz_date, &scope, &canonical.text);
        let signature = signature(
            self.credentials.secret_access_key(),
            &date,
            self.region,
            self.service,
            &to_sign,
        );

        let authorization = format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            ALGORITHM,
            self.credentials.access_key_id(),
            scope,
            canonical.signed_headers,
            signature
        );

        let mut signed: Vec<(String, String)> = headers
            .into_iter()
            .filter(|(name, _)| !name.eq_ignore_ascii_case("host"))
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        signed.push(("authorization".to_string(), authorization));
        signed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const EXAMPLE_SECRET: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";
    const EMPTY_HASH: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn test_sha256_hex_empty() {
        assert_eq!(sha256_hex(b""), EMPTY_HASH);
    }

    #[test]
    fn test_signing_key_reference_vector() {
        let key = signing_key(EXAMPLE_SECRET, "20120215", "us-east-1", "iam");
        assert_eq!(
            hex::encode(key),
            "f4780e2d9f65fa895f9c67b32ce1baf0b0d8a43505a000a1a9e090d414db404d"
        );
    }

    #[test]
    fn test_list_users_reference_signature() {
        let canonical = canonical_request(
            "GET",
            "/",
            "Action=ListUsers&Version=2010-05-08",
            &[
                ("Host", "iam.amazonaws.com"),
                ("Content-Type", "application/x-www-form-urlencoded; charset=utf-8"),
                ("X-Amz-Date", "20150830T123600Z"),
            ],
            EMPTY_HASH,
        );
        assert_eq!(canonical.signed_headers, "content-type;host;x-amz-date");
        assert_eq!(
            sha256_hex(canonical.text.as_bytes()),
            "f536975d06c0309214f805bb90ccff089219ecd68b2577efef23edd43b7e1a59"
        );

        let scope = credential_scope("20150830", "us-east-1", "iam");
        let to_sign = string_to_sign("20150830T123600Z", &scope, &canonical.text);
        assert_eq!(
            signature(EXAMPLE_SECRET, "20150830", "us-east-1", "iam", &to_sign),
            "5d672d79c15b13162d9279b0855cfba6789a8edb4c82c400e06b5924a6f2b5d7"
        );
    }

    #[test]
    fn test_encode_path() {
        assert_eq!(encode_path("d2/today.json"), "d2/today.json");
        assert_eq!(encode_path("a b+c~"), "a%20b%2Bc~");
        assert_eq!(encode_path("d2/a b/c&d.json"), "d2/a%20b/c%26d.json");
    }

    #[test]
    fn test_canonical_headers_collapse_whitespace() {
        let canonical = canonical_request("GET", "/", "", &[("X-Test", "  a   b  ")], EMPTY_HASH);
        assert!(canonical.text.contains("x-test:a b\n"));
    }

    #[test]
    fn test_signer_headers() {
        let credentials = AwsCredentials::new("AKIDEXAMPLE", EXAMPLE_SECRET, Some("session".to_string()));
        let signer = Signer::new(&credentials, "us-east-1", "s3");
        let now = Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0).unwrap();

        let headers = signer.sign(
            "PUT",
            "bucket.s3.us-east-1.amazonaws.com",
            "/d2/today.json",
            "",
            &[("content-type", "application/json")],
            b"[]",
            now,
        );

        let get = |name: &str| {
            headers
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str())
        };
        assert!(get("host").is_none());
        assert_eq!(get("x-amz-date"), Some("20150830T123600Z"));
        assert_eq!(get("x-amz-security-token"), Some("session"));
        assert_eq!(get("x-amz-content-sha256"), Some(sha256_hex(b"[]").as_str()));

        let authorization = get("authorization").unwrap();
        assert!(authorization.starts_with(
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/s3/aws4_request, "
        ));
        assert!(authorization.contains(
            "SignedHeaders=content-type;host;x-amz-content-sha256;x-amz-date;x-amz-security-token, "
        ));
    }
}
