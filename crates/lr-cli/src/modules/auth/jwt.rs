use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Deserialize;

/// Subset of the JWT payload the CLI inspects. Tokens are never verified
/// locally; the server stays the authority on validity.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Claims {
    pub(crate) exp: Option<i64>,
    pub(crate) user_id: Option<i64>,
}

pub(crate) fn decode_claims(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let payload = match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return None,
    };
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload);
        format!("{header}.{body}.signature")
    }

    #[test]
    fn decodes_exp_and_user_id() {
        let token = token_with_payload(r#"{"exp":1900000000,"user_id":7}"#);
        let claims = decode_claims(&token).expect("claims");
        assert_eq!(claims.exp, Some(1900000000));
        assert_eq!(claims.user_id, Some(7));
    }

    #[test]
    fn tolerates_missing_fields() {
        let token = token_with_payload(r#"{"token_type":"access"}"#);
        let claims = decode_claims(&token).expect("claims");
        assert_eq!(claims.exp, None);
        assert_eq!(claims.user_id, None);
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(decode_claims("not-a-jwt").is_none());
        assert!(decode_claims("only.two").is_none());
        assert!(decode_claims("one.two.three.four").is_none());
        assert!(decode_claims("a.!!!.c").is_none());
    }
}
