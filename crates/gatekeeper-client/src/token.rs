//! Bearer credential helpers: the three-segment shape check and the debug placeholder.

use base64::{Engine as _, engine::general_purpose};
use chrono::Utc;
use serde::Serialize;

const DEBUG_TOKEN_LIFETIME_SECS: i64 = 3600;
const DEBUG_SIGNATURE: &str = "debug-signature";

#[derive(Serialize)]
struct Header {
    alg: &'static str,
    typ: &'static str,
}

#[derive(Serialize)]
struct Claims {
    sub: &'static str,
    iat: i64,
    exp: i64,
    scope: &'static str,
}

/// Superficial JWT check: three dot-separated segments.
pub fn looks_like_jwt(token: &str) -> bool {
    token.split('.').count() == 3
}

/// Unsigned placeholder credential valid for one hour from `issued_at` (unix seconds).
///
/// The signature segment is a fixed marker; nothing verifies it client-side.
pub fn debug_token_at(issued_at: i64) -> String {
    let header = encode_segment(&Header {
        alg: "HS256",
        typ: "JWT",
    });
    let claims = encode_segment(&Claims {
        sub: "test-user",
        iat: issued_at,
        exp: issued_at + DEBUG_TOKEN_LIFETIME_SECS,
        scope: "phone-check",
    });
    format!("{header}.{claims}.{DEBUG_SIGNATURE}")
}

fn encode_segment<T: Serialize>(value: &T) -> String {
    // Cannot fail for string and integer fields.
    let json = serde_json::to_vec(value).unwrap_or_default();
    general_purpose::STANDARD.encode(json)
}

pub fn debug_token() -> String {
    debug_token_at(Utc::now().timestamp())
}
