use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use subtle::ConstantTimeEq;

use crate::AppState;

/// HTTP Basic gate for the admin console. Open when no credentials are
/// configured, which is the local-development default.
pub async fn admin_auth(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let Some(credentials) = &state.admin_credentials else {
        return next.run(req).await;
    };
    let (user, password) = credentials.as_ref();

    let authorized = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Basic "))
        .is_some_and(|encoded| credentials_match(encoded, user, password));

    if authorized {
        return next.run(req).await;
    }

    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, r#"Basic realm="Admin""#)],
        "Unauthorized",
    )
        .into_response()
}

fn credentials_match(encoded: &str, user: &str, password: &str) -> bool {
    let Ok(decoded) = BASE64.decode(encoded) else {
        return false;
    };
    let Ok(decoded) = String::from_utf8(decoded) else {
        return false;
    };
    let Some((u, p)) = decoded.split_once(':') else {
        return false;
    };

    bool::from(u.as_bytes().ct_eq(user.as_bytes()) & p.as_bytes().ct_eq(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD, Engine};

    #[test]
    fn matches_exact_credentials_only() {
        let encoded = STANDARD.encode("admin:s3cret");
        assert!(credentials_match(&encoded, "admin", "s3cret"));
        assert!(!credentials_match(&encoded, "admin", "other"));
        assert!(!credentials_match(&encoded, "root", "s3cret"));
    }

    #[test]
    fn rejects_malformed_headers() {
        assert!(!credentials_match("not base64!", "admin", "s3cret"));
        let no_colon = STANDARD.encode("admins3cret");
        assert!(!credentials_match(&no_colon, "admin", "s3cret"));
    }

    #[test]
    fn password_may_contain_colons() {
        let encoded = STANDARD.encode("admin:a:b:c");
        assert!(credentials_match(&encoded, "admin", "a:b:c"));
    }
}
