use axum::http::{header::COOKIE, HeaderMap, HeaderValue};
use uuid::Uuid;

/// Finds the session id cookie. Values that are not UUIDs are ignored so a
/// forged cookie cannot pick an arbitrary store key.
pub fn session_id_from_headers(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .and_then(|(_, v)| Uuid::parse_str(v.trim()).ok())
        .map(|id| id.to_string())
}

/// `Set-Cookie` value binding the browser to a session.
pub fn session_cookie(name: &str, id: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!("{name}={id}; Path=/; HttpOnly; SameSite=Lax")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(cookie: &str) -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(COOKIE, cookie.parse().unwrap());
        h
    }

    #[test]
    fn test_finds_named_cookie_among_others() {
        let id = Uuid::new_v4().to_string();
        let h = headers(&format!("theme=dark; sid={id}; lang=en"));
        assert_eq!(session_id_from_headers(&h, "sid"), Some(id));
    }

    #[test]
    fn test_rejects_non_uuid_value() {
        let h = headers("sid=../../etc/passwd");
        assert_eq!(session_id_from_headers(&h, "sid"), None);
    }

    #[test]
    fn test_absent_cookie() {
        assert_eq!(session_id_from_headers(&HeaderMap::new(), "sid"), None);
        assert_eq!(session_id_from_headers(&headers("other=1"), "sid"), None);
    }

    #[test]
    fn test_set_cookie_attributes() {
        let value = session_cookie("sid", "abc").unwrap();
        assert_eq!(value.to_str().unwrap(), "sid=abc; Path=/; HttpOnly; SameSite=Lax");
    }
}
