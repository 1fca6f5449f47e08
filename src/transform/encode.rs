use url::form_urlencoded;

/// Percent-encode `value` for embedding inside another URL.
///
/// Uses `application/x-www-form-urlencoded` rules: ASCII alphanumerics and
/// `*-._` pass through, space becomes `+`, every other UTF-8 byte is escaped
/// as `%XX`.
pub fn url_encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// True when the string is present and non-empty
pub fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_characters_are_escaped() {
        assert_eq!(
            url_encode("http://a.com/p?q=1&r=2"),
            "http%3A%2F%2Fa.com%2Fp%3Fq%3D1%26r%3D2"
        );
        assert_eq!(url_encode("a#b+c%d"), "a%23b%2Bc%25d");
    }

    #[test]
    fn test_unreserved_characters_pass_through() {
        assert_eq!(url_encode("Az09-_.*"), "Az09-_.*");
        assert_eq!(url_encode(""), "");
    }

    #[test]
    fn test_space_and_non_ascii() {
        assert_eq!(url_encode("a b"), "a+b");
        assert_eq!(url_encode("ü"), "%C3%BC");
        assert_eq!(url_encode("~"), "%7E");
    }

    #[test]
    fn test_is_set() {
        assert!(is_set(Some("x")));
        assert!(!is_set(Some("")));
        assert!(!is_set(None));
    }
}
