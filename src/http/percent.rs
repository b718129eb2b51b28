//! Percent codec for request paths and listing links
//!
//! Decoding is lenient: invalid escape sequences pass through literally,
//! matching what browsers and common dev tooling expect from a local
//! file server.

/// Decode percent-escapes in a request path.
///
/// Invalid sequences (`%`, `%2`, `%zz`) are kept as-is. Decoded bytes that
/// do not form valid UTF-8 are replaced lossily; such paths will simply
/// not match any file.
pub fn decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi * 16 + lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

/// Percent-encode a path for use in an href.
///
/// Unreserved characters and `/` stay literal; everything else, including
/// non-ASCII bytes, is escaped.
pub fn encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for &byte in input.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push(char::from_digit(u32::from(byte >> 4), 16).unwrap_or('0').to_ascii_uppercase());
                out.push(char::from_digit(u32::from(byte & 0x0f), 16).unwrap_or('0').to_ascii_uppercase());
            }
        }
    }

    out
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_basic() {
        assert_eq!(decode("/index.html"), "/index.html");
        assert_eq!(decode("/my%20file.txt"), "/my file.txt");
        assert_eq!(decode("/%41%42%43"), "/ABC");
    }

    #[test]
    fn test_decode_invalid_sequences_preserved() {
        assert_eq!(decode("/100%"), "/100%");
        assert_eq!(decode("/a%2"), "/a%2");
        assert_eq!(decode("/a%zzb"), "/a%zzb");
    }

    #[test]
    fn test_decode_encoded_traversal_visible() {
        // Decoding happens before path sanitation, so encoded dots must
        // come out as literal dots for the sanitizer to catch.
        assert_eq!(decode("/%2e%2e/secret"), "/../secret");
    }

    #[test]
    fn test_encode_basic() {
        assert_eq!(encode("file.txt"), "file.txt");
        assert_eq!(encode("my file.txt"), "my%20file.txt");
        assert_eq!(encode("a&b?c"), "a%26b%3Fc");
    }

    #[test]
    fn test_encode_non_ascii() {
        assert_eq!(encode("ü"), "%C3%BC");
    }

    #[test]
    fn test_roundtrip() {
        let original = "dir/some file (1).txt";
        assert_eq!(decode(&encode(original)), original);
    }
}
