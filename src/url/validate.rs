/// Request-URI validation
///
/// Accepts what an HTTP request line may carry: an absolute URI, an absolute
/// path, or `*`. Relative references such as `news/1` are rejected.

/// Returns true if `candidate` is a syntactically valid request URI
///
/// # Rules
///
/// | Input | Result |
/// |-------|--------|
/// | empty, or contains an ASCII control byte | invalid |
/// | `*` | valid |
/// | `scheme:opaque` (e.g. `mailto:a@b.c`) | valid |
/// | `scheme://authority/path` | valid if the authority is well formed |
/// | `/absolute/path` | valid |
/// | `relative/path`, `:no-scheme` | invalid |
///
/// Percent-escapes in the path and host must be followed by two hex digits.
///
/// # Examples
///
/// ```
/// use gnawer::url::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/news?page=2"));
/// assert!(is_valid_url("/news/1"));
/// assert!(!is_valid_url("news/1"));
/// assert!(!is_valid_url("http://example.com:port/"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    if candidate.is_empty() || candidate.bytes().any(|b| b < 0x20 || b == 0x7f) {
        return false;
    }

    if candidate == "*" {
        return true;
    }

    let (scheme, rest) = match split_scheme(candidate) {
        Some(parts) => parts,
        None => return false,
    };

    // A single trailing '?' forces an empty query; otherwise cut at the first one
    let rest = match rest.find('?') {
        Some(i) => &rest[..i],
        None => rest,
    };

    if !rest.starts_with('/') {
        // `scheme:opaque` is acceptable, a bare relative path is not
        return scheme.is_some();
    }

    let path = if let (Some(_), Some(after)) = (scheme, rest.strip_prefix("//")) {
        let (authority, path) = match after.find('/') {
            Some(i) => after.split_at(i),
            None => (after, ""),
        };
        if !valid_authority(authority) {
            return false;
        }
        path
    } else {
        rest
    };

    valid_escapes(path)
}

/// Splits off a leading `scheme:`
///
/// Returns `None` when the input starts with ':' (a missing scheme), and
/// `Some((None, input))` when there is no scheme at all.
fn split_scheme(input: &str) -> Option<(Option<&str>, &str)> {
    for (i, b) in input.bytes().enumerate() {
        match b {
            b'a'..=b'z' | b'A'..=b'Z' => {}
            b'0'..=b'9' | b'+' | b'-' | b'.' => {
                if i == 0 {
                    return Some((None, input));
                }
            }
            b':' => {
                if i == 0 {
                    return None;
                }
                return Some((Some(&input[..i]), &input[i + 1..]));
            }
            _ => return Some((None, input)),
        }
    }
    Some((None, input))
}

fn valid_authority(authority: &str) -> bool {
    let (userinfo, host) = match authority.rfind('@') {
        Some(i) => (Some(&authority[..i]), &authority[i + 1..]),
        None => (None, authority),
    };

    if !valid_host(host) {
        return false;
    }

    match userinfo {
        Some(info) => valid_userinfo(info) && valid_escapes(info),
        None => true,
    }
}

fn valid_host(host: &str) -> bool {
    if host.starts_with('[') {
        // IPv6 literal, optionally followed by a port
        match host.rfind(']') {
            Some(i) => {
                if !valid_optional_port(&host[i + 1..]) {
                    return false;
                }
            }
            None => return false,
        }
    } else if let Some(i) = host.rfind(':') {
        if !valid_optional_port(&host[i..]) {
            return false;
        }
    }

    host.bytes().all(|b| b >= 0x80 || valid_host_byte(b)) && valid_host_escapes(host)
}

/// Hosts may only escape non-ASCII bytes, plus `%25` for IPv6 zones
fn valid_host_escapes(host: &str) -> bool {
    if !valid_escapes(host) {
        return false;
    }
    host.match_indices('%').all(|(i, _)| {
        let escape = &host[i..i + 3];
        escape == "%25" || matches!(escape.as_bytes()[1], b'8'..=b'9' | b'a'..=b'f' | b'A'..=b'F')
    })
}

fn valid_host_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'-' | b'_'
                | b'.'
                | b'~'
                | b'!'
                | b'$'
                | b'&'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b'+'
                | b','
                | b';'
                | b'='
                | b':'
                | b'['
                | b']'
                | b'<'
                | b'>'
                | b'"'
                | b'%'
        )
}

/// Empty, or ':' followed by digits only
fn valid_optional_port(port: &str) -> bool {
    if port.is_empty() {
        return true;
    }
    match port.strip_prefix(':') {
        Some(digits) => digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

fn valid_userinfo(info: &str) -> bool {
    info.bytes().all(|b| {
        b.is_ascii_alphanumeric()
            || matches!(
                b,
                b'-' | b'.'
                    | b'_'
                    | b':'
                    | b'~'
                    | b'!'
                    | b'$'
                    | b'&'
                    | b'\''
                    | b'('
                    | b')'
                    | b'*'
                    | b'+'
                    | b','
                    | b';'
                    | b'='
                    | b'%'
                    | b'@'
            )
    })
}

/// Every '%' must start a two-digit hex escape
fn valid_escapes(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some([a, b]) if a.is_ascii_hexdigit() && b.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}
