use crate::config::LinkResolution;
use crate::url::validate::is_valid_url;
use url::Url;

/// Resolves an `href` found on a listing page into a URL worth fetching
///
/// # Modes
///
/// - [`LinkResolution::Selector`]: a valid request URI is used as-is;
///   anything else is joined as a path onto `link_selector` (the task's link
///   selector string) and re-validated. Most relative hrefs do not survive
///   this and are dropped.
/// - [`LinkResolution::Page`]: the href is resolved against `page_url` and
///   kept only if it is an HTTP(S) URL.
///
/// Returns `None` when the candidate should be skipped.
pub fn resolve_link(
    href: &str,
    link_selector: &str,
    page_url: &Url,
    mode: LinkResolution,
) -> Option<String> {
    match mode {
        LinkResolution::Selector => {
            if is_valid_url(href) {
                return Some(href.to_string());
            }
            let joined = join_path(link_selector, href);
            is_valid_url(&joined).then_some(joined)
        }
        LinkResolution::Page => resolve_against_page(href, page_url),
    }
}

/// Resolves a link against the page it was found on
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - fragment-only links
/// - Non-HTTP(S) URLs after resolution
fn resolve_against_page(href: &str, page_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    match page_url.join(href) {
        Ok(absolute_url) => {
            if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
                Some(absolute_url.to_string())
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

/// Joins two slash-separated paths and cleans the result
///
/// Empty elements are ignored; if both are empty the result is empty.
pub fn join_path(base: &str, path: &str) -> String {
    let parts: Vec<&str> = [base, path].into_iter().filter(|p| !p.is_empty()).collect();
    if parts.is_empty() {
        return String::new();
    }
    clean_path(&parts.join("/"))
}

/// Lexically cleans a slash-separated path
///
/// # Rules
///
/// 1. Repeated slashes collapse to one
/// 2. `.` segments are removed
/// 3. `..` removes the preceding segment; at the root of a rooted path it is
///    dropped, in a relative path with nothing to remove it is kept
/// 4. Trailing slashes are removed (except for the root `/`)
/// 5. An empty result becomes `.`
pub fn clean_path(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !rooted {
                    segments.push("..");
                }
            }
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    if rooted {
        format!("/{}", joined)
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}
