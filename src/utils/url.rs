//! URL helpers for EULA documents and share links.

use crate::config::{EULA_PLAIN_SUFFIX, SHARE_QUERY_PARAM};

/// Split an absolute URL into `(origin, rest)`.
///
/// `"https://host:8080/a/b?q#h"` becomes `("https://host:8080", "/a/b?q#h")`.
fn split_origin(url: &str) -> Option<(&str, &str)> {
    let scheme_end = url.find("://")?;
    let scheme = &url[..scheme_end];
    if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c)) {
        return None;
    }

    let after_scheme = scheme_end + 3;
    let host_len = url[after_scheme..]
        .find(['/', '?', '#'])
        .unwrap_or(url.len() - after_scheme);
    if host_len == 0 {
        return None;
    }

    Some(url.split_at(after_scheme + host_len))
}

/// Path component of a URL or of a root-relative reference.
fn path_of(reference: &str) -> Option<&str> {
    let rest = if reference.starts_with('/') {
        reference
    } else {
        split_origin(reference)?.1
    };
    let path = rest.split(['?', '#']).next().unwrap_or_default();
    Some(if path.is_empty() { "/" } else { path })
}

/// URL of the plain-HTML rendition of a EULA page, served from the
/// current site rather than the authoring host.
///
/// Returns `None` when either URL cannot be parsed.
pub fn eula_plain_url(eula_link: &str, current_href: &str) -> Option<String> {
    let path = path_of(eula_link.trim())?;
    let (origin, _) = split_origin(current_href)?;
    Some(format!("{}{}{}", origin, path, EULA_PLAIN_SUFFIX))
}

/// Current page URL with the share query parameter set to `package_name`.
///
/// Any existing value of the parameter is replaced; other parameters and
/// the fragment are kept.
pub fn share_url(current_href: &str, package_name: &str) -> String {
    let (without_fragment, fragment) = match current_href.split_once('#') {
        Some((head, tail)) => (head, Some(tail)),
        None => (current_href, None),
    };
    let (base, query) = match without_fragment.split_once('?') {
        Some((head, tail)) => (head, tail),
        None => (without_fragment, ""),
    };

    let mut pairs: Vec<String> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| pair.split('=').next() != Some(SHARE_QUERY_PARAM))
        .map(str::to_string)
        .collect();
    pairs.push(format!("{}={}", SHARE_QUERY_PARAM, form_encode(package_name)));

    let mut url = format!("{}?{}", base, pairs.join("&"));
    if let Some(fragment) = fragment {
        url.push('#');
        url.push_str(fragment);
    }
    url
}

/// `application/x-www-form-urlencoded` encoding of a query value.
fn form_encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'*' | b'-' | b'.' | b'_' => {
                encoded.push(byte as char)
            }
            b' ' => encoded.push('+'),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
