//! Link normalization: domain extraction and URL syntax validation
//!
//! Purely syntactic, nothing is resolved over the network.

use regex::Regex;
use std::sync::LazyLock;

/// `scheme://` prefix required before a domain is reported
static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z]+://").expect("Failed to compile scheme regex"));

/// Optional http/https/ftp scheme followed by `//` (protocol-relative allowed)
static PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:https?|ftp):)?//").expect("Failed to compile URL prefix regex")
});

/// Full URL with a domain-name host: labels, a 2+ letter TLD, one optional
/// trailing character (anything but a line terminator), optional port and path
static DOMAIN_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:(?:https?|ftp):)?//",
        r"(?:\S+(?::\S*)?@)?",
        r"(?:(?:[a-z\x{a1}-\x{10FFFF}0-9]-*)*[a-z\x{a1}-\x{10FFFF}0-9]+)",
        r"(?:\.(?:[a-z\x{a1}-\x{10FFFF}0-9]-*)*[a-z\x{a1}-\x{10FFFF}0-9]+)*",
        r"(?:\.(?:[a-z\x{a1}-\x{10FFFF}]{2,}))[^\n\r\x{2028}\x{2029}]?",
        r"(?::[0-9]{2,5})?(?:[/?#]\S*)?$",
    ))
    .expect("Failed to compile domain URL regex")
});

/// Remainder of a URL whose host is a dotted IPv4 literal
static IPV4_TAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<a>[1-9][0-9]?|1[0-9][0-9]|2[01][0-9]|22[0-3])",
        r"\.(?P<b>1?[0-9]{1,2}|2[0-4][0-9]|25[0-5])",
        r"\.(?:1?[0-9]{1,2}|2[0-4][0-9]|25[0-5])",
        r"\.(?:[1-9][0-9]?|1[0-9][0-9]|2[0-4][0-9]|25[0-4])",
        r"(?::[0-9]{2,5})?(?:[/?#]\S*)?$",
    ))
    .expect("Failed to compile IPv4 URL regex")
});

/// Host part of `href`, or empty when it has no `scheme://` prefix.
///
/// The host is the third `/`-separated segment, so a port stays attached
/// (`http://localhost:8080/x` gives `localhost:8080`).
pub fn extract_domain(href: Option<&str>) -> String {
    let Some(href) = href.filter(|h| SCHEME_RE.is_match(h)) else {
        return String::new();
    };

    let segment = if href.contains("://") {
        href.split('/').nth(2)
    } else {
        // Unreachable behind the scheme check, kept for parity with older exports
        href.split('/').next()
    };

    segment.unwrap_or_default().to_string()
}

/// Check `href` against the accepted absolute / protocol-relative URL grammar.
///
/// Hosts are either domain names with a 2+ letter TLD or public IPv4
/// literals. Private, loopback and link-local ranges (`10/8`, `127/8`,
/// `169.254/16`, `172.16/12`, `192.168/16`) are rejected.
pub fn is_valid_url(href: Option<&str>) -> bool {
    match href {
        Some(href) => DOMAIN_URL_RE.is_match(href) || has_public_ipv4_host(href),
        None => false,
    }
}

/// Try every way of splitting off an optional `userinfo@` before an IPv4 host
fn has_public_ipv4_host(href: &str) -> bool {
    let Some(prefix) = PREFIX_RE.find(href) else {
        return false;
    };
    let rest = &href[prefix.end()..];

    let after_userinfo = rest
        .match_indices('@')
        .filter(|(at, _)| *at > 0 && !rest[..*at].chars().any(char::is_whitespace))
        .map(|(at, _)| &rest[at + 1..]);

    std::iter::once(rest)
        .chain(after_userinfo)
        .any(is_public_ipv4_tail)
}

fn is_public_ipv4_tail(tail: &str) -> bool {
    let Some(caps) = IPV4_TAIL_RE.captures(tail) else {
        return false;
    };
    !is_reserved_range(&caps["a"], &caps["b"])
}

fn is_reserved_range(a: &str, b: &str) -> bool {
    match a {
        "10" | "127" => true,
        "169" => b == "254",
        "192" => b == "168",
        "172" => matches!(b.parse::<u8>(), Ok(16..=31)),
        _ => false,
    }
}
