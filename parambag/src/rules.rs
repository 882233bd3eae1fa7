//! Built-in filter rules.
//!
//! [`StandardRules`] is the default [`FilterRule`] implementation covering
//! every [`FilterKind`]. Validation is structural (no DNS lookups, no
//! normalization): a passing value is returned as stored, a failing one
//! yields `None`.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::filter::{FilterFlags, FilterKind, FilterOptions, FilterRule};
use crate::value::ParamValue;

/// Stateless implementation of the standard rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl FilterRule for StandardRules {
    fn apply(&self, value: &str, kind: FilterKind, options: &FilterOptions) -> Option<ParamValue> {
        match kind {
            FilterKind::SanitizeNumeric => Some(ParamValue::String(sanitize_numeric(value))),
            FilterKind::ValidateBoolean => validate_boolean(value).map(ParamValue::Bool),
            FilterKind::ValidateEmail => {
                validate_email(value).then(|| ParamValue::String(value.to_string()))
            }
            FilterKind::ValidateUrl => {
                validate_url(value, options.flags).then(|| ParamValue::String(value.to_string()))
            }
            FilterKind::ValidateInt => validate_int(value, options).map(ParamValue::Integer),
        }
    }
}

/// Keep digits and sign characters, drop everything else. Never fails.
fn sanitize_numeric(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+' || *c == '-')
        .collect()
}

fn validate_boolean(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "" | "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

/// RFC 1035-style label check shared by the email and URL rules.
fn is_dns_name(host: &str) -> bool {
    if host.is_empty() || host.len() > 253 {
        return false;
    }
    host.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

fn validate_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(|c| c.is_whitespace() || c == '@') {
        return false;
    }
    domain.contains('.') && is_dns_name(domain)
}

fn validate_url(value: &str, flags: FilterFlags) -> bool {
    let Some((scheme, rest)) = value.split_once("://") else {
        return false;
    };
    if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    let (authority, path_and_query) = match rest.find(['/', '?']) {
        Some(idx) => rest.split_at(idx),
        None => (rest, ""),
    };

    let (host, port) = split_host_port(authority);
    if let Some(port) = port
        && port.parse::<u16>().is_err()
    {
        return false;
    }
    let host_ok = if let Some(inner) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        inner.parse::<Ipv6Addr>().is_ok()
    } else {
        host.parse::<Ipv4Addr>().is_ok() || is_dns_name(host)
    };
    if !host_ok {
        return false;
    }

    let (path, query) = match path_and_query.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (path_and_query, None),
    };
    if flags.contains(FilterFlags::PATH_REQUIRED) && path.is_empty() {
        return false;
    }
    if flags.contains(FilterFlags::QUERY_REQUIRED) && query.is_none_or(str::is_empty) {
        return false;
    }
    true
}

fn split_host_port(authority: &str) -> (&str, Option<&str>) {
    // Bracketed IPv6 literals carry colons of their own.
    if authority.starts_with('[') {
        match authority.rsplit_once("]:") {
            Some((host, port)) => return (&authority[..host.len() + 1], Some(port)),
            None => return (authority, None),
        }
    }
    match authority.rsplit_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (authority, None),
    }
}

fn validate_int(value: &str, options: &FilterOptions) -> Option<i64> {
    let text = value.trim();
    let (negative, magnitude) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let parsed: i64 = if let Some(hex) = magnitude
        .strip_prefix("0x")
        .or_else(|| magnitude.strip_prefix("0X"))
    {
        if !options.flags.contains(FilterFlags::ALLOW_HEX) {
            return None;
        }
        i64::from_str_radix(hex, 16).ok()?
    } else if let Some(oct) = magnitude
        .strip_prefix("0o")
        .or_else(|| magnitude.strip_prefix("0O"))
    {
        if !options.flags.contains(FilterFlags::ALLOW_OCTAL) {
            return None;
        }
        i64::from_str_radix(oct, 8).ok()?
    } else if options.flags.contains(FilterFlags::ALLOW_OCTAL)
        && magnitude.len() > 1
        && magnitude.starts_with('0')
    {
        // Leading-zero spelling, e.g. "017".
        i64::from_str_radix(&magnitude[1..], 8).ok()?
    } else {
        magnitude.parse().ok()?
    };

    let n = if negative { parsed.checked_neg()? } else { parsed };
    if options.min_range.is_some_and(|min| n < min) {
        return None;
    }
    if options.max_range.is_some_and(|max| n > max) {
        return None;
    }
    Some(n)
}
