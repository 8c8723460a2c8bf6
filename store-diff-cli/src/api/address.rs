//! Source address building

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Where a built address points to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Http(String),
    File(PathBuf),
}

/// Concatenate `base` and `location` and append the query string, if any.
///
/// Keys and values are percent-encoded. If the address already carries a query
/// string the new pairs are appended with `&`.
pub fn build_address(base: &str, location: &str, query: &BTreeMap<String, String>) -> String {
    let mut address = format!("{}{}", base, location);
    if query.is_empty() {
        return address;
    }

    let pairs: Vec<String> = query
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect();

    address.push(if address.contains('?') { '&' } else { '?' });
    address.push_str(&pairs.join("&"));
    address
}

/// Decide how an address is fetched: `http(s)://` goes over the network,
/// anything else is a file path (`file://` prefix optional).
pub fn resolve_target(address: &str) -> Target {
    let lower = address.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return Target::Http(address.to_string());
    }

    // `?` is a legal file name character, so the path is taken verbatim
    let path = address.strip_prefix("file://").unwrap_or(address);
    Target::File(PathBuf::from(path))
}
