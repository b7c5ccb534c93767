//! Ticket URL resolution and space-URL derivation
//!
//! A "space" is the hosted project workspace that ticket links point into.
//! The base URL is either supplied by the user or derived from the
//! repository's fetch remote.

/// Base address under which hosted spaces live
pub const SPACE_URL_BASE: &str = "https://app.assembla.com/spaces";

/// Resolve a ticket reference to a fully qualified URL
///
/// With a space URL present, composes `<space_url>/tickets/<number>` where
/// the number is the reference with its leading `#` stripped. Without one,
/// returns the raw reference unchanged.
#[must_use]
pub fn resolve_ticket_url(ticket: &str, space_url: Option<&str>) -> String {
    match space_url {
        Some(base) => {
            let number = ticket.strip_prefix('#').unwrap_or(ticket);
            format!("{base}/tickets/{number}")
        }
        None => ticket.to_string(),
    }
}

/// Derive the space name from a remote's fetch URL
///
/// Takes the segment after the last `:` or `/` separator, truncated at the
/// first `.`. Returns `None` when the derived name is empty.
#[must_use]
pub fn space_name_from_remote(remote_url: &str) -> Option<String> {
    let tail = remote_url
        .rfind([':', '/'])
        .map_or(remote_url, |at| &remote_url[at + 1..]);
    let name = tail.split('.').next().unwrap_or("");
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Derive the full space URL from a remote's fetch URL
///
/// Returns `None` when no space name can be derived; callers treat that as
/// a fatal configuration problem.
#[must_use]
pub fn space_url_from_remote(remote_url: &str) -> Option<String> {
    space_name_from_remote(remote_url).map(|name| format!("{SPACE_URL_BASE}/{name}"))
}
