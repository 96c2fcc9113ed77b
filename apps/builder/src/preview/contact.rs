use serde::{Deserialize, Serialize};

use crate::models::resume::has_text;
use crate::models::PersonalInfo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ContactItem {
    Email(String),
    Phone(String),
    /// `display` is the short form shown on the page; `href` is what a click
    /// navigates to.
    Link { display: String, href: String },
}

/// Contact line items, in fixed order, omitting empty fields.
pub fn contact_items(personal: &PersonalInfo) -> Vec<ContactItem> {
    let mut items = Vec::new();
    if has_text(&personal.email) {
        items.push(ContactItem::Email(personal.email.clone()));
    }
    if has_text(&personal.phone) {
        items.push(ContactItem::Phone(personal.phone.clone()));
    }
    if has_text(&personal.link) {
        items.push(ContactItem::Link {
            display: display_link(&personal.link),
            href: link_href(&personal.link),
        });
    }
    items
}

/// Strips a leading `http://`/`https://` and then a leading `www.`.
pub fn display_link(link: &str) -> String {
    let rest = link
        .strip_prefix("https://")
        .or_else(|| link.strip_prefix("http://"))
        .unwrap_or(link);
    rest.strip_prefix("www.").unwrap_or(rest).to_string()
}

/// The stored value verbatim when it already carries a protocol, otherwise
/// prefixed with `https://`.
pub fn link_href(link: &str) -> String {
    if link.starts_with("http") {
        link.to_string()
    } else {
        format!("https://{link}")
    }
}
