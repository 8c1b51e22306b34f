//! Share summaries: plain-text report plus a prefilled messenger link.

use crate::models::DayDocument;
use crate::query::Scope;
use clap::ValueEnum;

#[derive(Clone, Debug, ValueEnum)]
pub enum SharePlatform {
    Whatsapp,
    Telegram,
    Email,
}

impl SharePlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            SharePlatform::Whatsapp => "whatsapp",
            SharePlatform::Telegram => "telegram",
            SharePlatform::Email => "email",
        }
    }
}

/// Build the text summary for a scope: per-category counts and one
/// `SN | CT` line per active item. Categories with nothing active are
/// skipped.
pub fn summary(document: &DayDocument, scope: Scope) -> String {
    let mut text = format!("*Equipment report - {}*\n\n", scope.label());

    for (category, items) in document.iter() {
        let active: Vec<_> = items.iter().filter(|item| item.is_active()).collect();
        if active.is_empty() {
            continue;
        }

        text.push_str(&format!("*{}* ({})\n", category.label(), active.len()));
        for item in active {
            text.push_str(&format!(
                "- SN: {} | CT: {}\n",
                or_na(&item.serial),
                or_na(&item.contract)
            ));
        }
        text.push('\n');
    }

    text
}

fn or_na(field: &str) -> &str {
    let trimmed = field.trim();
    if trimmed.is_empty() { "N/A" } else { trimmed }
}

/// Prefilled share URL for the given platform.
pub fn share_url(platform: &SharePlatform, subject: &str, text: &str) -> String {
    let encoded = percent_encode(text);
    match platform {
        SharePlatform::Whatsapp => format!("https://wa.me/?text={encoded}"),
        SharePlatform::Telegram => format!("https://t.me/share/url?text={encoded}"),
        SharePlatform::Email => {
            format!("mailto:?subject={}&body={}", percent_encode(subject), encoded)
        }
    }
}

/// RFC 3986 percent-encoding of everything outside the unreserved set.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, DayDocument, EquipmentItem};
    use chrono::NaiveDate;

    fn doc_with_one_camera() -> DayDocument {
        let mut doc = DayDocument::seeded();
        let mut item = EquipmentItem::blank();
        item.serial = "SN-1".into();
        doc.items_mut(Category::Camera).push(item);
        doc
    }

    #[test]
    fn summary_lists_only_active_categories() {
        let date: NaiveDate = "2024-01-05".parse().unwrap();
        let text = summary(&doc_with_one_camera(), Scope::Day(date));

        assert!(text.contains("Equipment report - 2024-01-05"));
        assert!(text.contains("*CAMERA* (1)"));
        assert!(text.contains("- SN: SN-1 | CT: N/A"));
        assert!(!text.contains("*BOX*"));
    }

    #[test]
    fn urls_are_percent_encoded() {
        assert_eq!(percent_encode("a b&c"), "a%20b%26c");

        let url = share_url(&SharePlatform::Whatsapp, "", "hi there");
        assert_eq!(url, "https://wa.me/?text=hi%20there");

        let mail = share_url(&SharePlatform::Email, "Report 1", "body");
        assert!(mail.starts_with("mailto:?subject=Report%201&body=body"));
    }
}
