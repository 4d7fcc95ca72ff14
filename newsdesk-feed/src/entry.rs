//! Raw feed entries prior to normalization
//!
//! A [`RawEntry`] is the lowest common denominator of an RSS item and an
//! Atom entry: every field is optional, and no invariant holds. The
//! extractor is the only consumer and owns all fallback logic.

use chrono::{DateTime, Utc};

/// One media reference from a media:content / media:thumbnail list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaRef {
    /// `url` attribute, the usual location
    pub url: Option<String>,
    /// Element text, used by feeds that inline the URL as a value
    pub value: Option<String>,
}

/// An enclosure attached to an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enclosure {
    /// Target URL
    pub href: String,
    /// MIME type, when declared
    pub mime_type: Option<String>,
}

/// Decomposed publish time supplied by some sources in place of a string
pub type TimeParts = (i32, u32, u32, u32, u32, u32);

/// An opaque source-format record; any field may be absent
#[derive(Debug, Clone, Default)]
pub struct RawEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    /// Publish timestamp string, format unspecified
    pub published: Option<String>,
    /// Pre-decomposed publish time `(y, mo, d, h, mi, s)`, interpreted as UTC
    pub published_parts: Option<TimeParts>,
    pub media_content: Vec<MediaRef>,
    pub media_thumbnail: Vec<MediaRef>,
    pub enclosure: Option<Enclosure>,
    /// Title of the feed the entry came from
    pub source_title: Option<String>,
}

impl RawEntry {
    /// Lift an RSS item into a raw entry
    pub fn from_rss(item: &rss::Item, feed_title: Option<&str>) -> Self {
        let (media_content, media_thumbnail) = media_lists(item);

        Self {
            title: item.title().map(str::to_string),
            link: item.link().map(str::to_string),
            summary: item.description().map(str::to_string),
            description: None,
            published: item.pub_date().map(str::to_string),
            published_parts: None,
            media_content,
            media_thumbnail,
            enclosure: item.enclosure().map(|e| Enclosure {
                href: e.url().to_string(),
                mime_type: Some(e.mime_type().to_string()).filter(|m| !m.is_empty()),
            }),
            source_title: feed_title.map(str::to_string),
        }
    }

    /// Lift an Atom entry into a raw entry
    pub fn from_atom(entry: &atom_syndication::Entry, feed_title: Option<&str>) -> Self {
        let link = entry
            .links()
            .iter()
            .find(|l| l.rel() == "alternate")
            .or_else(|| entry.links().first())
            .map(|l| l.href().to_string());

        let enclosure = entry
            .links()
            .iter()
            .find(|l| l.rel() == "enclosure")
            .map(|l| Enclosure {
                href: l.href().to_string(),
                mime_type: l.mime_type().map(str::to_string),
            });

        let summary = entry.summary().map(|s| s.as_str().to_string());
        let content = entry
            .content()
            .and_then(|c| c.value())
            .map(str::to_string);

        let published: Option<DateTime<Utc>> = entry
            .published()
            .copied()
            .or_else(|| Some(*entry.updated()))
            .map(|d| d.with_timezone(&Utc));

        Self {
            title: Some(entry.title().as_str().to_string()),
            link,
            summary,
            description: content,
            published: published.map(|d| d.to_rfc3339()),
            published_parts: None,
            media_content: Vec::new(),
            media_thumbnail: Vec::new(),
            enclosure,
            source_title: feed_title.map(str::to_string),
        }
    }
}

/// Collect media:content and media:thumbnail references from RSS extensions
fn media_lists(item: &rss::Item) -> (Vec<MediaRef>, Vec<MediaRef>) {
    let mut content = Vec::new();
    let mut thumbnail = Vec::new();

    if let Some(media) = item.extensions().get("media") {
        if let Some(list) = media.get("content") {
            for ext in list {
                content.push(MediaRef {
                    url: ext.attrs().get("url").cloned(),
                    value: ext.value().map(str::to_string),
                });
            }
        }
        if let Some(list) = media.get("thumbnail") {
            for ext in list {
                thumbnail.push(MediaRef {
                    url: ext.attrs().get("url").cloned(),
                    value: ext.value().map(str::to_string),
                });
            }
        }
    }

    (content, thumbnail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rss_item_fields_carry_over() {
        let item = rss::Item {
            title: Some("Headline".to_string()),
            link: Some("https://example.com/a".to_string()),
            description: Some("Body text".to_string()),
            pub_date: Some("Mon, 01 Jan 2024 10:00:00 GMT".to_string()),
            ..Default::default()
        };

        let entry = RawEntry::from_rss(&item, Some("Example Feed"));
        assert_eq!(entry.title.as_deref(), Some("Headline"));
        assert_eq!(entry.link.as_deref(), Some("https://example.com/a"));
        assert_eq!(entry.summary.as_deref(), Some("Body text"));
        assert_eq!(entry.source_title.as_deref(), Some("Example Feed"));
        assert!(entry.media_content.is_empty());
    }

    #[test]
    fn rss_enclosure_carries_over() {
        let item = rss::Item {
            link: Some("https://example.com/a".to_string()),
            enclosure: Some(rss::Enclosure {
                url: "https://example.com/pic.jpg".to_string(),
                mime_type: "image/jpeg".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };

        let entry = RawEntry::from_rss(&item, None);
        let enc = entry.enclosure.expect("enclosure");
        assert_eq!(enc.href, "https://example.com/pic.jpg");
        assert_eq!(enc.mime_type.as_deref(), Some("image/jpeg"));
    }
}
