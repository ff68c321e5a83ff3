//! Atom models for the activity stream (RFC 4287,
//! `http://www.w3.org/2005/Atom`).

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// An Atom feed of activity entries. Decoded once per request and handed to
/// the caller; nothing is persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityFeed {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub id: String,
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
    pub updated: Option<DateTime<FixedOffset>>,
    pub author: Option<Person>,
    #[serde(rename = "entry", default)]
    pub entries: Vec<ActivityItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub id: String,
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
    pub updated: Option<DateTime<FixedOffset>>,
    pub author: Option<Person>,
    pub summary: Option<Content>,
    pub category: Option<Category>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    #[serde(rename = "@rel", default)]
    pub rel: Option<String>,
    #[serde(rename = "@href", default)]
    pub href: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Person {
    pub name: Option<String>,
    pub uri: Option<String>,
    pub email: Option<String>,
}

/// A text construct: the `type` attribute plus the element body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Content {
    #[serde(rename = "@type", default)]
    pub content_type: Option<String>,
    #[serde(rename = "$text", default)]
    pub body: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Category {
    #[serde(rename = "@term", default)]
    pub term: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_FEED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Activity Stream</title>
  <id>urn:uuid:60a76c80-d399-11d9-b93C-0003939e0af6</id>
  <link rel="self" href="https://jira.example.com/activity"/>
  <updated>2023-05-01T17:00:00Z</updated>
  <author><name>JIRA</name></author>
  <entry>
    <title>Bob commented on TEST-1</title>
    <id>urn:uuid:1225c695-cfb8-4ebb-aaaa-80da344efa6a</id>
    <link rel="alternate" href="https://jira.example.com/browse/TEST-1"/>
    <updated>2023-05-01T16:45:00Z</updated>
    <author><name>Bob Example</name><email>bob@example.com</email></author>
    <summary type="html">&lt;p&gt;Looks good to me&lt;/p&gt;</summary>
    <category term="comment"/>
  </entry>
</feed>"#;

    #[test]
    fn decodes_minimal_feed() {
        let feed: ActivityFeed = quick_xml::de::from_str(MINIMAL_FEED).unwrap();

        assert_eq!(feed.title, "Activity Stream");
        assert_eq!(feed.id, "urn:uuid:60a76c80-d399-11d9-b93C-0003939e0af6");
        assert_eq!(feed.links.len(), 1);
        assert_eq!(feed.links[0].rel.as_deref(), Some("self"));
        assert_eq!(feed.links[0].href, "https://jira.example.com/activity");
        assert_eq!(feed.author.as_ref().unwrap().name.as_deref(), Some("JIRA"));
        assert_eq!(
            feed.updated.unwrap(),
            DateTime::parse_from_rfc3339("2023-05-01T17:00:00Z").unwrap()
        );
        assert_eq!(feed.entries.len(), 1);
    }

    #[test]
    fn decodes_entry_fields() {
        let feed: ActivityFeed = quick_xml::de::from_str(MINIMAL_FEED).unwrap();
        let entry = &feed.entries[0];

        assert_eq!(entry.title, "Bob commented on TEST-1");
        assert_eq!(entry.links[0].rel.as_deref(), Some("alternate"));
        assert_eq!(entry.links[0].href, "https://jira.example.com/browse/TEST-1");
        assert_eq!(
            entry.updated.unwrap(),
            DateTime::parse_from_rfc3339("2023-05-01T16:45:00Z").unwrap()
        );

        let author = entry.author.as_ref().unwrap();
        assert_eq!(author.name.as_deref(), Some("Bob Example"));
        assert_eq!(author.email.as_deref(), Some("bob@example.com"));

        let summary = entry.summary.as_ref().unwrap();
        assert_eq!(summary.content_type.as_deref(), Some("html"));
        assert_eq!(summary.body, "<p>Looks good to me</p>");

        assert_eq!(entry.category.as_ref().unwrap().term, "comment");
    }

    #[test]
    fn empty_feed_has_no_entries() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
            <title>Activity Stream</title>
            <id>urn:empty</id>
        </feed>"#;
        let feed: ActivityFeed = quick_xml::de::from_str(xml).unwrap();

        assert!(feed.entries.is_empty());
        assert!(feed.updated.is_none());
    }

    #[test]
    fn malformed_xml_is_an_error() {
        let result: Result<ActivityFeed, _> = quick_xml::de::from_str("<feed><title>");
        assert!(result.is_err());
    }
}
