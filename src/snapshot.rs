//! Site snapshot and its serialized documents
//!
//! A snapshot holds one accumulator per resource kind. It serializes to
//! exactly six JSON arrays, one per kind, or not at all.

use crate::error::{Error, Result};
use crate::types::ResourceKind;
use crate::wordpress::{Category, Comment, Page, Post, Tag, User};
use bytes::Bytes;
use serde::Serialize;
use std::collections::BTreeMap;

/// Every record of one crawl run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteSnapshot {
    pub categories: Vec<Category>,
    pub comments: Vec<Comment>,
    pub pages: Vec<Page>,
    pub posts: Vec<Post>,
    pub tags: Vec<Tag>,
    pub users: Vec<User>,
}

/// One serialized accumulator, addressable as `<kind>.json`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotDocument {
    pub kind: ResourceKind,
    pub name: String,
    pub data: Bytes,
}

impl SiteSnapshot {
    /// Number of records held for a kind
    pub fn len_of(&self, kind: ResourceKind) -> usize {
        match kind {
            ResourceKind::Categories => self.categories.len(),
            ResourceKind::Comments => self.comments.len(),
            ResourceKind::Pages => self.pages.len(),
            ResourceKind::Posts => self.posts.len(),
            ResourceKind::Tags => self.tags.len(),
            ResourceKind::Users => self.users.len(),
        }
    }

    /// Record count per kind
    pub fn record_counts(&self) -> BTreeMap<ResourceKind, usize> {
        ResourceKind::ALL
            .iter()
            .map(|&kind| (kind, self.len_of(kind)))
            .collect()
    }

    /// Total records across all kinds
    pub fn total_records(&self) -> usize {
        ResourceKind::ALL.iter().map(|&k| self.len_of(k)).sum()
    }

    /// Serialize one kind to a JSON array
    pub fn serialize_kind(&self, kind: ResourceKind) -> Result<Bytes> {
        match kind {
            ResourceKind::Categories => to_json(kind, &self.categories),
            ResourceKind::Comments => to_json(kind, &self.comments),
            ResourceKind::Pages => to_json(kind, &self.pages),
            ResourceKind::Posts => to_json(kind, &self.posts),
            ResourceKind::Tags => to_json(kind, &self.tags),
            ResourceKind::Users => to_json(kind, &self.users),
        }
    }

    /// Serialize every kind, in fetch order
    ///
    /// Fails as a whole if any kind fails.
    pub fn to_documents(&self) -> Result<Vec<SnapshotDocument>> {
        ResourceKind::ALL
            .iter()
            .map(|&kind| {
                Ok(SnapshotDocument {
                    kind,
                    name: kind.file_name(),
                    data: self.serialize_kind(kind)?,
                })
            })
            .collect()
    }
}

fn to_json<T: Serialize>(kind: ResourceKind, records: &[T]) -> Result<Bytes> {
    serde_json::to_vec(records)
        .map(Bytes::from)
        .map_err(|source| Error::Serialize { kind, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordpress::{Href, Links, Rendered};
    use pretty_assertions::assert_eq;
    use serde::de::DeserializeOwned;

    fn sample_snapshot() -> SiteSnapshot {
        SiteSnapshot {
            categories: vec![Category {
                id: 1,
                name: "Uncategorized".to_string(),
                slug: "uncategorized".to_string(),
                link: "https://blog.example.com/category/uncategorized/".to_string(),
                count: 3,
                taxonomy: "category".to_string(),
                links: Links {
                    self_: vec![Href {
                        href: "https://blog.example.com/wp-json/wp/v2/categories/1".to_string(),
                    }],
                    ..Default::default()
                },
                ..Default::default()
            }],
            comments: vec![],
            pages: vec![Page {
                id: 2,
                title: Rendered {
                    rendered: "About".to_string(),
                    protected: None,
                },
                ..Default::default()
            }],
            posts: vec![
                Post {
                    id: 10,
                    title: Rendered {
                        rendered: "Second".to_string(),
                        protected: None,
                    },
                    categories: vec![1],
                    ..Default::default()
                },
                Post {
                    id: 9,
                    content: Rendered {
                        rendered: "<p>First</p>".to_string(),
                        protected: Some(false),
                    },
                    tags: vec![4, 5],
                    ..Default::default()
                },
            ],
            tags: vec![Tag {
                id: 4,
                name: "rust".to_string(),
                ..Default::default()
            }],
            users: vec![User {
                id: 1,
                name: "admin".to_string(),
                avatar_urls: [("24".to_string(), "https://gravatar/24".to_string())]
                    .into_iter()
                    .collect(),
                ..Default::default()
            }],
        }
    }

    fn parse<T: DeserializeOwned>(doc: &SnapshotDocument) -> Vec<T> {
        serde_json::from_slice(&doc.data).unwrap()
    }

    #[test]
    fn test_six_documents_named_by_kind() {
        let docs = sample_snapshot().to_documents().unwrap();
        let names: Vec<_> = docs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "categories.json",
                "comments.json",
                "pages.json",
                "posts.json",
                "tags.json",
                "users.json"
            ]
        );
    }

    #[test]
    fn test_documents_round_trip() {
        let snapshot = sample_snapshot();
        let docs = snapshot.to_documents().unwrap();

        let restored = SiteSnapshot {
            categories: parse(&docs[0]),
            comments: parse(&docs[1]),
            pages: parse(&docs[2]),
            posts: parse(&docs[3]),
            tags: parse(&docs[4]),
            users: parse(&docs[5]),
        };

        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_empty_kind_serializes_as_empty_array() {
        let docs = SiteSnapshot::default().to_documents().unwrap();
        assert_eq!(docs.len(), 6);
        for doc in docs {
            assert_eq!(&doc.data[..], b"[]");
        }
    }

    #[test]
    fn test_record_counts() {
        let snapshot = sample_snapshot();
        let counts = snapshot.record_counts();
        assert_eq!(counts[&ResourceKind::Posts], 2);
        assert_eq!(counts[&ResourceKind::Comments], 0);
        assert_eq!(snapshot.total_records(), 6);
    }

    #[test]
    fn test_category_omits_empty_optional_fields() {
        let snapshot = SiteSnapshot {
            categories: vec![Category {
                id: 7,
                name: "News".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let data = snapshot.serialize_kind(ResourceKind::Categories).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&data).unwrap();
        assert!(value[0].get("count").is_none());
        assert!(value[0].get("parent").is_none());
        assert_eq!(value[0]["name"], "News");
    }
}
