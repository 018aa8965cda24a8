//! WordPress REST API record types
//!
//! Every field defaults when absent or `null`, so partial objects still
//! decode. Fields the API returns but these types don't name are ignored.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Decode `null` the same way as a missing field
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn is_zero(n: &u64) -> bool {
    *n == 0
}

/// `{"href": "..."}` entry of a `_links` relation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Href {
    #[serde(deserialize_with = "nullable")]
    pub href: String,
}

/// Hypermedia links attached to every record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    #[serde(rename = "self", deserialize_with = "nullable")]
    pub self_: Vec<Href>,
    #[serde(deserialize_with = "nullable")]
    pub collection: Vec<Href>,
    #[serde(deserialize_with = "nullable")]
    pub about: Vec<Href>,
}

/// Rendered HTML field such as `title` or `content`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rendered {
    #[serde(deserialize_with = "nullable")]
    pub rendered: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub link: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub count: u64,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub taxonomy: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub parent: u64,
    #[serde(rename = "_links", deserialize_with = "nullable")]
    pub links: Links,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub post: u64,
    #[serde(deserialize_with = "nullable")]
    pub parent: u64,
    #[serde(deserialize_with = "nullable")]
    pub author: u64,
    #[serde(deserialize_with = "nullable")]
    pub author_name: String,
    #[serde(deserialize_with = "nullable")]
    pub author_url: String,
    #[serde(deserialize_with = "nullable")]
    pub date: String,
    #[serde(deserialize_with = "nullable")]
    pub date_gmt: String,
    #[serde(deserialize_with = "nullable")]
    pub content: Rendered,
    #[serde(deserialize_with = "nullable")]
    pub link: String,
    #[serde(deserialize_with = "nullable")]
    pub status: String,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
    #[serde(deserialize_with = "nullable")]
    pub author_avatar_urls: BTreeMap<String, String>,
    #[serde(rename = "_links", deserialize_with = "nullable")]
    pub links: Links,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub date: String,
    #[serde(deserialize_with = "nullable")]
    pub date_gmt: String,
    #[serde(deserialize_with = "nullable")]
    pub guid: Rendered,
    #[serde(deserialize_with = "nullable")]
    pub link: String,
    #[serde(deserialize_with = "nullable")]
    pub modified: String,
    #[serde(deserialize_with = "nullable")]
    pub modified_gmt: String,
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    #[serde(deserialize_with = "nullable")]
    pub status: String,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
    #[serde(deserialize_with = "nullable")]
    pub title: Rendered,
    #[serde(deserialize_with = "nullable")]
    pub content: Rendered,
    #[serde(deserialize_with = "nullable")]
    pub excerpt: Rendered,
    #[serde(deserialize_with = "nullable")]
    pub author: u64,
    #[serde(deserialize_with = "nullable")]
    pub featured_media: u64,
    #[serde(deserialize_with = "nullable")]
    pub parent: u64,
    #[serde(deserialize_with = "nullable")]
    pub menu_order: i64,
    #[serde(deserialize_with = "nullable")]
    pub template: String,
    #[serde(rename = "_links", deserialize_with = "nullable")]
    pub links: Links,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub date: String,
    #[serde(deserialize_with = "nullable")]
    pub date_gmt: String,
    #[serde(deserialize_with = "nullable")]
    pub guid: Rendered,
    #[serde(deserialize_with = "nullable")]
    pub modified: String,
    #[serde(deserialize_with = "nullable")]
    pub modified_gmt: String,
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    #[serde(deserialize_with = "nullable")]
    pub status: String,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
    #[serde(deserialize_with = "nullable")]
    pub link: String,
    #[serde(deserialize_with = "nullable")]
    pub title: Rendered,
    #[serde(deserialize_with = "nullable")]
    pub content: Rendered,
    #[serde(deserialize_with = "nullable")]
    pub excerpt: Rendered,
    #[serde(deserialize_with = "nullable")]
    pub author: u64,
    #[serde(deserialize_with = "nullable")]
    pub featured_media: u64,
    #[serde(deserialize_with = "nullable")]
    pub comment_status: String,
    #[serde(deserialize_with = "nullable")]
    pub ping_status: String,
    #[serde(deserialize_with = "nullable")]
    pub sticky: bool,
    #[serde(deserialize_with = "nullable")]
    pub format: String,
    #[serde(deserialize_with = "nullable")]
    pub template: String,
    #[serde(deserialize_with = "nullable")]
    pub categories: Vec<u64>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<u64>,
    #[serde(rename = "_links", deserialize_with = "nullable")]
    pub links: Links,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub count: u64,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub link: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    #[serde(deserialize_with = "nullable")]
    pub taxonomy: String,
    #[serde(rename = "_links", deserialize_with = "nullable")]
    pub links: Links,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub link: String,
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    #[serde(deserialize_with = "nullable")]
    pub avatar_urls: BTreeMap<String, String>,
    #[serde(rename = "_links", deserialize_with = "nullable")]
    pub links: Links,
}
