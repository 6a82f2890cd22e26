//! Data models for breadcrumb trails
//!
//! This module defines the output unit ([`BreadcrumbNode`]), the ordered
//! [`Trail`] built from it, and the site entities the content store hands
//! back (content items, taxonomy terms, content-type descriptors).

use serde::{Deserialize, Serialize};

/// Identifier of a content item
pub type ItemId = u64;

/// Identifier of a taxonomy term
pub type TermId = u64;

/// Taxonomy namespace used for primary categories
pub const CATEGORY_TAXONOMY: &str = "category";

/// Node type tag of the home node
pub const HOME_NODE_TYPE: &str = "home";

/// Node type tag of the not-found node
pub const NOT_FOUND_NODE_TYPE: &str = "404";

/// Node type tag of a year archive node
pub const YEAR_NODE_TYPE: &str = "year";

/// Basic site information used for the home node defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    /// Site name
    pub name: String,

    /// Absolute home URL
    pub home_url: String,
}

/// A single content item (post, page, custom type entry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,

    /// Key of the item's content type
    pub content_type: String,

    /// Display title
    pub title: String,

    /// Canonical link
    pub permalink: String,

    /// Parent item (0 = no parent)
    #[serde(default)]
    pub parent_id: ItemId,

    /// Primary category term, if one is assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_category: Option<TermId>,
}

impl ContentItem {
    /// Parent id, or `None` for top-level items
    pub fn parent(&self) -> Option<ItemId> {
        (self.parent_id != 0).then_some(self.parent_id)
    }
}

/// A taxonomy term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: TermId,

    /// Taxonomy namespace the term belongs to
    #[serde(default = "default_taxonomy")]
    pub taxonomy: String,

    /// Display name
    pub name: String,

    /// Canonical link
    pub permalink: String,

    /// Parent term (0 = root)
    #[serde(default)]
    pub parent_id: TermId,
}

fn default_taxonomy() -> String {
    CATEGORY_TAXONOMY.to_string()
}

impl Term {
    /// Parent id, or `None` for root terms
    pub fn parent(&self) -> Option<TermId> {
        (self.parent_id != 0).then_some(self.parent_id)
    }
}

/// Descriptor of a content type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeDescriptor {
    /// Content type key (e.g. `post`, `page`, `product`)
    pub name: String,

    /// Display label
    pub label: String,

    /// Whether the type declares an archive listing
    #[serde(default)]
    pub has_archive: bool,

    /// Whether items of this type can have parent items
    #[serde(default)]
    pub hierarchical: bool,

    /// Canonical archive link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_url: Option<String>,
}

/// Date-based archive query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum DateQuery {
    Year { year: i32 },
    Month { year: i32, month: u32 },
    Day { year: i32, month: u32, day: u32 },
}

impl DateQuery {
    /// Year of the query, whatever its granularity
    pub fn year(&self) -> i32 {
        match self {
            DateQuery::Year { year }
            | DateQuery::Month { year, .. }
            | DateQuery::Day { year, .. } => *year,
        }
    }

    /// Check if the query is scoped to a whole year
    pub fn is_year(&self) -> bool {
        matches!(self, DateQuery::Year { .. })
    }
}

/// Domain entity a breadcrumb node refers to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeObject {
    ContentItem(ContentItem),
    Term(Term),
    ContentType(ContentTypeDescriptor),
    Year { year: i32 },
}

/// A single entry in a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbNode {
    /// Category tag: `home`, `404`, a taxonomy, a content type, `year`
    #[serde(rename = "type")]
    pub node_type: String,

    /// Underlying entity, absent for synthetic nodes
    #[serde(default)]
    pub object: Option<NodeObject>,

    /// Display label
    pub label: String,

    /// Absolute link, absent when the node is not linkable
    #[serde(default)]
    pub url: Option<String>,
}

impl BreadcrumbNode {
    /// Create a synthetic node with no underlying entity
    pub fn synthetic(node_type: &str, label: impl Into<String>, url: Option<String>) -> Self {
        Self {
            node_type: node_type.to_string(),
            object: None,
            label: label.into(),
            url,
        }
    }

    /// Node for a content item, typed by `content_type`
    pub fn for_item(content_type: &str, item: &ContentItem) -> Self {
        Self {
            node_type: content_type.to_string(),
            object: Some(NodeObject::ContentItem(item.clone())),
            label: item.title.clone(),
            url: Some(item.permalink.clone()),
        }
    }

    /// Node for a taxonomy term, typed by `taxonomy`
    pub fn for_term(taxonomy: &str, term: &Term) -> Self {
        Self {
            node_type: taxonomy.to_string(),
            object: Some(NodeObject::Term(term.clone())),
            label: term.name.clone(),
            url: Some(term.permalink.clone()),
        }
    }

    /// Node for a content type archive
    pub fn for_archive(descriptor: &ContentTypeDescriptor) -> Self {
        Self {
            node_type: descriptor.name.clone(),
            object: Some(NodeObject::ContentType(descriptor.clone())),
            label: descriptor.label.clone(),
            url: descriptor.archive_url.clone(),
        }
    }

    /// Node for a year archive
    pub fn for_year(year: i32, suffix: &str, url: String) -> Self {
        Self {
            node_type: YEAR_NODE_TYPE.to_string(),
            object: Some(NodeObject::Year { year }),
            label: format!("{}{}", year, suffix),
            url: Some(url),
        }
    }
}

/// An ordered breadcrumb trail, root first and current page last
///
/// A trail always starts with the home node, so it is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trail {
    nodes: Vec<BreadcrumbNode>,
}

#[allow(clippy::len_without_is_empty)]
impl Trail {
    /// Start a trail from its home node
    pub fn new(home: BreadcrumbNode) -> Self {
        Self { nodes: vec![home] }
    }

    pub(crate) fn push(&mut self, node: BreadcrumbNode) {
        self.nodes.push(node);
    }

    pub(crate) fn extend(&mut self, nodes: impl IntoIterator<Item = BreadcrumbNode>) {
        self.nodes.extend(nodes);
    }

    /// The home node
    pub fn home(&self) -> &BreadcrumbNode {
        &self.nodes[0]
    }

    /// The node for the current page (last entry)
    pub fn current(&self) -> &BreadcrumbNode {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Number of nodes, including home
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the trail holds only the home node
    pub fn is_home_only(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn nodes(&self) -> &[BreadcrumbNode] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BreadcrumbNode> {
        self.nodes.iter()
    }

    /// Labels in trail order
    pub fn labels(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.label.as_str()).collect()
    }

    /// Node type tags in trail order
    pub fn node_types(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.node_type.as_str()).collect()
    }

    pub fn into_nodes(self) -> Vec<BreadcrumbNode> {
        self.nodes
    }
}

impl<'a> IntoIterator for &'a Trail {
    type Item = &'a BreadcrumbNode;
    type IntoIter = std::slice::Iter<'a, BreadcrumbNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl IntoIterator for Trail {
    type Item = BreadcrumbNode;
    type IntoIter = std::vec::IntoIter<BreadcrumbNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_zero_is_root() {
        let term = Term {
            id: 3,
            taxonomy: CATEGORY_TAXONOMY.to_string(),
            name: "News".to_string(),
            permalink: "https://example.com/category/news/".to_string(),
            parent_id: 0,
        };
        assert_eq!(term.parent(), None);

        let child = Term { parent_id: 3, ..term };
        assert_eq!(child.parent(), Some(3));
    }

    #[test]
    fn test_node_serializes_type_key() {
        let node = BreadcrumbNode::synthetic(NOT_FOUND_NODE_TYPE, "404 Not Found", None);
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["type"], "404");
        assert!(json["object"].is_null());
        assert!(json["url"].is_null());
    }

    #[test]
    fn test_year_node_label() {
        let node = BreadcrumbNode::for_year(2024, "年", "https://example.com/2024/".to_string());
        assert_eq!(node.node_type, "year");
        assert_eq!(node.label, "2024年");
        assert_eq!(node.object, Some(NodeObject::Year { year: 2024 }));
    }

    #[test]
    fn test_trail_starts_with_home() {
        let home = BreadcrumbNode::synthetic(HOME_NODE_TYPE, "Site", Some("https://example.com/".to_string()));
        let mut trail = Trail::new(home.clone());
        assert!(trail.is_home_only());
        assert_eq!(trail.current(), &home);

        trail.push(BreadcrumbNode::synthetic(NOT_FOUND_NODE_TYPE, "404 Not Found", None));
        assert_eq!(trail.home(), &home);
        assert_eq!(trail.node_types(), vec!["home", "404"]);
        assert_eq!(trail.current().label, "404 Not Found");
    }

    #[test]
    fn test_date_query_from_yaml() {
        let query: DateQuery = serde_yaml::from_str("scope: month\nyear: 2023\nmonth: 4\n").unwrap();
        assert_eq!(query, DateQuery::Month { year: 2023, month: 4 });
        assert_eq!(query.year(), 2023);
        assert!(!query.is_year());
    }
}
