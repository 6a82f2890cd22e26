//! Content store interface
//!
//! The trail engine never talks to a database directly. Everything it needs
//! about the site (items, terms, content types, ancestry, archive links) is
//! read through the [`ContentStore`] trait. [`InMemoryStore`] is a
//! fixture-backed implementation loadable from YAML or JSON.

use crate::models::{ContentItem, ContentTypeDescriptor, ItemId, SiteInfo, Term, TermId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML fixture error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON fixture error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unsupported fixture format: {0}")]
    UnsupportedFormat(String),

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: u64 },

    #[error("Duplicate {kind} key: {key}")]
    DuplicateKey { kind: &'static str, key: String },
}

/// Read-only access to site content
///
/// Lookups are infallible: anything missing comes back as `None` or an empty
/// list, and the engine skips the segment that needed it.
pub trait ContentStore {
    /// Site name and home URL
    fn site(&self) -> SiteInfo;

    /// Descriptor of a content type by key
    fn content_type(&self, key: &str) -> Option<ContentTypeDescriptor>;

    /// Content item by id
    fn content_item(&self, id: ItemId) -> Option<ContentItem>;

    /// Ancestor ids of a content item, nearest parent first
    fn content_ancestors(&self, id: ItemId) -> Vec<ItemId>;

    /// Term by id within a taxonomy
    fn term(&self, id: TermId, taxonomy: &str) -> Option<Term>;

    /// Ancestor ids of a term, nearest parent first
    fn term_ancestors(&self, id: TermId, taxonomy: &str) -> Vec<TermId>;

    /// Canonical link of a year archive
    fn year_link(&self, year: i32) -> String;
}

/// Fixture file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    Yaml,
    Json,
}

impl FixtureFormat {
    /// Determine format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Some(FixtureFormat::Yaml),
            "json" => Some(FixtureFormat::Json),
            _ => None,
        }
    }

    /// Determine format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Serialized description of a site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteFixture {
    pub site: SiteInfo,

    /// Year archive link template, `{home}` and `{year}` are substituted
    #[serde(default = "default_year_link_template")]
    pub year_link_template: String,

    #[serde(default)]
    pub content_types: Vec<ContentTypeDescriptor>,

    #[serde(default)]
    pub items: Vec<ContentItem>,

    #[serde(default)]
    pub terms: Vec<Term>,
}

fn default_year_link_template() -> String {
    "{home}/{year}/".to_string()
}

/// Fixture-backed content store
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    site: SiteInfo,
    year_link_template: String,
    content_types: HashMap<String, ContentTypeDescriptor>,
    items: HashMap<ItemId, ContentItem>,
    terms: HashMap<(String, TermId), Term>,
}

impl InMemoryStore {
    /// Build a store from a fixture, rejecting duplicate ids and keys
    pub fn from_fixture(fixture: SiteFixture) -> Result<Self, StoreError> {
        let mut content_types = HashMap::with_capacity(fixture.content_types.len());
        for descriptor in fixture.content_types {
            let key = descriptor.name.clone();
            if content_types.contains_key(&key) {
                return Err(StoreError::DuplicateKey {
                    kind: "content type",
                    key,
                });
            }
            content_types.insert(key, descriptor);
        }

        let mut items = HashMap::with_capacity(fixture.items.len());
        for item in fixture.items {
            let id = item.id;
            if items.insert(id, item).is_some() {
                return Err(StoreError::DuplicateId { kind: "item", id });
            }
        }

        let mut terms = HashMap::with_capacity(fixture.terms.len());
        for term in fixture.terms {
            let id = term.id;
            if terms.insert((term.taxonomy.clone(), id), term).is_some() {
                return Err(StoreError::DuplicateId { kind: "term", id });
            }
        }

        Ok(Self {
            site: fixture.site,
            year_link_template: fixture.year_link_template,
            content_types,
            items,
            terms,
        })
    }

    /// Parse a YAML fixture
    pub fn from_yaml_str(source: &str) -> Result<Self, StoreError> {
        Self::from_fixture(serde_yaml::from_str(source)?)
    }

    /// Parse a JSON fixture
    pub fn from_json_str(source: &str) -> Result<Self, StoreError> {
        Self::from_fixture(serde_json::from_str(source)?)
    }

    /// Load a fixture file, picking the format from its extension
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let format = FixtureFormat::from_path(path)
            .ok_or_else(|| StoreError::UnsupportedFormat(path.display().to_string()))?;
        let source = fs::read_to_string(path)?;

        let store = match format {
            FixtureFormat::Yaml => Self::from_yaml_str(&source)?,
            FixtureFormat::Json => Self::from_json_str(&source)?,
        };

        tracing::debug!(
            ?path,
            items = store.items.len(),
            terms = store.terms.len(),
            "loaded site fixture"
        );

        Ok(store)
    }

    /// Walk parent links from `start`, nearest parent first
    ///
    /// Stops at a root (0), at an id the lookup cannot resolve, or when an id
    /// repeats.
    fn walk_parents(start: u64, parent_of: impl Fn(u64) -> Option<u64>) -> Vec<u64> {
        let mut ancestors = Vec::new();
        let mut seen = HashSet::from([start]);
        let mut current = start;

        while let Some(parent) = parent_of(current) {
            if parent == 0 || !seen.insert(parent) {
                break;
            }
            ancestors.push(parent);
            current = parent;
        }

        ancestors
    }
}

impl ContentStore for InMemoryStore {
    fn site(&self) -> SiteInfo {
        self.site.clone()
    }

    fn content_type(&self, key: &str) -> Option<ContentTypeDescriptor> {
        self.content_types.get(key).cloned()
    }

    fn content_item(&self, id: ItemId) -> Option<ContentItem> {
        self.items.get(&id).cloned()
    }

    fn content_ancestors(&self, id: ItemId) -> Vec<ItemId> {
        Self::walk_parents(id, |current| self.items.get(&current).map(|i| i.parent_id))
    }

    fn term(&self, id: TermId, taxonomy: &str) -> Option<Term> {
        self.terms.get(&(taxonomy.to_string(), id)).cloned()
    }

    fn term_ancestors(&self, id: TermId, taxonomy: &str) -> Vec<TermId> {
        Self::walk_parents(id, |current| {
            self.terms
                .get(&(taxonomy.to_string(), current))
                .map(|t| t.parent_id)
        })
    }

    fn year_link(&self, year: i32) -> String {
        self.year_link_template
            .replace("{home}", self.site.home_url.trim_end_matches('/'))
            .replace("{year}", &year.to_string())
    }
}

/// Sample site shared by the unit tests
///
/// Categories: Tech(1) > Rust(2) > Async(3), Travel(4).
/// Pages: About(10) > Team(11) > Alice(12), Contact(13).
/// Posts: Tokio deep dive(20, Async), Untitled(21, no category),
/// Orphan(22, category 99 which does not exist).
/// Products: Widget(30) with archive.
/// Docs (archive + hierarchical): Guide(40) > Install(41, Rust).
#[cfg(test)]
pub(crate) const SAMPLE_SITE_YAML: &str = r#"
site:
  name: Example Site
  home_url: https://example.com/
content_types:
  - name: post
    label: Posts
  - name: page
    label: Pages
    hierarchical: true
  - name: product
    label: Products
    has_archive: true
    archive_url: https://example.com/products/
  - name: doc
    label: Docs
    has_archive: true
    hierarchical: true
    archive_url: https://example.com/docs/
items:
  - { id: 10, content_type: page, title: About, permalink: "https://example.com/about/" }
  - { id: 11, content_type: page, title: Team, permalink: "https://example.com/about/team/", parent_id: 10 }
  - { id: 12, content_type: page, title: Alice, permalink: "https://example.com/about/team/alice/", parent_id: 11 }
  - { id: 13, content_type: page, title: Contact, permalink: "https://example.com/contact/" }
  - { id: 20, content_type: post, title: Tokio deep dive, permalink: "https://example.com/tokio/", primary_category: 3 }
  - { id: 21, content_type: post, title: Untitled, permalink: "https://example.com/untitled/" }
  - { id: 22, content_type: post, title: Orphan, permalink: "https://example.com/orphan/", primary_category: 99 }
  - { id: 30, content_type: product, title: Widget, permalink: "https://example.com/products/widget/" }
  - { id: 40, content_type: doc, title: Guide, permalink: "https://example.com/docs/guide/" }
  - { id: 41, content_type: doc, title: Install, permalink: "https://example.com/docs/guide/install/", parent_id: 40, primary_category: 2 }
terms:
  - { id: 1, name: Tech, permalink: "https://example.com/category/tech/" }
  - { id: 2, name: Rust, permalink: "https://example.com/category/tech/rust/", parent_id: 1 }
  - { id: 3, name: Async, permalink: "https://example.com/category/tech/rust/async/", parent_id: 2 }
  - { id: 4, name: Travel, permalink: "https://example.com/category/travel/" }
"#;

#[cfg(test)]
pub(crate) fn sample_store() -> InMemoryStore {
    InMemoryStore::from_yaml_str(SAMPLE_SITE_YAML).unwrap()
}
