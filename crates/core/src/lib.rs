//! site_breadcrumbs_core - Core library for site breadcrumb trails
//!
//! This crate builds the ordered breadcrumb trail (home, archives, ancestors,
//! current page) for a page on a content-managed site. Site data is read
//! through the [`ContentStore`] trait, so the engine works over any backend.
//!
//! # Features
//!
//! - **Page Classification**: Picks one page kind (404, singular, content
//!   type archive, category, date archive) in a fixed priority order.
//! - **Ancestor Resolution**: Walks category and parent-item hierarchies and
//!   emits them root first.
//! - **Stateless Builder**: Every call starts a fresh trail; a builder can be
//!   shared freely.
//! - **Fixture Store**: An in-memory store loaded from YAML or JSON.
//! - **Multiple Output Formats**: JSON and YAML.
//!
//! # Example
//!
//! ```rust,no_run
//! use site_breadcrumbs_core::{
//!     format_output, get_breadcrumbs, ContentStore, InMemoryStore, OptionOverrides,
//!     OutputFormat, PageContext, TrailConfig,
//! };
//! use std::path::Path;
//!
//! let store = InMemoryStore::load(Path::new("site.yaml")).unwrap();
//! let item = store.content_item(42).unwrap();
//!
//! let trail = get_breadcrumbs(
//!     &store,
//!     &PageContext::singular(item),
//!     &OptionOverrides::default(),
//!     &TrailConfig::default(),
//! );
//!
//! println!("{}", format_output(&trail, OutputFormat::Json).unwrap());
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod models;
pub mod output;
pub mod resolver;
pub mod store;

// Re-exports for convenience
pub use config::{load_overrides, BreadcrumbOptions, ConfigError, OptionOverrides, TrailConfig};
pub use context::{classify, PageContext, PageKind, QueriedObject};
pub use engine::{get_breadcrumbs, TrailBuilder};
pub use models::{
    BreadcrumbNode, ContentItem, ContentTypeDescriptor, DateQuery, ItemId, NodeObject, SiteInfo,
    Term, TermId, Trail, CATEGORY_TAXONOMY,
};
pub use output::{format_output, FormatError, OutputFormat};
pub use store::{ContentStore, FixtureFormat, InMemoryStore, SiteFixture, StoreError};
