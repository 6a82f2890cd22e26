//! Page context and page-type classification
//!
//! A [`PageContext`] is what the host resolved for the current request: a
//! set of page predicates plus the queried entity. [`classify`] turns it into
//! exactly one [`PageKind`], checking predicates in a fixed priority order.

use crate::models::{ContentItem, ContentTypeDescriptor, DateQuery, Term};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Entity the current request is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueriedObject {
    ContentItem(ContentItem),
    Term(Term),
    ContentType(ContentTypeDescriptor),
}

/// Resolved context of the page being viewed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    /// Request resolved to no content
    #[serde(default)]
    pub not_found: bool,

    /// Request targets a single content item
    #[serde(default)]
    pub singular: bool,

    /// Request targets a static page
    #[serde(default)]
    pub page: bool,

    /// Request targets a content type archive
    #[serde(default)]
    pub post_type_archive: bool,

    /// Request targets a category listing
    #[serde(default)]
    pub category: bool,

    /// Date archive query, if the request is a date archive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateQuery>,

    /// The queried entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queried: Option<QueriedObject>,
}

impl PageContext {
    /// Context of the front page
    pub fn home() -> Self {
        Self::default()
    }

    /// Context of a request that matched nothing
    pub fn not_found() -> Self {
        Self {
            not_found: true,
            ..Default::default()
        }
    }

    /// Context of a single content item
    pub fn singular(item: ContentItem) -> Self {
        Self {
            singular: true,
            queried: Some(QueriedObject::ContentItem(item)),
            ..Default::default()
        }
    }

    /// Context of a content type archive
    pub fn post_type_archive(descriptor: ContentTypeDescriptor) -> Self {
        Self {
            post_type_archive: true,
            queried: Some(QueriedObject::ContentType(descriptor)),
            ..Default::default()
        }
    }

    /// Context of a category listing
    pub fn category(term: Term) -> Self {
        Self {
            category: true,
            queried: Some(QueriedObject::Term(term)),
            ..Default::default()
        }
    }

    /// Context of a date archive
    pub fn date_archive(query: DateQuery) -> Self {
        Self {
            date: Some(query),
            ..Default::default()
        }
    }
}

/// Page type selected for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind<'a> {
    NotFound,
    Singular(&'a ContentItem),
    PostTypeArchive(&'a ContentTypeDescriptor),
    CategoryTerm(&'a Term),
    DateArchive(&'a DateQuery),
    /// Nothing matched; only the home node is emitted
    Default,
}

impl PageKind<'_> {
    /// Get human-readable label for the page kind
    pub fn label(&self) -> &'static str {
        match self {
            PageKind::NotFound => "not-found",
            PageKind::Singular(_) => "singular",
            PageKind::PostTypeArchive(_) => "post-type-archive",
            PageKind::CategoryTerm(_) => "category-term",
            PageKind::DateArchive(_) => "date-archive",
            PageKind::Default => "default",
        }
    }
}

/// Select the page kind for a context
///
/// Predicates are checked in priority order: not-found, singular (or page),
/// post-type archive, category, date archive. The first predicate that holds
/// decides the outcome. If its entity is missing or of the wrong kind the
/// result is [`PageKind::Default`]; later predicates are not consulted.
pub fn classify(context: &PageContext) -> PageKind<'_> {
    let queried = context.queried.as_ref();

    if context.not_found {
        return PageKind::NotFound;
    }

    if context.singular || context.page {
        return match queried {
            Some(QueriedObject::ContentItem(item)) => PageKind::Singular(item),
            other => entity_mismatch("singular", other),
        };
    }

    if context.post_type_archive {
        return match queried {
            Some(QueriedObject::ContentType(descriptor)) => PageKind::PostTypeArchive(descriptor),
            other => entity_mismatch("post-type-archive", other),
        };
    }

    if context.category {
        return match queried {
            Some(QueriedObject::Term(term)) => PageKind::CategoryTerm(term),
            other => entity_mismatch("category-term", other),
        };
    }

    if let Some(query) = &context.date {
        return PageKind::DateArchive(query);
    }

    debug!("no page predicate matched, emitting home only");
    PageKind::Default
}

fn entity_mismatch<'a>(kind: &str, queried: Option<&QueriedObject>) -> PageKind<'a> {
    let found = match queried {
        Some(QueriedObject::ContentItem(_)) => "content item",
        Some(QueriedObject::Term(_)) => "term",
        Some(QueriedObject::ContentType(_)) => "content type",
        None => "nothing",
    };
    warn!(kind, found, "queried entity does not match page kind, emitting home only");
    PageKind::Default
}
