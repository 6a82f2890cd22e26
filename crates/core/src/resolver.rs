//! Ancestor resolution
//!
//! Stores report ancestry nearest-parent first. Trails need it root first, so
//! both walks here reverse the store order before building nodes.

use crate::models::{BreadcrumbNode, ContentItem, TermId};
use crate::store::ContentStore;
use tracing::warn;

/// Resolve the ancestors of a term as breadcrumb nodes, root first
///
/// The starting term itself is not included. A root term yields an empty
/// list. Ancestor ids the store cannot resolve are skipped.
pub fn term_ancestors<S: ContentStore + ?Sized>(
    store: &S,
    term_id: TermId,
    taxonomy: &str,
) -> Vec<BreadcrumbNode> {
    let ids = store.term_ancestors(term_id, taxonomy);

    ids.into_iter()
        .rev()
        .filter_map(|id| {
            let term = store.term(id, taxonomy);
            if term.is_none() {
                warn!(term_id, ancestor = id, taxonomy, "ancestor term not found, skipping");
            }
            term
        })
        .map(|term| BreadcrumbNode::for_term(taxonomy, &term))
        .collect()
}

/// Resolve the parent chain of a content item as breadcrumb nodes, root first
///
/// Nodes are typed with the item's own content type. The item itself is not
/// included.
pub fn content_ancestors<S: ContentStore + ?Sized>(
    store: &S,
    item: &ContentItem,
) -> Vec<BreadcrumbNode> {
    let ids = store.content_ancestors(item.id);

    ids.into_iter()
        .rev()
        .filter_map(|id| {
            let ancestor = store.content_item(id);
            if ancestor.is_none() {
                warn!(item_id = item.id, ancestor = id, "ancestor item not found, skipping");
            }
            ancestor
        })
        .map(|ancestor| BreadcrumbNode::for_item(&item.content_type, &ancestor))
        .collect()
}
