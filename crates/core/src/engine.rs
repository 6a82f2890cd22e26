//! Trail assembly engine
//!
//! [`TrailBuilder`] classifies the page context once and runs the single
//! assembler for that page kind. The builder only borrows the store and
//! config; every call starts a fresh trail, so one builder can be shared.

use crate::config::{BreadcrumbOptions, OptionOverrides, TrailConfig};
use crate::context::{classify, PageContext, PageKind};
use crate::models::{
    BreadcrumbNode, ContentItem, ContentTypeDescriptor, DateQuery, Term, Trail, CATEGORY_TAXONOMY,
};
use crate::resolver;
use crate::store::ContentStore;
use tracing::{debug, instrument, warn};

/// Breadcrumb trail builder
pub struct TrailBuilder<'a, S: ContentStore + ?Sized> {
    store: &'a S,
    config: &'a TrailConfig,
}

impl<'a, S: ContentStore + ?Sized> TrailBuilder<'a, S> {
    /// Create a builder over a store
    pub fn new(store: &'a S, config: &'a TrailConfig) -> Self {
        Self { store, config }
    }

    /// Build the trail for a page
    #[instrument(skip_all)]
    pub fn build(&self, page: &PageContext, overrides: &OptionOverrides) -> Trail {
        let options = BreadcrumbOptions::defaults(&self.store.site()).merged(overrides);
        let mut trail = Trail::new(options.home);

        let kind = classify(page);
        debug!(kind = kind.label(), "page classified");

        match kind {
            PageKind::NotFound => trail.push(options.not_found),
            PageKind::Singular(item) => self.assign_singular(&mut trail, item),
            PageKind::PostTypeArchive(descriptor) => {
                self.assign_post_type_archive(&mut trail, descriptor)
            }
            PageKind::CategoryTerm(term) => self.assign_category(&mut trail, term),
            PageKind::DateArchive(query) => self.assign_date_archive(&mut trail, query),
            PageKind::Default => {}
        }

        debug!(nodes = trail.len(), "trail built");
        trail
    }

    fn assign_date_archive(&self, trail: &mut Trail, query: &DateQuery) {
        match *query {
            DateQuery::Year { year } => trail.push(BreadcrumbNode::for_year(
                year,
                &self.config.year_suffix,
                self.store.year_link(year),
            )),
            // Monthly and daily archives have no node of their own yet
            DateQuery::Month { .. } | DateQuery::Day { .. } => {
                debug!(?query, "date archive granularity not supported, skipping");
            }
        }
    }

    fn assign_category(&self, trail: &mut Trail, term: &Term) {
        self.push_category(trail, term);
    }

    fn assign_post_type_archive(&self, trail: &mut Trail, descriptor: &ContentTypeDescriptor) {
        if descriptor.has_archive {
            trail.push(BreadcrumbNode::for_archive(descriptor));
        }
    }

    fn assign_singular(&self, trail: &mut Trail, item: &ContentItem) {
        let descriptor = self.store.content_type(&item.content_type);
        if descriptor.is_none() {
            warn!(content_type = %item.content_type, "unknown content type");
        }

        if let Some(descriptor) = descriptor.as_ref().filter(|d| d.has_archive) {
            trail.push(BreadcrumbNode::for_archive(descriptor));
        }

        if let Some(category_id) = item.primary_category {
            match self.store.term(category_id, CATEGORY_TAXONOMY) {
                Some(category) => self.push_category(trail, &category),
                None => warn!(item_id = item.id, category_id, "primary category not found, skipping"),
            }
        }

        let hierarchical = descriptor.as_ref().is_some_and(|d| d.hierarchical);
        if hierarchical && item.parent().is_some() {
            trail.extend(resolver::content_ancestors(self.store, item));
        }

        trail.push(BreadcrumbNode::for_item(&item.content_type, item));
    }

    /// Category ancestors (if any) followed by the category itself
    fn push_category(&self, trail: &mut Trail, term: &Term) {
        if term.parent().is_some() {
            trail.extend(resolver::term_ancestors(self.store, term.id, CATEGORY_TAXONOMY));
        }
        trail.push(BreadcrumbNode::for_term(CATEGORY_TAXONOMY, term));
    }
}

/// Build the breadcrumb trail for a page in one call
pub fn get_breadcrumbs<S: ContentStore + ?Sized>(
    store: &S,
    page: &PageContext,
    overrides: &OptionOverrides,
    config: &TrailConfig,
) -> Trail {
    TrailBuilder::new(store, config).build(page, overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NodeObject;
    use crate::store::{sample_store, InMemoryStore};

    fn build(store: &InMemoryStore, page: &PageContext) -> Trail {
        get_breadcrumbs(store, page, &OptionOverrides::default(), &TrailConfig::default())
    }

    #[test]
    fn test_home_only() {
        let store = sample_store();
        let trail = build(&store, &PageContext::home());

        assert!(trail.is_home_only());
        assert_eq!(trail.home().node_type, "home");
        assert_eq!(trail.home().label, "Example Site");
        assert_eq!(trail.home().url.as_deref(), Some("https://example.com/"));
        assert!(trail.home().object.is_none());
    }

    #[test]
    fn test_not_found() {
        let store = sample_store();
        let trail = build(&store, &PageContext::not_found());

        assert_eq!(trail.node_types(), vec!["home", "404"]);
        assert_eq!(trail.current().label, "404 Not Found");
        assert!(trail.current().url.is_none());
    }

    #[test]
    fn test_plain_singular() {
        let store = sample_store();
        let item = store.content_item(21).unwrap();
        let trail = build(&store, &PageContext::singular(item.clone()));

        assert_eq!(trail.len(), 2);
        let current = trail.current();
        assert_eq!(current.node_type, "post");
        assert_eq!(current.label, "Untitled");
        assert_eq!(current.url.as_deref(), Some("https://example.com/untitled/"));
        assert_eq!(current.object, Some(NodeObject::ContentItem(item)));
    }

    #[test]
    fn test_singular_with_category_chain() {
        let store = sample_store();
        let item = store.content_item(20).unwrap();
        let trail = build(&store, &PageContext::singular(item));

        assert_eq!(
            trail.labels(),
            vec!["Example Site", "Tech", "Rust", "Async", "Tokio deep dive"]
        );
        assert_eq!(
            trail.node_types(),
            vec!["home", "category", "category", "category", "post"]
        );
    }

    #[test]
    fn test_singular_missing_category_is_skipped() {
        let store = sample_store();
        let item = store.content_item(22).unwrap();
        let trail = build(&store, &PageContext::singular(item));

        assert_eq!(trail.labels(), vec!["Example Site", "Orphan"]);
    }

    #[test]
    fn test_singular_page_parents() {
        let store = sample_store();
        let item = store.content_item(12).unwrap();
        let trail = build(&store, &PageContext::singular(item));

        assert_eq!(trail.labels(), vec!["Example Site", "About", "Team", "Alice"]);
        assert_eq!(trail.node_types(), vec!["home", "page", "page", "page"]);
        assert_eq!(trail.nodes()[1].url.as_deref(), Some("https://example.com/about/"));
    }

    #[test]
    fn test_singular_with_archive() {
        let store = sample_store();
        let item = store.content_item(30).unwrap();
        let trail = build(&store, &PageContext::singular(item));

        assert_eq!(trail.labels(), vec!["Example Site", "Products", "Widget"]);
        assert_eq!(trail.nodes()[1].node_type, "product");
        assert_eq!(
            trail.nodes()[1].url.as_deref(),
            Some("https://example.com/products/")
        );
    }

    #[test]
    fn test_singular_all_segments_in_order() {
        // Archive, category ancestors, category, parent items, then the item
        let store = sample_store();
        let item = store.content_item(41).unwrap();
        let trail = build(&store, &PageContext::singular(item));

        assert_eq!(
            trail.labels(),
            vec!["Example Site", "Docs", "Tech", "Rust", "Guide", "Install"]
        );
        assert_eq!(
            trail.node_types(),
            vec!["home", "doc", "category", "category", "doc", "doc"]
        );
        assert!(matches!(&trail.nodes()[1].object, Some(NodeObject::ContentType(d)) if d.name == "doc"));
        assert!(matches!(&trail.nodes()[4].object, Some(NodeObject::ContentItem(i)) if i.id == 40));
    }

    #[test]
    fn test_parent_ignored_for_flat_type() {
        // Posts are not hierarchical, so a parent id is not followed
        let store = sample_store();
        let mut item = store.content_item(21).unwrap();
        item.parent_id = 20;
        let trail = build(&store, &PageContext::singular(item));

        assert_eq!(trail.labels(), vec!["Example Site", "Untitled"]);
    }

    #[test]
    fn test_category_term_chain() {
        let store = sample_store();
        let term = store.term(3, CATEGORY_TAXONOMY).unwrap();
        let trail = build(&store, &PageContext::category(term));

        assert_eq!(trail.labels(), vec!["Example Site", "Tech", "Rust", "Async"]);
        assert_eq!(
            trail.current().url.as_deref(),
            Some("https://example.com/category/tech/rust/async/")
        );
    }

    #[test]
    fn test_root_category_term() {
        let store = sample_store();
        let term = store.term(4, CATEGORY_TAXONOMY).unwrap();
        let trail = build(&store, &PageContext::category(term));

        assert_eq!(trail.node_types(), vec!["home", "category"]);
    }

    #[test]
    fn test_post_type_archive() {
        let store = sample_store();
        let products = store.content_type("product").unwrap();
        let trail = build(&store, &PageContext::post_type_archive(products));
        assert_eq!(trail.labels(), vec!["Example Site", "Products"]);

        let posts = store.content_type("post").unwrap();
        let trail = build(&store, &PageContext::post_type_archive(posts));
        assert!(trail.is_home_only());
    }

    #[test]
    fn test_year_archive() {
        let store = sample_store();
        let trail = build(&store, &PageContext::date_archive(DateQuery::Year { year: 2024 }));

        assert_eq!(trail.len(), 2);
        let year = trail.current();
        assert_eq!(year.node_type, "year");
        assert_eq!(year.label, "2024");
        assert_eq!(year.url.as_deref(), Some("https://example.com/2024/"));
    }

    #[test]
    fn test_year_suffix() {
        let store = sample_store();
        let config = TrailConfig::new().with_year_suffix("年");
        let trail = TrailBuilder::new(&store, &config).build(
            &PageContext::date_archive(DateQuery::Year { year: 2019 }),
            &OptionOverrides::default(),
        );

        assert_eq!(trail.current().label, "2019年");
    }

    #[test]
    fn test_month_archive_is_home_only() {
        let store = sample_store();
        let page = PageContext::date_archive(DateQuery::Month { year: 2024, month: 5 });

        assert!(build(&store, &page).is_home_only());
    }

    #[test]
    fn test_home_override() {
        let store = sample_store();
        let start = BreadcrumbNode::synthetic("home", "Start", Some("https://start.test/".to_string()));
        let overrides = OptionOverrides::default().with_home(start.clone());

        let trail = get_breadcrumbs(
            &store,
            &PageContext::not_found(),
            &overrides,
            &TrailConfig::default(),
        );

        assert_eq!(trail.home(), &start);
        assert_eq!(trail.current().label, "404 Not Found");
    }

    #[test]
    fn test_not_found_override() {
        let store = sample_store();
        let missing = BreadcrumbNode::synthetic(
            "404",
            "Page not found",
            Some("https://example.com/missing/".to_string()),
        );
        let overrides = OptionOverrides::default().with_not_found(missing.clone());

        let trail = get_breadcrumbs(
            &store,
            &PageContext::not_found(),
            &overrides,
            &TrailConfig::default(),
        );

        assert_eq!(trail.len(), 2);
        assert_eq!(trail.home().label, "Example Site");
        assert_eq!(trail.current(), &missing);
    }

    #[test]
    fn test_builder_reuse_starts_fresh() {
        let store = sample_store();
        let config = TrailConfig::default();
        let builder = TrailBuilder::new(&store, &config);
        let overrides = OptionOverrides::default();

        let first = builder.build(&PageContext::not_found(), &overrides);
        let second = builder.build(&PageContext::home(), &overrides);

        assert_eq!(first.len(), 2);
        assert!(second.is_home_only());
    }

    #[test]
    fn test_home_always_first() {
        let store = sample_store();
        let pages = vec![
            PageContext::home(),
            PageContext::not_found(),
            PageContext::singular(store.content_item(12).unwrap()),
            PageContext::singular(store.content_item(20).unwrap()),
            PageContext::category(store.term(2, CATEGORY_TAXONOMY).unwrap()),
            PageContext::post_type_archive(store.content_type("product").unwrap()),
            PageContext::date_archive(DateQuery::Day { year: 2024, month: 1, day: 2 }),
        ];

        for page in &pages {
            let trail = build(&store, page);
            assert_eq!(trail.home().node_type, "home");
        }
    }
}
