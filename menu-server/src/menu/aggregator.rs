//! Menu aggregation service
//!
//! Fans out one fetch task per configured category, joins them all, and
//! assembles the catalog. Two deliberate policies:
//!
//! - Output order is the configured category order, never completion order
//!   (`join_all` yields results in submission order).
//! - A category whose fetch fails is omitted from the catalog and logged;
//!   a single upstream failure never fails the whole aggregation.

use std::sync::Arc;

use futures::future::join_all;

use crate::menu::client::MenuFetcher;
use crate::menu::format::format_category_name;
use shared::models::Category;

/// Aggregates the catalog from all configured upstream categories.
#[derive(Clone)]
pub struct MenuService {
    fetcher: Arc<dyn MenuFetcher>,
    categories: Vec<String>,
}

impl MenuService {
    pub fn new(fetcher: Arc<dyn MenuFetcher>, categories: Vec<String>) -> Self {
        Self {
            fetcher,
            categories,
        }
    }

    /// Fetch all categories concurrently and build the catalog.
    ///
    /// Infallible by design: failed categories are dropped, so the result
    /// holds one entry per *successful* category, in configured order.
    pub async fn get_menu(&self) -> Vec<Category> {
        let tasks = self.categories.iter().map(|slug| {
            let fetcher = self.fetcher.clone();
            let slug = slug.clone();
            async move {
                let result = fetcher.fetch(&slug).await;
                (slug, result)
            }
        });

        join_all(tasks)
            .await
            .into_iter()
            .filter_map(|(slug, result)| match result {
                Ok(items) => Some(Category {
                    name: format_category_name(&slug),
                    items: items.into_iter().map(|raw| raw.normalize()).collect(),
                }),
                Err(e) => {
                    tracing::warn!(category = %slug, error = %e, "Category fetch failed, omitting from catalog");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::client::{FetchError, SourceMenuItem};
    use async_trait::async_trait;
    use std::time::Duration;

    /// Mock fetcher: instant failure for slugs listed in `failing`, and a
    /// longer delay for earlier slugs so completion order is the reverse
    /// of submission order.
    struct MockFetcher {
        slugs: Vec<String>,
        failing: Vec<String>,
    }

    #[async_trait]
    impl MenuFetcher for MockFetcher {
        async fn fetch(&self, slug: &str) -> Result<Vec<SourceMenuItem>, FetchError> {
            if self.failing.iter().any(|f| f == slug) {
                return Err(FetchError::Status(reqwest::StatusCode::BAD_GATEWAY));
            }

            let position = self.slugs.iter().position(|s| s == slug).unwrap_or(0);
            let delay = (self.slugs.len() - position) as u64 * 10;
            tokio::time::sleep(Duration::from_millis(delay)).await;

            Ok(vec![SourceMenuItem {
                id: format!("{slug}-1"),
                name: format!("{slug} special"),
                dsc: String::new(),
                price: 9.99,
                img: String::new(),
            }])
        }
    }

    fn service(slugs: &[&str], failing: &[&str]) -> MenuService {
        let slugs: Vec<String> = slugs.iter().map(|s| s.to_string()).collect();
        let fetcher = MockFetcher {
            slugs: slugs.clone(),
            failing: failing.iter().map(|s| s.to_string()).collect(),
        };
        MenuService::new(Arc::new(fetcher), slugs)
    }

    #[tokio::test]
    async fn preserves_configured_order_despite_completion_order() {
        let svc = service(&["bbqs", "breads", "burgers", "drinks"], &[]);

        let menu = svc.get_menu().await;

        let names: Vec<&str> = menu.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bbqs", "Breads", "Burgers", "Drinks"]);
    }

    #[tokio::test]
    async fn failed_category_is_omitted_not_fatal() {
        let svc = service(&["bbqs", "breads", "burgers"], &["breads"]);

        let menu = svc.get_menu().await;

        let names: Vec<&str> = menu.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bbqs", "Burgers"]);
    }

    #[tokio::test]
    async fn all_fourteen_categories_aggregate() {
        let slugs = crate::core::Config::default_categories();
        let refs: Vec<&str> = slugs.iter().map(|s| s.as_str()).collect();
        let svc = service(&refs, &[]);

        let menu = svc.get_menu().await;

        assert_eq!(menu.len(), 14);
        assert_eq!(menu[7].name, "Fried Chicken");
        assert_eq!(menu[7].items[0].id, "fried-chicken-1");
    }

    #[tokio::test]
    async fn empty_category_set_yields_empty_catalog() {
        let svc = service(&[], &[]);
        assert!(svc.get_menu().await.is_empty());
    }
}
