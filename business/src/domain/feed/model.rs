/// Category value that disables filtering.
pub const ALL_CATEGORIES: &str = "all";

/// A product read from the remote XML feed. All fields are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedProduct {
    pub id: String,
    pub name: String,
    pub detail: String,
    pub image: String,
    pub category: String,
}

/// Distinct non-empty categories, sorted ascending.
pub fn categories(products: &[FeedProduct]) -> Vec<String> {
    let mut categories: Vec<String> = products
        .iter()
        .map(|p| p.category.clone())
        .filter(|c| !c.is_empty() && c != ALL_CATEGORIES)
        .collect();
    categories.sort();
    categories.dedup();
    categories
}

/// Keeps products whose category matches exactly. `None` or `"all"` keeps everything.
pub fn filter_by_category(products: Vec<FeedProduct>, category: Option<&str>) -> Vec<FeedProduct> {
    match category {
        None | Some(ALL_CATEGORIES) => products,
        Some(selected) => products
            .into_iter()
            .filter(|p| p.category == selected)
            .collect(),
    }
}

/// What the feed panel shows: the filtered rows plus the full category list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedView {
    pub products: Vec<FeedProduct>,
    pub categories: Vec<String>,
    pub selected: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, category: &str) -> FeedProduct {
        FeedProduct {
            id: id.to_string(),
            name: format!("Product {id}"),
            category: category.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn should_list_distinct_sorted_categories() {
        let products = vec![
            product("1", "Snacks"),
            product("2", "Drinks"),
            product("3", "Snacks"),
            product("4", ""),
        ];
        assert_eq!(categories(&products), vec!["Drinks", "Snacks"]);
    }

    #[test]
    fn should_keep_everything_for_all() {
        let products = vec![product("1", "Snacks"), product("2", "Drinks")];
        assert_eq!(filter_by_category(products.clone(), Some("all")), products);
        assert_eq!(filter_by_category(products.clone(), None), products);
    }

    #[test]
    fn should_keep_exact_category_matches_only() {
        let products = vec![product("1", "Snacks"), product("2", "snacks")];
        let filtered = filter_by_category(products, Some("Snacks"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }
}
