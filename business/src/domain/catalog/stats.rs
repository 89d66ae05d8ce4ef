use serde::Serialize;

/// Counts derived from the two catalog collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CatalogStats {
    pub product_count: usize,
    pub provider_count: usize,
}
