use super::CatalogStore;
use crate::catalog::Catalog;
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    catalog: Catalog,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for InMemoryStore {
    fn load(&self) -> Result<Catalog> {
        Ok(self.catalog.clone())
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        self.catalog = catalog.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Product;
    use rust_decimal::Decimal;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_product(mut self, id: u32, name: &str, price: &str, discount: &str) -> Self {
            let mut catalog = self.store.load().unwrap();
            catalog
                .create(Product::new(
                    id,
                    name.to_string(),
                    price.parse::<Decimal>().unwrap(),
                    discount.parse::<Decimal>().unwrap(),
                ))
                .unwrap();
            self.store.save(&catalog).unwrap();
            self
        }

        pub fn with_products(mut self, count: u32) -> Self {
            let mut catalog = self.store.load().unwrap();
            for i in 1..=count {
                catalog
                    .create(Product::new(
                        i,
                        format!("Test Product {}", i),
                        Decimal::from(i * 10),
                        Decimal::ZERO,
                    ))
                    .unwrap();
            }
            self.store.save(&catalog).unwrap();
            self
        }
    }
}
