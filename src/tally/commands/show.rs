use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &S, id: u32) -> Result<CmdResult> {
    let catalog = store.load()?;
    let product = catalog.find(id)?.clone();
    Ok(CmdResult::default().with_listed_products(vec![product]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TallyError;
    use crate::store::memory::InMemoryStore;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn shows_one_product_by_id() {
        let fixture = StoreFixture::new()
            .with_product(1, "Rice", "50.00", "10")
            .with_product(2, "Beans", "8.25", "0");

        let result = run(&fixture.store, 2).unwrap();
        assert_eq!(result.listed_products.len(), 1);
        assert_eq!(result.listed_products[0].name, "Beans");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = InMemoryStore::new();
        assert!(matches!(
            run(&store, 1),
            Err(TallyError::ProductNotFound(1))
        ));
    }
}
