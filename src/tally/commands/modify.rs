use crate::catalog::ProductPatch;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &mut S, id: u32, patch: ProductPatch) -> Result<CmdResult> {
    let mut catalog = store.load()?;
    let updated = catalog.update(id, patch)?.clone();
    store.save(&catalog)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product updated ({}): {}",
        updated.id, updated.name
    )));
    result.affected_products.push(updated);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TallyError;
    use crate::store::memory::fixtures::StoreFixture;
    use rust_decimal::Decimal;

    #[test]
    fn patches_only_given_fields_and_persists() {
        let mut fixture = StoreFixture::new().with_product(1, "Rice", "50.00", "10");

        let patch = ProductPatch {
            price: Some("60.00".parse().unwrap()),
            ..Default::default()
        };
        run(&mut fixture.store, 1, patch).unwrap();

        let catalog = fixture.store.load().unwrap();
        let product = catalog.find(1).unwrap();
        assert_eq!(product.price, "60.00".parse::<Decimal>().unwrap());
        assert_eq!(product.name, "Rice");
        assert_eq!(product.discount_percent, Decimal::TEN);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut fixture = StoreFixture::new();
        let err = run(&mut fixture.store, 5, ProductPatch::default()).unwrap_err();
        assert!(matches!(err, TallyError::ProductNotFound(5)));
    }
}
