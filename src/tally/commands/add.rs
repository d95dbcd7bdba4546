use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &mut S, product: Product) -> Result<CmdResult> {
    let mut catalog = store.load()?;
    catalog.create(product.clone())?;
    store.save(&catalog)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product added ({}): {}",
        product.id, product.name
    )));
    result.affected_products.push(product);
    Ok(result)
}
