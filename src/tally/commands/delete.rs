use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &mut S, id: u32) -> Result<CmdResult> {
    let mut catalog = store.load()?;
    let removed = catalog.delete(id)?;
    store.save(&catalog)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product deleted ({}): {}",
        removed.id, removed.name
    )));
    result.affected_products.push(removed);
    Ok(result)
}
