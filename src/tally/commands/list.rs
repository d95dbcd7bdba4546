use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let catalog = store.load()?;
    let listed = catalog.iter().cloned().collect();
    Ok(CmdResult::default().with_listed_products(listed))
}
