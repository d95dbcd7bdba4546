use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Order;
use crate::pricing::price_order;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &S, order: &Order) -> Result<CmdResult> {
    let catalog = store.load()?;
    let invoice = price_order(order, &catalog);

    let mut result = CmdResult::default();
    for id in &invoice.missing {
        result.add_message(CmdMessage::warning(format!(
            "Product {} not found, line skipped",
            id
        )));
    }
    Ok(result.with_invoice(invoice))
}
