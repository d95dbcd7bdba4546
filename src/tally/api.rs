//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all tally operations, regardless of the UI being
//! used.
//!
//! The facade dispatches to command functions and returns structured
//! `Result<CmdResult>` values. It does no business logic (that lives in
//! `commands/*.rs`), no I/O, and no presentation — it returns data
//! structures, not strings.
//!
//! `TallyApi<S: CatalogStore>` is generic over the storage backend:
//! production uses `TallyApi<FileStore>`, tests use
//! `TallyApi<InMemoryStore>`, so the facade can be exercised without
//! touching the filesystem.

use crate::catalog::ProductPatch;
use crate::commands;
use crate::error::Result;
use crate::model::{Order, Product};
use crate::store::CatalogStore;

/// The main API facade for tally operations.
///
/// All UI clients (CLI menus, one-shot subcommands, anything else) should
/// interact through this API.
pub struct TallyApi<S: CatalogStore> {
    store: S,
}

impl<S: CatalogStore> TallyApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_product(&mut self, product: Product) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, product)
    }

    pub fn list_products(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn show_product(&self, id: u32) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, id)
    }

    pub fn modify_product(&mut self, id: u32, patch: ProductPatch) -> Result<commands::CmdResult> {
        commands::modify::run(&mut self.store, id, patch)
    }

    pub fn delete_product(&mut self, id: u32) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn checkout(&self, order: &Order) -> Result<commands::CmdResult> {
        commands::checkout::run(&self.store, order)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use rust_decimal::Decimal;

    #[test]
    fn facade_dispatches_to_commands() {
        let mut api = TallyApi::new(InMemoryStore::new());
        api.add_product(Product::new(
            1,
            "Rice".to_string(),
            Decimal::from(50),
            Decimal::TEN,
        ))
        .unwrap();

        let listed = api.list_products().unwrap().listed_products;
        assert_eq!(listed.len(), 1);

        let mut order = Order::new();
        order.add_line(1, 2);
        let invoice = api.checkout(&order).unwrap().invoice.unwrap();
        assert_eq!(invoice.total, Decimal::from(90));
    }
}
