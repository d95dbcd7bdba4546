use crate::error::{Result, TallyError};
use crate::model::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The full set of live products at a point in time.
///
/// Insertion order is preserved for display. Lookup is a linear scan by id,
/// which is the accepted cost at catalog scale (tens of products, not
/// thousands); there is no secondary index to keep consistent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

/// A partial update for [`Catalog::update`]. Fields left as `None` keep the
/// product's current value.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub discount_percent: Option<Decimal>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product. Ids must be unique among live products; a clash
    /// leaves the catalog untouched.
    pub fn create(&mut self, product: Product) -> Result<()> {
        if self.products.iter().any(|p| p.id == product.id) {
            return Err(TallyError::DuplicateProduct(product.id));
        }
        self.products.push(product);
        Ok(())
    }

    pub fn find(&self, id: u32) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(TallyError::ProductNotFound(id))
    }

    /// Patch the matching product in place. Only fields present in the patch
    /// change; everything else is untouched.
    pub fn update(&mut self, id: u32, patch: ProductPatch) -> Result<&Product> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(TallyError::ProductNotFound(id))?;

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(discount) = patch.discount_percent {
            product.discount_percent = discount;
        }
        Ok(product)
    }

    /// Remove the first product with the given id and return it. Deleting an
    /// absent id fails with `ProductNotFound`, so a repeated delete fails the
    /// same way rather than crashing.
    pub fn delete(&mut self, id: u32) -> Result<Product> {
        let pos = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(TallyError::ProductNotFound(id))?;
        Ok(self.products.remove(pos))
    }

    /// All live products in insertion order. The iterator is lazy, finite,
    /// and restartable.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
