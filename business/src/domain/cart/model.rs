use crate::domain::shared::value_objects::RecordId;

/// One product reference inside a cart with its aggregated quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product: RecordId,
    pub quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    pub id: RecordId,
    /// At most one line per product, in order of first attachment.
    pub products: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self {
            id: RecordId::generate(),
            products: Vec::new(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: RecordId, products: Vec<CartLine>) -> Self {
        Self { id, products }
    }

    /// Increments the line for `product_id`, appending a new line with
    /// quantity 1 when the product is not in the cart yet.
    pub fn attach_product(&mut self, product_id: RecordId) -> &CartLine {
        let index = match self
            .products
            .iter()
            .position(|line| line.product == product_id)
        {
            Some(index) => {
                self.products[index].quantity += 1;
                index
            }
            None => {
                self.products.push(CartLine {
                    product: product_id,
                    quantity: 1,
                });
                self.products.len() - 1
            }
        };
        &self.products[index]
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
