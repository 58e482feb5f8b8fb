use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartLine};

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    /// Referenced product id
    pub product: String,
    /// How many times the product was attached
    pub quantity: u64,
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Cart unique identifier
    pub id: String,
    /// Lines in order of first attachment
    pub products: Vec<CartLineResponse>,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            product: line.product.to_string(),
            quantity: line.quantity,
        }
    }
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id.to_string(),
            products: cart.products.into_iter().map(|l| l.into()).collect(),
        }
    }
}
