use serde::{Deserialize, Serialize};

use business::domain::cart::model::{Cart, CartLine};
use business::domain::shared::value_objects::RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineEntity {
    pub product: String,
    pub quantity: u64,
}

/// On-disk shape of one cart record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartEntity {
    pub id: String,
    #[serde(default)]
    pub products: Vec<CartLineEntity>,
}

impl CartEntity {
    pub fn into_domain(self) -> Cart {
        Cart::from_repository(
            RecordId::new(self.id),
            self.products
                .into_iter()
                .map(|line| CartLine {
                    product: RecordId::new(line.product),
                    quantity: line.quantity,
                })
                .collect(),
        )
    }
}

impl From<&Cart> for CartEntity {
    fn from(cart: &Cart) -> Self {
        Self {
            id: cart.id.to_string(),
            products: cart
                .products
                .iter()
                .map(|line| CartLineEntity {
                    product: line.product.to_string(),
                    quantity: line.quantity,
                })
                .collect(),
        }
    }
}
