use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CartError::NotFound | CartError::ProductNotFound => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            CartError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, Json(ErrorResponse::new(name, self.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_distinguish_missing_cart_from_missing_product() {
        let (cart_status, cart_json) = CartError::NotFound.into_error_response();
        let (product_status, product_json) = CartError::ProductNotFound.into_error_response();

        assert_eq!(cart_status, StatusCode::NOT_FOUND);
        assert_eq!(product_status, StatusCode::NOT_FOUND);
        assert_eq!(cart_json.0.message, "cart.not_found");
        assert_eq!(product_json.0.message, "cart.product_not_found");
    }
}
