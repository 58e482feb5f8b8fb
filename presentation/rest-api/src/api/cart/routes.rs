use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::attach_product::{
    AttachProductParams, AttachProductUseCase,
};
use business::domain::cart::use_cases::create::CreateCartUseCase;
use business::domain::cart::use_cases::get_by_id::{GetCartByIdParams, GetCartByIdUseCase};
use business::domain::shared::value_objects::RecordId;

use crate::api::cart::dto::CartResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    create_use_case: Arc<dyn CreateCartUseCase>,
    get_by_id_use_case: Arc<dyn GetCartByIdUseCase>,
    attach_product_use_case: Arc<dyn AttachProductUseCase>,
}

impl CartApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCartUseCase>,
        get_by_id_use_case: Arc<dyn GetCartByIdUseCase>,
        attach_product_use_case: Arc<dyn AttachProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_by_id_use_case,
            attach_product_use_case,
        }
    }
}

/// Cart API
///
/// Endpoints for creating carts and adding products to them.
#[OpenApi]
impl CartApi {
    /// Create an empty cart
    #[oai(path = "/carts", method = "post", tag = "ApiTags::Carts")]
    async fn create_cart(&self) -> CreateCartResponse {
        match self.create_use_case.execute().await {
            Ok(cart) => CreateCartResponse::Created(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateCartResponse::InternalError(json)
            }
        }
    }

    /// Get a cart by ID
    #[oai(path = "/carts/:cid", method = "get", tag = "ApiTags::Carts")]
    async fn get_cart_by_id(&self, cid: Path<String>) -> GetCartByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetCartByIdParams {
                id: RecordId::new(cid.0),
            })
            .await
        {
            Ok(cart) => GetCartByIdResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCartByIdResponse::NotFound(json),
                    _ => GetCartByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Add a product to a cart
    ///
    /// Increments the quantity when the product is already in the cart,
    /// otherwise appends a new line with quantity 1.
    #[oai(
        path = "/carts/:cid/product/:pid",
        method = "post",
        tag = "ApiTags::Carts"
    )]
    async fn attach_product(&self, cid: Path<String>, pid: Path<String>) -> AttachProductResponse {
        match self
            .attach_product_use_case
            .execute(AttachProductParams {
                cart_id: RecordId::new(cid.0),
                product_id: RecordId::new(pid.0),
            })
            .await
        {
            Ok(cart) => AttachProductResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AttachProductResponse::NotFound(json),
                    _ => AttachProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCartResponse {
    #[oai(status = 201)]
    Created(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartByIdResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AttachProductResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
