use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::orders::application::domain::entities::{Measurements, Order, OrderStatus};
use crate::modules::orders::application::use_cases::create_order::{
    CreateOrderCommand, CreateOrderError,
};
use crate::shared::api::ApiMessage;
use crate::AppState;

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateOrderRequestDto {
    pub user_id: Option<Uuid>,
    pub price: Option<f64>,
    pub dress_type: Option<String>,
    pub status: Option<OrderStatus>,
    pub measurements: Option<Measurements>,
}

#[derive(Serialize)]
struct OrderResponseBody {
    message: String,
    order: Order,
}

#[post("/orders")]
pub async fn create_order_handler(
    admin: AdminUser,
    req: web::Json<CreateOrderRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = CreateOrderCommand {
        user_id: dto.user_id,
        price: dto.price,
        dress_type: dto.dress_type,
        status: dto.status,
        measurements: dto.measurements,
    };

    match data.create_order_use_case.execute(command).await {
        Ok(order) => {
            info!(
                admin = %admin.email,
                order_id = %order.id,
                tracking_no = %order.tracking_no,
                "Order created"
            );
            HttpResponse::Created().json(OrderResponseBody {
                message: "Order created".to_string(),
                order,
            })
        }

        Err(CreateOrderError::MissingFields) => {
            ApiMessage::bad_request("userId, price, and dressType are required")
        }

        Err(CreateOrderError::InvalidPrice) => {
            ApiMessage::bad_request("price must be a positive number")
        }

        Err(CreateOrderError::OwnerNotFound) => {
            ApiMessage::not_found("User not found for this order")
        }

        Err(CreateOrderError::TrackingExhausted) => {
            error!("Tracking number allocation exhausted");
            ApiMessage::internal_error("Failed to create order")
        }

        Err(CreateOrderError::StoreError(ref e)) => {
            error!(error = %e, "Failed to create order");
            ApiMessage::internal_error("Failed to create order")
        }
    }
}
