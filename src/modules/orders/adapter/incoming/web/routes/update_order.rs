use actix_web::{put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::orders::application::domain::entities::{Measurements, Order, OrderStatus};
use crate::modules::orders::application::use_cases::update_order::{
    UpdateOrderCommand, UpdateOrderError,
};
use crate::shared::api::ApiMessage;
use crate::AppState;

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateOrderRequestDto {
    pub status: Option<OrderStatus>,
    pub price: Option<f64>,
    pub dress_type: Option<String>,
    pub measurements: Option<Measurements>,
}

#[derive(Serialize)]
struct OrderResponseBody {
    message: String,
    order: Order,
}

#[put("/orders/{id}")]
pub async fn update_order_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateOrderRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();
    let dto = req.into_inner();

    let command = UpdateOrderCommand {
        order_id,
        status: dto.status,
        price: dto.price,
        dress_type: dto.dress_type,
        measurements: dto.measurements,
    };

    match data.update_order_use_case.execute(command).await {
        Ok(order) => {
            info!(
                admin = %admin.email,
                order_id = %order.id,
                status = order.status.as_str(),
                "Order updated"
            );
            HttpResponse::Ok().json(OrderResponseBody {
                message: "Order updated".to_string(),
                order,
            })
        }

        Err(UpdateOrderError::OrderNotFound) => ApiMessage::not_found("Order not found"),

        Err(UpdateOrderError::InvalidPrice) => {
            ApiMessage::bad_request("price must be a positive number")
        }

        Err(ref e @ UpdateOrderError::IllegalTransition { .. }) => {
            ApiMessage::bad_request(&e.to_string())
        }

        Err(UpdateOrderError::StoreError(ref e)) => {
            error!(error = %e, order_id = %order_id, "Failed to update order");
            ApiMessage::internal_error("Failed to update order")
        }
    }
}
