use actix_web::{delete, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::orders::application::domain::entities::Order;
use crate::modules::orders::application::use_cases::delete_order::DeleteOrderError;
use crate::shared::api::ApiMessage;
use crate::AppState;

#[derive(Serialize)]
struct OrderResponseBody {
    message: String,
    order: Order,
}

#[delete("/orders/{id}")]
pub async fn delete_order_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();

    match data.delete_order_use_case.execute(order_id).await {
        Ok(order) => {
            info!(admin = %admin.email, order_id = %order_id, "Order deleted");
            HttpResponse::Ok().json(OrderResponseBody {
                message: "Order deleted".to_string(),
                order,
            })
        }

        Err(DeleteOrderError::OrderNotFound) => ApiMessage::not_found("Order not found"),

        Err(DeleteOrderError::StoreError(ref e)) => {
            error!(error = %e, order_id = %order_id, "Failed to delete order");
            ApiMessage::internal_error("Failed to delete order")
        }
    }
}
