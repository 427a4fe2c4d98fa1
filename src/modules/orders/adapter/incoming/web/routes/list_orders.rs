use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::orders::application::domain::entities::Order;
use crate::modules::orders::application::use_cases::list_all_orders::ListAllOrdersError;
use crate::shared::api::ApiMessage;
use crate::AppState;

#[derive(Serialize)]
struct OrdersResponse {
    orders: Vec<Order>,
}

#[get("/orders")]
pub async fn list_orders_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.list_all_orders_use_case.execute().await {
        Ok(orders) => HttpResponse::Ok().json(OrdersResponse { orders }),

        Err(ListAllOrdersError::StoreError(ref e)) => {
            error!(error = %e, "Failed to fetch orders");
            ApiMessage::internal_error("Failed to fetch orders")
        }
    }
}
