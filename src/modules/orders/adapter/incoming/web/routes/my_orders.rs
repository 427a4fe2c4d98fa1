use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::orders::application::domain::entities::Order;
use crate::modules::orders::application::use_cases::list_my_orders::ListMyOrdersError;
use crate::shared::api::ApiMessage;
use crate::AppState;

#[derive(Serialize)]
struct OrdersResponse {
    orders: Vec<Order>,
}

/// The owner id comes from the verified token context; there is no way to
/// ask for someone else's orders.
#[get("/orders/my")]
pub async fn my_orders_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.list_my_orders_use_case.execute(user.id).await {
        Ok(orders) => HttpResponse::Ok().json(OrdersResponse { orders }),

        Err(ListMyOrdersError::StoreError(ref e)) => {
            error!(error = %e, user_id = %user.id, "Failed to fetch orders");
            ApiMessage::internal_error("Failed to fetch orders")
        }
    }
}
