mod create_order;
mod delete_order;
mod list_orders;
mod my_orders;
mod update_order;

pub use create_order::create_order_handler;
pub use delete_order::delete_order_handler;
pub use list_orders::list_orders_handler;
pub use my_orders::my_orders_handler;
pub use update_order::update_order_handler;
