pub mod create_order;
pub mod delete_order;
pub mod list_all_orders;
pub mod list_my_orders;
pub mod update_order;
