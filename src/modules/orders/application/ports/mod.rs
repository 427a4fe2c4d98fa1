pub mod outgoing;

pub use outgoing::{NewOrder, OrderRepository, OrderRepositoryError};
