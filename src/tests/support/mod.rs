pub mod app_state_builder;
pub mod auth_helper;
pub mod stubs;

pub use app_state_builder::TestAppStateBuilder;
