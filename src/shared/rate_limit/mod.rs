pub mod fixed_window;
pub mod middleware;

pub use fixed_window::{FixedWindowLimiter, FixedWindowPolicy};
pub use middleware::AuthRateLimit;
