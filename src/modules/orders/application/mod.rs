pub mod domain;
pub mod policy;
pub mod ports;
pub mod services;
pub mod use_cases;
