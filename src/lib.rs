pub mod config;
pub mod dispatch;
pub mod model;
pub mod transform;
