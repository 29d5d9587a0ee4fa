pub mod bucket;
pub mod error_rate;
pub mod instant;
pub mod top_apps;
pub mod window;
