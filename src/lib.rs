pub mod aggregation;
pub mod config;
pub mod domain {
    pub mod aggregation;
    pub mod error;
    pub mod log_record;
}
pub mod http {
    pub mod handlers {
        pub mod aggregations;
        pub mod ops;
    }
    pub mod router;
}
pub mod service {
    pub mod aggregation_service;
}
pub mod store;

#[derive(Clone)]
pub struct AppState {
    pub aggregation_service: service::aggregation_service::AggregationService,
}
