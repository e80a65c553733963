pub mod alerts_service;

pub use alerts_service::AlertsService;
