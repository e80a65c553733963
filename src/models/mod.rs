pub mod alert;

pub use alert::{Alert, AlertType, CreateAlertInput, UpdateAlertInput};
