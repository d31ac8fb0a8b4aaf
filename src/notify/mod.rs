pub mod compose_alert;
pub mod send_alert;

pub use compose_alert::{compose_alert, AlertMessage};
pub use send_alert::{SendAlert, SmtpNotifier};
