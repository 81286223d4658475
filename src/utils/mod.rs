// Utils compartidos

pub mod constants;
pub mod format;
pub mod routes;
pub mod storage;

pub use constants::*;
pub use format::{format_date, format_status};
pub use routes::Route;
pub use storage::{LocalStorage, SessionStorage};
