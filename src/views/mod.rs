pub mod bills;
pub mod dashboard;
pub mod login;
pub mod new_bill;

pub use bills::render_bills;
pub use dashboard::render_dashboard;
pub use login::render_login;
pub use new_bill::render_new_bill;
