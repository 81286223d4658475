pub mod bills_viewmodel;
pub mod login_viewmodel;
pub mod new_bill_viewmodel;

pub use bills_viewmodel::{sort_bills_for_display, BillsViewModel};
pub use login_viewmodel::LoginViewModel;
pub use new_bill_viewmodel::NewBillViewModel;
