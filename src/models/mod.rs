pub mod bill;
pub mod user;

pub use bill::{Bill, BillPayload, FormattedBill, UploadedReceipt};
pub use user::{Credentials, LoginResponse, NewUserPayload, User, UserType};
