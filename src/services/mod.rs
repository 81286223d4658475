pub mod api_client;
pub mod store;

#[cfg(test)]
pub mod mock_store;

pub use api_client::HttpStore;
pub use store::RemoteStore;
