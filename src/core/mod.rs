pub mod cookies;
pub mod site_client;
pub mod types;
