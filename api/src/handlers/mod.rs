pub mod error;
pub mod request;

pub use error::ApiError;
pub use request::client_ip;
