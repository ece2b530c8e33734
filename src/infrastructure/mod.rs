pub mod audio;
mod http_client;
pub mod llm;
pub mod observability;

pub use http_client::build_http_client;
