pub mod breakdown;
pub mod error;
pub mod gemini;
pub mod proxy;

pub use breakdown::*;
pub use error::AppError;
pub use proxy::{ProxyEvent, ProxyResponse};
