pub mod error;
pub mod redirect;

pub use error::{Result, TestInfraError};
pub use redirect::{RedirectConfig, RedirectServer};
