pub mod error;
pub mod traits;
pub mod types;

pub use error::Error;
pub use traits::LevelsBackend;
pub use types::GenerateLevelsParams;
