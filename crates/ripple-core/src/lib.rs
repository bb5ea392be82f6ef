pub mod config;
pub mod constants;
pub mod distortion;
pub mod error;
pub mod lifecycle;
pub mod pointer;
pub mod pool;

pub use config::*;
pub use constants::*;
pub use distortion::*;
pub use error::*;
pub use lifecycle::*;
pub use pointer::*;
pub use pool::*;
