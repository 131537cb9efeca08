mod error;
pub use error::*;
mod vector;
pub use vector::*;
mod surface;
pub use surface::*;
mod body;
pub use body::*;
mod world;
pub use world::*;
pub mod config;
