pub mod anthropic;
pub mod common;
pub mod image;
pub mod product;
pub mod prompt;

pub use common::*;
pub use image::*;
pub use product::*;
pub use prompt::*;
