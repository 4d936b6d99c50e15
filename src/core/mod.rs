pub mod compiler;
pub mod decode;
pub mod layout;

pub use crate::domain::ports::ConfigProvider;
