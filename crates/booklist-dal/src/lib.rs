pub mod book;
pub mod collection;
pub mod error;
pub mod gateway;
pub mod local;
pub mod normalize;
pub mod remote;

pub use error::Error;
