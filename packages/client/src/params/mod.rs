//! Parameter accumulation and query serialization

pub mod accumulator;
pub mod encode;
pub mod set;

pub use accumulator::{ParameterAccumulator, as_flag};
pub use encode::{build_url, encode_query};
pub use set::ParameterSet;
