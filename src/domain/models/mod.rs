//! 领域实体

pub mod pair;

pub use pair::{ComposedEnvironment, ExecutionRequest, NameValuePair, split_entry};
