//! 应用服务

pub mod arg_partitioner;
pub mod env_composer;
pub mod env_service;

pub use arg_partitioner::ArgPartitioner;
pub use env_composer::EnvComposer;
pub use env_service::{EnvService, ResolveRequest};
