pub mod cycle;
pub mod toposort;

pub use cycle::is_cyclic;
pub use toposort::toposort;
