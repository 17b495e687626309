mod scalar_map;
mod scalar_registry;

pub use scalar_map::ScalarFn;
pub use scalar_map::ScalarMap;
pub use scalar_registry::ScalarRegistry;
