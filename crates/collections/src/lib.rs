pub mod hashmap;

pub use hashmap::{CapacityError, Dict, SetView};
