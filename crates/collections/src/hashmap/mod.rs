use thiserror::Error;

mod dict;
mod hash_table;
mod primes;
mod set_view;

#[derive(Error, Debug)]
pub enum CapacityError {
    #[error("capacity {requested} is not in the prime growth sequence")]
    NotInGrowthSequence { requested: usize },
}

pub use dict::Dict;
pub use set_view::SetView;
