pub mod arena;
pub mod cache;
pub mod closed_set;
pub mod queue;
pub mod search;
