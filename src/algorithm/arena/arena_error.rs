/// an error raised by arena operations. allocation failure itself is not
/// an error (it is represented as `None`, matching Rust's `Vec`-like
/// fallible-capacity idiom); this enum exists for the config-time
/// invariant violations a caller can still get wrong, and for a caller
/// (such as the planner) choosing to enforce a memory ceiling the arena
/// itself does not know about.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("arena usage of {used} bytes exceeds the configured limit of {limit} bytes")]
    MemoryLimitExceeded { limit: u64, used: u64 },
}
