//! Type-safe wrappers and enums for hockey contract data.

pub mod contract;
pub mod filters;
pub mod ids;
pub mod position;
pub mod season;

pub use contract::{ContractType, ValueTier};
pub use filters::{FallbackPolicy, SortKey, SortOrder, SourceMode, StatView};
pub use ids::PlayerId;
pub use position::Position;
pub use season::Season;
