//! Event module
//!
//! Typed gameplay events and the bus that fans them out.

pub mod bus;
pub mod types;

pub use bus::{EventBus, Handler, SubscriptionId};
pub use types::{
    EventKind, GameEvent, MultiplierChangedArgs, PointScoredArgs, RoomChangedArgs,
    ScoreChangedArgs,
};
