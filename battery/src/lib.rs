//! Building level of the elevator controller: splits the floors across
//! columns, dispatches hall calls to the best elevator of a column and
//! replays configured scenarios.

pub mod battery;
pub mod column;
pub mod debug;
pub mod dispatcher;
pub mod logger;
pub mod scenario;
pub mod topology;

pub use crate::battery::Battery;
pub use crate::column::Column;
