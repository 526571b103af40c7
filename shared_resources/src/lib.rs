//! Types shared by the battery controller and the elevator cars: call
//! directions, statuses, floor numbering, devices, the request queue, events,
//! configuration and errors.

pub mod backoff;
pub mod call;
pub mod config;
pub mod devices;
pub mod error;
pub mod event;
pub mod floor;
pub mod request_queue;
pub mod status;
