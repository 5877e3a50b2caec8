//! The boundary between a real-time transport and the maze engines.
//!
//! A transport (websocket, socket.io bridge, CLI, ...) deserializes a
//! [`ClientMsg`], hands it to [`MazeService::handle`] together with a
//! channel, and relays every [`ServerMsg`] that comes out of the channel to
//! its client.

pub mod config;
pub mod error;
pub mod messages;
pub mod service;

pub use config::{ServiceConfig, SpeedDelays};
pub use error::ServiceError;
pub use messages::{ClientMsg, GenerateRequest, ServerMsg, SolveRequest, StepMsg};
pub use service::{MazeService, SolveHandle, SolveJob};
