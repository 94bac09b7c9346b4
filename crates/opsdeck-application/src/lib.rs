//! Application layer for OpsDeck.
//!
//! This crate provides the services that coordinate the workspace core
//! with the simulated assistant backend: the scripted responder and the
//! service that drives delayed assistant replies.

pub mod assistant_service;
pub mod scripted_responder;

pub use assistant_service::AssistantService;
pub use scripted_responder::{ScriptedResponder, suggested_prompts};
