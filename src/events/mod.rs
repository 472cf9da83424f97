//! Normalized event model
//!
//! 1. [`action`] - Pointer-style actions and the inbound scene notification
//! 2. [`router`] - World-channel egress and secondary semantic mapping
//!
//! # Architecture
//!
//! ```text
//! Device core ──► PointerAction ──► WorldEvent (rayPointerMotion / rayPointerAction)
//! Scene layer ──► SceneNotification ──► SemanticDispatch (xrselect* / xrsqueeze*)
//! ```

pub mod action;
pub mod router;

pub use action::{
    PointerAction, PointerButton, PointerEventKind, SceneNotification, WheelDeltaMode,
};
pub use router::{semantic_for, SemanticDispatch, SemanticEvent, SemanticEventKind, WorldEvent};
