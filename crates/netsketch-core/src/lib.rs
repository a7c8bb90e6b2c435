//! Netsketch Core Types
//!
//! This crate provides the foundational types shared by the Netsketch
//! network diagram editor. It includes:
//!
//! - **Geometry**: points, sizes, bounds and the canvas transform ([`geometry`])
//! - **Resize**: segment resize math and handle hit testing ([`resize`])
//! - **Identifiers**: typed entity ids and id generators ([`identifier::Id`])
//! - **Node kinds**: the closed set of node kinds ([`node_kind::NodeKind`])
//! - **Colors**: CSS color handling ([`color::Color`])

pub mod color;
pub mod geometry;
pub mod identifier;
pub mod node_kind;
pub mod resize;
