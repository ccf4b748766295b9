//! HealthVital Core Types and Definitions
//!
//! This crate provides the foundational types shared by the HealthVital
//! architecture generators. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Drawable elements rendered to layered SVG ([`draw`] module)
//! - **Architecture**: The data model behind the diagram and the spec export
//!   ([`architecture`] module)

pub mod architecture;
pub mod color;
pub mod draw;
pub mod geometry;
