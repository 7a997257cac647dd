//! Rapidly-Exploring Random Tree (RRT) growth in 3D.
//!
//! The tree starts with a single node at the origin. Each growth step samples
//! a target uniformly on a sphere, finds the nearest existing node with a
//! linear scan and attaches one new node to it, at most one step length away.
//!
//! # Architecture
//!
//! - [`RrtEngine`]: owns the tree and performs growth steps
//! - [`RrtTree`]: node storage and nearest-neighbor lookup
//! - [`UniformSource`]: injectable random draws, implemented for every RNG
//! - [`GrowthVisitor`]: receives each new [`Edge`] for rendering
//! - [`GrowthTicker`]: paces growth inside a redraw loop

mod config;
mod engine;
mod error;
mod sampler;
mod ticker;
mod tree;
mod visitor;

pub use config::{DEFAULT_RADIUS, DEFAULT_THRESHOLD, RrtConfig};
pub use engine::{Edge, RrtEngine, StepKind};
pub use error::ConfigError;
pub use sampler::{UniformSource, sphere_point};
pub use ticker::{DEFAULT_PERIOD, GrowthTicker};
pub use tree::{NodeId, RrtTree};
pub use visitor::{CollectingVisitor, GrowthVisitor};
