//! Scrollvine is a deterministic scroll-driven SVG animation engine.
//!
//! It compiles a static scene description (a "skill tree" of paths, reveal
//! nodes and leaves) into per-element progress windows, then evaluates pure
//! render snapshots from scroll progress samples. The engine owns no view
//! tree and no clock; see [`guide`] for the full architecture walkthrough.
#![forbid(unsafe_code)]

pub mod compile;
pub mod core;
pub mod dsl;
pub mod ease;
pub mod error;
pub mod eval;
pub mod guide;
pub mod model;
pub mod pointer;
pub mod preset;
pub mod scroll;
pub mod style;

pub use crate::compile::{compile, PlannedLeaf, PlannedNode, PlannedSegment, TreePlan};
pub use crate::core::{clamp_unit, lerp, map_range, ProgressWindow};
pub use crate::dsl::{LeafBuilder, NodeBuilder, TreeConfigBuilder};
pub use crate::ease::Ease;
pub use crate::error::{ScrollvineError, ScrollvineResult};
pub use crate::eval::{
    Evaluator, LeafState, NodePhase, NodeState, RenderState, SegmentState, SpinnerState,
};
pub use crate::model::{
    Leaf, PathSegment, RevealNode, SkillCategory, SpinnerConfig, TimingConfig, TreeConfig,
};
pub use crate::preset::skill_tree;
pub use crate::scroll::{ObserverId, PinnedRegion, ScrollContext, TickObserver, TickSample};
pub use crate::style::{static_assignments, tick_assignments, StyleAssignment};
