//! # Scrollvine guide
//!
//! This module is a standalone walkthrough of Scrollvine's architecture and
//! public API. If you are looking for copy/paste commands, start with the
//! repository `README.md`. If you are implementing new features, start here.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`TreeConfig`](crate::TreeConfig): the static scene (paths + nodes + leaves + timing)
//! - [`TreePlan`](crate::TreePlan): the compiled scene, with resolved path
//!   lengths and per-element progress windows
//! - [`TickSample`](crate::TickSample): one tick's input (progress + velocity)
//! - [`Evaluator`](crate::Evaluator): turns a plan and a sample into a [`RenderState`](crate::RenderState)
//! - [`RenderState`](crate::RenderState): a pure, serializable snapshot of every element
//! - [`StyleAssignment`](crate::StyleAssignment): declarative style writes for the binding layer
//!
//! The pipeline is explicitly staged:
//!
//! 1. Validate and compile the scene: [`compile`](crate::compile)
//! 2. Sample scroll input: [`ScrollContext::sample`](crate::ScrollContext::sample)
//! 3. Evaluate one tick: [`Evaluator::eval_tick`](crate::Evaluator::eval_tick)
//! 4. Flatten into style writes: [`tick_assignments`](crate::tick_assignments)
//!
//! ---
//!
//! ## "No view tree in the engine" (and why)
//!
//! Scrollvine wants evaluation to be deterministic, testable, and portable.
//! The engine never touches a DOM, a scene graph, or a clock. The external
//! shell owns all of that:
//!
//! - it reports raw scroll offsets into a [`ScrollContext`](crate::ScrollContext)
//! - it applies the returned [`StyleAssignment`](crate::StyleAssignment)s to
//!   whatever view technology it uses
//!
//! Because of this split, evaluating the same plan at the same sample always
//! yields the same [`RenderState`](crate::RenderState), tick after tick,
//! platform after platform. Scrubbing backward works for free: there is no
//! per-tick mutable animation state to rewind.
//!
//! ---
//!
//! ## Progress windows (the timing contract)
//!
//! Every animated element owns a half-open window `[start, end)` of the
//! global progress. Before the window the element is dormant, inside it the
//! element interpolates (through its easing curve), at or past the end it is
//! settled. Windows for trunks, branches, fruit, labels and leaves are all
//! derived at compile time from [`TimingConfig`](crate::TimingConfig), so a
//! single progress value drives the whole scene coherently.
//!
//! ---
//!
//! ## Building a scene
//!
//! JSON is supported via Serde, but for programmatic scenes prefer the
//! builder DSL:
//!
//! ```
//! use scrollvine::{compile, Evaluator, NodeBuilder, SkillCategory, TickSample, TreeConfigBuilder};
//!
//! let config = TreeConfigBuilder::new()
//!     .trunk("trunk-main", "M 48 98 C 48 60, 48 30, 48 4")
//!     .branch("branch-react", "M 47 10 C 46.5 9, 46 8.5, 45.5 8")
//!     .node(
//!         NodeBuilder::new("skill-react", "branch-react")
//!             .at(45.0, 8.0)
//!             .skill("React.js", SkillCategory::Frontend, 95)
//!             .build(),
//!     )
//!     .build()?;
//!
//! let plan = compile(&config)?;
//! let state = Evaluator::eval_tick(&plan, TickSample::at(0.5));
//! assert!(state.segments[0].reveal > 0.0);
//! # Ok::<(), scrollvine::ScrollvineError>(())
//! ```
//!
//! The built-in scene lives in [`skill_tree`](crate::skill_tree); the
//! `scrollvine` binary can dump its tick stream as JSON lines for
//! inspection.
