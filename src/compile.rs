use std::collections::BTreeMap;

use kurbo::Shape as _;

use crate::{
    core::{BezPath, ProgressWindow},
    ease::Ease,
    error::{ScrollvineError, ScrollvineResult},
    model::{PathSegment, SkillCategory, SpinnerConfig, TreeConfig},
};

/// Accuracy for arc-length resolution of segment paths (viewBox units).
const PERIMETER_ACCURACY: f64 = 1e-3;

/// Immutable per-scene plan: every segment, node and leaf with its resolved
/// geometry and `[start, end)` progress window. Produced once by
/// [`compile`]; evaluation reads it every tick and never writes back.
#[derive(Clone, Debug, serde::Serialize)]
pub struct TreePlan {
    pub trunks: Vec<PlannedSegment>,
    pub twigs: Vec<PlannedSegment>,
    pub branches: Vec<PlannedSegment>,
    pub nodes: Vec<PlannedNode>,
    pub leaves: Vec<PlannedLeaf>,
    pub spinner: SpinnerConfig,
}

impl TreePlan {
    /// Segments in draw order: trunks, then twigs, then branches.
    pub fn segments(&self) -> impl Iterator<Item = &PlannedSegment> {
        self.trunks.iter().chain(&self.twigs).chain(&self.branches)
    }
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct PlannedSegment {
    pub id: String,
    /// Geometric stroke length in viewBox units; 0 when the path data did
    /// not parse (dash animation is skipped for such segments).
    pub length: f64,
    pub window: ProgressWindow,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct PlannedNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub skill: String,
    pub category: SkillCategory,
    pub proficiency: u8,
    pub ease: Ease,
    pub final_scale: f64,
    /// Fruit pop window, straddling the owning branch's completion.
    pub fruit: ProgressWindow,
    /// Label fade window, immediately after the fruit window.
    pub label: ProgressWindow,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct PlannedLeaf {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub rotation_deg: f64,
    pub scale: f64,
    pub color: String,
    pub ease: Ease,
    pub window: ProgressWindow,
}

/// Resolve a [`TreeConfig`] into a [`TreePlan`].
///
/// Validates the config, resolves segment lengths, derives all progress
/// windows and enforces the draw-order invariant (window starts within each
/// ordered sequence must be non-decreasing, so a branch can never be drawn
/// before the twig tier that visually supports it).
#[tracing::instrument(skip(config))]
pub fn compile(config: &TreeConfig) -> ScrollvineResult<TreePlan> {
    config.validate()?;
    let t = &config.timing;

    let trunk_window = ProgressWindow::new(0.0, 1.0 / t.trunk_rate)?;
    let trunks: Vec<PlannedSegment> = config
        .trunks
        .iter()
        .map(|seg| PlannedSegment {
            id: seg.id.clone(),
            length: resolve_length(seg),
            window: seg.window.unwrap_or(trunk_window),
        })
        .collect();

    let twigs = partitioned(&config.twigs, t.twig_lead, t.twig_span, t.twig_width)?;
    let branches = partitioned(
        &config.branches,
        t.branch_lead,
        t.branch_span,
        t.branch_width,
    )?;

    ensure_draw_order("twig", &twigs)?;
    ensure_draw_order("branch", &branches)?;

    let branch_windows: BTreeMap<&str, ProgressWindow> = branches
        .iter()
        .map(|b| (b.id.as_str(), b.window))
        .collect();

    let nodes = config
        .nodes
        .iter()
        .map(|node| {
            let bw = branch_windows[node.branch.as_str()];
            let fruit = ProgressWindow::new(bw.end - t.fruit_lead, bw.end + t.fruit_tail)?;
            let label = ProgressWindow::new(fruit.end, fruit.end + t.label_width)?;
            Ok(PlannedNode {
                id: node.id.clone(),
                x: node.x,
                y: node.y,
                skill: node.skill.clone(),
                category: node.category,
                proficiency: node.proficiency,
                ease: node.ease,
                final_scale: node.final_scale,
                fruit,
                label,
            })
        })
        .collect::<ScrollvineResult<Vec<_>>>()?;

    let leaves = config
        .leaves
        .iter()
        .map(|leaf| {
            let bw = branch_windows[leaf.branch.as_str()];
            let start = bw.start
                + bw.span() * t.leaf_branch_fraction
                + f64::from(leaf.stagger_slot) * t.leaf_stagger;
            Ok(PlannedLeaf {
                id: leaf.id.clone(),
                x: leaf.x,
                y: leaf.y,
                rotation_deg: leaf.rotation_deg,
                scale: leaf.scale,
                color: leaf.color.clone(),
                ease: leaf.ease,
                window: ProgressWindow::new(start, start + t.leaf_width)?,
            })
        })
        .collect::<ScrollvineResult<Vec<_>>>()?;

    tracing::debug!(
        segments = trunks.len() + twigs.len() + branches.len(),
        nodes = nodes.len(),
        leaves = leaves.len(),
        "compiled tree plan"
    );

    Ok(TreePlan {
        trunks,
        twigs,
        branches,
        nodes,
        leaves,
        spinner: config.spinner,
    })
}

/// Assign segment `i` of `n` the window
/// `[lead + (i/n)*span, lead + (i/n)*span + width)`, unless the segment
/// carries an explicit override.
fn partitioned(
    segments: &[PathSegment],
    lead: f64,
    span: f64,
    width: f64,
) -> ScrollvineResult<Vec<PlannedSegment>> {
    let n = segments.len();
    segments
        .iter()
        .enumerate()
        .map(|(i, seg)| {
            let window = match seg.window {
                Some(w) => w,
                None => {
                    let start = lead + (i as f64 / n as f64) * span;
                    ProgressWindow::new(start, start + width)?
                }
            };
            Ok(PlannedSegment {
                id: seg.id.clone(),
                length: resolve_length(seg),
                window,
            })
        })
        .collect()
}

fn resolve_length(seg: &PathSegment) -> f64 {
    match BezPath::from_svg(&seg.d) {
        Ok(path) => path.perimeter(PERIMETER_ACCURACY),
        Err(err) => {
            // One bad segment must not take down the scene; it simply
            // renders without dash animation.
            tracing::warn!(segment = %seg.id, error = %err, "unparseable path data, length set to 0");
            0.0
        }
    }
}

fn ensure_draw_order(kind: &str, segments: &[PlannedSegment]) -> ScrollvineResult<()> {
    for pair in segments.windows(2) {
        if pair[1].window.start < pair[0].window.start {
            return Err(ScrollvineError::compile(format!(
                "{kind} '{}' would start before '{}' and break draw order",
                pair[1].id, pair[0].id
            )));
        }
    }
    Ok(())
}
