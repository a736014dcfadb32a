use crate::{
    compile::{PlannedLeaf, PlannedNode, PlannedSegment, TreePlan},
    core::clamp_unit,
    model::SpinnerConfig,
    scroll::TickSample,
};

/// ViewBox units a label rises from while fading in.
const LABEL_RISE: f64 = 5.0;
/// Extra rotation (degrees) that unwinds as a leaf settles.
const LEAF_SETTLE_DEG: f64 = 30.0;

/// Complete visual state for one tick: a pure function of the plan and the
/// tick sample. Fully recomputed every tick; nothing is carried over, so a
/// partial update can never leave the scene torn.
#[derive(Clone, Debug, serde::Serialize)]
pub struct RenderState {
    /// Clamped progress this state was derived from.
    pub progress: f64,
    /// Scale-x of the section progress bar (scrubbed 0..1 with progress).
    pub progress_bar: f64,
    pub segments: Vec<SegmentState>,
    pub nodes: Vec<NodeState>,
    pub leaves: Vec<LeafState>,
    pub spinner: SpinnerState,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct SegmentState {
    pub id: String,
    /// Fraction of the stroke that is drawn, 0..1.
    pub reveal: f64,
    /// `length * (1 - reveal)`; `None` when the segment has no resolved
    /// length and dash animation is skipped.
    pub dash_offset: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum NodePhase {
    Hidden,
    Growing,
    Revealed,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct NodeState {
    pub id: String,
    /// Re-derived from progress every tick; scrolling backward reverses it.
    pub phase: NodePhase,
    pub scale: f64,
    pub opacity: f64,
    pub label_opacity: f64,
    /// Downward label offset in viewBox units, 0 once fully revealed.
    pub label_offset_y: f64,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct LeafState {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub scale: f64,
    pub rotation_deg: f64,
}

/// Rotation angles for the three ornamental rings, in degrees. `main_deg`
/// is unbounded; consumers must render rotation modulo-invariantly.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct SpinnerState {
    pub main_deg: f64,
    pub inner_deg: f64,
    pub outer_deg: f64,
}

pub struct Evaluator;

impl Evaluator {
    /// Evaluate one tick. Segments are evaluated before nodes and leaves
    /// (their phases hang off the branch windows), and the spinner uses the
    /// same sample, so the subsystems can never visibly tear.
    #[tracing::instrument(skip(plan, sample), fields(progress = sample.progress))]
    pub fn eval_tick(plan: &TreePlan, sample: TickSample) -> RenderState {
        let p = clamp_unit(sample.progress);

        let segments = plan.segments().map(|seg| eval_segment(seg, p)).collect();
        let nodes = plan.nodes.iter().map(|node| eval_node(node, p)).collect();
        let leaves = plan.leaves.iter().map(|leaf| eval_leaf(leaf, p)).collect();
        let spinner = eval_spinner(&plan.spinner, p, sample.velocity);

        RenderState {
            progress: p,
            progress_bar: p,
            segments,
            nodes,
            leaves,
            spinner,
        }
    }
}

fn eval_segment(seg: &PlannedSegment, p: f64) -> SegmentState {
    let reveal = seg.window.local_t(p);
    let dash_offset = (seg.length > 0.0).then(|| seg.length * (1.0 - reveal));
    SegmentState {
        id: seg.id.clone(),
        reveal,
        dash_offset,
    }
}

fn eval_node(node: &PlannedNode, p: f64) -> NodeState {
    let (phase, scale, opacity) = if p < node.fruit.start {
        (NodePhase::Hidden, 0.0, 0.0)
    } else if p >= node.fruit.end {
        (NodePhase::Revealed, node.final_scale, 1.0)
    } else {
        let t = node.fruit.local_t(p);
        // Opacity ramps twice as fast as the pop settles, so the orb is
        // visible while it is still overshooting.
        (
            NodePhase::Growing,
            node.ease.apply(t) * node.final_scale,
            clamp_unit(t * 2.0),
        )
    };

    let lt = node.label.local_t(p);
    NodeState {
        id: node.id.clone(),
        phase,
        scale,
        opacity,
        label_opacity: lt,
        label_offset_y: LABEL_RISE * (1.0 - lt),
    }
}

fn eval_leaf(leaf: &PlannedLeaf, p: f64) -> LeafState {
    let (opacity, scale, rotation_deg) = if p < leaf.window.start {
        (0.0, 0.0, leaf.rotation_deg)
    } else if p >= leaf.window.end {
        (1.0, leaf.scale, leaf.rotation_deg)
    } else {
        let t = leaf.window.local_t(p);
        let eased = leaf.ease.apply(t);
        (
            clamp_unit(t * 2.5),
            eased * leaf.scale,
            leaf.rotation_deg + (1.0 - eased) * LEAF_SETTLE_DEG,
        )
    };

    LeafState {
        id: leaf.id.clone(),
        x: leaf.x,
        y: leaf.y,
        opacity,
        scale,
        rotation_deg,
    }
}

fn eval_spinner(cfg: &SpinnerConfig, p: f64, velocity: f64) -> SpinnerState {
    // No momentum: velocity is this tick's progress delta and nothing else,
    // so the burst disappears as soon as scrolling stops.
    let main_deg = p * cfg.base_turns_deg + velocity * cfg.velocity_gain;
    SpinnerState {
        main_deg,
        inner_deg: main_deg * cfg.inner_ratio,
        outer_deg: main_deg * cfg.outer_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compile::compile, model::tests::basic_config};

    fn sample(progress: f64) -> TickSample {
        TickSample {
            progress,
            velocity: 0.0,
        }
    }

    #[test]
    fn everything_dormant_at_zero() {
        let plan = compile(&basic_config()).unwrap();
        let state = Evaluator::eval_tick(&plan, sample(0.0));

        for seg in &state.segments {
            assert_eq!(seg.reveal, 0.0);
        }
        assert_eq!(state.nodes[0].phase, NodePhase::Hidden);
        assert_eq!(state.nodes[0].scale, 0.0);
        assert_eq!(state.nodes[0].opacity, 0.0);
        assert_eq!(state.leaves[0].opacity, 0.0);
        assert_eq!(state.spinner.main_deg, 0.0);
        assert_eq!(state.progress_bar, 0.0);
    }

    #[test]
    fn everything_settled_at_one() {
        let plan = compile(&basic_config()).unwrap();
        let state = Evaluator::eval_tick(&plan, sample(1.0));

        for seg in &state.segments {
            assert_eq!(seg.reveal, 1.0);
            assert_eq!(seg.dash_offset, Some(0.0));
        }
        assert_eq!(state.nodes[0].phase, NodePhase::Revealed);
        assert_eq!(state.nodes[0].scale, 1.0);
        assert_eq!(state.nodes[0].opacity, 1.0);
        assert_eq!(state.nodes[0].label_opacity, 1.0);
        assert_eq!(state.nodes[0].label_offset_y, 0.0);
        assert_eq!(state.leaves[0].scale, 1.0);
    }

    #[test]
    fn progress_is_clamped_at_the_boundary() {
        let plan = compile(&basic_config()).unwrap();
        let over = Evaluator::eval_tick(&plan, sample(1.7));
        let under = Evaluator::eval_tick(&plan, sample(-0.3));
        assert_eq!(over.progress, 1.0);
        assert_eq!(under.progress, 0.0);
    }

    #[test]
    fn reveal_is_monotone_in_progress() {
        let plan = compile(&basic_config()).unwrap();
        let mut last: Vec<f64> = plan.segments().map(|_| 0.0).collect();
        for i in 0..=100 {
            let state = Evaluator::eval_tick(&plan, sample(f64::from(i) / 100.0));
            for (prev, seg) in last.iter_mut().zip(&state.segments) {
                assert!(seg.reveal >= *prev);
                *prev = seg.reveal;
            }
        }
    }

    #[test]
    fn spinner_ratios_hold_for_any_progress() {
        let plan = compile(&basic_config()).unwrap();
        for i in 0..=20 {
            let state = Evaluator::eval_tick(&plan, sample(f64::from(i) / 20.0));
            assert!((state.spinner.inner_deg - state.spinner.main_deg * -0.6).abs() < 1e-9);
            assert!((state.spinner.outer_deg - state.spinner.main_deg * 0.3).abs() < 1e-9);
        }
    }

    #[test]
    fn velocity_burst_is_stateless() {
        let plan = compile(&basic_config()).unwrap();
        let burst = Evaluator::eval_tick(
            &plan,
            TickSample {
                progress: 0.14,
                velocity: 0.04,
            },
        );
        let calm = Evaluator::eval_tick(&plan, sample(0.14));
        assert!((burst.spinner.main_deg - calm.spinner.main_deg - 320.0).abs() < 1e-9);
    }

    #[test]
    fn eval_is_idempotent_for_a_fixed_sample() {
        let plan = compile(&basic_config()).unwrap();
        let s = TickSample {
            progress: 0.42,
            velocity: 0.01,
        };
        let a = serde_json::to_string(&Evaluator::eval_tick(&plan, s)).unwrap();
        let b = serde_json::to_string(&Evaluator::eval_tick(&plan, s)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn scrolling_backward_reverses_node_phase() {
        let plan = compile(&basic_config()).unwrap();
        let node = &plan.nodes[0];
        let mid = (node.fruit.start + node.fruit.end) / 2.0;

        let growing = Evaluator::eval_tick(&plan, sample(mid));
        assert_eq!(growing.nodes[0].phase, NodePhase::Growing);

        let hidden_again = Evaluator::eval_tick(&plan, sample(node.fruit.start / 2.0));
        assert_eq!(hidden_again.nodes[0].phase, NodePhase::Hidden);
    }

    #[test]
    fn zero_length_segment_skips_dash_offset() {
        let mut config = basic_config();
        config.twigs[0].d = "not svg".to_string();
        let plan = compile(&config).unwrap();
        let state = Evaluator::eval_tick(&plan, sample(0.5));
        let twig = state
            .segments
            .iter()
            .find(|s| s.id == "twig-0")
            .unwrap();
        assert_eq!(twig.dash_offset, None);
    }
}
