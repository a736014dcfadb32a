use crate::{compile::TreePlan, eval::RenderState};

/// Circumference of the orb's proficiency ring in its own SVG units.
const RING_CIRCUMFERENCE: f64 = 141.0;

/// One declarative style write for the external binding layer: set
/// `property` to `value` on the element with the given stable id. The
/// engine never touches a view tree itself.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StyleAssignment {
    pub element: String,
    pub property: String,
    pub value: String,
}

impl StyleAssignment {
    fn new(element: impl Into<String>, property: &str, value: String) -> Self {
        Self {
            element: element.into(),
            property: property.to_string(),
            value,
        }
    }
}

/// One-time writes applied when the scene is mounted: dash arrays sized to
/// each segment's resolved length, and the static proficiency rings.
pub fn static_assignments(plan: &TreePlan) -> Vec<StyleAssignment> {
    let mut out = Vec::new();
    for seg in plan.segments() {
        if seg.length > 0.0 {
            out.push(StyleAssignment::new(
                &seg.id,
                "stroke-dasharray",
                fmt(seg.length),
            ));
            // Start fully hidden; the first tick reveals from here.
            out.push(StyleAssignment::new(
                &seg.id,
                "stroke-dashoffset",
                fmt(seg.length),
            ));
        }
    }
    for node in &plan.nodes {
        let filled = f64::from(node.proficiency) / 100.0 * RING_CIRCUMFERENCE;
        out.push(StyleAssignment::new(
            format!("{}-ring", node.id),
            "stroke-dasharray",
            format!("{} {}", fmt(filled), fmt(RING_CIRCUMFERENCE)),
        ));
        out.push(StyleAssignment::new(
            format!("{}-ring", node.id),
            "stroke",
            node.category.accent_hex().to_string(),
        ));
    }
    out
}

/// Flatten one tick's [`RenderState`] into per-element style writes.
pub fn tick_assignments(state: &RenderState) -> Vec<StyleAssignment> {
    let mut out = Vec::with_capacity(
        state.segments.len() + state.nodes.len() * 4 + state.leaves.len() * 2 + 4,
    );

    for seg in &state.segments {
        if let Some(offset) = seg.dash_offset {
            out.push(StyleAssignment::new(
                &seg.id,
                "stroke-dashoffset",
                fmt(offset),
            ));
        }
    }

    for node in &state.nodes {
        out.push(StyleAssignment::new(
            &node.id,
            "transform",
            format!("scale({})", fmt(node.scale)),
        ));
        out.push(StyleAssignment::new(&node.id, "opacity", fmt(node.opacity)));
        let label = format!("{}-label", node.id);
        out.push(StyleAssignment::new(
            &label,
            "transform",
            format!("translateY({}px)", fmt(node.label_offset_y)),
        ));
        out.push(StyleAssignment::new(
            &label,
            "opacity",
            fmt(node.label_opacity),
        ));
    }

    for leaf in &state.leaves {
        out.push(StyleAssignment::new(
            &leaf.id,
            "transform",
            format!(
                "translate({}, {}) rotate({}) scale({})",
                fmt(leaf.x),
                fmt(leaf.y),
                fmt(leaf.rotation_deg),
                fmt(leaf.scale)
            ),
        ));
        out.push(StyleAssignment::new(&leaf.id, "opacity", fmt(leaf.opacity)));
    }

    out.push(StyleAssignment::new(
        "spinner-main",
        "transform",
        format!("rotate({}deg)", fmt(state.spinner.main_deg)),
    ));
    out.push(StyleAssignment::new(
        "spinner-inner",
        "transform",
        format!("rotate({}deg)", fmt(state.spinner.inner_deg)),
    ));
    out.push(StyleAssignment::new(
        "spinner-outer",
        "transform",
        format!("rotate({}deg)", fmt(state.spinner.outer_deg)),
    ));
    out.push(StyleAssignment::new(
        "progress-bar",
        "transform",
        format!("scaleX({})", fmt(state.progress_bar)),
    ));

    out
}

/// Fixed-precision number formatting so emitted styles are stable across
/// runs and platforms.
fn fmt(v: f64) -> String {
    let s = format!("{v:.3}");
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        compile::compile,
        eval::Evaluator,
        model::tests::basic_config,
        scroll::TickSample,
    };

    #[test]
    fn fmt_is_compact_and_stable() {
        assert_eq!(fmt(0.0), "0");
        assert_eq!(fmt(-0.0001), "0");
        assert_eq!(fmt(1.0), "1");
        assert_eq!(fmt(0.5), "0.5");
        assert_eq!(fmt(216.00000000000003), "216");
        assert_eq!(fmt(-432.0), "-432");
    }

    #[test]
    fn static_assignments_size_dash_arrays() {
        let plan = compile(&basic_config()).unwrap();
        let styles = static_assignments(&plan);

        let trunk_dash = styles
            .iter()
            .find(|s| s.element == "trunk-0" && s.property == "stroke-dasharray")
            .unwrap();
        assert!(trunk_dash.value.parse::<f64>().unwrap() > 0.0);

        let ring = styles
            .iter()
            .find(|s| s.element == "node-0-ring" && s.property == "stroke-dasharray")
            .unwrap();
        assert_eq!(ring.value, "126.9 141");
    }

    #[test]
    fn tick_assignments_cover_every_subsystem() {
        let plan = compile(&basic_config()).unwrap();
        let state = Evaluator::eval_tick(&plan, TickSample::at(1.0));
        let styles = tick_assignments(&state);

        let by_element = |el: &str, prop: &str| {
            styles
                .iter()
                .find(|s| s.element == el && s.property == prop)
                .unwrap_or_else(|| panic!("missing {el}/{prop}"))
        };

        assert_eq!(by_element("trunk-0", "stroke-dashoffset").value, "0");
        assert_eq!(by_element("node-0", "transform").value, "scale(1)");
        assert_eq!(by_element("node-0-label", "opacity").value, "1");
        assert_eq!(
            by_element("node-0-label", "transform").value,
            "translateY(0px)"
        );
        assert_eq!(by_element("spinner-main", "transform").value, "rotate(720deg)");
        assert_eq!(
            by_element("spinner-inner", "transform").value,
            "rotate(-432deg)"
        );
        assert_eq!(
            by_element("spinner-outer", "transform").value,
            "rotate(216deg)"
        );
        assert_eq!(by_element("progress-bar", "transform").value, "scaleX(1)");
        assert_eq!(
            by_element("leaf-0", "transform").value,
            "translate(36, 84) rotate(-30) scale(1)"
        );
    }

    #[test]
    fn unresolved_segments_emit_no_dash_styles() {
        let mut config = basic_config();
        config.twigs[0].d = "garbage".to_string();
        let plan = compile(&config).unwrap();

        let statics = static_assignments(&plan);
        assert!(!statics.iter().any(|s| s.element == "twig-0"));

        let state = Evaluator::eval_tick(&plan, TickSample::at(0.5));
        let ticks = tick_assignments(&state);
        assert!(!ticks.iter().any(|s| s.element == "twig-0"));
    }
}
