use std::collections::BTreeSet;

use crate::{
    core::ProgressWindow,
    ease::Ease,
    error::{ScrollvineError, ScrollvineResult},
};

/// Full static configuration of one scroll-animated tree scene.
///
/// Everything here is immutable after construction; per-tick state is
/// derived from it, never written back.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TreeConfig {
    /// Trunk edge paths; all share one window so they grow together.
    pub trunks: Vec<PathSegment>,
    /// Decorative sub-branches, in draw order.
    pub twigs: Vec<PathSegment>,
    /// Main branches, in draw order. Nodes and leaves reference these by id.
    pub branches: Vec<PathSegment>,
    pub nodes: Vec<RevealNode>,
    pub leaves: Vec<Leaf>,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub spinner: SpinnerConfig,
}

/// One drawable SVG path whose stroke reveals over a progress window.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PathSegment {
    pub id: String,
    /// SVG path data in the scene's viewBox space.
    pub d: String,
    /// Explicit window override; when absent the window is derived from
    /// [`TimingConfig`] and the segment's position in its sequence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<ProgressWindow>,
}

impl PathSegment {
    pub fn new(id: impl Into<String>, d: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            d: d.into(),
            window: None,
        }
    }
}

/// Skill grouping used for accent colors and the legend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Design,
    Backend,
    Tools,
}

impl SkillCategory {
    /// Accent color for the node orb, ring and label.
    pub fn accent_hex(self) -> &'static str {
        match self {
            Self::Frontend => "#f97316",
            Self::Design => "#ec4899",
            Self::Backend => "#06b6d4",
            Self::Tools => "#a855f7",
        }
    }

    pub fn legend_label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Design => "UI/UX & Design",
            Self::Backend => "Backend",
            Self::Tools => "Tools",
        }
    }
}

/// A fruit orb (plus its label) that pops in when its branch finishes
/// growing. Several nodes may fan out from the same branch.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RevealNode {
    pub id: String,
    /// Id of the branch this node fruits from.
    pub branch: String,
    pub x: f64,
    pub y: f64,
    pub skill: String,
    pub category: SkillCategory,
    /// 0..=100, drives the orb's proficiency ring.
    pub proficiency: u8,
    #[serde(default = "default_node_ease")]
    pub ease: Ease,
    #[serde(default = "default_final_scale")]
    pub final_scale: f64,
}

fn default_node_ease() -> Ease {
    Ease::OutElastic
}

fn default_final_scale() -> f64 {
    1.0
}

/// A decorative leaf that bounces in partway through its branch's growth.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Leaf {
    pub id: String,
    /// Id of the branch this leaf sits on.
    pub branch: String,
    pub x: f64,
    pub y: f64,
    pub rotation_deg: f64,
    pub scale: f64,
    /// Fill color as a hex string, passed through to the binding layer.
    pub color: String,
    /// Stagger slot delaying this leaf relative to siblings on the branch.
    #[serde(default)]
    pub stagger_slot: u8,
    #[serde(default = "default_leaf_ease")]
    pub ease: Ease,
}

fn default_leaf_ease() -> Ease {
    Ease::InOutCubic
}

/// Tunable presentation constants for window derivation.
///
/// Only their relative ordering (trunk before twig before branch, leaves
/// before fruit before label) is contractual; the exact values are cosmetic.
/// Defaults match the tuning the engine shipped with.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct TimingConfig {
    /// Trunk is fully drawn at progress `1 / trunk_rate`.
    pub trunk_rate: f64,
    pub twig_lead: f64,
    pub twig_span: f64,
    pub twig_width: f64,
    pub branch_lead: f64,
    pub branch_span: f64,
    pub branch_width: f64,
    /// Fruit starts this much before its branch window ends.
    pub fruit_lead: f64,
    /// Fruit keeps growing this much past its branch window end.
    pub fruit_tail: f64,
    pub label_width: f64,
    /// Leaves start this fraction of the way into their branch window.
    pub leaf_branch_fraction: f64,
    /// Extra start offset per stagger slot.
    pub leaf_stagger: f64,
    pub leaf_width: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            trunk_rate: 2.5,
            twig_lead: 0.1,
            twig_span: 0.5,
            twig_width: 0.1,
            branch_lead: 0.06,
            branch_span: 0.74,
            branch_width: 0.07,
            fruit_lead: 0.01,
            fruit_tail: 0.035,
            label_width: 0.02,
            leaf_branch_fraction: 0.6,
            leaf_stagger: 0.008,
            leaf_width: 0.025,
        }
    }
}

impl TimingConfig {
    pub fn validate(&self) -> ScrollvineResult<()> {
        if !self.trunk_rate.is_finite() || self.trunk_rate < 1.0 {
            return Err(ScrollvineError::validation(
                "trunk_rate must be >= 1 so the trunk completes within the region",
            ));
        }
        for (name, v) in [
            ("twig_width", self.twig_width),
            ("branch_width", self.branch_width),
            ("fruit_tail", self.fruit_tail),
            ("label_width", self.label_width),
            ("leaf_width", self.leaf_width),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ScrollvineError::validation(format!("{name} must be > 0")));
            }
        }
        for (name, v) in [
            ("twig_lead", self.twig_lead),
            ("twig_span", self.twig_span),
            ("branch_lead", self.branch_lead),
            ("branch_span", self.branch_span),
            ("fruit_lead", self.fruit_lead),
            ("leaf_stagger", self.leaf_stagger),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ScrollvineError::validation(format!("{name} must be >= 0")));
            }
        }
        if !(0.0..=1.0).contains(&self.leaf_branch_fraction) {
            return Err(ScrollvineError::validation(
                "leaf_branch_fraction must be in [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Rotation behavior for the three ornamental rings.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct SpinnerConfig {
    /// Main ring rotation in degrees at progress 1 with zero velocity.
    pub base_turns_deg: f64,
    /// Gain applied to the per-tick progress delta; a fast flick adds a
    /// visible spin burst that vanishes the moment velocity returns to 0.
    pub velocity_gain: f64,
    pub inner_ratio: f64,
    pub outer_ratio: f64,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            base_turns_deg: 720.0,
            velocity_gain: 8000.0,
            inner_ratio: -0.6,
            outer_ratio: 0.3,
        }
    }
}

impl SpinnerConfig {
    pub fn validate(&self) -> ScrollvineResult<()> {
        for (name, v) in [
            ("base_turns_deg", self.base_turns_deg),
            ("velocity_gain", self.velocity_gain),
            ("inner_ratio", self.inner_ratio),
            ("outer_ratio", self.outer_ratio),
        ] {
            if !v.is_finite() {
                return Err(ScrollvineError::validation(format!(
                    "spinner {name} must be finite"
                )));
            }
        }
        Ok(())
    }
}

impl TreeConfig {
    pub fn validate(&self) -> ScrollvineResult<()> {
        self.timing.validate()?;
        self.spinner.validate()?;

        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let segment_ids = self
            .trunks
            .iter()
            .chain(&self.twigs)
            .chain(&self.branches)
            .map(|s| s.id.as_str());
        let element_ids = segment_ids
            .chain(self.nodes.iter().map(|n| n.id.as_str()))
            .chain(self.leaves.iter().map(|l| l.id.as_str()));
        for id in element_ids {
            if id.trim().is_empty() {
                return Err(ScrollvineError::validation("element id must be non-empty"));
            }
            if !seen.insert(id) {
                return Err(ScrollvineError::validation(format!(
                    "duplicate element id '{id}'"
                )));
            }
        }

        for seg in self.trunks.iter().chain(&self.twigs).chain(&self.branches) {
            if let Some(w) = seg.window {
                w.validate()?;
            }
        }

        let branch_ids: BTreeSet<&str> = self.branches.iter().map(|b| b.id.as_str()).collect();
        for node in &self.nodes {
            if !branch_ids.contains(node.branch.as_str()) {
                return Err(ScrollvineError::validation(format!(
                    "node '{}' references missing branch '{}'",
                    node.id, node.branch
                )));
            }
            if node.proficiency > 100 {
                return Err(ScrollvineError::validation(format!(
                    "node '{}' proficiency must be <= 100",
                    node.id
                )));
            }
            if !node.final_scale.is_finite() || node.final_scale <= 0.0 {
                return Err(ScrollvineError::validation(format!(
                    "node '{}' final_scale must be > 0",
                    node.id
                )));
            }
        }

        for leaf in &self.leaves {
            if !branch_ids.contains(leaf.branch.as_str()) {
                return Err(ScrollvineError::validation(format!(
                    "leaf '{}' references missing branch '{}'",
                    leaf.id, leaf.branch
                )));
            }
            if !leaf.scale.is_finite() || leaf.scale <= 0.0 {
                return Err(ScrollvineError::validation(format!(
                    "leaf '{}' scale must be > 0",
                    leaf.id
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn basic_config() -> TreeConfig {
        TreeConfig {
            trunks: vec![PathSegment::new("trunk-0", "M 43 98 C 43 93, 42.5 88, 43 82")],
            twigs: vec![PathSegment::new("twig-0", "M 39 87 C 38 85, 36 83, 34 82")],
            branches: vec![PathSegment::new("branch-0", "M 43 88 C 41 87.5, 39 87, 34 86")],
            nodes: vec![RevealNode {
                id: "node-0".to_string(),
                branch: "branch-0".to_string(),
                x: 32.0,
                y: 86.0,
                skill: "Git/GitHub".to_string(),
                category: SkillCategory::Tools,
                proficiency: 90,
                ease: default_node_ease(),
                final_scale: 1.0,
            }],
            leaves: vec![Leaf {
                id: "leaf-0".to_string(),
                branch: "branch-0".to_string(),
                x: 36.0,
                y: 84.0,
                rotation_deg: -30.0,
                scale: 1.0,
                color: "#4ade80".to_string(),
                stagger_slot: 0,
                ease: default_leaf_ease(),
            }],
            timing: TimingConfig::default(),
            spinner: SpinnerConfig::default(),
        }
    }

    #[test]
    fn json_roundtrip() {
        let config = basic_config();
        let s = serde_json::to_string_pretty(&config).unwrap();
        let de: TreeConfig = serde_json::from_str(&s).unwrap();
        assert_eq!(de.branches.len(), 1);
        assert_eq!(de.nodes[0].category, SkillCategory::Tools);
        assert_eq!(de.nodes[0].ease, Ease::OutElastic);
    }

    #[test]
    fn validate_accepts_basic_config() {
        assert!(basic_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_branch_reference() {
        let mut config = basic_config();
        config.nodes[0].branch = "missing".to_string();
        assert!(config.validate().is_err());

        let mut config = basic_config();
        config.leaves[0].branch = "missing".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let mut config = basic_config();
        config.leaves[0].id = "node-0".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_inverted_window_override() {
        let mut config = basic_config();
        config.branches[0].window = Some(ProgressWindow {
            start: 0.5,
            end: 0.4,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_timing() {
        let mut config = basic_config();
        config.timing.branch_width = 0.0;
        assert!(config.validate().is_err());

        let mut config = basic_config();
        config.timing.trunk_rate = 0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_proficiency() {
        let mut config = basic_config();
        config.nodes[0].proficiency = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn category_accents_are_distinct() {
        let accents = [
            SkillCategory::Frontend.accent_hex(),
            SkillCategory::Design.accent_hex(),
            SkillCategory::Backend.accent_hex(),
            SkillCategory::Tools.accent_hex(),
        ];
        let unique: std::collections::BTreeSet<_> = accents.iter().collect();
        assert_eq!(unique.len(), accents.len());
        assert_eq!(SkillCategory::Design.legend_label(), "UI/UX & Design");
    }
}
