use crate::{
    core::ProgressWindow,
    ease::Ease,
    error::ScrollvineResult,
    model::{Leaf, PathSegment, RevealNode, SkillCategory, SpinnerConfig, TimingConfig, TreeConfig},
};

/// Builder for a [`TreeConfig`]. JSON is supported via Serde, but for
/// programmatic scenes the builder keeps the config tables readable.
/// Validation runs once in [`TreeConfigBuilder::build`].
pub struct TreeConfigBuilder {
    trunks: Vec<PathSegment>,
    twigs: Vec<PathSegment>,
    branches: Vec<PathSegment>,
    nodes: Vec<RevealNode>,
    leaves: Vec<Leaf>,
    timing: TimingConfig,
    spinner: SpinnerConfig,
}

impl Default for TreeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeConfigBuilder {
    pub fn new() -> Self {
        Self {
            trunks: Vec::new(),
            twigs: Vec::new(),
            branches: Vec::new(),
            nodes: Vec::new(),
            leaves: Vec::new(),
            timing: TimingConfig::default(),
            spinner: SpinnerConfig::default(),
        }
    }

    pub fn trunk(mut self, id: impl Into<String>, d: impl Into<String>) -> Self {
        self.trunks.push(PathSegment::new(id, d));
        self
    }

    pub fn twig(mut self, id: impl Into<String>, d: impl Into<String>) -> Self {
        self.twigs.push(PathSegment::new(id, d));
        self
    }

    /// Branches must be added in draw order; nodes and leaves reference
    /// them by id.
    pub fn branch(mut self, id: impl Into<String>, d: impl Into<String>) -> Self {
        self.branches.push(PathSegment::new(id, d));
        self
    }

    /// Add a branch with an explicit window override.
    pub fn branch_with_window(
        mut self,
        id: impl Into<String>,
        d: impl Into<String>,
        window: ProgressWindow,
    ) -> Self {
        let mut seg = PathSegment::new(id, d);
        seg.window = Some(window);
        self.branches.push(seg);
        self
    }

    pub fn node(mut self, node: RevealNode) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn leaf(mut self, leaf: Leaf) -> Self {
        self.leaves.push(leaf);
        self
    }

    pub fn timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    pub fn spinner(mut self, spinner: SpinnerConfig) -> Self {
        self.spinner = spinner;
        self
    }

    pub fn build(self) -> ScrollvineResult<TreeConfig> {
        let config = TreeConfig {
            trunks: self.trunks,
            twigs: self.twigs,
            branches: self.branches,
            nodes: self.nodes,
            leaves: self.leaves,
            timing: self.timing,
            spinner: self.spinner,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Builder for one skill node.
pub struct NodeBuilder {
    node: RevealNode,
}

impl NodeBuilder {
    pub fn new(id: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            node: RevealNode {
                id: id.into(),
                branch: branch.into(),
                x: 0.0,
                y: 0.0,
                skill: String::new(),
                category: SkillCategory::Frontend,
                proficiency: 0,
                ease: Ease::OutElastic,
                final_scale: 1.0,
            },
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.node.x = x;
        self.node.y = y;
        self
    }

    pub fn skill(mut self, name: impl Into<String>, category: SkillCategory, proficiency: u8) -> Self {
        self.node.skill = name.into();
        self.node.category = category;
        self.node.proficiency = proficiency;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.node.ease = ease;
        self
    }

    pub fn final_scale(mut self, scale: f64) -> Self {
        self.node.final_scale = scale;
        self
    }

    pub fn build(self) -> RevealNode {
        self.node
    }
}

/// Builder for one decorative leaf.
pub struct LeafBuilder {
    leaf: Leaf,
}

impl LeafBuilder {
    pub fn new(id: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            leaf: Leaf {
                id: id.into(),
                branch: branch.into(),
                x: 0.0,
                y: 0.0,
                rotation_deg: 0.0,
                scale: 1.0,
                color: "#22c55e".to_string(),
                stagger_slot: 0,
                ease: Ease::InOutCubic,
            },
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.leaf.x = x;
        self.leaf.y = y;
        self
    }

    pub fn rotated(mut self, deg: f64) -> Self {
        self.leaf.rotation_deg = deg;
        self
    }

    pub fn scaled(mut self, scale: f64) -> Self {
        self.leaf.scale = scale;
        self
    }

    pub fn color(mut self, hex: impl Into<String>) -> Self {
        self.leaf.color = hex.into();
        self
    }

    pub fn stagger_slot(mut self, slot: u8) -> Self {
        self.leaf.stagger_slot = slot;
        self
    }

    pub fn build(self) -> Leaf {
        self.leaf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_create_expected_structure() {
        let config = TreeConfigBuilder::new()
            .trunk("trunk-main", "M 43 98 C 43 93, 42.5 88, 43 82")
            .twig("twig-0", "M 39 87 C 38 85, 36 83, 34 82")
            .branch("branch-react", "M 47 10 C 46.5 9, 46 8.5, 45.5 8")
            .node(
                NodeBuilder::new("skill-react", "branch-react")
                    .at(45.0, 8.0)
                    .skill("React.js", SkillCategory::Frontend, 95)
                    .build(),
            )
            .leaf(
                LeafBuilder::new("leaf-0", "branch-react")
                    .at(42.0, 12.0)
                    .rotated(-60.0)
                    .color("#22c55e")
                    .stagger_slot(1)
                    .build(),
            )
            .build()
            .unwrap();

        assert_eq!(config.branches.len(), 1);
        assert_eq!(config.nodes[0].proficiency, 95);
        assert_eq!(config.leaves[0].stagger_slot, 1);
    }

    #[test]
    fn build_rejects_dangling_references() {
        let result = TreeConfigBuilder::new()
            .branch("branch-a", "M 0 0 L 1 1")
            .node(NodeBuilder::new("n", "branch-missing").build())
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn build_rejects_duplicate_ids() {
        let result = TreeConfigBuilder::new()
            .branch("same", "M 0 0 L 1 1")
            .branch("same", "M 0 0 L 2 2")
            .build();
        assert!(result.is_err());
    }
}
