//! The built-in "skill tree" scene: a grown-from-the-trunk tree whose
//! branches carry one skill orb each, scattered with leaves. Positions are
//! percentages of a `0 0 100 100` viewBox; path data lives in the same
//! space.

use crate::{
    dsl::{LeafBuilder, NodeBuilder, TreeConfigBuilder},
    error::ScrollvineResult,
    model::{SkillCategory, TreeConfig},
};

// Trunk edge lines: left edge, right edge, center vein. Tapered with a
// knotty wobble; all three grow together during the lead-in.
const TRUNK_PATHS: [(&str, &str); 3] = [
    (
        "trunk-left",
        "M 43 98 C 43 93, 42.5 88, 43 82 C 43.5 76, 42.8 70, 43.2 64 C 43.5 56, 42.8 48, 43.5 40 C 44 32, 43.5 24, 44 16 C 44.3 12, 44.5 8, 45.5 4",
    ),
    (
        "trunk-right",
        "M 53 98 C 53 93, 53.5 88, 53 82 C 52.5 76, 53.2 70, 52.8 64 C 52.5 56, 53.2 48, 52.5 40 C 52 32, 52.5 24, 52 16 C 51.7 12, 51.5 8, 49 4",
    ),
    (
        "trunk-vein",
        "M 48 98 C 48 88, 47.8 76, 48 64 C 48.2 52, 47.8 40, 48 28 C 48.1 20, 47.5 12, 47.2 4",
    ),
];

// Secondary sub-branches forking off the main branches, bottom to crown.
const TWIG_PATHS: [&str; 16] = [
    "M 39 87 C 38 85, 36 83, 34 82",
    "M 37 86.5 C 36 88, 34.5 89, 33 89",
    "M 57 79 C 58 77, 59 75, 57 74",
    "M 61 78.5 C 63 80, 64 81, 63 82",
    "M 37 73 C 35 71, 33 70, 31 70",
    "M 34 72.5 C 32 74, 30 75, 28 75",
    "M 29 60.5 C 27 59, 25 58, 23 58",
    "M 65 54.5 C 67 53, 69 52, 70 51",
    "M 32 43 C 30 41, 28 40, 26 40",
    "M 68 42 C 70 40.5, 72 39, 73 38",
    "M 35 27 C 33 25.5, 31 25, 29 25.5",
    "M 56 24 C 58 22.5, 60 22, 61 22.5",
    "M 46 14 C 43 12.5, 40 12, 38 13",
    "M 49 12 C 52 10.5, 55 10, 57 11",
    "M 44 7 C 41 5, 38 4, 37 5",
    "M 49 6 C 52 4.5, 55 4, 56 5",
];

// Main branches in draw order (root level first, crown last); the key
// names both the branch and the skill node hanging off it.
const BRANCHES: [(&str, &str); 16] = [
    ("git", "M 43 88 C 41 87.5, 39 87, 37.5 86.5 C 36 86, 35 86, 34 86"),
    ("mongodb", "M 53 80 C 55 79.5, 57 79, 59 78.5 C 61 78, 63 78, 65 78"),
    ("express", "M 43 74 C 40 73.5, 37 73, 34 72.5 C 31 72, 28 72, 27 72"),
    ("node", "M 53 70 C 56 69.5, 59 69, 62 68.5 C 65 68, 67 68, 68 68"),
    ("material-ui", "M 43 62 C 39 61.5, 34 61, 29 60.5 C 24 60, 21 60, 20 60"),
    ("shadcn", "M 50 58 C 51 57.5, 52 57, 53 57 C 54 57, 54.5 57, 55 57"),
    ("figma", "M 53 56 C 57 55.5, 61 55, 65 54.5 C 69 54, 73 54, 76 54"),
    ("tailwind", "M 44 52 C 42 51.5, 40 51, 38.5 50.5 C 37.5 50, 37 50, 37 50"),
    ("html-css", "M 43 44 C 38 43.5, 32 43, 26 42.5 C 20 42, 16 42, 14 42"),
    ("framer-motion", "M 50 40 C 52 39.8, 54 39.5, 56 39.3 C 57 39.2, 58 39, 58 39"),
    ("react-query", "M 52 43 C 57 42.5, 62 42, 68 42 C 74 42, 78 42, 80 42"),
    ("redux", "M 45 36 C 43 35.8, 41.5 35.5, 40 35.3 C 39 35.1, 39 35, 39 35"),
    ("javascript", "M 44 28 C 40 27.5, 35 27, 30 27 C 27 27, 25 27, 24 27"),
    ("typescript", "M 50 25 C 53 24.5, 56 24, 59 24 C 61 24, 63 24, 63 24"),
    ("nextjs", "M 47 19 C 47.2 18.5, 47.5 18.2, 48 18"),
    ("react", "M 47 10 C 46.5 9, 46 8.5, 45.5 8"),
];

// Skill orbs: (branch key, x, y, skill, category, proficiency).
const NODES: [(&str, f64, f64, &str, SkillCategory, u8); 16] = [
    ("git", 32.0, 86.0, "Git/GitHub", SkillCategory::Tools, 90),
    ("mongodb", 65.0, 78.0, "MongoDB", SkillCategory::Backend, 70),
    ("express", 25.0, 72.0, "Express.js", SkillCategory::Backend, 75),
    ("node", 70.0, 68.0, "Node.js", SkillCategory::Backend, 75),
    ("material-ui", 18.0, 60.0, "Material UI", SkillCategory::Design, 85),
    ("shadcn", 55.0, 57.0, "Shadcn UI", SkillCategory::Design, 90),
    ("figma", 78.0, 54.0, "Figma", SkillCategory::Design, 88),
    ("tailwind", 35.0, 50.0, "Tailwind CSS", SkillCategory::Design, 92),
    ("html-css", 12.0, 42.0, "HTML5/CSS3", SkillCategory::Frontend, 95),
    ("framer-motion", 60.0, 39.0, "Framer Motion", SkillCategory::Frontend, 80),
    ("react-query", 82.0, 42.0, "React Query", SkillCategory::Frontend, 85),
    ("redux", 38.0, 35.0, "Redux Toolkit", SkillCategory::Frontend, 85),
    ("javascript", 22.0, 27.0, "JavaScript", SkillCategory::Frontend, 95),
    ("typescript", 65.0, 24.0, "TypeScript", SkillCategory::Frontend, 90),
    ("nextjs", 48.0, 18.0, "Next.js", SkillCategory::Frontend, 90),
    ("react", 45.0, 8.0, "React.js", SkillCategory::Frontend, 95),
];

// Leaves scattered along the branches: (x, y, rotation, scale, color,
// branch index into BRANCHES). The crown is deliberately lush.
const LEAVES: [(f64, f64, f64, f64, &str, usize); 40] = [
    (36.0, 84.0, -30.0, 1.0, "#4ade80", 0),
    (33.0, 82.0, 45.0, 0.8, "#22c55e", 0),
    (34.0, 88.5, 120.0, 0.7, "#84cc16", 0),
    (60.0, 77.0, 20.0, 0.9, "#4ade80", 1),
    (58.0, 75.0, -40.0, 0.7, "#22c55e", 1),
    (63.0, 81.0, 80.0, 0.8, "#84cc16", 1),
    (34.0, 71.0, -50.0, 0.9, "#4ade80", 2),
    (31.0, 70.0, 30.0, 0.7, "#22c55e", 2),
    (30.0, 74.5, 110.0, 0.8, "#84cc16", 2),
    (64.0, 67.0, 15.0, 0.9, "#4ade80", 3),
    (57.0, 73.5, -25.0, 0.7, "#16a34a", 3),
    (27.0, 59.0, -20.0, 1.0, "#22c55e", 4),
    (24.0, 58.0, 55.0, 0.7, "#4ade80", 4),
    (67.0, 53.0, 10.0, 0.9, "#84cc16", 6),
    (70.0, 51.5, -35.0, 0.7, "#22c55e", 6),
    (69.0, 55.0, 80.0, 0.8, "#4ade80", 6),
    (39.0, 49.0, -45.0, 0.8, "#16a34a", 7),
    (30.0, 41.0, 30.0, 0.9, "#4ade80", 8),
    (27.0, 40.0, -20.0, 0.7, "#22c55e", 8),
    (26.0, 43.0, 100.0, 0.8, "#84cc16", 8),
    (70.0, 40.5, -15.0, 0.9, "#4ade80", 10),
    (72.0, 39.0, 45.0, 0.7, "#16a34a", 10),
    (73.0, 42.0, 90.0, 0.75, "#84cc16", 10),
    (33.0, 25.5, -30.0, 0.9, "#4ade80", 12),
    (30.0, 25.0, 50.0, 0.7, "#22c55e", 12),
    (29.0, 27.0, 120.0, 0.75, "#84cc16", 12),
    (58.0, 22.5, 20.0, 0.9, "#4ade80", 13),
    (61.0, 22.0, -40.0, 0.7, "#16a34a", 13),
    (42.0, 12.0, -60.0, 1.0, "#22c55e", 14),
    (39.0, 13.0, 35.0, 0.8, "#4ade80", 14),
    (38.0, 11.0, 90.0, 0.7, "#16a34a", 14),
    (53.0, 10.0, 25.0, 1.0, "#4ade80", 15),
    (56.0, 11.0, -50.0, 0.8, "#22c55e", 15),
    (55.0, 9.0, 70.0, 0.7, "#84cc16", 15),
    (41.0, 5.0, -40.0, 0.9, "#22c55e", 15),
    (37.0, 4.5, 60.0, 0.7, "#4ade80", 15),
    (52.0, 4.0, 15.0, 0.9, "#84cc16", 15),
    (55.0, 5.0, -70.0, 0.7, "#16a34a", 15),
    (44.0, 3.0, 0.0, 1.1, "#22c55e", 15),
    (50.0, 2.5, 45.0, 0.9, "#4ade80", 15),
];

/// Build the full skill-tree scene with default timing and spinner.
pub fn skill_tree() -> ScrollvineResult<TreeConfig> {
    let mut builder = TreeConfigBuilder::new();

    for (id, d) in TRUNK_PATHS {
        builder = builder.trunk(id, d);
    }
    for (i, d) in TWIG_PATHS.iter().enumerate() {
        builder = builder.twig(format!("twig-{i:02}"), *d);
    }
    for (key, d) in BRANCHES {
        builder = builder.branch(format!("branch-{key}"), d);
    }
    for (key, x, y, skill, category, proficiency) in NODES {
        builder = builder.node(
            NodeBuilder::new(format!("skill-{key}"), format!("branch-{key}"))
                .at(x, y)
                .skill(skill, category, proficiency)
                .build(),
        );
    }
    for (i, (x, y, rot, scale, color, branch_idx)) in LEAVES.iter().enumerate() {
        let branch_key = BRANCHES[*branch_idx].0;
        builder = builder.leaf(
            LeafBuilder::new(format!("leaf-{i:02}"), format!("branch-{branch_key}"))
                .at(*x, *y)
                .rotated(*rot)
                .scaled(*scale)
                .color(*color)
                .stagger_slot((i % 3) as u8)
                .build(),
        );
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile;

    #[test]
    fn preset_validates_and_compiles() {
        let config = skill_tree().unwrap();
        assert_eq!(config.trunks.len(), 3);
        assert_eq!(config.twigs.len(), 16);
        assert_eq!(config.branches.len(), 16);
        assert_eq!(config.nodes.len(), 16);
        assert_eq!(config.leaves.len(), 40);

        let plan = compile(&config).unwrap();
        assert_eq!(plan.segments().count(), 35);
        for seg in plan.segments() {
            assert!(seg.length > 0.0, "segment '{}' has no length", seg.id);
        }
    }

    #[test]
    fn crown_branch_reveals_last() {
        let config = skill_tree().unwrap();
        let plan = compile(&config).unwrap();
        let first = &plan.branches[0];
        let crown = plan.branches.last().unwrap();
        assert!(first.window.start < crown.window.start);
        assert_eq!(crown.id, "branch-react");
    }

    #[test]
    fn every_category_appears() {
        let config = skill_tree().unwrap();
        for category in [
            SkillCategory::Frontend,
            SkillCategory::Design,
            SkillCategory::Backend,
            SkillCategory::Tools,
        ] {
            assert!(config.nodes.iter().any(|n| n.category == category));
        }
    }
}
