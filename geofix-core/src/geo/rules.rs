//! Exclusion and substitution tables
//!
//! Both tables are plain substring tests over single lines. Nothing here understands
//! the `.geo` grammar; each entry is named so it can be tested on its own and so the
//! run report can count what fired.
//!
//! Substitution rules are **not** mutually exclusive. A line is tested against every
//! rule using its original text, and every rule that matches rewrites it in table
//! order, each one receiving the previous rule's output. A line matching more than
//! one rule is almost always generator output the table was not written for, so the
//! substitution stage logs it.

/// A substring that disqualifies any line containing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exclusion {
    pub name: &'static str,
    pub pattern: &'static str,
}

pub const EXCLUSIONS: &[Exclusion] = &[
    Exclusion { name: "save-all", pattern: "Mesh.SaveAll" },
    // Only the Mesh.Save* options. The `Save "<file>";` statement itself is retargeted
    // by the `save` substitution rule.
    Exclusion { name: "save-options", pattern: "Mesh.Save" },
    Exclusion { name: "mesh-3d", pattern: "Mesh  3" },
    Exclusion { name: "coherence", pattern: "Coherence" },
    Exclusion { name: "characteristic-length-min", pattern: "Mesh.CharacteristicLengthMin" },
    Exclusion { name: "characteristic-length-max", pattern: "Mesh.CharacteristicLengthMax" },
    Exclusion { name: "optimize", pattern: "Mesh.Optimize" },
    Exclusion { name: "optimize-netgen", pattern: "Mesh.OptimizeNetgen" },
    Exclusion { name: "high-order", pattern: "Mesh.High" },
    Exclusion { name: "geometry-tolerance", pattern: "Geometry.Tolerance" },
    Exclusion { name: "comment", pattern: "//" },
];

/// First exclusion matching `line`, if any.
pub fn excluded_by(line: &str) -> Option<&'static Exclusion> {
    EXCLUSIONS.iter().find(|e| line.contains(e.pattern))
}

/// Trigger of the rule whose line also supplies the refinement field surfaces.
pub const WALL_GROUP_TRIGGER: &str = "mg_wall";

/// How a matching line is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewrite {
    /// Replace the whole line with a constant.
    Line(&'static str),
    /// Replace the whole line with `<keyword> "<base>.<extension>";`, optionally
    /// followed by a blank line.
    Target {
        keyword: &'static str,
        extension: &'static str,
        blank_after: bool,
    },
    /// Replace the quoted placeholder `"<token>"` with a bare numeric group code.
    Placeholder { token: &'static str, code: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstitutionRule {
    pub name: &'static str,
    pub trigger: &'static str,
    pub rewrite: Rewrite,
    /// Attach a blank line to the line before the match.
    pub pad_previous: bool,
    /// Pull the surface list out of the matched line.
    pub extract_fields: bool,
}

impl SubstitutionRule {
    const fn new(name: &'static str, trigger: &'static str, rewrite: Rewrite) -> Self {
        SubstitutionRule {
            name,
            trigger,
            rewrite,
            pad_previous: false,
            extract_fields: false,
        }
    }

    const fn placeholder(name: &'static str, token: &'static str, code: u32) -> Self {
        SubstitutionRule::new(name, token, Rewrite::Placeholder { token, code })
    }

    pub fn matches(&self, line: &str) -> bool {
        line.contains(self.trigger)
    }

    /// Rewrite `current` (the line as left by earlier rules).
    ///
    /// Returns `None` when a placeholder rule's quoted token is absent; the line is
    /// then kept as is.
    pub fn apply(&self, current: &str, base: &str) -> Option<String> {
        match self.rewrite {
            Rewrite::Line(text) => Some(text.to_string()),
            Rewrite::Target {
                keyword,
                extension,
                blank_after,
            } => {
                let mut line = format!("{keyword} \"{base}.{extension}\";");
                if blank_after {
                    line.push('\n');
                }
                Some(line)
            }
            Rewrite::Placeholder { token, code } => {
                let quoted = format!("\"{token}\"");
                current
                    .contains(&quoted)
                    .then(|| current.replace(&quoted, &code.to_string()))
            }
        }
    }
}

pub const SUBSTITUTIONS: &[SubstitutionRule] = &[
    SubstitutionRule::new("mesh-format", "Mesh.Format", Rewrite::Line("Mesh.Format = 1;")),
    SubstitutionRule::new(
        "algorithm-2d",
        "Mesh.Algorithm =",
        Rewrite::Line("Mesh.Algorithm = 1;"),
    ),
    SubstitutionRule::new(
        "algorithm-3d",
        "Mesh.Algorithm3D =",
        Rewrite::Line("Mesh.Algorithm3D = 10;"),
    ),
    SubstitutionRule {
        pad_previous: true,
        ..SubstitutionRule::new(
            "element-order",
            "ElementOrder",
            Rewrite::Line("Mesh.ElementOrder = 1;"),
        )
    },
    SubstitutionRule::new(
        "save",
        "Save",
        Rewrite::Target {
            keyword: "Save",
            extension: "msh",
            blank_after: false,
        },
    ),
    SubstitutionRule::new(
        "merge",
        "Merge",
        Rewrite::Target {
            keyword: "Merge",
            extension: "brep",
            blank_after: true,
        },
    ),
    SubstitutionRule {
        extract_fields: true,
        ..SubstitutionRule::placeholder("wall-group", WALL_GROUP_TRIGGER, 1)
    },
    SubstitutionRule::placeholder("symmetry-group", "mg_symmetry", 12),
    SubstitutionRule::placeholder("farfield-group", "mg_farfield", 9),
    SubstitutionRule::placeholder("interior-group", "mg_interog", 11),
    SubstitutionRule::placeholder("volume-group", "mg_volume", 4),
];

/// Look up a substitution rule by name.
pub fn rule(name: &str) -> Option<&'static SubstitutionRule> {
    SUBSTITUTIONS.iter().find(|r| r.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Mesh.SaveAll = 1;", "save-all")]
    #[case("Mesh.SaveGroupsOfNodes = 1;", "save-options")]
    #[case("Mesh  3;", "mesh-3d")]
    #[case("Coherence Mesh;", "coherence")]
    #[case("Mesh.CharacteristicLengthMin = 0;", "characteristic-length-min")]
    #[case("Mesh.CharacteristicLengthMax = 1e+22;", "characteristic-length-max")]
    #[case("Mesh.Optimize = 1;", "optimize")]
    #[case("Mesh.HighOrderOptimize = 0;", "high-order")]
    #[case("Geometry.Tolerance = 1e-06;", "geometry-tolerance")]
    #[case("// meshing", "comment")]
    #[case("Mesh.Format = 1;  // trailing note", "comment")]
    fn test_excluded_lines(#[case] line: &str, #[case] name: &str) {
        assert_eq!(excluded_by(line).map(|e| e.name), Some(name));
    }

    #[test]
    fn test_netgen_optimize_is_excluded() {
        // Both optimize patterns match; the first one in table order is reported.
        assert_eq!(
            excluded_by("Mesh.OptimizeNetgen = 0;").map(|e| e.name),
            Some("optimize")
        );
    }

    #[rstest]
    #[case("Save \"/tmp/shape2mesh.unv\";")]
    #[case("Merge \"/tmp/Cut_Geometry.brep\";")]
    #[case("Mesh.ElementOrder = 2;")]
    #[case("Physical Surface(\"mg_wall\") = {7, 8};")]
    fn test_statements_survive_filter(#[case] line: &str) {
        assert_eq!(excluded_by(line), None);
    }

    #[rstest]
    #[case("mesh-format", "Mesh.Format = 42;", "Mesh.Format = 1;")]
    #[case("algorithm-2d", "Mesh.Algorithm = 2;", "Mesh.Algorithm = 1;")]
    #[case("algorithm-3d", "Mesh.Algorithm3D = 1;", "Mesh.Algorithm3D = 10;")]
    #[case("element-order", "Mesh.ElementOrder = 2;", "Mesh.ElementOrder = 1;")]
    #[case("save", "Save \"/tmp/shape2mesh.unv\";", "Save \"wing.msh\";")]
    #[case("merge", "Merge \"/tmp/Cut_Geometry.brep\";", "Merge \"wing.brep\";\n")]
    #[case("wall-group", "Physical Surface(\"mg_wall\") = {7, 8};", "Physical Surface(1) = {7, 8};")]
    #[case("symmetry-group", "Physical Surface(\"mg_symmetry\") = {3};", "Physical Surface(12) = {3};")]
    #[case("farfield-group", "Physical Surface(\"mg_farfield\") = {1, 2};", "Physical Surface(9) = {1, 2};")]
    #[case("interior-group", "Physical Surface(\"mg_interog\") = {5};", "Physical Surface(11) = {5};")]
    #[case("volume-group", "Physical Volume(\"mg_volume\") = {1};", "Physical Volume(4) = {1};")]
    fn test_rule_rewrites(#[case] name: &str, #[case] input: &str, #[case] expected: &str) {
        let rule = rule(name).unwrap();
        assert!(rule.matches(input));
        assert_eq!(rule.apply(input, "wing").as_deref(), Some(expected));
    }

    #[test]
    fn test_algorithm_triggers_do_not_overlap() {
        let two_d = rule("algorithm-2d").unwrap();
        let three_d = rule("algorithm-3d").unwrap();
        assert!(!two_d.matches("Mesh.Algorithm3D = 1;"));
        assert!(!three_d.matches("Mesh.Algorithm = 2;"));
    }

    #[test]
    fn test_unquoted_placeholder_is_left_alone() {
        let wall = rule("wall-group").unwrap();
        let line = "Physical Surface(mg_wall) = {7};";
        assert!(wall.matches(line));
        assert_eq!(wall.apply(line, "wing"), None);
    }

    #[test]
    fn test_only_wall_rule_extracts_and_only_element_order_pads() {
        let extracting: Vec<_> = SUBSTITUTIONS.iter().filter(|r| r.extract_fields).collect();
        assert_eq!(extracting.len(), 1);
        assert_eq!(extracting[0].trigger, WALL_GROUP_TRIGGER);

        let padding: Vec<_> = SUBSTITUTIONS.iter().filter(|r| r.pad_previous).collect();
        assert_eq!(padding.len(), 1);
        assert_eq!(padding[0].name, "element-order");
    }
}
