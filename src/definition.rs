//! Serialized L-system definitions, so whole drawings (axiom, iteration
//! count, rules, operations) can live in RON files instead of source code.
use crate::l_system::LSystem;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A complete description of an L-system drawing. Deserializes from RON:
///
/// ```rust
/// use lsys_pen_rs::definition::LSystemDef;
///
/// let def = LSystemDef::from_ron_str(r#"(
///     name: "algae",
///     axiom: "A",
///     iterations: 4,
///     rules: {'A': "AB", 'B': "A"},
///     operations: {'A': "draw #000000ff 1 5", 'B': "rotate 25"},
/// )"#).unwrap();
/// let mut system = def.build();
/// system.run(&def.axiom, def.iterations).unwrap();
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LSystemDef {
    #[serde(default)]
    pub name: String,
    pub axiom: String,
    pub iterations: u32,
    pub rules: HashMap<char, String>,
    pub operations: HashMap<char, String>,
}

impl LSystemDef {
    pub fn from_ron_str(src: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(src)
    }

    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Build the runnable system. The axiom and iteration count stay on the
    /// definition so the caller decides when (and how often) to run.
    pub fn build(&self) -> LSystem {
        LSystem::new(self.rules.clone(), self.operations.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIERPINSKI: &str = r#"(
        name: "sierpinski-arrowhead",
        axiom: "A",
        iterations: 2,
        rules: {'A': "B-A-B", 'B': "A+B+A"},
        operations: {
            'A': "draw #2040a0ff 1 8",
            'B': "draw #2040a0ff 1 8",
            '+': "rotate 60",
            '-': "rotate -60",
        },
    )"#;

    #[test]
    fn test_parse_and_run() {
        let def = LSystemDef::from_ron_str(SIERPINSKI).unwrap();
        assert_eq!(def.name, "sierpinski-arrowhead");
        let mut system = def.build();
        system.run(&def.axiom, def.iterations).unwrap();
        // "A" -> "B-A-B" -> "A+B+A-B-A-B-A+B+A": nine drawing symbols.
        assert_eq!(system.pen().strokes().len(), 9);
    }

    #[test]
    fn test_ron_roundtrip() {
        let def = LSystemDef::from_ron_str(SIERPINSKI).unwrap();
        let encoded = def.to_ron_string().unwrap();
        assert_eq!(LSystemDef::from_ron_str(&encoded).unwrap(), def);
    }

    #[test]
    fn test_malformed_ron_is_error() {
        assert!(LSystemDef::from_ron_str("(axiom: 42)").is_err());
    }

    #[test]
    fn test_name_is_optional() {
        let def = LSystemDef::from_ron_str(
            r#"(axiom: "A", iterations: 0, rules: {}, operations: {})"#,
        )
        .unwrap();
        assert!(def.name.is_empty());
    }
}
