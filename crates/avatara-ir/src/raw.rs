use serde::{Deserialize, Serialize};

/// A hand-written animator layer: explicit states, animations, and
/// transitions. The escape hatch for logic the structured group kinds
/// cannot express.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLayer {
    /// Index of the state the layer starts in.
    pub default_state_index: u32,
    pub states: Vec<RawState>,
}

/// One state of a raw layer, indexed by position in `RawLayer::states`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawState {
    pub name: String,
    pub animation: RawAnimation,
    /// Float parameter driving the clip's normalized playhead, if any.
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub transitions: Vec<RawTransition>,
}

/// What a raw state plays: an external clip or a blend tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum RawAnimation {
    Clip { asset_key: String },
    BlendTree(RawBlendTree),
}

/// A blend tree over external clips, with one blend parameter per
/// dimension of its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBlendTree {
    pub blend_type: BlendTreeKind,
    pub parameters: Vec<String>,
    pub fields: Vec<BlendTreeField>,
}

/// The blending strategy of a raw blend tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlendTreeKind {
    /// 1-D linear blend over a single parameter.
    Linear,
    /// 2-D simple directional blend.
    Simple2D,
    /// 2-D freeform directional blend.
    Freeform2D,
    /// 2-D freeform cartesian blend.
    Cartesian2D,
}

impl BlendTreeKind {
    /// Number of blend parameters this kind requires.
    pub fn dimensions(&self) -> usize {
        match self {
            BlendTreeKind::Linear => 1,
            BlendTreeKind::Simple2D | BlendTreeKind::Freeform2D | BlendTreeKind::Cartesian2D => 2,
        }
    }
}

/// One leaf of a blend tree: an external clip at a blend-space position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendTreeField {
    pub asset_key: String,
    pub position: Vec<f64>,
}

/// One outgoing transition of a raw state. Conditions form an
/// AND-conjunction; express OR with duplicate transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransition {
    /// Index of the destination state.
    pub target: u32,
    #[serde(default)]
    pub duration: f64,
    pub conditions: Vec<RawCondition>,
}

/// One condition of a raw transition, bound to a named parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum RawCondition {
    Be { parameter: String },
    Not { parameter: String },
    EqInt { parameter: String, value: i64 },
    NeqInt { parameter: String, value: i64 },
    GtInt { parameter: String, value: i64 },
    LeInt { parameter: String, value: i64 },
    GtFloat { parameter: String, value: f64 },
    LeFloat { parameter: String, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_tree_dimensions() {
        assert_eq!(BlendTreeKind::Linear.dimensions(), 1);
        assert_eq!(BlendTreeKind::Simple2D.dimensions(), 2);
        assert_eq!(BlendTreeKind::Freeform2D.dimensions(), 2);
        assert_eq!(BlendTreeKind::Cartesian2D.dimensions(), 2);
    }

    #[test]
    fn test_condition_tagging() {
        let json = r#"{"type":"NeqInt","content":{"parameter":"Mode","value":0}}"#;
        let cond: RawCondition = serde_json::from_str(json).unwrap();
        assert_eq!(
            cond,
            RawCondition::NeqInt {
                parameter: "Mode".into(),
                value: 0
            }
        );
    }
}
