use serde::{Deserialize, Serialize};

use crate::raw::RawLayer;
use crate::target::Target;

/// One named unit of generated animation logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationGroup {
    pub name: String,
    pub content: GroupContent,
}

/// The content of an animation group — how its layer is generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GroupContent {
    /// An Int-selected set of exclusive options around an idle hub state.
    Group {
        parameter: String,
        #[serde(default)]
        preventions: Preventions,
        default_targets: Vec<Target>,
        options: Vec<GroupOption>,
    },
    /// A Bool-driven two-state toggle.
    Switch {
        parameter: String,
        #[serde(default)]
        preventions: Preventions,
        disabled: Vec<Target>,
        enabled: Vec<Target>,
    },
    /// A Float-scrubbed timeline; the parameter is the normalized playhead.
    Puppet {
        parameter: String,
        keyframes: Vec<PuppetKeyframe>,
    },
    /// A hand-written state machine escape hatch.
    Layer(RawLayer),
}

impl GroupContent {
    /// Human-readable tag for logs and error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            GroupContent::Group { .. } => "group",
            GroupContent::Switch { .. } => "switch",
            GroupContent::Puppet { .. } => "puppet",
            GroupContent::Layer(_) => "layer",
        }
    }
}

/// One selectable option of a `Group`. `order` is the selector value of
/// the driving Int parameter and must be unique within the group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupOption {
    pub name: String,
    pub order: u32,
    pub targets: Vec<Target>,
}

/// One sample of a `Puppet` timeline. `position` is normalized to [0, 1];
/// keyframes need not arrive sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuppetKeyframe {
    pub position: f64,
    pub targets: Vec<Target>,
}

/// Facial-tracking regions this group suppresses while active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preventions {
    #[serde(default)]
    pub mouth: bool,
    #[serde(default)]
    pub eyelids: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_content_tagging() {
        let json = r#"{
            "name": "Face",
            "content": {
                "type": "Switch",
                "parameter": "FaceOn",
                "preventions": { "mouth": true, "eyelids": false },
                "disabled": [],
                "enabled": []
            }
        }"#;
        let group: AnimationGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.name, "Face");
        match group.content {
            GroupContent::Switch { preventions, .. } => {
                assert!(preventions.mouth);
                assert!(!preventions.eyelids);
            }
            other => panic!("expected switch, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_preventions_default_to_off() {
        let json = r#"{
            "name": "Expr",
            "content": {
                "type": "Group",
                "parameter": "Expr",
                "default_targets": [],
                "options": []
            }
        }"#;
        let group: AnimationGroup = serde_json::from_str(json).unwrap();
        match group.content {
            GroupContent::Group { preventions, .. } => {
                assert_eq!(preventions, Preventions::default());
            }
            other => panic!("expected group, got {}", other.kind_name()),
        }
    }
}
