use serde::{Deserialize, Serialize};

/// An animatable unit: a blend-shape weight, an object's active state, or
/// a material slot on a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum Target {
    /// A blend shape on a skinned mesh. `value` is normalized to [0, 1].
    Shape {
        mesh: String,
        shape: String,
        value: f64,
    },
    /// An object's active state, addressed by scene-relative path.
    Object { object: String, enabled: bool },
    /// A material slot on a renderer, swapped to an external asset.
    Material {
        mesh: String,
        slot: u32,
        asset_key: String,
    },
}

impl Target {
    /// The identity of the physical unit this target animates, independent
    /// of the value it sets. Two targets share a key exactly when they
    /// animate the same unit.
    pub fn key(&self) -> TargetKey {
        match self {
            Target::Shape { mesh, shape, .. } => TargetKey::Shape {
                mesh: mesh.clone(),
                shape: shape.clone(),
            },
            Target::Object { object, .. } => TargetKey::Object {
                object: object.clone(),
            },
            Target::Material { mesh, slot, .. } => TargetKey::Material {
                mesh: mesh.clone(),
                slot: *slot,
            },
        }
    }
}

/// Grouping key for targets, used to partition puppet samples into one
/// timeline per physical target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetKey {
    Shape { mesh: String, shape: String },
    Object { object: String },
    Material { mesh: String, slot: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ignores_value() {
        let a = Target::Shape {
            mesh: "Body".into(),
            shape: "smile".into(),
            value: 0.0,
        };
        let b = Target::Shape {
            mesh: "Body".into(),
            shape: "smile".into(),
            value: 1.0,
        };
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_key_distinguishes_units() {
        let shape = Target::Shape {
            mesh: "Body".into(),
            shape: "smile".into(),
            value: 1.0,
        };
        let object = Target::Object {
            object: "Body".into(),
            enabled: true,
        };
        let slot0 = Target::Material {
            mesh: "Body".into(),
            slot: 0,
            asset_key: "m1".into(),
        };
        let slot1 = Target::Material {
            mesh: "Body".into(),
            slot: 1,
            asset_key: "m1".into(),
        };
        assert_ne!(shape.key(), object.key());
        assert_ne!(slot0.key(), slot1.key());
    }

    #[test]
    fn test_target_tagging() {
        let json = r#"{"type":"Material","content":{"mesh":"Body","slot":2,"asset_key":"skin-alt"}}"#;
        let target: Target = serde_json::from_str(json).unwrap();
        assert_eq!(
            target,
            Target::Material {
                mesh: "Body".into(),
                slot: 2,
                asset_key: "skin-alt".into()
            }
        );
    }
}
