use serde::{Deserialize, Serialize};

use crate::assets::AssetId;
use crate::scene::NodeHandle;

/// A synthesized animation clip: a set of curves over a shared frame
/// timeline. Puppet timelines span frames 0..100 (normalized position
/// times 100); setter clips hold a single key at frame 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub name: String,
    pub looping: bool,
    pub curves: Vec<Curve>,
}

impl Clip {
    /// Create an empty, non-looping clip.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            looping: false,
            curves: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

/// One curve of a clip: a binding plus its keyed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub binding: CurveBinding,
    pub data: CurveData,
}

/// What a curve animates on a resolved scene node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum CurveBinding {
    /// A named blend shape on a skinned mesh, in percent weight units.
    BlendShape { mesh: NodeHandle, shape: String },
    /// A node's active state, 0 or 100.
    ObjectActive { object: NodeHandle },
    /// A material slot on a renderer, swapped by asset reference.
    MaterialSlot { renderer: NodeHandle, slot: u32 },
}

/// How float keys are interpolated between samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interpolation {
    /// Piecewise-linear between consecutive keys.
    Linear,
    /// Hold each key's value until the next key.
    Constant,
}

/// One float key: a frame position and a value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatKey {
    pub frame: f64,
    pub value: f64,
}

/// One asset-reference key: an instantaneous swap at a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectReferenceKey {
    pub frame: f64,
    pub asset: AssetId,
}

/// The keyed data of a curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum CurveData {
    Float {
        interpolation: Interpolation,
        keys: Vec<FloatKey>,
    },
    /// Discrete, never interpolated.
    ObjectReference { keys: Vec<ObjectReferenceKey> },
}
