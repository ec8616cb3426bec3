use serde::{Deserialize, Serialize};

use avatara_ir::BlendTreeKind;

use crate::assets::AssetId;
use crate::clip::Clip;
use crate::params::ParameterHandle;

/// One generated animator layer: a self-contained state machine suitable
/// for non-destructive insertion into the host's layer stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimatorLayer {
    pub name: String,
    pub states: Vec<State>,
    pub transitions: Vec<Transition>,
    /// Index of the state the layer starts in.
    pub default_state: usize,
}

impl AnimatorLayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            states: Vec::new(),
            transitions: Vec::new(),
            default_state: 0,
        }
    }

    /// Append a state, returning its index.
    pub fn add_state(&mut self, state: State) -> usize {
        self.states.push(state);
        self.states.len() - 1
    }
}

/// One state of a generated layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub name: String,
    /// Editor grid placement. Cosmetic only.
    pub position: (i32, i32),
    pub motion: Motion,
    /// Float parameter bound directly to the motion's normalized playhead.
    pub motion_time: Option<ParameterHandle>,
    pub tracking: Option<TrackingControl>,
}

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: (0, 0),
            motion: Motion::None,
            motion_time: None,
            tracking: None,
        }
    }

    /// Builder: set the cosmetic grid position.
    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.position = (x, y);
        self
    }

    /// Builder: set the played motion.
    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }

    /// Builder: bind motion time to a float parameter.
    pub fn with_motion_time(mut self, parameter: ParameterHandle) -> Self {
        self.motion_time = Some(parameter);
        self
    }

    /// Builder: set the facial-tracking control this state applies.
    pub fn with_tracking(mut self, tracking: TrackingControl) -> Self {
        self.tracking = Some(tracking);
        self
    }
}

/// What a state plays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum Motion {
    /// No motion; the state is inert.
    None,
    /// A clip synthesized by this pass.
    Clip(Clip),
    /// An externally imported clip.
    External(AssetId),
    /// A blend tree over external clips.
    BlendTree(BlendTree),
}

/// A lowered blend tree. Parameter list length matches the kind's
/// dimensionality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendTree {
    pub kind: BlendTreeKind,
    pub parameters: Vec<ParameterHandle>,
    pub children: Vec<BlendTreeChild>,
}

/// One leaf of a lowered blend tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendTreeChild {
    pub clip: AssetId,
    pub position: Vec<f64>,
}

/// A facial-tracking directive attached to a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingControl {
    pub region: TrackingRegion,
    pub mode: TrackingMode,
}

/// A face region whose tracking can be suppressed by animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackingRegion {
    Mouth,
    Eyelids,
}

/// Whether a state hands the region to tracking or to animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackingMode {
    Tracking,
    Animation,
}

/// One transition between two states of a layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub duration: f64,
    pub guard: Guard,
}

impl Transition {
    /// Create an instantaneous transition.
    pub fn new(from: usize, to: usize, guard: Guard) -> Self {
        Self {
            from,
            to,
            duration: 0.0,
            guard,
        }
    }

    /// Builder: set the blend duration in seconds.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }
}

/// A transition guard: a disjunction of conjunctions of conditions.
/// The transition fires when any clause holds; a clause holds when all
/// of its conditions do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guard {
    clauses: Vec<Vec<Condition>>,
}

impl Guard {
    /// Seed a guard with a single condition.
    pub fn when(condition: Condition) -> Self {
        Self {
            clauses: vec![vec![condition]],
        }
    }

    /// A single conjunction over the given conditions.
    pub fn all(conditions: Vec<Condition>) -> Self {
        Self {
            clauses: vec![conditions],
        }
    }

    /// AND the condition onto the most recent clause.
    pub fn and(mut self, condition: Condition) -> Self {
        match self.clauses.last_mut() {
            Some(clause) => clause.push(condition),
            None => self.clauses.push(vec![condition]),
        }
        self
    }

    /// OR a new clause seeded with the condition.
    pub fn or(mut self, condition: Condition) -> Self {
        self.clauses.push(vec![condition]);
        self
    }

    pub fn clauses(&self) -> &[Vec<Condition>] {
        &self.clauses
    }
}

/// One atomic comparison against an interned parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum Condition {
    IntEqual { parameter: ParameterHandle, value: i64 },
    IntNotEqual { parameter: ParameterHandle, value: i64 },
    IntGreater { parameter: ParameterHandle, value: i64 },
    IntLess { parameter: ParameterHandle, value: i64 },
    FloatGreater { parameter: ParameterHandle, value: f64 },
    FloatLess { parameter: ParameterHandle, value: f64 },
    Bool { parameter: ParameterHandle, value: bool },
}
