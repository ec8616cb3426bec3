//! # avatara-ir
//!
//! The Avatara avatar IR — the immutable, fully-materialized description
//! of an avatar's parameters, animation groups, drivers, and menu tree.
//!
//! The IR is produced elsewhere (a text-to-IR compiler, see
//! [`compile::AvatarCompiler`]) and consumed read-only by the lowering
//! engine in `avatara-lower`.

pub mod avatar;
pub mod compile;
pub mod driver;
pub mod group;
pub mod menu;
pub mod parameter;
pub mod raw;
pub mod target;
pub mod validate;

pub use avatar::Avatar;
pub use group::{AnimationGroup, GroupContent, GroupOption, Preventions, PuppetKeyframe};
pub use parameter::{Parameter, ParameterKind, ParameterScope, ParameterType};
pub use raw::{
    BlendTreeField, BlendTreeKind, RawAnimation, RawBlendTree, RawCondition, RawLayer, RawState,
    RawTransition,
};
pub use target::{Target, TargetKey};
pub use validate::validate_avatar;
