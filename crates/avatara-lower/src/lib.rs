//! # avatara-lower
//!
//! The Avatara lowering engine: walks the animation-group IR and
//! synthesizes, per group, a self-contained animator layer (states,
//! transitions, clips/curves), resolves scene paths and external asset
//! keys with pass-scoped memoization, interns parameter references, and
//! derives the two cross-cutting tracking-prevention layers.
//!
//! One pass is single-threaded, synchronous, and all-or-nothing: the
//! produced [`LoweredAvatar`] is returned only on full success.

pub mod assets;
pub mod clip;
pub mod lower;
pub mod machine;
pub mod params;
pub mod scene;

mod builders;

pub use assets::{AssetContainer, AssetId, ExternalAsset, ExternalAssetResolver, ExternalString};
pub use clip::{Clip, Curve, CurveBinding, CurveData, FloatKey, Interpolation, ObjectReferenceKey};
pub use lower::{lower_avatar, LoweredAvatar};
pub use machine::{
    AnimatorLayer, BlendTree, BlendTreeChild, Condition, Guard, Motion, State, TrackingControl,
    TrackingMode, TrackingRegion, Transition,
};
pub use params::{ExportedParameter, ParameterHandle, ParameterRegistry};
pub use scene::{NodeHandle, SceneModel, SceneNode, SceneSource, TargetKind, TargetResolver};
