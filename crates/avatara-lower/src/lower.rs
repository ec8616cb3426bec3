use serde::{Deserialize, Serialize};

use avatara_core::AvataraResult;
use avatara_ir::{validate_avatar, Avatar, GroupContent};

use crate::assets::{AssetContainer, ExternalAssetResolver};
use crate::builders::group::build_group_layer;
use crate::builders::prevention::build_prevention_layers;
use crate::builders::puppet::build_puppet_layer;
use crate::builders::raw::build_raw_layer;
use crate::builders::switch::build_switch_layer;
use crate::machine::AnimatorLayer;
use crate::params::{ExportedParameter, ParameterRegistry};
use crate::scene::{SceneSource, TargetResolver};

/// The complete output of one lowering pass: one layer per animation
/// group, the two prevention layers, and the exported parameter list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoweredAvatar {
    pub name: String,
    pub layers: Vec<AnimatorLayer>,
    pub parameters: Vec<ExportedParameter>,
}

/// Pass-scoped services shared by every builder. Constructed per pass and
/// never reused across passes.
pub(crate) struct LoweringContext<'a, S: SceneSource> {
    pub targets: TargetResolver<'a, S>,
    pub assets: ExternalAssetResolver<'a>,
    pub parameters: ParameterRegistry<'a>,
}

/// Run one complete lowering pass over an avatar IR document.
///
/// Groups are dispatched to their builders in declaration order, the
/// prevention layers are synthesized afterwards, and the parameter
/// registry is drained last. Layers are buffered pass-locally; any
/// failure aborts the pass and nothing is published.
pub fn lower_avatar<S: SceneSource>(
    avatar: &Avatar,
    scene: &S,
    assets: &[AssetContainer],
) -> AvataraResult<LoweredAvatar> {
    if let Err(errors) = validate_avatar(avatar) {
        if let Some(error) = errors.into_iter().next() {
            return Err(error);
        }
    }

    let mut cx = LoweringContext {
        targets: TargetResolver::new(scene),
        assets: ExternalAssetResolver::new(assets),
        parameters: ParameterRegistry::new(avatar),
    };

    let mut layers = Vec::with_capacity(avatar.animation_groups.len() + 2);
    for group in &avatar.animation_groups {
        tracing::debug!(
            group = %group.name,
            kind = group.content.kind_name(),
            "lowering animation group"
        );
        let layer = match &group.content {
            GroupContent::Group {
                parameter,
                default_targets,
                options,
                ..
            } => build_group_layer(&mut cx, &group.name, parameter, default_targets, options)?,
            GroupContent::Switch {
                parameter,
                disabled,
                enabled,
                ..
            } => build_switch_layer(&mut cx, &group.name, parameter, disabled, enabled)?,
            GroupContent::Puppet {
                parameter,
                keyframes,
            } => build_puppet_layer(&mut cx, &group.name, parameter, keyframes)?,
            GroupContent::Layer(raw) => build_raw_layer(&mut cx, &group.name, raw)?,
        };
        layers.push(layer);
    }

    layers.extend(build_prevention_layers(&mut cx, &avatar.animation_groups)?);

    let parameters = cx.parameters.export();
    tracing::info!(
        avatar = %avatar.name,
        layers = layers.len(),
        parameters = parameters.len(),
        "lowering pass complete"
    );

    Ok(LoweredAvatar {
        name: avatar.name.clone(),
        layers,
        parameters,
    })
}
