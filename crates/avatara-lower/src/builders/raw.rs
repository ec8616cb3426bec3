use avatara_core::AvataraResult;
use avatara_ir::{RawAnimation, RawCondition, RawLayer};

use crate::lower::LoweringContext;
use crate::machine::{
    AnimatorLayer, BlendTree, BlendTreeChild, Condition, Guard, Motion, State, Transition,
};
use crate::scene::SceneSource;

/// Lower a raw Layer: hand-written states over external clips or blend
/// trees, with explicit AND-guarded transitions. OR must be expressed as
/// duplicate transitions.
pub(crate) fn build_raw_layer<S: SceneSource>(
    cx: &mut LoweringContext<'_, S>,
    group_name: &str,
    raw: &RawLayer,
) -> AvataraResult<AnimatorLayer> {
    let mut layer = AnimatorLayer::new(group_name);
    layer.default_state = raw.default_state_index as usize;

    for raw_state in &raw.states {
        let motion = match &raw_state.animation {
            RawAnimation::Clip { asset_key } => {
                Motion::External(cx.assets.animation_clip(asset_key)?)
            }
            RawAnimation::BlendTree(tree) => {
                let parameters = tree
                    .parameters
                    .iter()
                    .map(|name| cx.parameters.float(name))
                    .collect::<AvataraResult<Vec<_>>>()?;
                let mut children = Vec::with_capacity(tree.fields.len());
                for field in &tree.fields {
                    children.push(BlendTreeChild {
                        clip: cx.assets.animation_clip(&field.asset_key)?,
                        position: field.position.clone(),
                    });
                }
                Motion::BlendTree(BlendTree {
                    kind: tree.blend_type,
                    parameters,
                    children,
                })
            }
        };

        let mut state = State::new(&raw_state.name).with_motion(motion);
        if let Some(time) = &raw_state.time {
            state = state.with_motion_time(cx.parameters.float(time)?);
        }
        layer.add_state(state);
    }

    for (from, raw_state) in raw.states.iter().enumerate() {
        for raw_transition in &raw_state.transitions {
            let mut conditions = Vec::with_capacity(raw_transition.conditions.len());
            for condition in &raw_transition.conditions {
                conditions.push(lower_condition(cx, condition)?);
            }
            layer.transitions.push(
                Transition::new(from, raw_transition.target as usize, Guard::all(conditions))
                    .with_duration(raw_transition.duration),
            );
        }
    }

    Ok(layer)
}

fn lower_condition<S: SceneSource>(
    cx: &mut LoweringContext<'_, S>,
    condition: &RawCondition,
) -> AvataraResult<Condition> {
    Ok(match condition {
        RawCondition::Be { parameter } => Condition::Bool {
            parameter: cx.parameters.boolean(parameter)?,
            value: true,
        },
        RawCondition::Not { parameter } => Condition::Bool {
            parameter: cx.parameters.boolean(parameter)?,
            value: false,
        },
        RawCondition::EqInt { parameter, value } => Condition::IntEqual {
            parameter: cx.parameters.int(parameter)?,
            value: *value,
        },
        RawCondition::NeqInt { parameter, value } => Condition::IntNotEqual {
            parameter: cx.parameters.int(parameter)?,
            value: *value,
        },
        RawCondition::GtInt { parameter, value } => Condition::IntGreater {
            parameter: cx.parameters.int(parameter)?,
            value: *value,
        },
        RawCondition::LeInt { parameter, value } => Condition::IntLess {
            parameter: cx.parameters.int(parameter)?,
            value: *value,
        },
        RawCondition::GtFloat { parameter, value } => Condition::FloatGreater {
            parameter: cx.parameters.float(parameter)?,
            value: *value,
        },
        RawCondition::LeFloat { parameter, value } => Condition::FloatLess {
            parameter: cx.parameters.float(parameter)?,
            value: *value,
        },
    })
}
