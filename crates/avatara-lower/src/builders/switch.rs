use avatara_core::AvataraResult;
use avatara_ir::Target;

use super::synthesize_setter_clip;
use crate::lower::LoweringContext;
use crate::machine::{AnimatorLayer, Condition, Guard, Motion, State, Transition};
use crate::scene::SceneSource;

/// Lower a Switch: exactly two states driven by a Bool parameter, with
/// mutually exclusive transitions between them.
pub(crate) fn build_switch_layer<S: SceneSource>(
    cx: &mut LoweringContext<'_, S>,
    group_name: &str,
    parameter: &str,
    disabled_targets: &[Target],
    enabled_targets: &[Target],
) -> AvataraResult<AnimatorLayer> {
    let parameter = cx.parameters.boolean(parameter)?;
    let mut layer = AnimatorLayer::new(group_name);

    let disabled_clip =
        synthesize_setter_clip(cx, format!("ss-{group_name}-disabled"), disabled_targets)?;
    let enabled_clip =
        synthesize_setter_clip(cx, format!("ss-{group_name}-enabled"), enabled_targets)?;

    let disabled = layer.add_state(State::new("Disabled").with_motion(Motion::Clip(disabled_clip)));
    let enabled = layer.add_state(State::new("Enabled").with_motion(Motion::Clip(enabled_clip)));

    layer.transitions.push(Transition::new(
        disabled,
        enabled,
        Guard::when(Condition::Bool {
            parameter,
            value: true,
        }),
    ));
    layer.transitions.push(Transition::new(
        enabled,
        disabled,
        Guard::when(Condition::Bool {
            parameter,
            value: false,
        }),
    ));

    Ok(layer)
}
