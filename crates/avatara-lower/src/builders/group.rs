use avatara_core::AvataraResult;
use avatara_ir::{GroupOption, Target};

use super::synthesize_setter_clip;
use crate::lower::LoweringContext;
use crate::machine::{AnimatorLayer, Condition, Guard, Motion, State, Transition};
use crate::scene::SceneSource;

/// Lower a Group: an idle hub state for the default target set and one
/// state per option, selected by an Int parameter. Transitions form a
/// star through the idle hub, never option-to-option.
pub(crate) fn build_group_layer<S: SceneSource>(
    cx: &mut LoweringContext<'_, S>,
    group_name: &str,
    parameter: &str,
    default_targets: &[Target],
    options: &[GroupOption],
) -> AvataraResult<AnimatorLayer> {
    let parameter = cx.parameters.int(parameter)?;
    let mut layer = AnimatorLayer::new(group_name);

    let idle_clip = synthesize_setter_clip(cx, format!("sg-{group_name}-0"), default_targets)?;
    let idle = layer.add_state(State::new("Disabled").with_motion(Motion::Clip(idle_clip)));

    for option in options {
        let clip = synthesize_setter_clip(
            cx,
            format!("sg-{}-{}", group_name, option.order),
            &option.targets,
        )?;
        let state = layer.add_state(
            State::new(format!("{} {}", option.order, option.name))
                .with_position((option.order / 8 + 1) as i32, (option.order % 8) as i32)
                .with_motion(Motion::Clip(clip)),
        );
        let selector = option.order as i64;
        layer.transitions.push(Transition::new(
            idle,
            state,
            Guard::when(Condition::IntEqual {
                parameter,
                value: selector,
            }),
        ));
        // exit back to the hub when the selector moves elsewhere
        layer.transitions.push(Transition::new(
            state,
            idle,
            Guard::when(Condition::IntNotEqual {
                parameter,
                value: selector,
            }),
        ));
    }

    Ok(layer)
}
