use avatara_core::AvataraResult;
use avatara_ir::{AnimationGroup, GroupContent, Preventions};

use crate::lower::LoweringContext;
use crate::machine::{
    AnimatorLayer, Condition, Guard, State, TrackingControl, TrackingMode, TrackingRegion,
    Transition,
};
use crate::scene::SceneSource;

/// One group whose activity suppresses a tracked face region: its driving
/// parameter and whether that parameter is Int (Group) or Bool (Switch).
#[derive(Debug, Clone, Copy)]
struct Contributor<'a> {
    parameter: &'a str,
    is_int: bool,
}

/// Derive the two tracking-prevention layers from every group's
/// prevention flags, one layer per region.
pub(crate) fn build_prevention_layers<S: SceneSource>(
    cx: &mut LoweringContext<'_, S>,
    groups: &[AnimationGroup],
) -> AvataraResult<Vec<AnimatorLayer>> {
    Ok(vec![
        build_region_layer(cx, groups, TrackingRegion::Mouth)?,
        build_region_layer(cx, groups, TrackingRegion::Eyelids)?,
    ])
}

fn build_region_layer<S: SceneSource>(
    cx: &mut LoweringContext<'_, S>,
    groups: &[AnimationGroup],
    region: TrackingRegion,
) -> AvataraResult<AnimatorLayer> {
    let name = match region {
        TrackingRegion::Mouth => "MouthPrevention",
        TrackingRegion::Eyelids => "EyelidsPrevention",
    };
    let mut layer = AnimatorLayer::new(name);
    let tracking = layer.add_state(State::new("Tracking").with_tracking(TrackingControl {
        region,
        mode: TrackingMode::Tracking,
    }));
    let animation = layer.add_state(State::new("Animation").with_tracking(TrackingControl {
        region,
        mode: TrackingMode::Animation,
    }));

    // With no contributors the layer always tracks: two states, no
    // transitions.
    let contributors = collect_contributors(groups, region);
    let Some((first, rest)) = contributors.split_first() else {
        return Ok(layer);
    };

    let mut to_tracking = Guard::when(rest_condition(cx, *first)?);
    let mut to_animation = Guard::when(active_condition(cx, *first)?);
    for contributor in rest {
        to_tracking = to_tracking.and(rest_condition(cx, *contributor)?);
        to_animation = to_animation.or(active_condition(cx, *contributor)?);
    }
    layer
        .transitions
        .push(Transition::new(animation, tracking, to_tracking));
    layer
        .transitions
        .push(Transition::new(tracking, animation, to_animation));
    Ok(layer)
}

/// Contributors in group declaration order. Order does not change the
/// boolean result but keeps the emitted guards reproducible.
fn collect_contributors(groups: &[AnimationGroup], region: TrackingRegion) -> Vec<Contributor<'_>> {
    groups
        .iter()
        .filter_map(|group| match &group.content {
            GroupContent::Group {
                parameter,
                preventions,
                ..
            } if flag_for(preventions, region) => Some(Contributor {
                parameter,
                is_int: true,
            }),
            GroupContent::Switch {
                parameter,
                preventions,
                ..
            } if flag_for(preventions, region) => Some(Contributor {
                parameter,
                is_int: false,
            }),
            _ => None,
        })
        .collect()
}

fn flag_for(preventions: &Preventions, region: TrackingRegion) -> bool {
    match region {
        TrackingRegion::Mouth => preventions.mouth,
        TrackingRegion::Eyelids => preventions.eyelids,
    }
}

/// "At rest": the group's selector sits on its idle value.
fn rest_condition<S: SceneSource>(
    cx: &mut LoweringContext<'_, S>,
    contributor: Contributor<'_>,
) -> AvataraResult<Condition> {
    Ok(if contributor.is_int {
        Condition::IntEqual {
            parameter: cx.parameters.int(contributor.parameter)?,
            value: 0,
        }
    } else {
        Condition::Bool {
            parameter: cx.parameters.boolean(contributor.parameter)?,
            value: false,
        }
    })
}

/// "Active": the group's selector moved off its idle value.
fn active_condition<S: SceneSource>(
    cx: &mut LoweringContext<'_, S>,
    contributor: Contributor<'_>,
) -> AvataraResult<Condition> {
    Ok(if contributor.is_int {
        Condition::IntNotEqual {
            parameter: cx.parameters.int(contributor.parameter)?,
            value: 0,
        }
    } else {
        Condition::Bool {
            parameter: cx.parameters.boolean(contributor.parameter)?,
            value: true,
        }
    })
}
