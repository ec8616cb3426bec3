use std::collections::HashSet;

use crate::avatar::Avatar;
use crate::group::GroupContent;
use crate::raw::{RawAnimation, RawLayer};
use avatara_core::AvataraError;

/// Validate an Avatar IR document for structural correctness.
///
/// Runs before lowering; every violation is a declaration error and the
/// lowering pass never starts if any are present.
pub fn validate_avatar(avatar: &Avatar) -> Result<(), Vec<AvataraError>> {
    let mut errors = Vec::new();

    let mut parameter_names = HashSet::new();
    for parameter in &avatar.parameters {
        if !parameter_names.insert(&parameter.name) {
            errors.push(AvataraError::declaration(format!(
                "duplicate parameter name: {}",
                parameter.name
            )));
        }
    }

    for group in &avatar.animation_groups {
        match &group.content {
            GroupContent::Group { options, .. } => {
                let mut orders = HashSet::new();
                for option in options {
                    if !orders.insert(option.order) {
                        errors.push(AvataraError::declaration(format!(
                            "group '{}' has duplicate option order {}",
                            group.name, option.order
                        )));
                    }
                }
            }
            GroupContent::Puppet { keyframes, .. } => {
                for keyframe in keyframes {
                    if !(0.0..=1.0).contains(&keyframe.position) {
                        errors.push(AvataraError::declaration(format!(
                            "puppet '{}' has keyframe position {} outside [0, 1]",
                            group.name, keyframe.position
                        )));
                    }
                }
            }
            GroupContent::Layer(layer) => {
                validate_raw_layer(&group.name, layer, &mut errors);
            }
            GroupContent::Switch { .. } => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_raw_layer(group_name: &str, layer: &RawLayer, errors: &mut Vec<AvataraError>) {
    let state_count = layer.states.len();
    if layer.default_state_index as usize >= state_count {
        errors.push(AvataraError::declaration(format!(
            "layer '{}' default state index {} out of bounds ({} states)",
            group_name, layer.default_state_index, state_count
        )));
    }

    for state in &layer.states {
        if let RawAnimation::BlendTree(tree) = &state.animation {
            let expected = tree.blend_type.dimensions();
            if tree.parameters.len() != expected {
                errors.push(AvataraError::declaration(format!(
                    "layer '{}' state '{}' blend tree needs {} parameter(s), has {}",
                    group_name,
                    state.name,
                    expected,
                    tree.parameters.len()
                )));
            }
        }
        for transition in &state.transitions {
            if transition.target as usize >= state_count {
                errors.push(AvataraError::declaration(format!(
                    "layer '{}' state '{}' transition target {} out of bounds ({} states)",
                    group_name, state.name, transition.target, state_count
                )));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::{AnimationGroup, GroupOption, Preventions};
    use crate::parameter::{Parameter, ParameterScope, ParameterType};
    use crate::raw::{RawState, RawTransition};

    fn empty_avatar() -> Avatar {
        Avatar {
            name: "Test".into(),
            parameters: vec![],
            animation_groups: vec![],
            driver_groups: vec![],
            menu: vec![],
        }
    }

    #[test]
    fn test_validate_empty_avatar() {
        assert!(validate_avatar(&empty_avatar()).is_ok());
    }

    #[test]
    fn test_validate_duplicate_parameter_names() {
        let mut avatar = empty_avatar();
        let parameter = Parameter {
            name: "Expr".into(),
            value_type: ParameterType::Int(None),
            scope: ParameterScope::Local,
        };
        avatar.parameters = vec![parameter.clone(), parameter];
        let errors = validate_avatar(&avatar).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("duplicate parameter"));
    }

    #[test]
    fn test_validate_duplicate_option_orders() {
        let mut avatar = empty_avatar();
        let option = GroupOption {
            name: "A".into(),
            order: 1,
            targets: vec![],
        };
        avatar.animation_groups = vec![AnimationGroup {
            name: "Expr".into(),
            content: GroupContent::Group {
                parameter: "Expr".into(),
                preventions: Preventions::default(),
                default_targets: vec![],
                options: vec![option.clone(), option],
            },
        }];
        assert!(validate_avatar(&avatar).is_err());
    }

    #[test]
    fn test_validate_raw_layer_indices() {
        let mut avatar = empty_avatar();
        avatar.animation_groups = vec![AnimationGroup {
            name: "Raw".into(),
            content: GroupContent::Layer(RawLayer {
                default_state_index: 2,
                states: vec![RawState {
                    name: "Only".into(),
                    animation: RawAnimation::Clip {
                        asset_key: "idle".into(),
                    },
                    time: None,
                    transitions: vec![RawTransition {
                        target: 5,
                        duration: 0.0,
                        conditions: vec![],
                    }],
                }],
            }),
        }];
        let errors = validate_avatar(&avatar).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
