use serde::{Deserialize, Serialize};

use crate::driver::DriverGroup;
use crate::group::AnimationGroup;
use crate::menu::MenuItem;
use crate::parameter::Parameter;

/// The top-level declarative avatar description. Built once per compile
/// request and read-only thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    pub name: String,
    /// Parameter declarations, unique by name.
    pub parameters: Vec<Parameter>,
    /// Animation groups in declaration order.
    pub animation_groups: Vec<AnimationGroup>,
    #[serde(default)]
    pub driver_groups: Vec<DriverGroup>,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
}

impl Avatar {
    /// Look up a parameter declaration by name.
    pub fn find_parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::{ParameterScope, ParameterType};

    #[test]
    fn test_find_parameter() {
        let avatar = Avatar {
            name: "Mio".into(),
            parameters: vec![Parameter {
                name: "Expr".into(),
                value_type: ParameterType::Int(None),
                scope: ParameterScope::Local,
            }],
            animation_groups: vec![],
            driver_groups: vec![],
            menu: vec![],
        };
        assert!(avatar.find_parameter("Expr").is_some());
        assert!(avatar.find_parameter("Missing").is_none());
    }

    #[test]
    fn test_optional_sections_default() {
        let json = r#"{"name":"Mio","parameters":[],"animation_groups":[]}"#;
        let avatar: Avatar = serde_json::from_str(json).unwrap();
        assert!(avatar.driver_groups.is_empty());
        assert!(avatar.menu.is_empty());
    }
}
