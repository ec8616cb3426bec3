use serde::{Deserialize, Serialize};

use crate::parameter::ParameterType;

/// One entry of the expression menu tree. Carried through the IR for the
/// host's menu-asset construction; the lowering engine does not consume
/// these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum MenuItem {
    SubMenu {
        name: String,
        items: Vec<MenuItem>,
    },
    Button {
        name: String,
        parameter: String,
        value: ParameterType,
    },
    Toggle {
        name: String,
        parameter: String,
        value: ParameterType,
    },
    Radial {
        name: String,
        parameter: String,
    },
    TwoAxis {
        name: String,
        horizontal: BiAxis,
        vertical: BiAxis,
    },
    FourAxis {
        name: String,
        up: UniAxis,
        right: UniAxis,
        down: UniAxis,
        left: UniAxis,
    },
}

/// A two-direction puppet axis with labels for both ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiAxis {
    pub parameter: String,
    pub label_negative: String,
    pub label_positive: String,
}

/// A one-direction puppet axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniAxis {
    pub parameter: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_tree_round_trip() {
        let item = MenuItem::SubMenu {
            name: "Outfits".into(),
            items: vec![MenuItem::Toggle {
                name: "Jacket".into(),
                parameter: "Jacket".into(),
                value: ParameterType::Bool(Some(true)),
            }],
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: MenuItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
