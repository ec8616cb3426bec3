use serde::{Deserialize, Serialize};

/// A declared avatar parameter. Names are unique within one avatar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value_type: ParameterType,
    pub scope: ParameterScope,
}

/// The declared type of a parameter, carrying its optional default value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "default")]
pub enum ParameterType {
    Int(Option<i64>),
    Float(Option<f64>),
    Bool(Option<bool>),
}

impl ParameterType {
    /// The type without its default payload.
    pub fn kind(&self) -> ParameterKind {
        match self {
            ParameterType::Int(_) => ParameterKind::Int,
            ParameterType::Float(_) => ParameterKind::Float,
            ParameterType::Bool(_) => ParameterKind::Bool,
        }
    }

    /// Whether a default value was declared.
    pub fn has_default(&self) -> bool {
        match self {
            ParameterType::Int(d) => d.is_some(),
            ParameterType::Float(d) => d.is_some(),
            ParameterType::Bool(d) => d.is_some(),
        }
    }
}

/// The type tag of a parameter, used when validating references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterKind {
    Int,
    Float,
    Bool,
}

impl std::fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterKind::Int => write!(f, "int"),
            ParameterKind::Float => write!(f, "float"),
            ParameterKind::Bool => write!(f, "bool"),
        }
    }
}

/// Where a parameter lives: local to the avatar, or synced across the
/// network with an optional persistence flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "save")]
pub enum ParameterScope {
    Local,
    Synced(Option<bool>),
}

impl ParameterScope {
    pub fn is_synced(&self) -> bool {
        matches!(self, ParameterScope::Synced(_))
    }

    /// Whether persistence was explicitly requested.
    pub fn is_saved(&self) -> bool {
        matches!(self, ParameterScope::Synced(Some(true)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_kind() {
        assert_eq!(ParameterType::Int(Some(3)).kind(), ParameterKind::Int);
        assert_eq!(ParameterType::Float(None).kind(), ParameterKind::Float);
        assert!(ParameterType::Int(Some(3)).has_default());
        assert!(!ParameterType::Bool(None).has_default());
    }

    #[test]
    fn test_scope_flags() {
        assert!(!ParameterScope::Local.is_synced());
        assert!(ParameterScope::Synced(None).is_synced());
        assert!(!ParameterScope::Synced(Some(false)).is_saved());
        assert!(ParameterScope::Synced(Some(true)).is_saved());
    }

    #[test]
    fn test_parameter_type_tagging() {
        let ty: ParameterType = serde_json::from_str(r#"{"type":"Int","default":4}"#).unwrap();
        assert_eq!(ty, ParameterType::Int(Some(4)));
        let scope: ParameterScope =
            serde_json::from_str(r#"{"type":"Synced","save":true}"#).unwrap();
        assert!(scope.is_saved());
    }
}
