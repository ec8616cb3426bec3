use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use avatara_core::{AvataraError, AvataraResult};
use avatara_ir::{Avatar, Parameter, ParameterKind, ParameterType};

/// Handle to an interned parameter, unique within one lowering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterHandle(pub u32);

impl ParameterHandle {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One entry of the exported parameter list. Only parameters actually
/// referenced by a group during the pass are exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedParameter {
    pub name: String,
    /// Declared type, carrying the default value if one was declared.
    pub value_type: ParameterType,
    pub synced: bool,
    pub saved: bool,
}

/// Interns parameter references by name and validates them against the
/// avatar's declarations. Scoped to one lowering pass.
pub struct ParameterRegistry<'a> {
    avatar: &'a Avatar,
    by_name: HashMap<String, ParameterHandle>,
    entries: Vec<&'a Parameter>,
}

impl<'a> ParameterRegistry<'a> {
    pub fn new(avatar: &'a Avatar) -> Self {
        Self {
            avatar,
            by_name: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Intern a reference to an Int-declared parameter.
    pub fn int(&mut self, name: &str) -> AvataraResult<ParameterHandle> {
        self.resolve(name, ParameterKind::Int)
    }

    /// Intern a reference to a Float-declared parameter.
    pub fn float(&mut self, name: &str) -> AvataraResult<ParameterHandle> {
        self.resolve(name, ParameterKind::Float)
    }

    /// Intern a reference to a Bool-declared parameter.
    pub fn boolean(&mut self, name: &str) -> AvataraResult<ParameterHandle> {
        self.resolve(name, ParameterKind::Bool)
    }

    /// The declared name behind a handle.
    pub fn name(&self, handle: ParameterHandle) -> Option<&str> {
        self.entries.get(handle.index()).map(|p| p.name.as_str())
    }

    fn resolve(&mut self, name: &str, kind: ParameterKind) -> AvataraResult<ParameterHandle> {
        if let Some(&handle) = self.by_name.get(name) {
            // Repeat references reuse the interned handle; the requested
            // kind must still match the cached declaration.
            if self.entries[handle.index()].value_type.kind() != kind {
                return Err(AvataraError::parameter_not_found(name, &kind.to_string()));
            }
            return Ok(handle);
        }

        let declaration = self
            .avatar
            .find_parameter(name)
            .filter(|parameter| parameter.value_type.kind() == kind)
            .ok_or_else(|| AvataraError::parameter_not_found(name, &kind.to_string()))?;

        let handle = ParameterHandle(self.entries.len() as u32);
        self.entries.push(declaration);
        self.by_name.insert(name.to_owned(), handle);
        Ok(handle)
    }

    /// Drain the registry into the exported parameter list, in
    /// first-reference order. Declared-but-unreferenced parameters are
    /// omitted.
    pub fn export(self) -> Vec<ExportedParameter> {
        self.entries
            .into_iter()
            .map(|declaration| ExportedParameter {
                name: declaration.name.clone(),
                value_type: declaration.value_type,
                synced: declaration.scope.is_synced(),
                saved: declaration.scope.is_saved(),
            })
            .collect()
    }
}
