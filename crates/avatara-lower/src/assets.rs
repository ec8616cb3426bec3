use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use avatara_core::{AvataraError, AvataraResult};

/// Opaque identifier of a host-side asset (a material or animation clip
/// imported outside this engine).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId(pub String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One externally supplied asset, addressable by string key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalAsset {
    pub key: String,
    pub asset: AssetId,
}

/// One externally supplied localized string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalString {
    pub key: String,
    pub value: String,
}

/// A bundle of external assets attached to the compile request.
/// Containers are consulted in order; the first key match wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetContainer {
    #[serde(default)]
    pub materials: Vec<ExternalAsset>,
    #[serde(default)]
    pub animations: Vec<ExternalAsset>,
    #[serde(default)]
    pub localizations: Vec<ExternalString>,
}

/// Pass-scoped lookup over an ordered list of asset containers.
/// Exhausting every container without a match is fatal.
pub struct ExternalAssetResolver<'a> {
    containers: &'a [AssetContainer],
    materials: HashMap<String, AssetId>,
    animations: HashMap<String, AssetId>,
    localizations: HashMap<String, String>,
}

impl<'a> ExternalAssetResolver<'a> {
    pub fn new(containers: &'a [AssetContainer]) -> Self {
        Self {
            containers,
            materials: HashMap::new(),
            animations: HashMap::new(),
            localizations: HashMap::new(),
        }
    }

    /// Look up a material by key.
    pub fn material(&mut self, key: &str) -> AvataraResult<AssetId> {
        if let Some(asset) = self.materials.get(key) {
            return Ok(asset.clone());
        }
        let asset = Self::search(self.containers, |c| &c.materials, key)
            .ok_or_else(|| AvataraError::asset_not_found("material", key))?;
        self.materials.insert(key.to_owned(), asset.clone());
        Ok(asset)
    }

    /// Look up an animation clip by key.
    pub fn animation_clip(&mut self, key: &str) -> AvataraResult<AssetId> {
        if let Some(asset) = self.animations.get(key) {
            return Ok(asset.clone());
        }
        let asset = Self::search(self.containers, |c| &c.animations, key)
            .ok_or_else(|| AvataraError::asset_not_found("animation clip", key))?;
        self.animations.insert(key.to_owned(), asset.clone());
        Ok(asset)
    }

    /// Look up a localized string by key.
    pub fn localization(&mut self, key: &str) -> AvataraResult<String> {
        if let Some(value) = self.localizations.get(key) {
            return Ok(value.clone());
        }
        let value = self
            .containers
            .iter()
            .flat_map(|container| &container.localizations)
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.clone())
            .ok_or_else(|| AvataraError::asset_not_found("localization", key))?;
        self.localizations.insert(key.to_owned(), value.clone());
        Ok(value)
    }

    fn search(
        containers: &[AssetContainer],
        class: impl Fn(&AssetContainer) -> &Vec<ExternalAsset>,
        key: &str,
    ) -> Option<AssetId> {
        containers
            .iter()
            .flat_map(|container| class(container))
            .find(|entry| entry.key == key)
            .map(|entry| entry.asset.clone())
    }
}
