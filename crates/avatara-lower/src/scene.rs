use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use avatara_core::{AvataraError, AvataraResult};

/// Handle to a resolved scene node. Stable for the lifetime of the scene
/// it was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeHandle(pub u32);

/// The component namespace a path is resolved under. A path valid under
/// one kind never collides with another kind's cache slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    Renderer,
    SkinnedMeshRenderer,
    GameObject,
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetKind::Renderer => write!(f, "Renderer"),
            TargetKind::SkinnedMeshRenderer => write!(f, "SkinnedMeshRenderer"),
            TargetKind::GameObject => write!(f, "GameObject"),
        }
    }
}

/// Source of scene-relative path lookups. Implemented by [`SceneModel`];
/// the host can substitute its own scene representation.
pub trait SceneSource {
    /// Resolve a path relative to the avatar root to a node carrying the
    /// given kind, or `None` if absent.
    fn locate(&self, kind: TargetKind, path: &str) -> Option<NodeHandle>;
}

/// One node of the avatar scene: a path and the renderer components
/// present on it. Every node is addressable as a plain object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub path: String,
    #[serde(default)]
    pub renderer: bool,
    #[serde(default)]
    pub skinned_mesh_renderer: bool,
}

/// A flattened description of the avatar's scene tree, rooted at the
/// avatar object. Paths are relative to that root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneModel {
    nodes: Vec<SceneNode>,
}

impl SceneModel {
    pub fn new(nodes: Vec<SceneNode>) -> Self {
        Self { nodes }
    }
}

impl SceneSource for SceneModel {
    fn locate(&self, kind: TargetKind, path: &str) -> Option<NodeHandle> {
        let (index, node) = self
            .nodes
            .iter()
            .enumerate()
            .find(|(_, node)| node.path == path)?;
        let present = match kind {
            TargetKind::GameObject => true,
            // A skinned mesh renderer satisfies a plain renderer lookup.
            TargetKind::Renderer => node.renderer || node.skinned_mesh_renderer,
            TargetKind::SkinnedMeshRenderer => node.skinned_mesh_renderer,
        };
        present.then_some(NodeHandle(index as u32))
    }
}

/// Memoizing path resolver, scoped to one lowering pass.
///
/// Each `(kind, path)` pair is resolved against the scene at most once.
/// A failed resolution is fatal and is never cached; the pass aborts
/// before a repeat lookup could occur.
pub struct TargetResolver<'a, S: SceneSource> {
    scene: &'a S,
    resolved: HashMap<(TargetKind, String), NodeHandle>,
}

impl<'a, S: SceneSource> TargetResolver<'a, S> {
    pub fn new(scene: &'a S) -> Self {
        Self {
            scene,
            resolved: HashMap::new(),
        }
    }

    /// Resolve a renderer by path.
    pub fn renderer(&mut self, path: &str) -> AvataraResult<NodeHandle> {
        self.resolve(TargetKind::Renderer, path)
    }

    /// Resolve a skinned mesh renderer by path.
    pub fn skinned_mesh_renderer(&mut self, path: &str) -> AvataraResult<NodeHandle> {
        self.resolve(TargetKind::SkinnedMeshRenderer, path)
    }

    /// Resolve a plain object by path.
    pub fn game_object(&mut self, path: &str) -> AvataraResult<NodeHandle> {
        self.resolve(TargetKind::GameObject, path)
    }

    fn resolve(&mut self, kind: TargetKind, path: &str) -> AvataraResult<NodeHandle> {
        let key = (kind, path.to_owned());
        if let Some(&handle) = self.resolved.get(&key) {
            return Ok(handle);
        }
        let handle = self
            .scene
            .locate(kind, path)
            .ok_or_else(|| AvataraError::node_not_found(&kind.to_string(), path))?;
        self.resolved.insert(key, handle);
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn sample_scene() -> SceneModel {
        SceneModel::new(vec![
            SceneNode {
                path: "Body".into(),
                renderer: false,
                skinned_mesh_renderer: true,
            },
            SceneNode {
                path: "Accessories/Hat".into(),
                renderer: true,
                skinned_mesh_renderer: false,
            },
            SceneNode {
                path: "Armature/Hips".into(),
                renderer: false,
                skinned_mesh_renderer: false,
            },
        ])
    }

    /// Counts underlying lookups so memoization can be observed.
    struct CountingScene {
        inner: SceneModel,
        lookups: RefCell<usize>,
    }

    impl SceneSource for CountingScene {
        fn locate(&self, kind: TargetKind, path: &str) -> Option<NodeHandle> {
            *self.lookups.borrow_mut() += 1;
            self.inner.locate(kind, path)
        }
    }

    #[test]
    fn test_kind_namespaces() {
        let scene = sample_scene();
        assert!(scene.locate(TargetKind::GameObject, "Armature/Hips").is_some());
        assert!(scene.locate(TargetKind::Renderer, "Armature/Hips").is_none());
        // skinned mesh renderer satisfies the plain renderer namespace
        assert!(scene.locate(TargetKind::Renderer, "Body").is_some());
        assert!(scene
            .locate(TargetKind::SkinnedMeshRenderer, "Accessories/Hat")
            .is_none());
    }

    #[test]
    fn test_resolver_memoizes_per_kind_and_path() {
        let scene = CountingScene {
            inner: sample_scene(),
            lookups: RefCell::new(0),
        };
        let mut resolver = TargetResolver::new(&scene);

        let first = resolver.skinned_mesh_renderer("Body").unwrap();
        let second = resolver.skinned_mesh_renderer("Body").unwrap();
        assert_eq!(first, second);
        assert_eq!(*scene.lookups.borrow(), 1);

        // Same path under a different kind is a separate cache slot.
        resolver.game_object("Body").unwrap();
        assert_eq!(*scene.lookups.borrow(), 2);
    }

    #[test]
    fn test_resolution_failure_is_fatal() {
        let scene = sample_scene();
        let mut resolver = TargetResolver::new(&scene);
        let err = resolver.renderer("Missing/Node").unwrap_err();
        assert!(matches!(err, AvataraError::SceneResolution(_)));
    }
}
