//! One builder per animation-group kind, plus the cross-cutting
//! prevention-layer synthesis.

pub(crate) mod group;
pub(crate) mod prevention;
pub(crate) mod puppet;
pub(crate) mod raw;
pub(crate) mod switch;

use avatara_core::AvataraResult;
use avatara_ir::Target;

use crate::clip::{Clip, Curve, CurveBinding, CurveData, FloatKey, Interpolation, ObjectReferenceKey};
use crate::lower::LoweringContext;
use crate::scene::SceneSource;

/// Synthesize a clip that sets every target to its declared value: one
/// single-key constant curve per target at frame 0. Shape weights and
/// object activity are emitted in percent units.
fn synthesize_setter_clip<S: SceneSource>(
    cx: &mut LoweringContext<'_, S>,
    name: String,
    targets: &[Target],
) -> AvataraResult<Clip> {
    let mut clip = Clip::new(name);
    for target in targets {
        let curve = match target {
            Target::Shape { mesh, shape, value } => Curve {
                binding: CurveBinding::BlendShape {
                    mesh: cx.targets.skinned_mesh_renderer(mesh)?,
                    shape: shape.clone(),
                },
                data: CurveData::Float {
                    interpolation: Interpolation::Constant,
                    keys: vec![FloatKey {
                        frame: 0.0,
                        value: value * 100.0,
                    }],
                },
            },
            Target::Object { object, enabled } => Curve {
                binding: CurveBinding::ObjectActive {
                    object: cx.targets.game_object(object)?,
                },
                data: CurveData::Float {
                    interpolation: Interpolation::Constant,
                    keys: vec![FloatKey {
                        frame: 0.0,
                        value: if *enabled { 100.0 } else { 0.0 },
                    }],
                },
            },
            Target::Material {
                mesh,
                slot,
                asset_key,
            } => Curve {
                binding: CurveBinding::MaterialSlot {
                    renderer: cx.targets.renderer(mesh)?,
                    slot: *slot,
                },
                data: CurveData::ObjectReference {
                    keys: vec![ObjectReferenceKey {
                        frame: 0.0,
                        asset: cx.assets.material(asset_key)?,
                    }],
                },
            },
        };
        clip.curves.push(curve);
    }
    Ok(clip)
}
