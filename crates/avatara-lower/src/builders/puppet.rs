use std::collections::HashMap;

use avatara_core::AvataraResult;
use avatara_ir::{PuppetKeyframe, Target, TargetKey};

use crate::clip::{Clip, Curve, CurveBinding, CurveData, FloatKey, Interpolation, ObjectReferenceKey};
use crate::lower::LoweringContext;
use crate::machine::{AnimatorLayer, Motion, State};
use crate::scene::SceneSource;

/// One flattened puppet sample: the value a target takes at a position.
#[derive(Debug, Clone)]
enum Sample {
    Weight(f64),
    Active(bool),
    Asset(String),
}

/// Lower a Puppet: one non-looping clip whose playhead is driven directly
/// by a Float parameter, with one continuous timeline per physical target.
///
/// Samples are partitioned by target identity in first-appearance order,
/// then each partition is stably sorted by position; when several samples
/// share an identical position, the later one overrides the earlier at
/// emission time.
pub(crate) fn build_puppet_layer<S: SceneSource>(
    cx: &mut LoweringContext<'_, S>,
    group_name: &str,
    parameter: &str,
    keyframes: &[PuppetKeyframe],
) -> AvataraResult<AnimatorLayer> {
    let parameter = cx.parameters.float(parameter)?;

    let mut order: Vec<TargetKey> = Vec::new();
    let mut partitions: HashMap<TargetKey, Vec<(f64, Sample)>> = HashMap::new();
    for keyframe in keyframes {
        for target in &keyframe.targets {
            let sample = match target {
                Target::Shape { value, .. } => Sample::Weight(*value),
                Target::Object { enabled, .. } => Sample::Active(*enabled),
                Target::Material { asset_key, .. } => Sample::Asset(asset_key.clone()),
            };
            let key = target.key();
            partitions
                .entry(key.clone())
                .or_insert_with(|| {
                    order.push(key);
                    Vec::new()
                })
                .push((keyframe.position, sample));
        }
    }

    let mut clip = Clip::new(format!("p-{group_name}"));
    for key in order {
        let samples = ordered_samples(partitions.remove(&key).unwrap_or_default());
        let curve = match key {
            TargetKey::Shape { mesh, shape } => Curve {
                binding: CurveBinding::BlendShape {
                    mesh: cx.targets.skinned_mesh_renderer(&mesh)?,
                    shape,
                },
                data: CurveData::Float {
                    interpolation: Interpolation::Linear,
                    keys: samples
                        .into_iter()
                        .filter_map(|(position, sample)| match sample {
                            Sample::Weight(value) => Some(FloatKey {
                                frame: position * 100.0,
                                value: value * 100.0,
                            }),
                            _ => None,
                        })
                        .collect(),
                },
            },
            TargetKey::Object { object } => Curve {
                binding: CurveBinding::ObjectActive {
                    object: cx.targets.game_object(&object)?,
                },
                data: CurveData::Float {
                    // hold each activity value until the next sample
                    interpolation: Interpolation::Constant,
                    keys: samples
                        .into_iter()
                        .filter_map(|(position, sample)| match sample {
                            Sample::Active(enabled) => Some(FloatKey {
                                frame: position * 100.0,
                                value: if enabled { 100.0 } else { 0.0 },
                            }),
                            _ => None,
                        })
                        .collect(),
                },
            },
            TargetKey::Material { mesh, slot } => {
                let renderer = cx.targets.renderer(&mesh)?;
                let mut keys = Vec::with_capacity(samples.len());
                for (position, sample) in samples {
                    if let Sample::Asset(asset_key) = sample {
                        keys.push(ObjectReferenceKey {
                            frame: position * 100.0,
                            asset: cx.assets.material(&asset_key)?,
                        });
                    }
                }
                Curve {
                    binding: CurveBinding::MaterialSlot { renderer, slot },
                    data: CurveData::ObjectReference { keys },
                }
            }
        };
        clip.curves.push(curve);
    }

    let mut layer = AnimatorLayer::new(group_name);
    layer.add_state(
        State::new(group_name)
            .with_motion(Motion::Clip(clip))
            .with_motion_time(parameter),
    );
    Ok(layer)
}

/// Stable sort by position, then collapse samples sharing an identical
/// position so the later arrival wins.
fn ordered_samples(mut samples: Vec<(f64, Sample)>) -> Vec<(f64, Sample)> {
    samples.sort_by(|a, b| a.0.total_cmp(&b.0));
    let mut out: Vec<(f64, Sample)> = Vec::with_capacity(samples.len());
    for sample in samples {
        match out.last_mut() {
            Some(last) if last.0 == sample.0 => *last = sample,
            _ => out.push(sample),
        }
    }
    out
}
