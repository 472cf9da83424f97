//! Per-frame pose resolution for one input device.

use tracing::trace;

use crate::runtime::{InputSourceSnapshot, Pose, PoseFrame, SpaceHandle};

/// Target-ray and grip poses for one frame. Either can be absent when the
/// underlying query cannot resolve this frame; that is normal, not an error.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResolvedPoses {
    pub target_ray: Option<Pose>,
    pub grip: Option<Pose>,
}

/// Query the frame for the device's target-ray and grip poses.
pub fn resolve_poses(
    frame: &dyn PoseFrame,
    reference: SpaceHandle,
    source: &InputSourceSnapshot,
) -> ResolvedPoses {
    let target_ray = source
        .target_ray_space
        .and_then(|space| frame.pose(space, reference));
    let grip = source
        .grip_space
        .and_then(|space| frame.pose(space, reference));
    if target_ray.is_none() {
        trace!("target ray untracked this frame");
    }
    ResolvedPoses { target_ray, grip }
}
