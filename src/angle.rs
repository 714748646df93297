use thiserror::Error;

use crate::landmark::{BodyLandmark, LandmarkSet};

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AngleError {
    #[error("landmark {0:?} missing from current frame")]
    MissingLandmark(BodyLandmark),
}

/// Computes the signed joint angle at `p2` formed by the rays towards `p1`
/// and `p3`, in degrees normalized to `[0, 360)`.
///
/// The angle is the difference of the two bearing angles, not the unsigned
/// interior angle, so argument order matters: swapping `p1` and `p3` yields
/// the complementary angle. All pose thresholds in this crate are tuned
/// against this exact convention.
pub fn joint_angle(
    set: &LandmarkSet,
    p1: BodyLandmark,
    p2: BodyLandmark,
    p3: BodyLandmark,
) -> Result<f64, AngleError> {
    let (x1, y1) = set.position(p1).ok_or(AngleError::MissingLandmark(p1))?;
    let (x2, y2) = set.position(p2).ok_or(AngleError::MissingLandmark(p2))?;
    let (x3, y3) = set.position(p3).ok_or(AngleError::MissingLandmark(p3))?;

    let bearing_a = ((y1 - y2) as f64).atan2((x1 - x2) as f64);
    let bearing_b = ((y3 - y2) as f64).atan2((x3 - x2) as f64);

    let mut degrees = (bearing_b - bearing_a).to_degrees();
    if degrees < 0.0 {
        degrees += 360.0;
    }
    Ok(degrees)
}
