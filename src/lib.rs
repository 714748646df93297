//! Angle-based yoga pose checking over 2D body landmarks.
//!
//! An external detector produces per-frame body landmarks using the standard
//! 33-point body indexing (0 = nose, 11/12 = shoulders, 13/14 = elbows,
//! 15/16 = wrists, 23/24 = hips, 25/26 = knees, 27/28 = ankles). This crate
//! computes joint angles from those landmarks and decides whether the frame
//! matches one of a fixed set of poses.

pub mod angle;
pub mod landmark;
pub mod pose;
pub mod session;
pub mod source;

pub use angle::{AngleError, joint_angle};
pub use landmark::{BodyLandmark, Landmark, LandmarkSet};
pub use pose::PoseKind;
pub use session::{SelectionError, Session, Verdict};
pub use source::{LandmarkSource, ReplaySource};
