use crate::angle::joint_angle;
use crate::landmark::{
    BodyLandmark::{
        self, LeftAnkle, LeftElbow, LeftHip, LeftKnee, LeftShoulder, LeftWrist, Nose, RightAnkle,
        RightElbow, RightHip, RightKnee, RightShoulder, RightWrist,
    },
    LandmarkSet,
};

// Acceptance bands are empirically tuned against the directional angle
// convention of `joint_angle` and live landmark noise. They are not
// idealized anatomical targets (a straight leg measures near 200-250
// through this convention, not 180) and must not be "corrected".
const ELBOW_STRAIGHT: (f64, f64) = (170.0, 190.0);
const CAT_BACK_BELOW: f64 = 160.0;
const BALASANA_KNEE: (f64, f64) = (20.0, 40.0);
const BALASANA_BACK: (f64, f64) = (290.0, 350.0); // upper bound exclusive
const DANDASANA_KNEE: (f64, f64) = (200.0, 250.0);
const DANDASANA_BACK: (f64, f64) = (60.0, 100.0);

/// The poses this crate knows how to check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PoseKind {
    Crucifix,
    HandsRaised,
    Cat,
    Balasana,
    Dandasana,
}

impl PoseKind {
    pub const ALL: [PoseKind; 5] = [
        PoseKind::Crucifix,
        PoseKind::HandsRaised,
        PoseKind::Cat,
        PoseKind::Balasana,
        PoseKind::Dandasana,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PoseKind::Crucifix => "Crucifix Pose",
            PoseKind::HandsRaised => "Hands Raised Pose",
            PoseKind::Cat => "Cat Pose",
            PoseKind::Balasana => "Balasana Pose",
            PoseKind::Dandasana => "Dandasana Pose",
        }
    }

    /// Decides whether the frame's landmarks satisfy this pose.
    ///
    /// Pure and stateless: the verdict depends only on the given set. An
    /// empty set never matches, and neither does a set missing any landmark
    /// the pose needs; transient detection gaps are expected in live video
    /// and must not escalate beyond "no match this frame".
    pub fn matches(&self, set: &LandmarkSet) -> bool {
        if set.is_empty() {
            return false;
        }
        match self {
            PoseKind::Crucifix => check_crucifix(set),
            PoseKind::HandsRaised => check_hands_raised(set),
            PoseKind::Cat => check_cat(set),
            PoseKind::Balasana => check_balasana(set),
            PoseKind::Dandasana => check_dandasana(set),
        }
    }
}

/// Evaluates one angle, degrading a missing landmark to `None`.
fn measured(
    set: &LandmarkSet,
    p1: BodyLandmark,
    p2: BodyLandmark,
    p3: BodyLandmark,
) -> Option<f64> {
    match joint_angle(set, p1, p2, p3) {
        Ok(angle) => Some(angle),
        Err(err) => {
            log::debug!("angle unavailable this frame: {err}");
            None
        }
    }
}

fn within(value: f64, band: (f64, f64)) -> bool {
    band.0 <= value && value <= band.1
}

fn within_excl_upper(value: f64, band: (f64, f64)) -> bool {
    band.0 <= value && value < band.1
}

/// Both arms held straight out: elbow angles near a straight line.
/// Lower-body bends deliberately do not factor in.
fn check_crucifix(set: &LandmarkSet) -> bool {
    let Some(left_elbow) = measured(set, LeftShoulder, LeftElbow, LeftWrist) else {
        return false;
    };
    let Some(right_elbow) = measured(set, RightShoulder, RightElbow, RightWrist) else {
        return false;
    };
    within(left_elbow, ELBOW_STRAIGHT) && within(right_elbow, ELBOW_STRAIGHT)
}

/// Both wrists above the head. Screen coordinates grow downwards, so
/// "above" means a smaller y.
fn check_hands_raised(set: &LandmarkSet) -> bool {
    let (Some((_, left_wrist_y)), Some((_, right_wrist_y)), Some((_, head_y))) = (
        set.position(LeftWrist),
        set.position(RightWrist),
        set.position(Nose),
    ) else {
        return false;
    };
    left_wrist_y < head_y && right_wrist_y < head_y
}

/// Rounded back: the nose-shoulder-hip angle collapses below the band.
fn check_cat(set: &LandmarkSet) -> bool {
    let Some(back) = measured(set, Nose, RightShoulder, RightHip) else {
        return false;
    };
    back < CAT_BACK_BELOW
}

/// Child's pose: knees folded tight, torso lowered over the thighs.
fn check_balasana(set: &LandmarkSet) -> bool {
    let Some(knee_left) = measured(set, LeftHip, LeftKnee, LeftAnkle) else {
        return false;
    };
    let Some(knee_right) = measured(set, RightHip, RightKnee, RightAnkle) else {
        return false;
    };
    let Some(back_left) = measured(set, LeftShoulder, LeftHip, LeftKnee) else {
        return false;
    };
    let Some(back_right) = measured(set, RightShoulder, RightHip, RightKnee) else {
        return false;
    };

    within(knee_left, BALASANA_KNEE)
        && within(knee_right, BALASANA_KNEE)
        && within_excl_upper(back_left, BALASANA_BACK)
        && within_excl_upper(back_right, BALASANA_BACK)
}

/// Staff pose: legs straight out on the floor, back upright.
fn check_dandasana(set: &LandmarkSet) -> bool {
    let Some(knee_left) = measured(set, LeftHip, LeftKnee, LeftAnkle) else {
        return false;
    };
    let Some(knee_right) = measured(set, RightHip, RightKnee, RightAnkle) else {
        return false;
    };
    let Some(back_left) = measured(set, LeftShoulder, LeftHip, LeftKnee) else {
        return false;
    };
    let Some(back_right) = measured(set, RightShoulder, RightHip, RightKnee) else {
        return false;
    };

    within(knee_left, DANDASANA_KNEE)
        && within(knee_right, DANDASANA_KNEE)
        && within(back_left, DANDASANA_BACK)
        && within(back_right, DANDASANA_BACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(points: &[(BodyLandmark, i32, i32)]) -> LandmarkSet {
        LandmarkSet::from_points(points.iter().copied())
    }

    #[test]
    fn empty_set_matches_nothing() {
        let empty = LandmarkSet::empty();
        for pose in PoseKind::ALL {
            assert!(!pose.matches(&empty), "{pose:?} matched an empty set");
        }
    }

    #[test]
    fn crucifix_straight_arms() {
        // Both elbow angles exactly 180 degrees.
        let straight = set(&[
            (LeftShoulder, 100, 100),
            (LeftElbow, 150, 100),
            (LeftWrist, 200, 100),
            (RightShoulder, 100, 200),
            (RightElbow, 150, 200),
            (RightWrist, 200, 200),
        ]);
        assert!(PoseKind::Crucifix.matches(&straight));

        // Left wrist rotated so the left elbow measures ~165 degrees.
        let bent = set(&[
            (LeftShoulder, 100, 100),
            (LeftElbow, 150, 100),
            (LeftWrist, 198, 87),
            (RightShoulder, 100, 200),
            (RightElbow, 150, 200),
            (RightWrist, 200, 200),
        ]);
        assert!(!PoseKind::Crucifix.matches(&bent));
    }

    #[test]
    fn crucifix_missing_arm_is_no_match() {
        let one_arm = set(&[
            (LeftShoulder, 100, 100),
            (LeftElbow, 150, 100),
            (LeftWrist, 200, 100),
        ]);
        assert!(!PoseKind::Crucifix.matches(&one_arm));
    }

    #[test]
    fn hands_raised_above_head() {
        let raised = set(&[
            (Nose, 320, 100),
            (LeftWrist, 200, 50),
            (RightWrist, 440, 60),
        ]);
        assert!(PoseKind::HandsRaised.matches(&raised));

        let left_dropped = set(&[
            (Nose, 320, 100),
            (LeftWrist, 200, 150),
            (RightWrist, 440, 60),
        ]);
        assert!(!PoseKind::HandsRaised.matches(&left_dropped));

        let no_head = set(&[(LeftWrist, 200, 50), (RightWrist, 440, 60)]);
        assert!(!PoseKind::HandsRaised.matches(&no_head));
    }

    #[test]
    fn cat_rounded_back() {
        // Nose-shoulder-hip angle of 90 degrees: rounded.
        let rounded = set(&[
            (Nose, 150, 100),
            (RightShoulder, 100, 100),
            (RightHip, 100, 150),
        ]);
        assert!(PoseKind::Cat.matches(&rounded));

        // ~200 degrees: back extended, no match.
        let extended = set(&[
            (Nose, 150, 100),
            (RightShoulder, 100, 100),
            (RightHip, 53, 83),
        ]);
        assert!(!PoseKind::Cat.matches(&extended));

        let no_hip = set(&[(Nose, 150, 100), (RightShoulder, 100, 100)]);
        assert!(!PoseKind::Cat.matches(&no_hip));
    }

    // Knees near 30 degrees, back near 300 degrees on both sides.
    fn balasana_frame() -> LandmarkSet {
        set(&[
            (LeftShoulder, 225, 157),
            (LeftHip, 250, 200),
            (LeftKnee, 200, 200),
            (LeftAnkle, 243, 225),
            (RightShoulder, 525, 157),
            (RightHip, 550, 200),
            (RightKnee, 500, 200),
            (RightAnkle, 543, 225),
        ])
    }

    // Knees near 220 degrees, back near 80 degrees on both sides.
    fn dandasana_frame() -> LandmarkSet {
        set(&[
            (LeftShoulder, 241, 249),
            (LeftHip, 250, 200),
            (LeftKnee, 200, 200),
            (LeftAnkle, 162, 168),
            (RightShoulder, 541, 249),
            (RightHip, 550, 200),
            (RightKnee, 500, 200),
            (RightAnkle, 462, 168),
        ])
    }

    #[test]
    fn balasana_and_dandasana_are_mutually_exclusive() {
        let folded = balasana_frame();
        assert!(PoseKind::Balasana.matches(&folded));
        assert!(!PoseKind::Dandasana.matches(&folded));

        let staff = dandasana_frame();
        assert!(PoseKind::Dandasana.matches(&staff));
        assert!(!PoseKind::Balasana.matches(&staff));

        // The knee bands themselves are disjoint: no angle value can sit in
        // both rule sets at once.
        let mut angle = 0.0;
        while angle < 360.0 {
            assert!(
                !(within(angle, BALASANA_KNEE) && within(angle, DANDASANA_KNEE)),
                "knee bands overlap at {angle}"
            );
            angle += 0.25;
        }
    }

    #[test]
    fn classification_is_idempotent() {
        let frame = dandasana_frame();
        for pose in PoseKind::ALL {
            assert_eq!(pose.matches(&frame), pose.matches(&frame));
        }
    }

    #[test]
    fn band_boundaries() {
        // Inclusive bounds.
        assert!(within(170.0, ELBOW_STRAIGHT));
        assert!(within(190.0, ELBOW_STRAIGHT));
        assert!(!within(169.999, ELBOW_STRAIGHT));
        assert!(within(200.0, DANDASANA_KNEE));
        assert!(within(250.0, DANDASANA_KNEE));
        assert!(!within(250.001, DANDASANA_KNEE));
        assert!(within(60.0, DANDASANA_BACK));
        assert!(within(100.0, DANDASANA_BACK));
        assert!(within(20.0, BALASANA_KNEE));
        assert!(within(40.0, BALASANA_KNEE));

        // Balasana's back band excludes its upper bound.
        assert!(within_excl_upper(290.0, BALASANA_BACK));
        assert!(within_excl_upper(349.999, BALASANA_BACK));
        assert!(!within_excl_upper(350.0, BALASANA_BACK));
    }
}
