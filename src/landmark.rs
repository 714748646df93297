/// Canonical body-landmark identifiers shared with the external detector
/// (standard 33-point body indexing).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyLandmark {
    Nose = 0,
    LeftEyeInner,
    LeftEye,
    LeftEyeOuter,
    RightEyeInner,
    RightEye,
    RightEyeOuter,
    LeftEar,
    RightEar,
    MouthLeft,
    MouthRight,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftPinky,
    RightPinky,
    LeftIndex,
    RightIndex,
    LeftThumb,
    RightThumb,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
    LeftHeel,
    RightHeel,
    LeftFootIndex,
    RightFootIndex,
}

impl BodyLandmark {
    pub const COUNT: usize = 33;

    pub const ALL: [BodyLandmark; Self::COUNT] = [
        BodyLandmark::Nose,
        BodyLandmark::LeftEyeInner,
        BodyLandmark::LeftEye,
        BodyLandmark::LeftEyeOuter,
        BodyLandmark::RightEyeInner,
        BodyLandmark::RightEye,
        BodyLandmark::RightEyeOuter,
        BodyLandmark::LeftEar,
        BodyLandmark::RightEar,
        BodyLandmark::MouthLeft,
        BodyLandmark::MouthRight,
        BodyLandmark::LeftShoulder,
        BodyLandmark::RightShoulder,
        BodyLandmark::LeftElbow,
        BodyLandmark::RightElbow,
        BodyLandmark::LeftWrist,
        BodyLandmark::RightWrist,
        BodyLandmark::LeftPinky,
        BodyLandmark::RightPinky,
        BodyLandmark::LeftIndex,
        BodyLandmark::RightIndex,
        BodyLandmark::LeftThumb,
        BodyLandmark::RightThumb,
        BodyLandmark::LeftHip,
        BodyLandmark::RightHip,
        BodyLandmark::LeftKnee,
        BodyLandmark::RightKnee,
        BodyLandmark::LeftAnkle,
        BodyLandmark::RightAnkle,
        BodyLandmark::LeftHeel,
        BodyLandmark::RightHeel,
        BodyLandmark::LeftFootIndex,
        BodyLandmark::RightFootIndex,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Maps a raw detector index back to its identifier. Out-of-range
    /// indices (detector glitches, malformed replay records) yield `None`.
    pub fn from_index(index: usize) -> Option<BodyLandmark> {
        Self::ALL.get(index).copied()
    }
}

/// One detected body keypoint in integer pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Landmark {
    pub id: BodyLandmark,
    pub x: i32,
    pub y: i32,
}

/// The landmarks of a single frame. Built once from detector output,
/// immutable afterwards, fully replaced on the next frame. Any subset of
/// identifiers may be absent when detection confidence was insufficient.
#[derive(Clone, Debug)]
pub struct LandmarkSet {
    points: [Option<(i32, i32)>; BodyLandmark::COUNT],
    len: usize,
}

impl Default for LandmarkSet {
    fn default() -> Self {
        Self {
            points: [None; BodyLandmark::COUNT],
            len: 0,
        }
    }
}

impl LandmarkSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from `(id, x, y)` triples. The first occurrence of an
    /// identifier wins; later duplicates are dropped.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (BodyLandmark, i32, i32)>,
    {
        let mut set = Self::default();
        for (id, x, y) in points {
            let slot = &mut set.points[id.index()];
            if slot.is_some() {
                log::debug!("duplicate landmark {id:?} in frame, keeping first");
                continue;
            }
            *slot = Some((x, y));
            set.len += 1;
        }
        set
    }

    pub fn get(&self, id: BodyLandmark) -> Option<Landmark> {
        self.points[id.index()].map(|(x, y)| Landmark { id, x, y })
    }

    pub fn position(&self, id: BodyLandmark) -> Option<(i32, i32)> {
        self.points[id.index()]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for id in BodyLandmark::ALL {
            assert_eq!(BodyLandmark::from_index(id.index()), Some(id));
        }
        assert_eq!(BodyLandmark::from_index(33), None);
        assert_eq!(BodyLandmark::Nose.index(), 0);
        assert_eq!(BodyLandmark::LeftShoulder.index(), 11);
        assert_eq!(BodyLandmark::RightAnkle.index(), 28);
        assert_eq!(BodyLandmark::RightFootIndex.index(), 32);
    }

    #[test]
    fn empty_set() {
        let set = LandmarkSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.get(BodyLandmark::Nose), None);
    }

    #[test]
    fn first_occurrence_wins() {
        let set = LandmarkSet::from_points([
            (BodyLandmark::Nose, 10, 20),
            (BodyLandmark::Nose, 99, 99),
            (BodyLandmark::LeftWrist, 5, 6),
        ]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.position(BodyLandmark::Nose), Some((10, 20)));
        assert_eq!(set.position(BodyLandmark::LeftWrist), Some((5, 6)));
        assert_eq!(set.position(BodyLandmark::RightWrist), None);
    }
}
