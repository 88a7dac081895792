//! Pose landmark enumeration

use serde::{Deserialize, Serialize};

/// Body landmarks in estimator index order (33 total).
///
/// The counting pipeline only reads the shoulder and elbow joints; the rest
/// exist because the estimator emits them and the overlay renderer draws
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl Joint {
    /// Number of landmarks the estimator emits per frame
    pub const COUNT: usize = 33;

    /// Estimator index of this landmark
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Landmark at the given estimator index
    pub fn from_index(index: usize) -> Option<Joint> {
        use Joint::*;
        const ALL: [Joint; Joint::COUNT] = [
            Nose,
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
        ];
        ALL.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_mapping() {
        assert_eq!(Joint::LeftShoulder.index(), 11);
        assert_eq!(Joint::RightElbow.index(), 14);
        assert_eq!(Joint::from_index(12), Some(Joint::RightShoulder));
        assert_eq!(Joint::from_index(33), None);
    }

    #[test]
    fn test_from_index_is_inverse() {
        for i in 0..Joint::COUNT {
            let joint = Joint::from_index(i).unwrap();
            assert_eq!(joint.index(), i);
        }
    }
}
