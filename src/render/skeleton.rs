use crate::pose::LandmarkIndex;

/// 骨格の接続定義 (開始ランドマーク, 終了ランドマーク)
pub const SKELETON_CONNECTIONS: [(LandmarkIndex, LandmarkIndex); 35] = [
    // 顔
    (LandmarkIndex::Nose, LandmarkIndex::LeftEyeInner),
    (LandmarkIndex::LeftEyeInner, LandmarkIndex::LeftEye),
    (LandmarkIndex::LeftEye, LandmarkIndex::LeftEyeOuter),
    (LandmarkIndex::LeftEyeOuter, LandmarkIndex::LeftEar),
    (LandmarkIndex::Nose, LandmarkIndex::RightEyeInner),
    (LandmarkIndex::RightEyeInner, LandmarkIndex::RightEye),
    (LandmarkIndex::RightEye, LandmarkIndex::RightEyeOuter),
    (LandmarkIndex::RightEyeOuter, LandmarkIndex::RightEar),
    (LandmarkIndex::MouthLeft, LandmarkIndex::MouthRight),
    // 腕
    (LandmarkIndex::LeftShoulder, LandmarkIndex::RightShoulder),
    (LandmarkIndex::LeftShoulder, LandmarkIndex::LeftElbow),
    (LandmarkIndex::LeftElbow, LandmarkIndex::LeftWrist),
    (LandmarkIndex::RightShoulder, LandmarkIndex::RightElbow),
    (LandmarkIndex::RightElbow, LandmarkIndex::RightWrist),
    // 手
    (LandmarkIndex::LeftWrist, LandmarkIndex::LeftPinky),
    (LandmarkIndex::LeftWrist, LandmarkIndex::LeftIndex),
    (LandmarkIndex::LeftWrist, LandmarkIndex::LeftThumb),
    (LandmarkIndex::LeftPinky, LandmarkIndex::LeftIndex),
    (LandmarkIndex::RightWrist, LandmarkIndex::RightPinky),
    (LandmarkIndex::RightWrist, LandmarkIndex::RightIndex),
    (LandmarkIndex::RightWrist, LandmarkIndex::RightThumb),
    (LandmarkIndex::RightPinky, LandmarkIndex::RightIndex),
    // 胴体
    (LandmarkIndex::LeftShoulder, LandmarkIndex::LeftHip),
    (LandmarkIndex::RightShoulder, LandmarkIndex::RightHip),
    (LandmarkIndex::LeftHip, LandmarkIndex::RightHip),
    // 脚
    (LandmarkIndex::LeftHip, LandmarkIndex::LeftKnee),
    (LandmarkIndex::LeftKnee, LandmarkIndex::LeftAnkle),
    (LandmarkIndex::RightHip, LandmarkIndex::RightKnee),
    (LandmarkIndex::RightKnee, LandmarkIndex::RightAnkle),
    // 足
    (LandmarkIndex::LeftAnkle, LandmarkIndex::LeftHeel),
    (LandmarkIndex::LeftHeel, LandmarkIndex::LeftFootIndex),
    (LandmarkIndex::LeftAnkle, LandmarkIndex::LeftFootIndex),
    (LandmarkIndex::RightAnkle, LandmarkIndex::RightHeel),
    (LandmarkIndex::RightHeel, LandmarkIndex::RightFootIndex),
    (LandmarkIndex::RightAnkle, LandmarkIndex::RightFootIndex),
];

/// ランドマークの色 (RGB)
pub const LANDMARK_COLOR: u32 = 0x00FF00; // 緑

/// 骨格線の色 (RGB)
pub const SKELETON_COLOR: u32 = 0xFFFF00; // 黄色

/// 強調表示ランドマークの色 (RGB)
pub const HIGHLIGHT_COLOR: u32 = 0xFF0000; // 赤
