/// OpenPose (COCO-18) のキーポイントインデックス
///
/// この並び順はフラット配列 `[x, y, c, x, y, c, ...]` との契約であり、
/// 実行中に変わることはない。`part as usize * 3` が配列オフセット。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum BodyPart {
    Nose = 0,
    Neck = 1,
    RightShoulder = 2,
    RightElbow = 3,
    RightWrist = 4,
    LeftShoulder = 5,
    LeftElbow = 6,
    LeftWrist = 7,
    RightHip = 8,
    RightKnee = 9,
    RightAnkle = 10,
    LeftHip = 11,
    LeftKnee = 12,
    LeftAnkle = 13,
    RightEye = 14,
    LeftEye = 15,
    RightEar = 16,
    LeftEar = 17,
}

impl BodyPart {
    pub const COUNT: usize = 18;

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Nose),
            1 => Some(Self::Neck),
            2 => Some(Self::RightShoulder),
            3 => Some(Self::RightElbow),
            4 => Some(Self::RightWrist),
            5 => Some(Self::LeftShoulder),
            6 => Some(Self::LeftElbow),
            7 => Some(Self::LeftWrist),
            8 => Some(Self::RightHip),
            9 => Some(Self::RightKnee),
            10 => Some(Self::RightAnkle),
            11 => Some(Self::LeftHip),
            12 => Some(Self::LeftKnee),
            13 => Some(Self::LeftAnkle),
            14 => Some(Self::RightEye),
            15 => Some(Self::LeftEye),
            16 => Some(Self::RightEar),
            17 => Some(Self::LeftEar),
            _ => None,
        }
    }

    /// OpenPose JSON の部位名からインデックスへ
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "nose" => Some(Self::Nose),
            "neck" => Some(Self::Neck),
            "r_shoulder" => Some(Self::RightShoulder),
            "r_elbow" => Some(Self::RightElbow),
            "r_wrist" => Some(Self::RightWrist),
            "l_shoulder" => Some(Self::LeftShoulder),
            "l_elbow" => Some(Self::LeftElbow),
            "l_wrist" => Some(Self::LeftWrist),
            "r_hip" => Some(Self::RightHip),
            "r_knee" => Some(Self::RightKnee),
            "r_ankle" => Some(Self::RightAnkle),
            "l_hip" => Some(Self::LeftHip),
            "l_knee" => Some(Self::LeftKnee),
            "l_ankle" => Some(Self::LeftAnkle),
            "r_eye" => Some(Self::RightEye),
            "l_eye" => Some(Self::LeftEye),
            "r_ear" => Some(Self::RightEar),
            "l_ear" => Some(Self::LeftEar),
            _ => None,
        }
    }
}

/// 単一キーポイント
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keypoint {
    /// 画像X座標（ピクセル）
    pub x: f64,
    /// 画像Y座標（ピクセル）
    pub y: f64,
    /// 信頼度スコア（0以下は無効）
    pub confidence: f64,
}

impl Keypoint {
    pub fn new(x: f64, y: f64, confidence: f64) -> Self {
        Self { x, y, confidence }
    }

    /// 信頼度が閾値以上か（閾値ちょうどは有効）
    pub fn is_valid(&self, threshold: f64) -> bool {
        self.confidence >= threshold
    }
}

impl Default for Keypoint {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            confidence: 0.0,
        }
    }
}
