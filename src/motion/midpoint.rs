use crate::pose::{BodyPart, Frame, Keypoint};

/// 腰の左右ペア
pub const HIP_PAIR: (BodyPart, BodyPart) = (BodyPart::LeftHip, BodyPart::RightHip);
/// 肩の左右ペア
pub const SHOULDER_PAIR: (BodyPart, BodyPart) = (BodyPart::LeftShoulder, BodyPart::RightShoulder);

/// 2関節から導出した中点サンプル
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Midpoint {
    pub x: f64,
    pub y: f64,
}

/// 左右関節の中点を計算
/// 両方が検出済みかつ信頼度が閾値以上の場合のみ Some
pub fn midpoint(a: Option<Keypoint>, b: Option<Keypoint>, min_confidence: f64) -> Option<Midpoint> {
    let (a, b) = (a?, b?);
    if !a.is_valid(min_confidence) || !b.is_valid(min_confidence) {
        return None;
    }
    Some(Midpoint {
        x: (a.x + b.x) * 0.5,
        y: (a.y + b.y) * 0.5,
    })
}

/// フレーム列から指定ペアの中点系列を抽出する
///
/// フレームごとに独立に判定し、条件を満たさないフレームは捨てる。
/// 補間やゼロ埋めはしないため、結果の長さはフレーム数以下。
pub fn midpoint_series(
    frames: &[Frame],
    pair: (BodyPart, BodyPart),
    min_confidence: f64,
) -> Vec<Midpoint> {
    frames
        .iter()
        .filter_map(|frame| midpoint(frame.part(pair.0), frame.part(pair.1), min_confidence))
        .collect()
}
