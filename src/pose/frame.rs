use crate::pose::{BodyPart, Keypoint};

/// 1フレームあたりのフラット配列長 (x, y, c × 18部位)
pub const VALUES_PER_FRAME: usize = BodyPart::COUNT * 3;

/// 1フレーム分のキーポイント列
///
/// 全部位を `[x, y, c, ...]` の固定順で保持する。長さは常に
/// `VALUES_PER_FRAME` 以上であることを構築時に保証する。
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    values: Vec<f64>,
}

impl Frame {
    /// フラット配列からフレームを構築
    /// 全部位をアドレスできない長さは受け付けない
    pub fn new(values: Vec<f64>) -> Option<Self> {
        if values.len() < VALUES_PER_FRAME {
            return None;
        }
        Some(Self { values })
    }

    /// 指定部位のキーポイントを取得
    /// 信頼度が0以下の部位は位置情報を持たないため None
    pub fn part(&self, part: BodyPart) -> Option<Keypoint> {
        let idx = part as usize * 3;
        let (x, y, c) = (self.values[idx], self.values[idx + 1], self.values[idx + 2]);
        if c <= 0.0 {
            return None;
        }
        Some(Keypoint::new(x, y, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with(parts: &[(BodyPart, f64, f64, f64)]) -> Frame {
        let mut values = vec![0.0; VALUES_PER_FRAME];
        for &(part, x, y, c) in parts {
            let idx = part as usize * 3;
            values[idx] = x;
            values[idx + 1] = y;
            values[idx + 2] = c;
        }
        Frame::new(values).unwrap()
    }

    #[test]
    fn test_frame_rejects_short_array() {
        assert!(Frame::new(vec![0.0; VALUES_PER_FRAME - 1]).is_none());
        assert!(Frame::new(vec![0.0; VALUES_PER_FRAME]).is_some());
    }

    #[test]
    fn test_frame_accepts_longer_array() {
        // 余分な要素は無視される（BODY_25等の拡張フォーマット対策）
        assert!(Frame::new(vec![0.0; VALUES_PER_FRAME + 21]).is_some());
    }

    #[test]
    fn test_part_lookup() {
        let frame = frame_with(&[(BodyPart::LeftHip, 120.0, 400.0, 0.9)]);
        let kp = frame.part(BodyPart::LeftHip).unwrap();
        assert_eq!(kp.x, 120.0);
        assert_eq!(kp.y, 400.0);
        assert_eq!(kp.confidence, 0.9);
    }

    #[test]
    fn test_part_zero_confidence_is_absent() {
        // 信頼度0と負の信頼度はどちらも「検出なし」
        let frame = frame_with(&[
            (BodyPart::LeftHip, 120.0, 400.0, 0.0),
            (BodyPart::RightHip, 130.0, 410.0, -1.0),
        ]);
        assert!(frame.part(BodyPart::LeftHip).is_none());
        assert!(frame.part(BodyPart::RightHip).is_none());
    }
}
