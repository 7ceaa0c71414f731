pub mod constants;
pub mod midpoint;
pub mod stats;

pub use constants::{MotionConstants, PX_TO_WORLD};
pub use midpoint::{midpoint, midpoint_series, Midpoint, HIP_PAIR, SHOULDER_PAIR};
pub use stats::MotionStats;

use anyhow::Result;

use crate::pose::Frame;

/// フレーム列から運動定数を導出するパイプライン全体
///
/// 入力フレーム列と信頼度閾値のみで結果が決まる純関数。
/// 腰サンプルが2未満の場合のみ失敗し、定数は全か無かで返す。
pub fn derive_motion_constants(frames: &[Frame], min_confidence: f64) -> Result<MotionConstants> {
    let hips = midpoint_series(frames, HIP_PAIR, min_confidence);
    let shoulders = midpoint_series(frames, SHOULDER_PAIR, min_confidence);
    let stats = MotionStats::derive(&hips, &shoulders)?;
    Ok(MotionConstants::synthesize(&stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{BodyPart, VALUES_PER_FRAME};

    /// 腰・肩の中点が指定位置になるフレームを構築
    fn frame_at(hip: (f64, f64), shoulder: Option<(f64, f64)>, confidence: f64) -> Frame {
        let mut values = vec![0.0; VALUES_PER_FRAME];
        let mut set = |part: BodyPart, x: f64, y: f64, c: f64| {
            let idx = part as usize * 3;
            values[idx] = x;
            values[idx + 1] = y;
            values[idx + 2] = c;
        };
        // 左右を中点から±10pxに配置
        set(BodyPart::LeftHip, hip.0 - 10.0, hip.1, confidence);
        set(BodyPart::RightHip, hip.0 + 10.0, hip.1, confidence);
        if let Some((sx, sy)) = shoulder {
            set(BodyPart::LeftShoulder, sx - 10.0, sy, confidence);
            set(BodyPart::RightShoulder, sx + 10.0, sy, confidence);
        }
        Frame::new(values).unwrap()
    }

    #[test]
    fn test_three_frame_pipeline() {
        // 腰中点 x: [100, 130, 95] / y: [400, 400, 430]、肩は全フレーム欠損
        let frames = vec![
            frame_at((100.0, 400.0), None, 0.9),
            frame_at((130.0, 400.0), None, 0.9),
            frame_at((95.0, 430.0), None, 0.9),
        ];
        let c = derive_motion_constants(&frames, 0.2).unwrap();

        // walk_stride = median(|30|, |-35|) * 2.1 = 68.25 → 28.67
        assert!((c.walk_swing_forward_px - 28.67).abs() < 0.02);
        // run = 68.25 * 1.65 * 0.42 = 47.30
        assert!((c.run_swing_forward_px - 47.3).abs() < 0.02);
        // jump = max(12, 400-400) = 12 → 5.04 → 下限24
        assert_eq!(c.jump_height_px, 24.0);
        // crouch = max(10, 430-400) = 30 → 12.6 → 下限16
        assert_eq!(c.crouch_root_drop_px, 16.0);
        // dash = sorted([30,35])[floor(0.9*1)] * 4.5 = 135 → 56.7
        assert!((c.dash_root_advance_px - 56.7).abs() < 0.02);
        assert!((c.dash_foot_drive_px - 28.35).abs() < 0.02);
        // lift類はいずれも下限
        assert_eq!(c.walk_swing_lift_px, 14.0);
        assert_eq!(c.run_swing_lift_px, 20.0);
        // nudge = 68.25 * 0.42 * 0.18 = 5.16 → 下限8
        assert_eq!(c.root_nudge_step_px, 8.0);
        // 肩欠損 → 腰代用でスパン0 → 下限40
        assert_eq!(c.reference_body_span_px, 40.0);
    }

    #[test]
    fn test_all_constants_within_clamp_ranges() {
        let ranges = [
            (20.0, 72.0),
            (14.0, 42.0),
            (34.0, 112.0),
            (20.0, 64.0),
            (24.0, 120.0),
            (16.0, 56.0),
            (42.0, 140.0),
            (24.0, 74.0),
            (8.0, 26.0),
            (40.0, 240.0),
        ];
        // 極端な入力を並べてもクランプ範囲から出ないこと
        let series: [Vec<Frame>; 3] = [
            vec![
                frame_at((0.0, 0.0), Some((0.0, 0.0)), 0.9),
                frame_at((100000.0, -50000.0), Some((0.0, 100000.0)), 0.9),
                frame_at((0.0, 90000.0), Some((0.0, 0.0)), 0.9),
            ],
            vec![
                frame_at((500.0, 400.0), None, 0.9),
                frame_at((500.0, 400.0), None, 0.9),
            ],
            vec![
                frame_at((100.0, 400.0), Some((100.0, 320.0)), 0.9),
                frame_at((103.0, 401.0), Some((103.0, 321.0)), 0.9),
                frame_at((98.0, 399.0), Some((98.0, 319.0)), 0.9),
            ],
        ];
        for frames in &series {
            let c = derive_motion_constants(frames, 0.2).unwrap();
            for ((_, value), (lo, hi)) in c.entries().iter().zip(ranges.iter()) {
                assert!(*value >= *lo && *value <= *hi, "{} outside [{}, {}]", value, lo, hi);
            }
        }
    }

    #[test]
    fn test_doubling_deltas_scales_strides() {
        // デルタを2倍にするとクランプ前のストライド推定が比例して伸びる
        let base = vec![
            frame_at((100.0, 400.0), None, 0.9),
            frame_at((110.0, 400.0), None, 0.9),
            frame_at((120.0, 400.0), None, 0.9),
        ];
        let doubled = vec![
            frame_at((100.0, 400.0), None, 0.9),
            frame_at((120.0, 400.0), None, 0.9),
            frame_at((140.0, 400.0), None, 0.9),
        ];
        let a = derive_motion_constants(&base, 0.2).unwrap();
        let b = derive_motion_constants(&doubled, 0.2).unwrap();
        // 10px歩幅: 21*0.42=8.82 → 下限20へ。20px歩幅: 42*0.42=17.64 → 同じく下限20
        // クランプで飽和しない走行側で比例を観測する
        // run: 10px → 34.65*0.42=14.55(→34へ飽和) では観測できないため生統計で確認
        let hips_a = midpoint_series(&base, HIP_PAIR, 0.2);
        let hips_b = midpoint_series(&doubled, HIP_PAIR, 0.2);
        let sa = MotionStats::derive(&hips_a, &[]).unwrap();
        let sb = MotionStats::derive(&hips_b, &[]).unwrap();
        assert!((sb.walk_stride - sa.walk_stride * 2.0).abs() < 1e-9);
        assert!((sb.run_stride - sa.run_stride * 2.0).abs() < 1e-9);
        // クランプ後の定数はどちらも範囲内
        assert!(a.walk_swing_forward_px >= 20.0 && b.walk_swing_forward_px >= 20.0);
    }

    #[test]
    fn test_static_series_hits_fallbacks() {
        // 静止系列: ストライドは 30*2.1、ダッシュはデルタ0の分布 → floor(48)
        let frames = vec![
            frame_at((500.0, 400.0), None, 0.9),
            frame_at((500.0, 400.0), None, 0.9),
            frame_at((500.0, 400.0), None, 0.9),
        ];
        let hips = midpoint_series(&frames, HIP_PAIR, 0.2);
        let stats = MotionStats::derive(&hips, &[]).unwrap();
        assert!((stats.walk_stride - 63.0).abs() < 1e-9);
        assert_eq!(stats.dash_distance, 48.0);
        let c = MotionConstants::synthesize(&stats);
        // 63*0.42=26.46 / 48*0.42=20.16 → 下限42へ
        assert!((c.walk_swing_forward_px - 26.46).abs() < 0.02);
        assert_eq!(c.dash_root_advance_px, 42.0);
    }

    #[test]
    fn test_insufficient_hip_samples_fails() {
        let frames = vec![
            frame_at((100.0, 400.0), None, 0.9),
            frame_at((110.0, 400.0), None, 0.05), // 閾値未満
        ];
        let result = derive_motion_constants(&frames, 0.2);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Not enough confident hip samples"));
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        // 閾値ちょうどのフレームはサンプルとして有効
        let frames = vec![
            frame_at((100.0, 400.0), None, 0.2),
            frame_at((110.0, 400.0), None, 0.2),
        ];
        assert!(derive_motion_constants(&frames, 0.2).is_ok());
    }

    #[test]
    fn test_input_frames_not_mutated() {
        let frames = vec![
            frame_at((100.0, 400.0), Some((100.0, 320.0)), 0.9),
            frame_at((130.0, 400.0), Some((130.0, 320.0)), 0.9),
        ];
        let before = frames.clone();
        let _ = derive_motion_constants(&frames, 0.2).unwrap();
        assert_eq!(frames, before);
    }
}
