use serde::Serialize;

use crate::motion::stats::MotionStats;

/// ピクセル→エンジン単位の換算係数
/// 経験的な調整値。インポート結果を見ながら調整する前提の保守的な値
pub const PX_TO_WORLD: f64 = 0.42;

/// 定数ごとの二次係数（いずれも経験値、そのまま維持する）
pub const WALK_LIFT_RATIO: f64 = 0.42;
pub const RUN_LIFT_RATIO: f64 = 0.58;
pub const DASH_FOOT_RATIO: f64 = 0.5;
pub const NUDGE_STEP_RATIO: f64 = 0.18;

/// 導出された10個の運動定数（出力キー順に宣言）
///
/// 一度生成したら不変。フレーム列と閾値のみで決まる純関数の結果であり、
/// 後段のブループリント生成器が既定の移動量として消費する。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotionConstants {
    #[serde(rename = "WALK_SWING_FORWARD_PX")]
    pub walk_swing_forward_px: f64,
    #[serde(rename = "WALK_SWING_LIFT_PX")]
    pub walk_swing_lift_px: f64,
    #[serde(rename = "RUN_SWING_FORWARD_PX")]
    pub run_swing_forward_px: f64,
    #[serde(rename = "RUN_SWING_LIFT_PX")]
    pub run_swing_lift_px: f64,
    #[serde(rename = "JUMP_HEIGHT_PX")]
    pub jump_height_px: f64,
    #[serde(rename = "CROUCH_ROOT_DROP_PX")]
    pub crouch_root_drop_px: f64,
    #[serde(rename = "DASH_ROOT_ADVANCE_PX")]
    pub dash_root_advance_px: f64,
    #[serde(rename = "DASH_FOOT_DRIVE_PX")]
    pub dash_foot_drive_px: f64,
    #[serde(rename = "ROOT_NUDGE_STEP_PX")]
    pub root_nudge_step_px: f64,
    #[serde(rename = "REFERENCE_BODY_SPAN_PX")]
    pub reference_body_span_px: f64,
}

/// クランプは下流アニメーションの調整済みレンジを守るための安全網
/// 入力が極端でも境界を広げない
fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.clamp(lo, hi)
}

/// 小数第2位へ丸め
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl MotionConstants {
    /// 生統計をスケール → クランプ → 丸めの順で定数化する
    pub fn synthesize(stats: &MotionStats) -> Self {
        Self {
            walk_swing_forward_px: round2(clamp(stats.walk_stride * PX_TO_WORLD, 20.0, 72.0)),
            walk_swing_lift_px: round2(clamp(
                stats.jump_height_px * PX_TO_WORLD * WALK_LIFT_RATIO,
                14.0,
                42.0,
            )),
            run_swing_forward_px: round2(clamp(stats.run_stride * PX_TO_WORLD, 34.0, 112.0)),
            run_swing_lift_px: round2(clamp(
                stats.jump_height_px * PX_TO_WORLD * RUN_LIFT_RATIO,
                20.0,
                64.0,
            )),
            jump_height_px: round2(clamp(stats.jump_height_px * PX_TO_WORLD, 24.0, 120.0)),
            crouch_root_drop_px: round2(clamp(stats.crouch_drop_px * PX_TO_WORLD, 16.0, 56.0)),
            dash_root_advance_px: round2(clamp(stats.dash_distance * PX_TO_WORLD, 42.0, 140.0)),
            dash_foot_drive_px: round2(clamp(
                stats.dash_distance * PX_TO_WORLD * DASH_FOOT_RATIO,
                24.0,
                74.0,
            )),
            root_nudge_step_px: round2(clamp(
                stats.walk_stride * PX_TO_WORLD * NUDGE_STEP_RATIO,
                8.0,
                26.0,
            )),
            reference_body_span_px: round2(clamp(stats.reference_span_px, 40.0, 240.0)),
        }
    }

    /// 正規順のキーと値（レンダラはこの順序をそのまま消費する）
    pub fn entries(&self) -> [(&'static str, f64); 10] {
        [
            ("WALK_SWING_FORWARD_PX", self.walk_swing_forward_px),
            ("WALK_SWING_LIFT_PX", self.walk_swing_lift_px),
            ("RUN_SWING_FORWARD_PX", self.run_swing_forward_px),
            ("RUN_SWING_LIFT_PX", self.run_swing_lift_px),
            ("JUMP_HEIGHT_PX", self.jump_height_px),
            ("CROUCH_ROOT_DROP_PX", self.crouch_root_drop_px),
            ("DASH_ROOT_ADVANCE_PX", self.dash_root_advance_px),
            ("DASH_FOOT_DRIVE_PX", self.dash_foot_drive_px),
            ("ROOT_NUDGE_STEP_PX", self.root_nudge_step_px),
            ("REFERENCE_BODY_SPAN_PX", self.reference_body_span_px),
        ]
    }
}
