use anyhow::{bail, Result};

use crate::motion::midpoint::Midpoint;

/// ノイズフロア: これ以下のデルタは静止とみなしストライド中央値から除外
pub const DELTA_EPSILON: f64 = 1e-6;
/// 有効なデルタが1つもない場合のストライド推定値（スケール前）
pub const WALK_STRIDE_FALLBACK: f64 = 30.0;
/// 1歩分の移動量 → 1ストライドサイクル換算
pub const WALK_STRIDE_CYCLE: f64 = 2.1;
/// 走行ストライド = 歩行ストライド × この係数
pub const RUN_STRIDE_RATIO: f64 = 1.65;
/// ダッシュ推定に使うデルタ分布のパーセンタイル
pub const DASH_PERCENTILE: f64 = 0.9;
pub const DASH_MULTIPLIER: f64 = 4.5;
pub const DASH_FLOOR: f64 = 48.0;
/// デルタが計算できない場合のダッシュ距離
pub const DASH_FALLBACK: f64 = 64.0;
/// 静止系列でも正の定数を返すための下限
pub const JUMP_MIN_PX: f64 = 12.0;
pub const CROUCH_MIN_PX: f64 = 10.0;
/// 胴体長が推定できない場合の基準スパン
pub const REFERENCE_SPAN_FALLBACK: f64 = 80.0;

/// 中央値（空列は fallback を返す）
pub fn median(values: &[f64], fallback: f64) -> f64 {
    if values.is_empty() {
        return fallback;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) * 0.5
    }
}

/// フレーム間の水平移動量（体幹中心の並進近似）
fn deltas(hip_x: &[f64]) -> Vec<f64> {
    hip_x.windows(2).map(|w| w[1] - w[0]).collect()
}

/// 歩行・走行ストライドの推定
///
/// 歩行: ノイズフロアを超えるデルタ絶対値の中央値 × WALK_STRIDE_CYCLE。
/// 走行: 並進量だけでは歩行と区別できないため固定比率で外挿する。
pub fn stride_stats(hip_x: &[f64]) -> (f64, f64) {
    let abs_deltas: Vec<f64> = deltas(hip_x)
        .into_iter()
        .map(f64::abs)
        .filter(|d| *d > DELTA_EPSILON)
        .collect();
    let walk_stride = median(&abs_deltas, WALK_STRIDE_FALLBACK) * WALK_STRIDE_CYCLE;
    let run_stride = walk_stride * RUN_STRIDE_RATIO;
    (walk_stride, run_stride)
}

/// ダッシュ距離の推定
/// デルタ絶対値の90パーセンタイル × DASH_MULTIPLIER、下限 DASH_FLOOR
pub fn dash_distance(hip_x: &[f64]) -> f64 {
    let mut abs_deltas: Vec<f64> = deltas(hip_x).into_iter().map(f64::abs).collect();
    if abs_deltas.is_empty() {
        return DASH_FALLBACK;
    }
    abs_deltas.sort_by(|a, b| a.total_cmp(b));
    let p90_index = (DASH_PERCENTILE * (abs_deltas.len() - 1) as f64) as usize;
    (abs_deltas[p90_index] * DASH_MULTIPLIER).max(DASH_FLOOR)
}

/// 中点系列から導出した生の運動統計（ピクセル単位、スケール前）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionStats {
    pub walk_stride: f64,
    pub run_stride: f64,
    pub dash_distance: f64,
    pub jump_height_px: f64,
    pub crouch_drop_px: f64,
    pub reference_span_px: f64,
}

impl MotionStats {
    /// 腰・肩の中点系列から統計を導出する
    ///
    /// 腰サンプルが2未満なら失敗し、部分的な出力は返さない。
    /// それ以外の欠損はすべて明示的なフォールバック値に落ちる。
    pub fn derive(hips: &[Midpoint], shoulders: &[Midpoint]) -> Result<Self> {
        if hips.len() < 2 {
            bail!("Not enough confident hip samples to derive motion constants");
        }

        let hip_x: Vec<f64> = hips.iter().map(|p| p.x).collect();
        let hip_y: Vec<f64> = hips.iter().map(|p| p.y).collect();

        let (walk_stride, run_stride) = stride_stats(&hip_x);
        let dash = dash_distance(&hip_x);

        let baseline_y = median(&hip_y, hip_y[0]);
        let min_y = hip_y.iter().copied().fold(f64::INFINITY, f64::min);
        let max_y = hip_y.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let jump_height_px = (baseline_y - min_y).max(JUMP_MIN_PX);
        let crouch_drop_px = (max_y - baseline_y).max(CROUCH_MIN_PX);

        // 肩系列が空なら腰系列で代用（胴体長の近似）
        // 肩系列が短い場合は末尾サンプルにクランプして対応付ける
        let shoulder_y: Vec<f64> = if shoulders.is_empty() {
            hip_y.clone()
        } else {
            shoulders.iter().map(|p| p.y).collect()
        };
        let spans: Vec<f64> = hip_y
            .iter()
            .enumerate()
            .map(|(i, y)| (y - shoulder_y[i.min(shoulder_y.len() - 1)]).abs())
            .collect();
        let reference_span_px = median(&spans, REFERENCE_SPAN_FALLBACK);

        Ok(Self {
            walk_stride,
            run_stride,
            dash_distance: dash,
            jump_height_px,
            crouch_drop_px,
            reference_span_px,
        })
    }
}
