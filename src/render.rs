use anyhow::Result;
use std::collections::BTreeMap;

use crate::motion::MotionConstants;

/// 出力フォーマット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Ts,
}

impl Format {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(Self::Json),
            "ts" => Some(Self::Ts),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Ts => "ts",
        }
    }
}

/// TypeScript の定数テーブルとして整形する（キーは正規順）
pub fn render_ts(constants: &MotionConstants) -> String {
    let mut lines = vec![
        "// Generated from OpenPose-style frames".to_string(),
        "export const LOCOMOTION_TUNING = {".to_string(),
    ];
    for (key, value) in constants.entries() {
        // {:?} は 14.0 を "14.0" と出す（Display だと "14" に潰れる）
        lines.push(format!("  {}: {:?},", key, value));
    }
    lines.push("} as const;".to_string());
    lines.join("\n")
}

/// ソート済みキーの pretty JSON として整形する
pub fn render_json(constants: &MotionConstants) -> Result<String> {
    let map: BTreeMap<&str, f64> = constants.entries().into_iter().collect();
    Ok(serde_json::to_string_pretty(&map)?)
}
