use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::pose::frame::{Frame, VALUES_PER_FRAME};

/// person レコード内でキーポイント配列を保持するキー
pub const KEYPOINTS_KEY: &str = "pose_keypoints_2d";

/// JSONドキュメントをファイルから読み込む
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Value> {
    let content = fs::read_to_string(path).context("Failed to read input file")?;
    let payload = serde_json::from_str(&content).context("Failed to parse input JSON")?;
    Ok(payload)
}

/// トップレベル形状を判定してフレーム相当のアイテム列に正規化する
///
/// 1. `{"frames": [...]}` → そのリスト
/// 2. 配列そのもの → そのリスト
/// 3. それ以外 → 単一アイテム扱い
fn frame_items(payload: &Value) -> &[Value] {
    let single = std::slice::from_ref(payload);
    match payload {
        Value::Object(obj) => match obj.get("frames") {
            Some(Value::Array(frames)) => frames,
            _ => single,
        },
        Value::Array(list) => list,
        _ => single,
    }
}

/// アイテムから person レコードを取り出す
/// `people` リストを持つオブジェクトは先頭要素、それ以外はアイテム自身
fn extract_person(item: &Value) -> Option<&Value> {
    item.as_object()?;
    match item.get("people") {
        Some(Value::Array(people)) => {
            let person = people.first()?;
            if person.is_object() {
                Some(person)
            } else {
                None
            }
        }
        _ => Some(item),
    }
}

/// person レコードからフラットなキーポイント配列を取り出す
/// キー欠落・長さ不足・数値以外の混入はすべて None（アイテムごと捨てる）
fn extract_keypoints(item: &Value) -> Option<Vec<f64>> {
    let person = extract_person(item)?;
    let arr = person.get(KEYPOINTS_KEY)?.as_array()?;
    if arr.len() < VALUES_PER_FRAME {
        return None;
    }
    arr.iter().map(Value::as_f64).collect()
}

/// 生ペイロードから正規化済みフレーム列を構築する
///
/// 実世界のキャプチャデータはノイズを含む前提のベストエフォート抽出。
/// 正規化できないアイテムは黙って捨て、エラーにはしない。
pub fn load_frames(payload: &Value) -> Vec<Frame> {
    frame_items(payload)
        .iter()
        .filter_map(extract_keypoints)
        .filter_map(Frame::new)
        .collect()
}
