//! CIパラメータ文字列のパーサー
//!
//! Jenkinsのパラメータ文字列 (`key1: 'value1', key2: 'value2', ...`) を
//! キー/値のマッピングに変換します。

use crate::error::{ParamError, Result};
use indexmap::IndexMap;

/// デフォルトのセグメント区切り文字
pub const DEFAULT_SEPARATOR: char = ',';

/// パース結果のマッピング（挿入順を保持、キーは一意）
pub type ParamMap = IndexMap<String, String>;

/// パラメータ文字列をパースしてマッピングを生成
///
/// 各セグメントはコロンをちょうど1つ含む必要があります。
/// キーと値は前後の空白を除去し、値の先頭・末尾のシングルクォートを
/// それぞれ1文字だけ（ペアとしてではなく独立に）取り除きます。
///
/// 既知の制限: 値が閉じクォートの前に区切り文字を含む場合、
/// セグメントが誤分割されます。クォートやコロンのエスケープは
/// サポートしません。
pub fn parse_parameters(raw: &str, separator: char) -> Result<ParamMap> {
    let mut parameters = ParamMap::new();

    for segment in raw.split(separator) {
        // セグメントはコロンちょうど1つで key と value に分かれる
        let (key, value) = match segment.split_once(':') {
            Some((key, value)) if !value.contains(':') => (key, value),
            _ => {
                return Err(ParamError::MalformedSegment {
                    segment: segment.trim().to_string(),
                });
            }
        };

        let key = key.trim().to_string();
        let value = strip_single_quotes(value.trim()).to_string();

        // 重複キーは後勝ち（セグメントごとに必ず1エントリ処理される）
        parameters.insert(key, value);
    }

    tracing::debug!("parsed {} parameter(s)", parameters.len());

    Ok(parameters)
}

/// デフォルトの区切り文字 (`,`) でパース
pub fn parse_parameters_default(raw: &str) -> Result<ParamMap> {
    parse_parameters(raw, DEFAULT_SEPARATOR)
}

/// パラメータ文字列をパースしてJSON文字列として返す（シリアライズモード）
pub fn parse_parameters_json(raw: &str, separator: char) -> Result<String> {
    let parameters = parse_parameters(raw, separator)?;
    Ok(serde_json::to_string(&parameters)?)
}

/// 値の先頭と末尾のシングルクォートを、それぞれ1文字だけ取り除く
fn strip_single_quotes(value: &str) -> &str {
    let value = value.strip_prefix('\'').unwrap_or(value);
    value.strip_suffix('\'').unwrap_or(value)
}
