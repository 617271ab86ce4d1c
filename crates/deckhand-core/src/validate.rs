//! パラメータバリデーター
//!
//! マッピング内のすべての値が空でないことを確認します。
//! 未設定のキーがあれば、キー名を列挙した診断メッセージを生成します。

use crate::error::{ParamError, Result};
use crate::params::ParamMap;

/// すべてのパラメータが設定されているときの固定メッセージ
pub const ALL_VALID_MESSAGE: &str = "All parameters are valid";

/// 拡張モードの検証結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamReport {
    /// すべての値が空でなければ true
    pub all_set: bool,
    /// 未設定キーを列挙した診断メッセージ（パイプラインログに出力される契約文字列）
    pub message: String,
}

/// デフォルトモード: すべての値が空でなければ true
pub fn all_parameters_set(parameters: &ParamMap) -> bool {
    parameters.values().all(|value| !value.is_empty())
}

/// 拡張モード: 真偽値に加えて、未設定キーを列挙した診断メッセージを返す
///
/// メッセージの形式:
/// - 未設定 0 件: `All parameters are valid`（診断分岐は実行されない）
/// - 未設定 1 件: `Parameter <key> is not set`
/// - 未設定 2 件以上: `Parameters <k1>,<k2> are not set`（カンマ結合、挿入順）
pub fn check_parameters(parameters: &ParamMap) -> ParamReport {
    let all_set = all_parameters_set(parameters);

    let unset_parameters: Vec<&str> = parameters
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(key, _)| key.as_str())
        .collect();

    let mut message = ALL_VALID_MESSAGE.to_string();

    // 未設定キーの数で単数形/複数形を切り替える。
    // 0件のときはこの分岐に入らず、デフォルトメッセージを保持する。
    if unset_parameters.len() == 1 {
        message = format!("Parameter {} is not set", unset_parameters[0]);
    } else if unset_parameters.len() > 1 {
        message = format!("Parameters {} are not set", unset_parameters.join(","));
    }

    ParamReport { all_set, message }
}

/// JSON値として渡されたパラメータを検証する動的エントリポイント
///
/// オブジェクト以外（文字列・配列など）が渡された場合は `NotAMapping` を返す。
/// ネストしたマッピングの再帰検証は行わない。文字列以外の値は
/// 空文字列ではないため「設定済み」として扱う。
pub fn check_parameters_value(value: &serde_json::Value) -> Result<ParamReport> {
    let object = match value {
        serde_json::Value::Object(object) => object,
        other => return Err(ParamError::NotAMapping(type_name(other).to_string())),
    };

    let parameters: ParamMap = object
        .iter()
        .map(|(key, value)| {
            let value = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), value)
        })
        .collect();

    Ok(check_parameters(&parameters))
}

fn type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
