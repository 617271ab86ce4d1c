use deckhand_core::{ParamMap, check_parameters};

/// 必須キーがすべて設定済みであることを確認し、値を取り出す（共通ロジック）
///
/// 欠落しているキーは空値として扱い、バリデーターの診断メッセージ
/// そのままでエラーにする。
pub fn require_parameters<const N: usize>(
    parameters: &ParamMap,
    keys: [&str; N],
) -> anyhow::Result<[String; N]> {
    let subset: ParamMap = keys
        .iter()
        .map(|key| {
            let value = parameters.get(*key).cloned().unwrap_or_default();
            (key.to_string(), value)
        })
        .collect();

    let report = check_parameters(&subset);
    if !report.all_set {
        anyhow::bail!("{}", report.message);
    }

    Ok(keys.map(|key| subset[key].clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_of(pairs: &[(&str, &str)]) -> ParamMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_require_parameters_present() {
        let map = map_of(&[("COPILOT_APP", "hello"), ("COPILOT_ENV", "Dev")]);
        let [app, env] = require_parameters(&map, ["COPILOT_APP", "COPILOT_ENV"]).unwrap();
        assert_eq!(app, "hello");
        assert_eq!(env, "Dev");
    }

    #[test]
    fn test_require_parameters_missing_key() {
        // 欠落キーは空値と同じ扱いで、バリデーターの文言が出る
        let map = map_of(&[("COPILOT_APP", "hello")]);
        let err = require_parameters(&map, ["COPILOT_APP", "COPILOT_ENV"]).unwrap_err();
        assert_eq!(err.to_string(), "Parameter COPILOT_ENV is not set");
    }

    #[test]
    fn test_require_parameters_multiple_missing() {
        let map = map_of(&[("COPILOT_APP", "")]);
        let err =
            require_parameters(&map, ["COPILOT_APP", "COPILOT_ENV", "COPILOT_SVC"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parameters COPILOT_APP,COPILOT_ENV,COPILOT_SVC are not set"
        );
    }
}
