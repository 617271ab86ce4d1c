use colored::Colorize;
use deckhand_core::parse_parameters;

pub fn handle(params: &str, separator: char, raw: bool) -> anyhow::Result<()> {
    let parameters = parse_parameters(params, separator)?;

    if raw {
        // 人間向けの一覧表示
        println!("{}", format!("パラメータ ({} 件):", parameters.len()).bold());
        for (key, value) in &parameters {
            println!("  • {} = {}", key.cyan(), value);
        }
    } else {
        // シリアライズモード: JSONをそのままstdoutへ（パイプライン向け）
        println!("{}", serde_json::to_string(&parameters)?);
    }

    Ok(())
}
