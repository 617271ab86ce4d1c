use colored::Colorize;
use deckhand_core::{check_parameters, parse_parameters};

pub fn handle(params: &str, separator: char) -> anyhow::Result<()> {
    let parameters = parse_parameters(params, separator)?;
    let report = check_parameters(&parameters);

    // 診断メッセージはパイプラインが読む契約文字列なのでstdoutへ素で出す
    println!("{}", report.message);

    if !report.all_set {
        eprintln!("{}", "✗ 未設定のパラメータがあります".red().bold());
        std::process::exit(1);
    }

    eprintln!("{}", "✓ すべてのパラメータが設定されています".green());
    Ok(())
}
