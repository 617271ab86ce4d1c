use crate::utils;
use colored::Colorize;
use deckhand_cloud_aws::AwsIdentity;
use deckhand_copilot::{Copilot, runner, split_command};
use deckhand_core::parse_parameters_default;

pub async fn handle(params: &str) -> anyhow::Result<()> {
    println!("{}", "デプロイ結果を検証中...".blue());

    let parameters = parse_parameters_default(params)?;
    let [command, app] = utils::require_parameters(&parameters, ["COMMAND", "COPILOT_APP"])?;

    // 1. オペレーター指定のコマンドを実行
    //    （COMMANDは信頼できるパイプライン設定からのみ渡すこと）
    println!("コマンド: {}", command.cyan());
    let argv = split_command(&command)?;
    let result = runner::run(&argv).await?;
    println!(
        "{}",
        format!("✓ '{}' の終了コード: {}", command, result.exit_code).green()
    );

    // 2. アプリケーション一覧
    let copilot = Copilot::new();
    let apps = copilot.list_apps().await?;
    println!();
    println!("{}", format!("アプリケーション ({} 件):", apps.len()).bold());
    for name in &apps {
        println!("  • {}", name.cyan());
    }

    // 検証対象のAWS環境（アクティブなプロファイル）を表示
    let identity = AwsIdentity::load().await?;
    println!("環境: {}", identity.profile.cyan());
    println!(
        "リージョン: {}",
        identity.region.as_deref().unwrap_or("(未設定)").cyan()
    );

    // 3. 対象アプリのサービス一覧（この結果が検証コマンドの最終出力）
    println!();
    println!("{}", format!("'{}' のサービス一覧:", app).bold());
    let services = copilot.list_services(&app).await?;
    print!("{}", services.stdout);

    println!();
    println!("{}", "✓ 検証が完了しました".green().bold());
    Ok(())
}
