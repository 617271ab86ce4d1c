use crate::utils;
use colored::Colorize;
use deckhand_cloud_aws::AwsIdentity;
use deckhand_copilot::Copilot;
use deckhand_core::parse_parameters_default;

pub async fn handle(params: &str) -> anyhow::Result<()> {
    println!("{}", "デプロイを開始します...".blue().bold());

    let parameters = parse_parameters_default(params)?;
    let [svc, app, env] =
        utils::require_parameters(&parameters, ["COPILOT_SVC", "COPILOT_APP", "COPILOT_ENV"])?;

    println!("アプリ: {}", app.cyan());
    println!("サービス: {}", svc.cyan());
    println!("環境: {}", env.cyan());

    // AWSアイデンティティは実行ごとに明示的に解決する（プロセス全体の
    // 暗黙セッションは持たない）。デプロイ自体はcopilotがアンビエントな
    // 認証情報で行うため、ここでは解決できることの確認とログ出力のみ。
    let identity = AwsIdentity::load().await?;
    if let Some(region) = &identity.region {
        println!("リージョン: {}", region.cyan());
    }
    tracing::debug!("deploying as {:?}", identity);

    let copilot = Copilot::new();
    copilot.check_installed().await?;

    println!();
    println!(
        "{}",
        format!(
            "copilot deploy --name {} --app {} --env {} --force を実行中...",
            svc, app, env
        )
        .blue()
    );

    // 600秒の実行上限つき。超過は終了コード異常とは別のエラーになる
    let output = copilot.deploy(&svc, &app, &env).await?;
    print!("{}", output.stdout);

    println!();
    println!("{}", "✓ デプロイが完了しました".green().bold());
    Ok(())
}
