mod commands;
mod utils;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "deckhand")]
#[command(about = "CIパイプラインからAWS Copilotデプロイを操作するヘルパー", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// パラメータ文字列をパースしてJSONで出力
    Params {
        /// CIパラメータ文字列 (`key1: 'value1', key2: 'value2', ...`)
        #[arg(long, env = "DECKHAND_PARAMS")]
        params: String,
        /// セグメントの区切り文字
        #[arg(long, default_value = ",")]
        separator: char,
        /// JSONではなく `key = value` の一覧で表示
        #[arg(long)]
        raw: bool,
    },
    /// すべてのパラメータが設定済みか検証
    Check {
        /// CIパラメータ文字列
        #[arg(long, env = "DECKHAND_PARAMS")]
        params: String,
        /// セグメントの区切り文字
        #[arg(long, default_value = ",")]
        separator: char,
    },
    /// サービスをデプロイ（CI/CD向け）
    /// copilot deploy --force を600秒の上限つきで実行
    Deploy {
        /// CIパラメータ文字列 (COPILOT_SVC, COPILOT_APP, COPILOT_ENV が必須)
        #[arg(long, env = "DECKHAND_PARAMS")]
        params: String,
    },
    /// デプロイ結果を検証
    /// COMMANDの実行後、copilot app ls / svc ls で確認
    Validate {
        /// CIパラメータ文字列 (COMMAND, COPILOT_APP が必須)
        #[arg(long, env = "DECKHAND_PARAMS")]
        params: String,
    },
    /// バージョン情報を表示
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt::init();

    match cli.command {
        Commands::Params {
            params,
            separator,
            raw,
        } => {
            commands::params::handle(&params, separator, raw)?;
        }
        Commands::Check { params, separator } => {
            commands::check::handle(&params, separator)?;
        }
        Commands::Deploy { params } => {
            commands::deploy::handle(&params).await?;
        }
        Commands::Validate { params } => {
            commands::validate::handle(&params).await?;
        }
        Commands::Version => {
            println!("deckhand {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
