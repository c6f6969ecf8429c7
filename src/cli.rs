use clap::{Parser, Subcommand};
use contract_analyzer_common::UploadPolicy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "contract-analyzer")]
#[command(about = "契約書PDFを解析サービスへ送信し、結果JSONを表示・保存する", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// PDFを送信して解析結果を表示
    Analyze {
        /// PDFファイル（省略時は対話的に選択）
        file: Option<PathBuf>,

        /// 結果を analise-contrato.json として保存
        #[arg(short, long)]
        export: bool,

        /// 保存先ディレクトリ（デフォルト: カレント）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 解析サービスのホスト
        #[arg(long)]
        host: Option<String>,

        /// 解析サービスのポート
        #[arg(long)]
        port: Option<u16>,

        /// 送信中の追加入力の扱い (reject/overlap)
        #[arg(long)]
        policy: Option<UploadPolicy>,

        /// 整形JSONのみを標準出力へ（要約・装飾なし）
        #[arg(long)]
        raw: bool,
    },

    /// 設定を表示/編集
    Config {
        /// ホストを設定
        #[arg(long)]
        set_host: Option<String>,

        /// ポートを設定
        #[arg(long)]
        set_port: Option<u16>,

        /// タイムアウト秒数を設定（0で無効）
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
