use crate::extractor::ScanMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "renamer")]
#[command(about = "タイムスタンプ検出によるファイル一括リネーム（コピー）ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// フォルダ内のファイルをタイムスタンプ検出でコピーリネーム
    Run {
        /// 対象フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 新しい名前の接頭辞（省略時は設定値）
        #[arg(short, long)]
        prefix: Option<String>,

        /// 使用パターンのラベル（"auto" でバンク全体を自動検出）
        #[arg(long, default_value = "auto")]
        pattern: String,

        /// 検索対象 (filename/content)
        #[arg(short, long, default_value = "filename")]
        mode: ScanMode,

        /// 対話式でパターンを選択
        #[arg(short, long)]
        interactive: bool,

        /// 1回の実行で処理する最大ファイル数（省略時は設定値）
        #[arg(long)]
        max_files: Option<usize>,
    },

    /// パターンバンクの一覧を表示
    Patterns,

    /// 設定を表示/編集
    Config {
        /// デフォルト接頭辞を設定
        #[arg(long)]
        set_prefix: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
