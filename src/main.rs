use clap::Parser;
use renamer_rust::{cli, config, error, patterns, renamer, selector};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use renamer::{FileOutcome, RenameOptions, Selection};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Run { folder, prefix, pattern, mode, interactive, max_files } => {
            println!("🗂 renamer-rust - タイムスタンプリネーム\n");

            // 1. パターン決定
            let selection = if interactive {
                selector::select_pattern_interactive()?
            } else if pattern == "auto" {
                Selection::Auto
            } else {
                Selection::Label(pattern)
            };

            let options = RenameOptions {
                folder,
                prefix: prefix.unwrap_or_else(|| config.default_prefix.clone()),
                selection,
                mode,
                max_files: max_files.unwrap_or(config.max_files),
            };

            // 2. 一括実行
            println!("[1/2] ファイルをスキャン中... (モード: {})", options.mode);
            let summary = renamer::run(&options)?;
            println!("✔ {}件のファイルを確認\n", summary.examined);

            println!("[2/2] コピーリネーム完了\n");

            if cli.verbose {
                for outcome in &summary.outcomes {
                    match outcome {
                        FileOutcome::Copied { file_name, new_name } => {
                            println!("  ✔ {} → {}", file_name, new_name);
                        }
                        FileOutcome::Skipped { file_name, .. } => {
                            println!("  - スキップ: {}", file_name);
                        }
                        FileOutcome::Failed { file_name, reason } => {
                            println!("  ✗ 失敗: {} ({})", file_name, reason);
                        }
                    }
                }
                println!();
            }

            println!("✅ {}件のファイルをコピーしてリネームしました", summary.copied);
            if summary.skipped + summary.failed > 0 {
                println!(
                    "⚠ スキップ: {}件 / 失敗: {}件（詳細は {} を参照）",
                    summary.skipped,
                    summary.failed,
                    options.folder.join(renamer_rust::logger::LOG_FILE_NAME).display()
                );
            }
        }

        Commands::Patterns => {
            println!("📋 パターンバンク（定義順 = 優先順）:\n");
            for entry in patterns::PATTERN_BANK {
                println!("  {:<22} {}", entry.label, entry.pattern);
            }
        }

        Commands::Config { set_prefix, show } => {
            let mut config = config;

            if let Some(prefix) = set_prefix {
                config.set_default_prefix(prefix)?;
                println!("✔ デフォルト接頭辞を設定しました");
            }

            if show {
                println!("設定:");
                println!("  デフォルト接頭辞: {}", config.default_prefix);
                println!("  最大ファイル数: {}", config.max_files);
            }
        }
    }

    Ok(())
}
