//! コピーによる一括リネーム本体
//!
//! 対象フォルダ直下のファイルからタイムスタンプを検出し、サブフォルダ
//! `renomeados/` へ新しい名前でコピーする。元ファイルは変更も削除もしない。
//! ファイル単位の失敗は隔離してログに記録し、バッチは継続する。

use crate::error::{RenamerError, Result};
use crate::extractor::{self, PatternSelector, ScanMode};
use crate::logger::ErrorLog;
use crate::patterns::{self, PatternEntry};
use crate::scanner;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

/// コピー先サブフォルダ名
pub const DEST_DIR_NAME: &str = "renomeados";

/// パターンの選び方（自動検出 or ラベル指定）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// バンク全体を定義順に試行
    Auto,
    /// 指定ラベルのエントリのみ試行
    Label(String),
}

/// 1回の実行に必要な入力一式
///
/// コアロジックはこの構造体だけを読む（大域状態には依存しない）。
#[derive(Debug, Clone)]
pub struct RenameOptions {
    pub folder: PathBuf,
    pub prefix: String,
    pub selection: Selection,
    pub mode: ScanMode,
    pub max_files: usize,
}

/// ファイル1件ごとの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// コピー成功
    Copied { file_name: String, new_name: String },
    /// パターン不一致によるスキップ
    Skipped { file_name: String, reason: String },
    /// I/Oエラーによる失敗（ログ記録済み）
    Failed { file_name: String, reason: String },
}

/// バッチ全体の集計
#[derive(Debug, Default)]
pub struct RenameSummary {
    pub examined: usize,
    pub copied: usize,
    pub skipped: usize,
    pub failed: usize,
    pub outcomes: Vec<FileOutcome>,
}

/// 既定バンクで一括リネームを実行する
pub fn run(options: &RenameOptions) -> Result<RenameSummary> {
    run_with_entries(options, patterns::PATTERN_BANK)
}

/// 指定エントリ列で一括リネームを実行する
///
/// フォルダ検証に失敗した場合は副作用ゼロで中断する。それ以外のエラーは
/// ファイル単位で隔離される。
pub fn run_with_entries(
    options: &RenameOptions,
    entries: &[PatternEntry],
) -> Result<RenameSummary> {
    // フォルダ検証を兼ねる。無効パスならここで中断（コピーもログもなし）
    let files = scanner::list_files(&options.folder, options.max_files)?;

    let log = ErrorLog::new(&options.folder);

    let (compiled, warnings) = patterns::compile_entries(entries);
    for warning in &warnings {
        log.record(warning);
    }

    let single = match &options.selection {
        Selection::Auto => None,
        Selection::Label(label) => Some(
            patterns::find_by_label(&compiled, label)
                .ok_or_else(|| RenamerError::UnknownPattern(label.clone()))?,
        ),
    };

    let dest_dir = options.folder.join(DEST_DIR_NAME);
    std::fs::create_dir_all(&dest_dir)?;  // 既存でも可（冪等）

    let mut summary = RenameSummary::default();
    let pb = ProgressBar::new(files.len() as u64);

    for path in &files {
        pb.inc(1);
        summary.examined += 1;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let text = match options.mode {
            ScanMode::Filename => file_name.clone(),
            ScanMode::Content => match extractor::read_text_lossy(path) {
                Ok(text) => text,
                Err(e) => {
                    log.record_with_cause(
                        &format!("ファイルを読めません: {}", file_name),
                        &e,
                    );
                    summary.failed += 1;
                    summary.outcomes.push(FileOutcome::Failed {
                        file_name,
                        reason: e.to_string(),
                    });
                    continue;
                }
            },
        };

        let selector = match single {
            Some(pattern) => PatternSelector::Single(pattern),
            None => PatternSelector::Bank(&compiled),
        };

        let outcome = match extractor::extract(&text, selector).render() {
            Some(stamp) => {
                let new_name = format!("{}{}{}", options.prefix, stamp, extension_of(path));
                match copy_with_metadata(path, &dest_dir.join(&new_name)) {
                    Ok(()) => {
                        summary.copied += 1;
                        FileOutcome::Copied { file_name, new_name }
                    }
                    Err(e) => {
                        log.record_with_cause(
                            &format!("コピーに失敗: {}", file_name),
                            &e,
                        );
                        summary.failed += 1;
                        FileOutcome::Failed {
                            file_name,
                            reason: e.to_string(),
                        }
                    }
                }
            }
            None => {
                let reason = format!("タイムスタンプのパターンを認識できません: {}", file_name);
                log.record(&reason);
                summary.skipped += 1;
                FileOutcome::Skipped { file_name, reason }
            }
        };
        summary.outcomes.push(outcome);
    }

    pb.finish_and_clear();
    Ok(summary)
}

/// 拡張子をドット付きで返す（なければ空文字）
fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default()
}

/// メタデータ（更新日時）を保持するコピー
///
/// 更新日時の引き継ぎはベストエフォート。コピー本体の失敗のみエラーにする。
fn copy_with_metadata(src: &Path, dest: &Path) -> std::io::Result<()> {
    std::fs::copy(src, dest)?;

    if let Ok(modified) = std::fs::metadata(src).and_then(|m| m.modified()) {
        if let Ok(file) = std::fs::File::options().write(true).open(dest) {
            let _ = file.set_modified(modified);
        }
    }

    Ok(())
}
