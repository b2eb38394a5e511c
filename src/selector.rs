//! パターン対話式選択モジュール
//!
//! GUI版のドロップダウンに相当する。バンクのラベル一覧から1つ選ぶか、
//! 自動検出（バンク全体）を選ぶ。

use crate::error::{RenamerError, Result};
use crate::patterns::PATTERN_BANK;
use crate::renamer::Selection;
use dialoguer::Select;

/// 対話式でパターンを選択する
pub fn select_pattern_interactive() -> Result<Selection> {
    let mut items = vec!["自動検出（バンク全体を順に試行）".to_string()];
    items.extend(
        PATTERN_BANK
            .iter()
            .map(|e| format!("{}  ({})", e.label, e.pattern)),
    );

    let choice = Select::new()
        .with_prompt("使用するパターンを選択してください")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| RenamerError::Prompt(e.to_string()))?;

    if choice == 0 {
        Ok(Selection::Auto)
    } else {
        Ok(Selection::Label(PATTERN_BANK[choice - 1].label.to_string()))
    }
}
