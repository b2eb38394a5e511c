//! タイムスタンプ正規表現バンク
//!
//! ラベル付きの正規表現を定義順に保持する。スキャン時は先頭から順に試行し、
//! 最初にマッチしたエントリが採用される（first-match-wins）。

use regex::Regex;

/// バンクの1エントリ（ラベル + 正規表現ソース）
///
/// 通常はキャプチャグループ2つ（グループ1=日付、グループ2=時刻）。
/// グループ1つだけの「不透明トークン」エントリも許容する。
#[derive(Debug, Clone, Copy)]
pub struct PatternEntry {
    pub label: &'static str,
    pub pattern: &'static str,
}

/// 認識するタイムスタンプ形状のカタログ（定義順 = 優先順）
pub const PATTERN_BANK: &[PatternEntry] = &[
    PatternEntry { label: "YYYYMMDD-HHMMSS", pattern: r"(\d{8})-(\d{6})" },
    PatternEntry { label: "YYYY-MM-DD_HHMMSS", pattern: r"(\d{4}-\d{2}-\d{2})_(\d{6})" },
    PatternEntry { label: "DD/MM/YYYY HH:MM:SS", pattern: r"(\d{2}/\d{2}/\d{4}) (\d{2}:\d{2}:\d{2})" },
    PatternEntry { label: "YYYY/MM/DD HHMMSS", pattern: r"(\d{4}/\d{2}/\d{2}) (\d{6})" },
    PatternEntry { label: "YYYY.MM.DD HH:MM:SS", pattern: r"(\d{4}\.\d{2}\.\d{2}) (\d{2}:\d{2}:\d{2})" },
    PatternEntry { label: "DD-MM-YYYY_HHMMSS", pattern: r"(\d{2}-\d{2}-\d{4})_(\d{6})" },
    PatternEntry { label: "DDMMYYYYHHMMSS", pattern: r"(\d{2}\d{2}\d{4})(\d{6})" },
    PatternEntry { label: "YYYY/MM/DD_HH:MM:SS", pattern: r"(\d{4}/\d{2}/\d{2})_(\d{2}:\d{2}:\d{2})" },
    PatternEntry { label: "YYYY-MM-DDTHH:MM:SS", pattern: r"(\d{4}-\d{2}-\d{2})T(\d{2}:\d{2}:\d{2})" },
    PatternEntry { label: "YYYYMMDDHHMMSS", pattern: r"(\d{8})(\d{6})" },
    PatternEntry { label: "WhatsApp形式", pattern: r"(\d{4}-\d{2}-\d{2}).*?(\d{2}\.\d{2}\.\d{2})" },
    // 区切り文字ゆらぎ対応の汎用形状
    PatternEntry { label: "汎用区切り", pattern: r"(\d{4}[/-]\d{2}[/-]\d{2})[ _-]?(\d{2}[:\.]\d{2}[:\.]\d{2})" },
    // グループ1つの不透明トークン（正規化せずそのまま使用）
    PatternEntry { label: "Unix epoch（秒）", pattern: r"(\d{10})" },
];

/// コンパイル済みパターン
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub label: &'static str,
    pub regex: Regex,
}

/// エントリ列をコンパイルする
///
/// 正規表現として不正なエントリはスキップし、警告メッセージとして返す。
/// スキャン自体は止めない。
pub fn compile_entries(entries: &[PatternEntry]) -> (Vec<CompiledPattern>, Vec<String>) {
    let mut compiled = Vec::with_capacity(entries.len());
    let mut warnings = Vec::new();

    for entry in entries {
        match Regex::new(entry.pattern) {
            Ok(regex) => compiled.push(CompiledPattern { label: entry.label, regex }),
            Err(e) => warnings.push(format!(
                "不正な正規表現のためスキップ: {} ({})",
                entry.label, e
            )),
        }
    }

    (compiled, warnings)
}

/// 既定バンクをコンパイルする
pub fn compile_bank() -> (Vec<CompiledPattern>, Vec<String>) {
    compile_entries(PATTERN_BANK)
}

/// ラベルからコンパイル済みパターンを検索
pub fn find_by_label<'a>(
    compiled: &'a [CompiledPattern],
    label: &str,
) -> Option<&'a CompiledPattern> {
    compiled.iter().find(|p| p.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_compiles_without_warnings() {
        let (compiled, warnings) = compile_bank();
        assert_eq!(compiled.len(), PATTERN_BANK.len());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_invalid_entry_is_skipped() {
        let entries = [
            PatternEntry { label: "壊れた括弧", pattern: r"(\d{8}" },
            PatternEntry { label: "正常", pattern: r"(\d{8})-(\d{6})" },
        ];
        let (compiled, warnings) = compile_entries(&entries);
        assert_eq!(compiled.len(), 1);
        assert_eq!(compiled[0].label, "正常");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("壊れた括弧"));
    }

    #[test]
    fn test_find_by_label() {
        let (compiled, _) = compile_bank();
        assert!(find_by_label(&compiled, "WhatsApp形式").is_some());
        assert!(find_by_label(&compiled, "存在しないラベル").is_none());
    }

    #[test]
    fn test_bank_order_matches_definition() {
        let (compiled, _) = compile_bank();
        let labels: Vec<_> = compiled.iter().map(|p| p.label).collect();
        let expected: Vec<_> = PATTERN_BANK.iter().map(|e| e.label).collect();
        assert_eq!(labels, expected);
    }
}
