//! タイムスタンプ抽出・正規化
//!
//! ファイル名（またはファイル内容）に対して正規表現を適用し、キャプチャした
//! 日付・時刻を正準形 `YYYY-MM-DD_HHhMMmSSs` に正規化する。
//! 桁数が合わないキャプチャはエラーにせず番兵値に退化させる
//! （`0000-00-00` / `00h00m00s`）。

use crate::patterns::CompiledPattern;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

/// 日付が正規化できなかったときの番兵値
pub const DATE_SENTINEL: &str = "0000-00-00";
/// 時刻が正規化できなかったときの番兵値
pub const TIME_SENTINEL: &str = "00h00m00s";

lazy_static! {
    static ref NON_DIGIT_RE: Regex = Regex::new(r"[^0-9]").unwrap();
}

/// 検索対象の選択（ファイル名 or ファイル内容）
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// ファイルのベース名のみを検索
    #[default]
    Filename,
    /// ファイルをテキストとして読み（不正バイトは置換）、全文を検索
    Content,
}

impl std::str::FromStr for ScanMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "filename" | "name" => Ok(ScanMode::Filename),
            "content" | "text" => Ok(ScanMode::Content),
            _ => Err(format!("Unknown mode: {}. Use filename or content", s)),
        }
    }
}

impl std::fmt::Display for ScanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanMode::Filename => write!(f, "filename"),
            ScanMode::Content => write!(f, "content"),
        }
    }
}

/// 抽出結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// どのパターンにもマッチしなかった
    NoMatch,
    /// 日付・時刻の2グループを正規化した結果
    Timestamp { date: String, time: String },
    /// グループ1つのパターン：キャプチャをそのまま使用
    RawToken(String),
}

impl MatchResult {
    /// ファイル名に埋め込む文字列を返す（`NoMatch` は `None`）
    pub fn render(&self) -> Option<String> {
        match self {
            MatchResult::NoMatch => None,
            MatchResult::Timestamp { date, time } => Some(format!("{}_{}", date, time)),
            MatchResult::RawToken(token) => Some(token.clone()),
        }
    }
}

/// 単一パターンかバンク全体か
#[derive(Clone, Copy)]
pub enum PatternSelector<'a> {
    /// 利用者が選んだ1エントリのみ試行
    Single(&'a CompiledPattern),
    /// 定義順に全エントリを試行し、最初のマッチを採用
    Bank(&'a [CompiledPattern]),
}

/// テキストからタイムスタンプを抽出する
pub fn extract(text: &str, selector: PatternSelector<'_>) -> MatchResult {
    match selector {
        PatternSelector::Single(pattern) => extract_with(text, pattern),
        PatternSelector::Bank(patterns) => {
            for pattern in patterns {
                let result = extract_with(text, pattern);
                if result != MatchResult::NoMatch {
                    return result;
                }
            }
            MatchResult::NoMatch
        }
    }
}

fn extract_with(text: &str, pattern: &CompiledPattern) -> MatchResult {
    let caps = match pattern.regex.captures(text) {
        Some(caps) => caps,
        None => return MatchResult::NoMatch,
    };

    // caps[0] は全体マッチなので、キャプチャグループ数は len() - 1
    if caps.len() >= 3 {
        let date_raw = digits_only(caps.get(1).map_or("", |m| m.as_str()));
        let time_raw = digits_only(caps.get(2).map_or("", |m| m.as_str()));
        return MatchResult::Timestamp {
            date: normalize_date(&date_raw),
            time: normalize_time(&time_raw),
        };
    }

    if caps.len() == 2 {
        let token = caps
            .get(1)
            .or_else(|| caps.get(0))
            .map_or("", |m| m.as_str());
        return MatchResult::RawToken(token.to_string());
    }

    // グループなしのマッチは採用しない
    MatchResult::NoMatch
}

fn digits_only(s: &str) -> String {
    NON_DIGIT_RE.replace_all(s, "").into_owned()
}

/// 8桁なら `YYYY-MM-DD` にスライス整形、それ以外は番兵値
fn normalize_date(raw: &str) -> String {
    if raw.len() == 8 {
        format!("{}-{}-{}", &raw[0..4], &raw[4..6], &raw[6..8])
    } else {
        DATE_SENTINEL.to_string()
    }
}

/// 6桁なら `HHhMMmSSs` に整形、それ以外は番兵値
fn normalize_time(raw: &str) -> String {
    if raw.len() == 6 {
        format!("{}h{}m{}s", &raw[0..2], &raw[2..4], &raw[4..6])
    } else {
        TIME_SENTINEL.to_string()
    }
}

/// ファイルをテキストとして読む（内容モード用）
///
/// UTF-8として不正なバイト列は U+FFFD に置換する。
pub fn read_text_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
