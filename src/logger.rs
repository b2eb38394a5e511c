//! 失敗イベントのログファイル出力
//!
//! 対象フォルダ内のテキストファイルに1行ずつ追記する。ログ自体が書けない
//! 場合は標準エラーへフォールバックし、バッチは決して中断しない。

use chrono::Local;
use std::io::Write;
use std::path::{Path, PathBuf};

/// ログファイル名（対象フォルダ直下に作成）
pub const LOG_FILE_NAME: &str = "renamer_error.txt";

/// 対象フォルダに紐づく追記専用ログ
#[derive(Debug, Clone)]
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    pub fn new(folder: &Path) -> Self {
        Self {
            path: folder.join(LOG_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// タイムスタンプ付きで1行追記する
    pub fn record(&self, message: &str) {
        let now = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("[{}] {}\n", now, message);

        let result = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()));

        if let Err(e) = result {
            eprintln!("[LOG ERROR] ログの書き込みに失敗: {} ({})", e, message);
        }
    }

    /// 原因となったエラーの詳細も含めて追記する
    pub fn record_with_cause(&self, message: &str, cause: &dyn std::fmt::Display) {
        self.record(&format!("{}: {}", message, cause));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_record_appends_timestamped_lines() {
        let temp_dir = std::env::temp_dir().join("renamer-test-log");
        fs::create_dir_all(&temp_dir).unwrap();
        fs::remove_file(temp_dir.join(LOG_FILE_NAME)).ok();

        let log = ErrorLog::new(&temp_dir);
        log.record("1件目");
        log.record("2件目");

        let content = fs::read_to_string(log.path()).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("1件目"));
        assert!(lines[1].ends_with("2件目"));

        fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_record_with_cause_includes_detail() {
        let temp_dir = std::env::temp_dir().join("renamer-test-log-cause");
        fs::create_dir_all(&temp_dir).unwrap();

        let log = ErrorLog::new(&temp_dir);
        let cause = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        log.record_with_cause("コピー失敗: a.txt", &cause);

        let content = fs::read_to_string(log.path()).unwrap();
        assert!(content.contains("コピー失敗: a.txt"));
        assert!(content.contains("denied"));

        fs::remove_dir_all(&temp_dir).ok();
    }

    /// ログが書けなくてもpanicしない（stderrフォールバック）
    #[test]
    fn test_unwritable_log_does_not_panic() {
        let log = ErrorLog::new(Path::new("/nonexistent/folder"));
        log.record("届かないメッセージ");
    }
}
