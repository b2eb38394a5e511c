//! 対象フォルダのファイル列挙

use crate::error::{RenamerError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 1回の実行で処理するファイル数の既定上限
pub const DEFAULT_MAX_FILES: usize = 100;

/// フォルダ直下の通常ファイルを列挙する
///
/// - サブフォルダには入らない
/// - ファイルシステムが返した順のまま、先頭 `limit` 件で打ち切る（ソートしない）
pub fn list_files(folder: &Path, limit: usize) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(RenamerError::FolderNotFound(folder.display().to_string()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        files.push(path.to_path_buf());
        if files.len() >= limit {
            break;
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};

    #[test]
    fn test_list_files_not_found() {
        let result = list_files(Path::new("/nonexistent/folder"), DEFAULT_MAX_FILES);
        assert!(matches!(result, Err(RenamerError::FolderNotFound(_))));
    }

    #[test]
    fn test_list_files_rejects_regular_file_path() {
        let temp_dir = std::env::temp_dir().join("renamer-test-notdir");
        fs::create_dir_all(&temp_dir).unwrap();
        let file = temp_dir.join("plain.txt");
        File::create(&file).unwrap();

        let result = list_files(&file, DEFAULT_MAX_FILES);
        assert!(matches!(result, Err(RenamerError::FolderNotFound(_))));

        fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_list_files_skips_subdirectories() {
        let temp_dir = std::env::temp_dir().join("renamer-test-subdir");
        fs::create_dir_all(temp_dir.join("inner")).unwrap();
        File::create(temp_dir.join("a.txt")).unwrap();
        File::create(temp_dir.join("inner").join("b.txt")).unwrap();

        let result = list_files(&temp_dir, DEFAULT_MAX_FILES).unwrap();
        assert_eq!(result.len(), 1);
        assert!(result[0].ends_with("a.txt"));

        fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_list_files_caps_at_limit() {
        let temp_dir = std::env::temp_dir().join("renamer-test-cap");
        fs::create_dir_all(&temp_dir).unwrap();
        for i in 0..150 {
            File::create(temp_dir.join(format!("file_{:03}.dat", i))).unwrap();
        }

        let result = list_files(&temp_dir, 100).unwrap();
        assert_eq!(result.len(), 100);

        fs::remove_dir_all(&temp_dir).ok();
    }
}
