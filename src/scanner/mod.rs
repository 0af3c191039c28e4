use crate::error::{ResumeAiError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ResumeInfo {
    pub path: PathBuf,
    pub file_name: String,
}

const RESUME_EXTENSIONS: &[&str] = &["pdf", "PDF"];

pub fn scan_folder(folder: &Path) -> Result<Vec<ResumeInfo>> {
    if !folder.exists() {
        return Err(ResumeAiError::FolderNotFound(folder.display().to_string()));
    }

    let mut resumes = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy();
            if RESUME_EXTENSIONS.iter().any(|&e| e == ext_str) {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();

                resumes.push(ResumeInfo {
                    path: path.to_path_buf(),
                    file_name,
                });
            }
        }
    }

    // ファイル名でソート
    resumes.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(resumes)
}

/// Check if a file extension is a supported resume format
#[cfg(test)]
fn is_resume_extension(ext: &str) -> bool {
    RESUME_EXTENSIONS.contains(&ext)
}
