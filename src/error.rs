use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeAiError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("PDF読み込みエラー: {0}")]
    PdfParse(String),

    #[error("求人票テキストが空です。--jd / --jd-file で指定するか、プロンプトに貼り付けてください")]
    EmptyJobDescription,

    #[error("対話入力エラー: {0}")]
    Prompt(String),

    #[error("結果ファイルが他のプロセスで開かれています: {0}")]
    StoreLocked(String),

    #[error("Excel読み込みエラー: {0}")]
    ExcelRead(String),

    #[error("Excel生成エラー: {0}")]
    ExcelWrite(String),

    #[error("PDFが見つかりません: {0}")]
    NoResumesFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ResumeAiError>;
