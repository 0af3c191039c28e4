use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-ai")]
#[command(about = "履歴書キーワードマッチ解析・結果台帳生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 履歴書PDFを求人票と照合してスコアを算出
    Analyze {
        /// 履歴書PDFのパス
        #[arg(required = true)]
        resume: PathBuf,

        /// 求人票テキスト（直接指定）
        #[arg(short, long)]
        jd: Option<String>,

        /// 求人票テキストファイル
        #[arg(short = 'f', long)]
        jd_file: Option<PathBuf>,

        /// 結果台帳Excelのパス（デフォルト: results.xlsx）
        #[arg(short, long)]
        store: Option<PathBuf>,

        /// 照合結果をJSONでも保存
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 結果台帳への保存をスキップ
        #[arg(long)]
        no_save: bool,
    },

    /// フォルダ内の履歴書PDFを一括照合
    Batch {
        /// 履歴書フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 求人票テキストファイル
        #[arg(short = 'f', long)]
        jd_file: PathBuf,

        /// 結果台帳Excelのパス（デフォルト: results.xlsx）
        #[arg(short, long)]
        store: Option<PathBuf>,
    },

    /// 結果台帳の履歴を表示
    History {
        /// 結果台帳Excelのパス（デフォルト: results.xlsx）
        #[arg(short, long)]
        store: Option<PathBuf>,

        /// 表示件数（新しい順）
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// 設定を表示/編集
    Config {
        /// 結果台帳のパスを設定
        #[arg(long)]
        set_store: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
