use serde::{Deserialize, Serialize};

/// 求人票キーワード
///
/// 表層形（表示用、最初に出現した形）と語幹（同値類キー）のペア。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub surface: String,
    pub stem: String,
}

/// 照合結果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    /// 履歴書ファイル名
    pub resume_file: String,
    /// マッチスコア（0〜100、小数2桁丸め）
    pub score: f64,
    /// 履歴書に含まれていたキーワード
    pub found: Vec<String>,
    /// 履歴書に含まれていなかったキーワード
    pub missing: Vec<String>,
}

impl MatchReport {
    /// "82.5%" 形式のスコア表記
    pub fn score_label(&self) -> String {
        format!("{}%", self.score)
    }

    /// 検出キーワードのカンマ結合（空なら "None"）
    pub fn found_joined(&self) -> String {
        join_or_none(&self.found)
    }

    /// 不足キーワードのカンマ結合（空なら "None"）
    pub fn missing_joined(&self) -> String {
        join_or_none(&self.missing)
    }
}

fn join_or_none(words: &[String]) -> String {
    if words.is_empty() {
        "None".to_string()
    } else {
        words.join(", ")
    }
}
