//! Knowledge Base - 불변 FAQ 저장소
//!
//! 프로세스 시작 시 정적 정의에서 한 번 구성되며 이후 변경되지 않습니다.
//! 모든 매처는 `Arc<KnowledgeBase>`를 주입받아 읽기 전용으로 공유합니다.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::faqs::FAQ_DEFINITIONS;

// ============================================================================
// Types
// ============================================================================

/// 정적 FAQ 정의 (컴파일 타임 데이터)
#[derive(Debug, Clone, Copy)]
pub(crate) struct FaqDef {
    pub question: &'static str,
    pub answer: &'static str,
    pub keywords: &'static [&'static str],
}

/// FAQ 엔트리
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// 질문 원문
    pub question: String,
    /// 답변
    pub answer: String,
    /// 키워드 (소문자, 비어 있을 수 있음)
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl FaqEntry {
    pub fn new<I, S>(question: impl Into<String>, answer: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            question: question.into(),
            answer: answer.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<&FaqDef> for FaqEntry {
    fn from(def: &FaqDef) -> Self {
        Self::new(def.question, def.answer, def.keywords.iter().copied())
    }
}

/// 응답을 만든 파이프라인 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Strategy {
    /// 정규화된 질문 완전 일치
    Exact,
    /// token-sort ratio 유사도
    Fuzzy,
    /// 키워드 부분 문자열 포함
    Keyword,
    /// 인사/감사/작별 인텐트
    Intent,
    /// 기본 안내 메시지
    Default,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Exact => "EXACT",
            Strategy::Fuzzy => "FUZZY",
            Strategy::Keyword => "KEYWORD",
            Strategy::Intent => "INTENT",
            Strategy::Default => "DEFAULT",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 매칭 결과 (쿼리 단위로 생성, 저장소를 빌림)
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    /// 매칭된 엔트리
    pub entry: &'a FaqEntry,
    /// 저장소 내 위치 (0-based)
    pub index: usize,
    /// 유사도 스코어 (0.0 ~ 100.0)
    pub score: f64,
    /// 매칭 전략
    pub strategy: Strategy,
}

/// 저장소 통계
#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeStats {
    pub entry_count: usize,
    pub keyword_count: usize,
    pub entries_without_keywords: usize,
    pub total_answer_bytes: usize,
}

// ============================================================================
// KnowledgeBase
// ============================================================================

/// FAQ 저장소
///
/// 순서가 고정된 엔트리 목록입니다. 앞쪽 엔트리가 동점 처리에서 우선하며,
/// 같은 질문이 여러 번 나오면 첫 번째가 항상 선택됩니다.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: Vec<FaqEntry>,
}

impl KnowledgeBase {
    /// 기본 AdoptaFácil FAQ 로드
    pub fn load() -> Self {
        let kb = Self::from_entries(FAQ_DEFINITIONS.iter().map(FaqEntry::from).collect());
        tracing::debug!("Knowledge base loaded: {} entries", kb.len());
        kb
    }

    /// 엔트리 목록으로 생성
    ///
    /// 질문이나 답변이 비어 있는 엔트리는 건너뛰고, 키워드는 소문자로 정규화합니다.
    /// 인덱스는 건너뛴 뒤의 저장 순서 기준이므로 입력 벡터의 위치와 다를 수 있습니다.
    /// 위치를 보존해야 하면 호출 측에서 먼저 걸러내야 합니다.
    ///
    /// # Arguments
    /// * `entries` - 저장 순서대로 정렬된 엔트리
    pub fn from_entries(entries: Vec<FaqEntry>) -> Self {
        let entries = entries
            .into_iter()
            .filter(|entry| {
                let valid = !entry.question.trim().is_empty() && !entry.answer.trim().is_empty();
                if !valid {
                    tracing::warn!("Skipping FAQ entry with empty question or answer");
                }
                valid
            })
            .map(|mut entry| {
                entry.keywords = entry
                    .keywords
                    .iter()
                    .map(|k| k.trim().to_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect();
                entry
            })
            .collect();

        Self { entries }
    }

    /// 전체 엔트리 (저장 순서)
    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    /// 인덱스로 엔트리 조회
    pub fn get(&self, index: usize) -> Option<&FaqEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 질문 목록 (엔트리 인덱스와 정렬됨)
    ///
    /// 질문 텍스트가 중복될 수 있으므로 매칭 결과는 텍스트가 아닌 위치로
    /// 원래 엔트리에 연결해야 합니다.
    pub fn questions(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.question.as_str()).collect()
    }

    /// 정규화된 질문 완전 일치 검색
    ///
    /// 공백 제거 + 소문자 변환 후 비교하며, 저장 순서상 첫 번째 일치를 반환합니다.
    pub fn match_exact(&self, query: &str) -> Option<&FaqEntry> {
        self.match_exact_indexed(query).map(|(_, entry)| entry)
    }

    /// 완전 일치 검색 (인덱스 포함)
    pub fn match_exact_indexed(&self, query: &str) -> Option<(usize, &FaqEntry)> {
        let normalized = normalize_question(query);
        self.entries
            .iter()
            .enumerate()
            .find(|(_, entry)| normalize_question(&entry.question) == normalized)
    }

    /// 저장소 통계
    pub fn stats(&self) -> KnowledgeStats {
        KnowledgeStats {
            entry_count: self.entries.len(),
            keyword_count: self.entries.iter().map(|e| e.keywords.len()).sum(),
            entries_without_keywords: self.entries.iter().filter(|e| e.keywords.is_empty()).count(),
            total_answer_bytes: self.entries.iter().map(|e| e.answer.len()).sum(),
        }
    }
}

/// 질문 정규화 (trim + 소문자)
pub fn normalize_question(text: &str) -> String {
    text.trim().to_lowercase()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_kb() -> KnowledgeBase {
        KnowledgeBase::from_entries(vec![
            FaqEntry::new("¿Qué es esto?", "Primera respuesta", ["Esto", "que es"]),
            FaqEntry::new("¿Cómo funciona?", "Segunda respuesta", Vec::<String>::new()),
            FaqEntry::new("¿Qué es esto?", "Respuesta duplicada", ["duplicado"]),
        ])
    }

    #[test]
    fn test_load_default_faqs() {
        let kb = KnowledgeBase::load();
        assert_eq!(kb.len(), 76);
        assert_eq!(kb.entries()[0].question, "¿Qué es AdoptaFácil?");
        assert!(kb
            .entries()
            .iter()
            .all(|e| !e.question.is_empty() && !e.answer.is_empty()));
    }

    #[test]
    fn test_default_keywords_are_lowercase() {
        let kb = KnowledgeBase::load();
        for entry in kb.entries() {
            for keyword in &entry.keywords {
                assert_eq!(keyword, &keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn test_questions_index_aligned() {
        let kb = sample_kb();
        let questions = kb.questions();
        assert_eq!(questions.len(), kb.len());
        for (i, q) in questions.iter().enumerate() {
            assert_eq!(*q, kb.get(i).map(|e| e.question.as_str()).unwrap_or_default());
        }
    }

    #[test]
    fn test_keywords_normalized() {
        let kb = sample_kb();
        assert_eq!(kb.entries()[0].keywords, vec!["esto", "que es"]);
    }

    #[test]
    fn test_empty_entries_skipped() {
        let kb = KnowledgeBase::from_entries(vec![
            FaqEntry::new("  ", "respuesta", ["x"]),
            FaqEntry::new("pregunta", "", ["y"]),
            FaqEntry::new("pregunta", "respuesta", ["z"]),
        ]);
        assert_eq!(kb.len(), 1);
    }

    #[test]
    fn test_indices_follow_filtered_order() {
        let kb = KnowledgeBase::from_entries(vec![
            FaqEntry::new("a", "", Vec::<String>::new()),
            FaqEntry::new("b", "B", Vec::<String>::new()),
        ]);
        assert_eq!(kb.len(), 1);
        assert_eq!(kb.get(0).map(|e| e.question.as_str()), Some("b"));
        assert!(kb.get(1).is_none());
        assert_eq!(kb.match_exact_indexed("b").map(|(i, _)| i), Some(0));
    }

    #[test]
    fn test_match_exact_normalizes() {
        let kb = sample_kb();
        let entry = kb.match_exact("   ¿cómo FUNCIONA?  ");
        assert_eq!(entry.map(|e| e.answer.as_str()), Some("Segunda respuesta"));
        assert!(kb.match_exact("¿Cómo funciona").is_none());
        assert!(kb.match_exact("").is_none());
    }

    #[test]
    fn test_match_exact_first_duplicate_wins() {
        let kb = sample_kb();
        let (index, entry) = kb.match_exact_indexed("¿qué es esto?").unwrap();
        assert_eq!(index, 0);
        assert_eq!(entry.answer, "Primera respuesta");
    }

    #[test]
    fn test_stats() {
        let stats = sample_kb().stats();
        assert_eq!(stats.entry_count, 3);
        assert_eq!(stats.keyword_count, 3);
        assert_eq!(stats.entries_without_keywords, 1);
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::Fuzzy.to_string(), "FUZZY");
        assert_eq!(
            serde_json::to_string(&Strategy::Keyword).unwrap(),
            "\"KEYWORD\""
        );
    }
}
