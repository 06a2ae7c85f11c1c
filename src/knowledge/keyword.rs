//! 키워드 매처 - 부분 문자열 포함 검색
//!
//! 엔트리의 키워드 중 하나라도 소문자 쿼리에 포함되면 결과에 넣습니다.
//! 여러 엔트리가 걸려도 순위를 매기지 않으며, 호출 측은 첫 결과만 사용합니다.

use std::sync::Arc;

use super::store::{FaqEntry, KnowledgeBase};

/// 키워드 매처
pub struct KeywordMatcher {
    kb: Arc<KnowledgeBase>,
}

impl KeywordMatcher {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }

    /// 키워드 검색 (저장 순서 유지)
    pub fn search(&self, query: &str) -> Vec<&FaqEntry> {
        let query = query.to_lowercase();
        self.kb
            .entries()
            .iter()
            .filter(|entry| matches_any(entry, &query))
            .collect()
    }

    /// 첫 번째 키워드 매칭 (인덱스 포함)
    pub fn first_match(&self, query: &str) -> Option<(usize, &FaqEntry)> {
        let query = query.to_lowercase();
        self.kb
            .entries()
            .iter()
            .enumerate()
            .find(|(_, entry)| matches_any(entry, &query))
    }
}

/// 빈 키워드는 어떤 문자열에도 포함되므로 제외
fn matches_any(entry: &FaqEntry, lowered_query: &str) -> bool {
    entry
        .keywords
        .iter()
        .any(|keyword| !keyword.is_empty() && lowered_query.contains(keyword.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> KeywordMatcher {
        KeywordMatcher::new(Arc::new(KnowledgeBase::from_entries(vec![
            FaqEntry::new("Costos", "cuesta poco", ["precio", "costo"]),
            FaqEntry::new("Sin keywords", "nada", Vec::<String>::new()),
            FaqEntry::new("Adopción", "proceso", ["adoptar", "costo adopción"]),
        ])))
    }

    #[test]
    fn test_search_case_insensitive() {
        let m = matcher();
        let results = m.search("¿Cuál es el PRECIO?");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].question, "Costos");
    }

    #[test]
    fn test_search_returns_store_order() {
        let m = matcher();
        let results = m.search("quiero adoptar, ¿qué costo adopción tiene?");
        let questions: Vec<&str> = results.iter().map(|e| e.question.as_str()).collect();
        assert_eq!(questions, vec!["Costos", "Adopción"]);
    }

    #[test]
    fn test_search_no_match() {
        let m = matcher();
        assert!(m.search("hola").is_empty());
        assert!(m.search("").is_empty());
        assert!(m.first_match("   ").is_none());
    }

    #[test]
    fn test_first_match_index() {
        let m = matcher();
        let (index, entry) = m.first_match("voy a adoptar").unwrap();
        assert_eq!(index, 2);
        assert_eq!(entry.answer, "proceso");
    }

    #[test]
    fn test_vacunas_in_default_faqs() {
        let m = KeywordMatcher::new(Arc::new(KnowledgeBase::load()));
        let (_, entry) = m.first_match("vacunas").unwrap();
        assert_eq!(entry.question, "¿Las mascotas se entregan vacunadas?");
    }
}
