//! FAQ Resolver - 다단계 응답 파이프라인
//!
//! 퍼지 → 키워드 → 인텐트 → 기본 응답 순서로 시도하며, 먼저 성공한 단계가
//! 최종 응답을 만듭니다. 입력 문자열이 무엇이든 실패하지 않습니다.
//!
//! 저장소는 불변이므로 하나의 resolver를 여러 스레드에서 잠금 없이
//! 동시에 사용할 수 있습니다.

use std::sync::Arc;

use serde::Serialize;

use super::fuzzy::{FuzzyMatcher, DEFAULT_THRESHOLD, DEFAULT_TOP_K};
use super::intent::{Intent, IntentClassifier};
use super::keyword::KeywordMatcher;
use super::store::{KnowledgeBase, MatchResult, Strategy};

// ============================================================================
// Canned Responses
// ============================================================================

/// 지원 주제 안내 (모든 단계 실패 시)
pub const DEFAULT_REPLY: &str = "Soy tu asistente de AdoptaFácil 🐾. Puedes preguntarme sobre \
registro, publicación de mascotas, proceso de adopción, comunidad, productos o donaciones.";

const GREETING_REPLY: &str = "¡Hola! ¿En qué puedo ayudarte hoy?";
const THANKS_REPLY: &str =
    "¡Con gusto! Si tienes más preguntas sobre adopción, aquí estoy para ayudarte. 🐾";
const FAREWELL_REPLY: &str =
    "¡Hasta pronto! Gracias por apoyar la adopción responsable. 🐾";

/// 인텐트별 고정 응답
pub fn canned_reply(intent: Intent) -> &'static str {
    match intent {
        Intent::Greeting => GREETING_REPLY,
        Intent::Thanks => THANKS_REPLY,
        Intent::Farewell => FAREWELL_REPLY,
    }
}

// ============================================================================
// Types
// ============================================================================

/// Resolver 설정
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// 퍼지 매칭 최소 유사도 (0.0 ~ 100.0)
    pub fuzzy_threshold: f64,
    /// 추천 질문 개수
    pub top_k: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_THRESHOLD,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl ResolverConfig {
    /// 오답을 줄이는 엄격한 설정
    pub fn strict() -> Self {
        Self {
            fuzzy_threshold: 70.0,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// 짧거나 오타가 많은 입력용 느슨한 설정
    pub fn lenient() -> Self {
        Self {
            fuzzy_threshold: 35.0,
            top_k: 5,
        }
    }
}

/// 최종 응답
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerResult {
    /// 사용자에게 보여줄 응답 텍스트
    pub text: String,
    /// 응답을 만든 단계
    pub strategy: Strategy,
    /// 퍼지/완전 일치 스코어 (키워드, 인텐트, 기본 응답은 없음)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// 인텐트 단계에서 감지된 인텐트
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    /// 매칭된 FAQ 질문
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_question: Option<String>,
}

impl AnswerResult {
    fn from_match(result: &MatchResult<'_>) -> Self {
        Self {
            text: result.entry.answer.clone(),
            strategy: result.strategy,
            score: Some(result.score),
            intent: None,
            matched_question: Some(result.entry.question.clone()),
        }
    }

    fn fallback() -> Self {
        Self {
            text: DEFAULT_REPLY.to_string(),
            strategy: Strategy::Default,
            score: None,
            intent: None,
            matched_question: None,
        }
    }
}

// ============================================================================
// FaqResolver
// ============================================================================

/// FAQ 응답 파이프라인
pub struct FaqResolver {
    kb: Arc<KnowledgeBase>,
    fuzzy: FuzzyMatcher,
    keyword: KeywordMatcher,
    intent: IntentClassifier,
    config: ResolverConfig,
}

impl FaqResolver {
    /// 기본 설정으로 생성
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self::with_config(kb, ResolverConfig::default())
    }

    /// 설정을 지정하여 생성
    ///
    /// # Arguments
    /// * `kb` - 공유 지식 저장소 (모든 매처에 주입)
    /// * `config` - 임계값 / top-K 설정
    pub fn with_config(kb: Arc<KnowledgeBase>, config: ResolverConfig) -> Self {
        Self {
            fuzzy: FuzzyMatcher::with_threshold(kb.clone(), config.fuzzy_threshold),
            keyword: KeywordMatcher::new(kb.clone()),
            intent: IntentClassifier::new(),
            kb,
            config,
        }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// 질문에 대한 최종 응답
    ///
    /// 1. 퍼지 매칭 (임계값 이상)
    /// 2. 키워드 매칭 (첫 번째 결과)
    /// 3. 인텐트 분류
    /// 4. 기본 안내 메시지
    pub fn resolve(&self, query: &str) -> AnswerResult {
        if let Some(result) = self.fuzzy.find_best_match(query) {
            tracing::debug!(
                "Resolved by fuzzy match: index={}, score={:.2}",
                result.index,
                result.score
            );
            return AnswerResult::from_match(&result);
        }

        if let Some((index, entry)) = self.keyword.first_match(query) {
            tracing::debug!("Resolved by keyword match: index={}", index);
            return AnswerResult {
                text: entry.answer.clone(),
                strategy: Strategy::Keyword,
                score: None,
                intent: None,
                matched_question: Some(entry.question.clone()),
            };
        }

        if let Some(intent) = self.intent.classify(query) {
            tracing::debug!("Resolved by intent: {}", intent.as_str());
            return AnswerResult {
                text: canned_reply(intent).to_string(),
                strategy: Strategy::Intent,
                score: None,
                intent: Some(intent),
                matched_question: None,
            };
        }

        tracing::debug!("No stage matched, using default reply");
        AnswerResult::fallback()
    }

    /// 완전 일치만 시도
    pub fn resolve_exact(&self, query: &str) -> Option<MatchResult<'_>> {
        self.kb
            .match_exact_indexed(query)
            .map(|(index, entry)| MatchResult {
                entry,
                index,
                score: 100.0,
                strategy: Strategy::Exact,
            })
    }

    /// 퍼지 상위 후보 (설정된 top-K)
    pub fn suggestions(&self, query: &str) -> Vec<MatchResult<'_>> {
        self.fuzzy.find_top_k(query, self.config.top_k)
    }

    /// 퍼지 상위 후보 (개수 지정)
    pub fn suggestions_with_limit(&self, query: &str, limit: usize) -> Vec<MatchResult<'_>> {
        self.fuzzy.find_top_k(query, limit)
    }

    /// 원시 유사도 스코어
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        self.fuzzy.similarity(a, b)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::store::FaqEntry;

    fn resolver() -> FaqResolver {
        FaqResolver::new(Arc::new(KnowledgeBase::load()))
    }

    const OVERVIEW_PREFIX: &str = "AdoptaFácil es una plataforma integral";

    #[test]
    fn test_exact_question_via_fuzzy() {
        let answer = resolver().resolve("¿Qué es AdoptaFácil?");
        assert_eq!(answer.strategy, Strategy::Fuzzy);
        assert_eq!(answer.score, Some(100.0));
        assert!(answer.text.starts_with(OVERVIEW_PREFIX));
        assert_eq!(answer.matched_question.as_deref(), Some("¿Qué es AdoptaFácil?"));
    }

    #[test]
    fn test_unaccented_lowercase_query() {
        let answer = resolver().resolve("que es adoptafacil");
        assert_eq!(answer.strategy, Strategy::Fuzzy);
        assert!(answer.score.unwrap_or_default() >= 50.0);
        assert!(answer.text.starts_with(OVERVIEW_PREFIX));
    }

    #[test]
    fn test_greeting_intent() {
        let answer = resolver().resolve("hola");
        assert_eq!(answer.strategy, Strategy::Intent);
        assert_eq!(answer.intent, Some(Intent::Greeting));
        assert_eq!(answer.text, canned_reply(Intent::Greeting));
        assert_eq!(answer.score, None);
    }

    #[test]
    fn test_thanks_and_farewell_intents() {
        let r = resolver();
        assert_eq!(r.resolve("muchas gracias").intent, Some(Intent::Thanks));
        assert_eq!(r.resolve("nos vemos").intent, Some(Intent::Farewell));
    }

    #[test]
    fn test_default_fallback() {
        let answer = resolver().resolve("xyzabc nonsense query");
        assert_eq!(answer.strategy, Strategy::Default);
        assert_eq!(answer.text, DEFAULT_REPLY);
        for topic in ["registro", "publicación de mascotas", "proceso de adopción", "comunidad", "productos", "donaciones"] {
            assert!(answer.text.contains(topic), "missing topic: {}", topic);
        }
    }

    #[test]
    fn test_keyword_stage() {
        let answer = resolver().resolve("vacunas");
        assert_eq!(answer.strategy, Strategy::Keyword);
        assert_eq!(answer.score, None);
        assert_eq!(
            answer.matched_question.as_deref(),
            Some("¿Las mascotas se entregan vacunadas?")
        );
    }

    #[test]
    fn test_empty_and_whitespace_fall_to_default() {
        let r = resolver();
        assert_eq!(r.resolve("").strategy, Strategy::Default);
        assert_eq!(r.resolve("   \t\n").strategy, Strategy::Default);
    }

    #[test]
    fn test_every_stored_question_resolves_to_itself() {
        let r = resolver();
        for entry in r.knowledge_base().entries() {
            let query = format!("  {}  ", entry.question.to_uppercase());
            let answer = r.resolve(&query);
            assert_eq!(answer.score, Some(100.0));
            // 동일 토큰 질문이 없으므로 항상 자기 자신
            assert_eq!(answer.text, entry.answer);
        }
    }

    #[test]
    fn test_deterministic() {
        let r = resolver();
        for query in ["requisitos", "hola", "¿cómo me registro?", "qwerty"] {
            assert_eq!(r.resolve(query), r.resolve(query));
        }
    }

    #[test]
    fn test_tie_break_in_pipeline() {
        let kb = Arc::new(KnowledgeBase::from_entries(vec![
            FaqEntry::new("perro gato", "primero", Vec::<String>::new()),
            FaqEntry::new("gato perro", "segundo", Vec::<String>::new()),
        ]));
        let answer = FaqResolver::new(kb).resolve("gato perro");
        assert_eq!(answer.text, "primero");
    }

    #[test]
    fn test_fuzzy_precedes_keyword() {
        let kb = Arc::new(KnowledgeBase::from_entries(vec![
            FaqEntry::new("tema keyword", "por keyword", ["precio"]),
            FaqEntry::new("precio del servicio", "por fuzzy", Vec::<String>::new()),
        ]));
        let answer = FaqResolver::new(kb).resolve("precio del servicio");
        assert_eq!(answer.strategy, Strategy::Fuzzy);
        assert_eq!(answer.text, "por fuzzy");
    }

    #[test]
    fn test_keyword_precedes_intent() {
        let kb = Arc::new(KnowledgeBase::from_entries(vec![FaqEntry::new(
            "una pregunta muy larga sin relación alguna",
            "por keyword",
            ["hola"],
        )]));
        let answer = FaqResolver::new(kb).resolve("hola");
        assert_eq!(answer.strategy, Strategy::Keyword);
    }

    #[test]
    fn test_resolve_exact() {
        let r = resolver();
        let result = r.resolve_exact("¿qué es adoptafácil?").unwrap();
        assert_eq!(result.strategy, Strategy::Exact);
        assert_eq!(result.score, 100.0);
        assert_eq!(result.index, 0);
        assert!(r.resolve_exact("que es adoptafacil").is_none());
    }

    #[test]
    fn test_suggestions_respect_config() {
        let r = FaqResolver::with_config(Arc::new(KnowledgeBase::load()), ResolverConfig::lenient());
        let suggestions = r.suggestions("como adoptar mascota");
        assert!(suggestions.len() <= 5);
        assert!(suggestions.iter().all(|s| s.score >= 35.0));
    }

    #[test]
    fn test_strict_threshold_skips_weak_fuzzy() {
        let r = FaqResolver::with_config(Arc::new(KnowledgeBase::load()), ResolverConfig::strict());
        // 기본 설정에서는 퍼지(≈52)로 잡히지만 엄격 설정에서는 키워드 단계로 내려감
        let answer = r.resolve("necesito información de vacunas para mi gato");
        assert_eq!(answer.strategy, Strategy::Keyword);
    }

    #[test]
    fn test_answer_json() {
        let answer = resolver().resolve("hola");
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json["strategy"], "INTENT");
        assert_eq!(json["intent"], "GREETING");
        assert!(json.get("score").is_none());
    }

    #[test]
    fn test_resolver_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FaqResolver>();
    }
}
