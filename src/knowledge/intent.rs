//! 인텐트 분류기 - 인사 / 감사 / 작별
//!
//! 고정 어휘 포함 여부만 확인합니다. 우선순위는 GREETING → THANKS → FAREWELL 입니다.
//! 인텐트별 응답 문구는 resolver가 소유합니다.

use serde::{Deserialize, Serialize};

/// 대화 인텐트
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Intent {
    Greeting,
    Thanks,
    Farewell,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "GREETING",
            Intent::Thanks => "THANKS",
            Intent::Farewell => "FAREWELL",
        }
    }
}

const GREETING_PHRASES: &[&str] = &[
    "hola",
    "buenas",
    "buenos días",
    "buenos dias",
    "saludos",
    "qué tal",
    "que tal",
];

const THANKS_PHRASES: &[&str] = &["gracias", "te agradezco", "agradecido", "agradecida"];

const FAREWELL_PHRASES: &[&str] = &[
    "adiós",
    "adios",
    "chao",
    "chau",
    "hasta luego",
    "hasta pronto",
    "nos vemos",
];

/// 평가 순서 고정
const INTENT_PHRASES: &[(Intent, &[&str])] = &[
    (Intent::Greeting, GREETING_PHRASES),
    (Intent::Thanks, THANKS_PHRASES),
    (Intent::Farewell, FAREWELL_PHRASES),
];

/// 인텐트 분류기
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// 쿼리 분류
    pub fn classify(&self, query: &str) -> Option<Intent> {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        INTENT_PHRASES
            .iter()
            .find(|(_, phrases)| phrases.iter().any(|p| normalized.contains(p)))
            .map(|(intent, _)| *intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_intent() {
        let c = IntentClassifier::new();
        assert_eq!(c.classify("hola"), Some(Intent::Greeting));
        assert_eq!(c.classify("  Buenos Días  "), Some(Intent::Greeting));
        assert_eq!(c.classify("muchas gracias"), Some(Intent::Thanks));
        assert_eq!(c.classify("Adiós, hasta luego"), Some(Intent::Farewell));
    }

    #[test]
    fn test_priority_order() {
        let c = IntentClassifier::new();
        // 인사 + 감사 → 인사 우선
        assert_eq!(c.classify("hola, gracias"), Some(Intent::Greeting));
        // 감사 + 작별 → 감사 우선
        assert_eq!(c.classify("gracias, chao"), Some(Intent::Thanks));
    }

    #[test]
    fn test_no_intent() {
        let c = IntentClassifier::new();
        assert_eq!(c.classify("xyzabc nonsense query"), None);
        assert_eq!(c.classify(""), None);
        assert_eq!(c.classify("   "), None);
    }
}
