//! 프롬프트 구성 및 응답 정리
//!
//! 반려동물 정보로 1인칭 입양 소개글 프롬프트를 만들고,
//! 생성된 텍스트의 불필요한 따옴표와 공백을 정리합니다.

use std::sync::OnceLock;

use regex::Regex;

use super::PetProfile;

/// 시스템 메시지 (작성자 페르소나)
pub const SYSTEM_PROMPT: &str = "Eres un redactor empático especializado en descripciones para \
fomentar la adopción de mascotas. Redactas textos emocionales, cálidos y persuasivos que conectan \
con las familias adoptantes.";

// ============================================================================
// Prompt
// ============================================================================

/// 입양 소개글 프롬프트 생성
pub fn build_prompt(pet: &PetProfile) -> String {
    let mut prompt = format!(
        "Crea una descripción emocional y persuasiva para una mascota en adopción con las \
         siguientes características:\n\n\
         📝 DATOS DE LA MASCOTA:\n\
         - Nombre: {}\n\
         - Especie: {}\n\
         - Raza: {}\n\
         - Sexo: {}\n\
         - Personalidad: {}\n\
         - Estado de salud: {}\n\
         - Observaciones especiales: {}",
        pet.name, pet.species, pet.breed, pet.sex, pet.personality, pet.health, pet.notes
    );

    // 기존 소개글이 있으면 개선 요청
    if let Some(current) = pet
        .current_description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
    {
        prompt.push_str(&format!(
            "\n- Descripción actual: \"{}\"\n\n\
             🎯 IMPORTANTE: Mejora y expande la descripción actual manteniendo las ideas principales.",
            current
        ));
    }

    prompt.push_str(&format!(
        "\n\n📋 INSTRUCCIONES:\n\
         1. Escribe en primera persona como si fuera la mascota\n\
         2. {}\n\
         3. MÁXIMO 80-100 palabras (descripción concisa)\n\
         4. Incluye 1-2 características principales\n\
         5. Tono cálido pero directo\n\
         6. Evita repeticiones innecesarias\n\
         7. Enfócate en lo especial para adopción\n\
         8. Termina con llamado simple a adopción\n\n\
         🎯 OBJETIVO: Generar conexión emocional para motivar la adopción de {}.",
        gender_hint(&pet.sex, &pet.species),
        pet.name
    ));

    prompt
}

/// 성별 + 종에 따른 1인칭 문체 지시
pub fn gender_hint(sex: &str, species: &str) -> String {
    let sex = sex.trim().to_lowercase();
    let species = species.trim().to_lowercase();

    match sex.as_str() {
        "macho" | "masculino" | "m" => {
            if species.contains("perro") {
                "Escribe como 'Soy un perro', 'soy cariñoso', etc.".to_string()
            } else if species.contains("gato") {
                "Escribe como 'Soy un gato', 'soy juguetón', etc.".to_string()
            } else {
                format!("Escribe como 'Soy un {}', usando género masculino.", species)
            }
        }
        "hembra" | "femenino" | "f" => {
            if species.contains("perro") || species.contains("perra") {
                "Escribe como 'Soy una perra', 'soy cariñosa', etc.".to_string()
            } else if species.contains("gato") || species.contains("gata") {
                "Escribe como 'Soy una gata', 'soy juguetona', etc.".to_string()
            } else {
                format!("Escribe como 'Soy una {}', usando género femenino.", species)
            }
        }
        _ => "Usa el género neutro o el que mejor se adapte al nombre.".to_string(),
    }
}

// ============================================================================
// Response Cleanup
// ============================================================================

/// 전체를 감쌀 때만 제거하는 따옴표 쌍 (여는, 닫는)
const WRAPPING_QUOTES: &[(&str, &str)] = &[
    ("\"", "\""),
    ("'", "'"),
    ("\u{201C}", "\u{201D}"),
    ("\u{2018}", "\u{2019}"),
    ("«", "»"),
];

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

/// 생성 텍스트 정리
///
/// - 텍스트 전체를 감싸는 따옴표 제거 (내부 같은 따옴표가 짝수 개일 때만)
/// - 빈 따옴표 쌍 제거
/// - 연속 공백을 하나로
pub fn clean_quotes(text: &str) -> String {
    let mut cleaned = text.trim().to_string();

    for (open, close) in WRAPPING_QUOTES {
        let wrapped = cleaned.len() >= open.len() + close.len()
            && cleaned.starts_with(open)
            && cleaned.ends_with(close);
        if !wrapped {
            continue;
        }

        let inner = cleaned[open.len()..cleaned.len() - close.len()].trim();
        // 내부에 같은 따옴표가 홀수 개면 본문 일부로 간주
        let inner_count = inner.matches(open).count()
            + if open == close { 0 } else { inner.matches(close).count() };
        if inner_count % 2 == 0 {
            cleaned = inner.to_string();
            break;
        }
    }

    for empty in ["\"\"", "''", "\u{201C}\u{201D}"] {
        cleaned = cleaned.replace(empty, "");
    }

    whitespace_re().replace_all(cleaned.trim(), " ").into_owned()
}

// ============================================================================
// Tests
// ============================================================================
