//! Phonetic signal: surface similarity of sound-alike renderings.
//!
//! Catches near-homophones written with different characters ("淅湖" vs
//! "西湖") that neither the surface nor the token signal would connect.

use std::sync::Arc;

use canonical::CapabilityError;
use tracing::warn;

use crate::surface::JaroWinkler;

/// Renders text as a phonetic/transliterated string.
///
/// Implementations must be deterministic within a process and total.
pub trait PhoneticTranscriber: Send + Sync {
    fn to_phonetic(&self, text: &str) -> Result<String, CapabilityError>;
}

/// Returns the text unchanged; the phonetic signal then mirrors the surface one.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimPhonetic;

impl PhoneticTranscriber for VerbatimPhonetic {
    fn to_phonetic(&self, text: &str) -> Result<String, CapabilityError> {
        Ok(text.to_string())
    }
}

/// Han characters to toneless pinyin, one space between syllables.
/// Characters without a reading (Latin, digits, ...) are kept verbatim.
///
/// ```text
/// "西湖"     → "xi hu"
/// "西湖1号" → "xi hu 1 hao"
/// ```
#[cfg(feature = "pinyin")]
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinTranscriber;

#[cfg(feature = "pinyin")]
impl PhoneticTranscriber for PinyinTranscriber {
    fn to_phonetic(&self, text: &str) -> Result<String, CapabilityError> {
        use pinyin::ToPinyin;

        let mut out = String::with_capacity(text.len() * 2);
        let mut after_syllable = false;
        for ch in text.chars() {
            match ch.to_pinyin() {
                Some(syllable) => {
                    if !out.is_empty() && !out.ends_with(' ') {
                        out.push(' ');
                    }
                    out.push_str(syllable.plain());
                    after_syllable = true;
                }
                None => {
                    if after_syllable && !ch.is_whitespace() {
                        out.push(' ');
                    }
                    out.push(ch);
                    after_syllable = false;
                }
            }
        }
        Ok(out)
    }
}

/// Pinyin when the `pinyin` feature is enabled, verbatim otherwise.
pub fn default_transcriber() -> Arc<dyn PhoneticTranscriber> {
    #[cfg(feature = "pinyin")]
    {
        Arc::new(PinyinTranscriber)
    }
    #[cfg(not(feature = "pinyin"))]
    {
        Arc::new(VerbatimPhonetic)
    }
}

/// Surface similarity of the two phonetic renderings.
///
/// A failing transcriber degrades to the clean name itself.
pub fn phonetic_score(
    a: &str,
    b: &str,
    transcriber: &dyn PhoneticTranscriber,
    surface: &JaroWinkler,
) -> f64 {
    let pa = transcribe(a, transcriber);
    let pb = transcribe(b, transcriber);
    surface.similarity(&pa, &pb)
}

fn transcribe(text: &str, transcriber: &dyn PhoneticTranscriber) -> String {
    match transcriber.to_phonetic(text) {
        Ok(rendered) => rendered,
        Err(err) => {
            warn!(error = %err, "phonetic_transcription_failed");
            text.to_string()
        }
    }
}
