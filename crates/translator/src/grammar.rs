use crate::tagger::{LexiconTagger, PosTag, Tagger};
use crate::tokenizer::{is_alphanumeric_token, tokenize};
use signbridge_models::SignLanguage;

/// Gloss `text` for `language` with the built-in tagger. Pure: nothing is
/// rendered or written.
pub fn sign_gloss(language: SignLanguage, text: &str) -> Vec<String> {
    match language {
        SignLanguage::Isl => isl_gloss(text, &LexiconTagger::new()),
        SignLanguage::Asl => asl_gloss(text),
    }
}

/// Tokenize, tag and reorder into ISL gloss.
pub fn isl_gloss(text: &str, tagger: &dyn Tagger) -> Vec<String> {
    let tagged = tagger.tag(&tokenize(text));
    to_isl_order(&tagged)
}

/// Reorder English (SVO) into ISL subject-object-verb order: pronouns, then
/// nouns, then verbs, then everything else. Order within a group is kept.
pub fn to_isl_order(tagged: &[(String, PosTag)]) -> Vec<String> {
    let mut subjects = Vec::new();
    let mut objects = Vec::new();
    let mut verbs = Vec::new();
    let mut others = Vec::new();

    for (token, tag) in tagged {
        let sign = token.to_uppercase();
        if tag.is_pronoun() {
            subjects.push(sign);
        } else if tag.is_noun() {
            objects.push(sign);
        } else if tag.is_verb() {
            verbs.push(sign);
        } else {
            others.push(sign);
        }
    }

    subjects
        .into_iter()
        .chain(objects)
        .chain(verbs)
        .chain(others)
        .collect()
}

/// ASL keeps English word order; whitespace-split words that are purely
/// alphanumeric are uppercased, anything carrying punctuation is dropped.
pub fn asl_gloss(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|word| is_alphanumeric_token(word))
        .map(str::to_uppercase)
        .collect()
}
