use std::fmt;

/// Penn Treebank part-of-speech tags produced by the tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Cc,
    Cd,
    Dt,
    Ex,
    In,
    Jj,
    Md,
    Nn,
    Nns,
    Prp,
    PrpPossessive,
    Rb,
    To,
    Uh,
    Vb,
    Vbd,
    Vbg,
    Vbn,
    Vbp,
    Vbz,
    Wdt,
    Wp,
    Wrb,
}

impl PosTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Cc => "CC",
            PosTag::Cd => "CD",
            PosTag::Dt => "DT",
            PosTag::Ex => "EX",
            PosTag::In => "IN",
            PosTag::Jj => "JJ",
            PosTag::Md => "MD",
            PosTag::Nn => "NN",
            PosTag::Nns => "NNS",
            PosTag::Prp => "PRP",
            PosTag::PrpPossessive => "PRP$",
            PosTag::Rb => "RB",
            PosTag::To => "TO",
            PosTag::Uh => "UH",
            PosTag::Vb => "VB",
            PosTag::Vbd => "VBD",
            PosTag::Vbg => "VBG",
            PosTag::Vbn => "VBN",
            PosTag::Vbp => "VBP",
            PosTag::Vbz => "VBZ",
            PosTag::Wdt => "WDT",
            PosTag::Wp => "WP",
            PosTag::Wrb => "WRB",
        }
    }

    pub fn is_pronoun(&self) -> bool {
        self.as_str().starts_with("PRP")
    }

    pub fn is_noun(&self) -> bool {
        self.as_str().starts_with("NN")
    }

    pub fn is_verb(&self) -> bool {
        self.as_str().starts_with("VB")
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait Tagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Vec<(String, PosTag)>;
}

/// Closed-class lexicon plus suffix rules. Tokens are expected lowercase.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconTagger;

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself", "yourself",
    "himself", "herself", "itself", "ourselves", "yourselves", "themselves",
];
const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];
const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "every", "each", "all",
    "no", "both", "another", "either", "neither",
];
const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "from", "of", "off", "over", "under", "since",
    "until", "while", "because", "if", "than", "though", "although", "as", "near", "without",
    "within", "upon", "across", "behind", "beyond", "around", "towards", "toward", "per",
];
const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet", "so", "plus"];
const MODALS: &[&str] = &[
    "can", "could", "will", "would", "shall", "should", "may", "might", "must", "ca", "wo",
];
const ADVERBS: &[&str] = &[
    "not", "very", "also", "too", "now", "then", "here", "always", "never", "often", "soon",
    "again", "already", "just", "still", "quite", "really", "almost", "ever", "only", "away",
    "back", "together", "up", "down", "out", "later", "once", "sometimes",
];
const INTERJECTIONS: &[&str] = &["hello", "hi", "hey", "oh", "wow", "yes", "okay", "ok", "bye", "goodbye"];
const ADJECTIVES: &[&str] = &[
    "good", "bad", "big", "small", "happy", "sad", "new", "old", "hot", "cold", "beautiful",
    "hungry", "tired", "many", "much", "more", "most", "few", "little", "other", "same",
    "different", "important", "easy", "hard", "great", "nice", "young", "long", "short", "high",
    "low", "early", "late", "sick", "angry", "busy", "free", "ready", "sorry", "fine", "red",
    "blue", "green", "white", "black",
];
const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "twenty", "hundred", "thousand", "million",
];
const WH_PRONOUNS: &[&str] = &["who", "whom", "what"];
const WH_DETERMINERS: &[&str] = &["which", "whose"];
const WH_ADVERBS: &[&str] = &["when", "where", "why", "how"];

/// Words whose suffix would otherwise mislead the rules below.
const NOUN_EXCEPTIONS: &[&str] = &[
    "thing", "something", "nothing", "anything", "everything", "morning", "evening", "king",
    "ring", "spring", "string", "building", "wedding", "ceiling", "meeting", "bed", "seed",
    "speed", "family", "fly", "bus", "news", "class", "glass", "today", "tomorrow", "yesterday",
    "tonight", "home", "school", "water", "food", "name",
];

const BASE_VERBS: &[&str] = &[
    "go", "come", "eat", "drink", "see", "want", "like", "love", "need", "know", "think", "make",
    "take", "give", "get", "say", "tell", "ask", "work", "play", "read", "write", "run", "walk",
    "sleep", "live", "help", "learn", "teach", "speak", "talk", "sign", "understand", "buy",
    "sell", "open", "close", "call", "watch", "study", "meet", "feel", "find", "bring", "leave",
    "sit", "stand", "cook", "wash", "use", "try", "start", "stop", "wait", "visit", "swim",
    "sing", "dance", "listen", "hear", "look", "become", "please", "thank", "keep", "let", "put",
    "show", "move", "pay", "send", "build", "win", "lose", "fall", "cut", "drive", "fly",
];

const IRREGULAR_PAST: &[&str] = &[
    "went", "came", "ate", "drank", "saw", "made", "took", "gave", "got", "said", "told", "knew",
    "thought", "ran", "wrote", "bought", "sold", "felt", "found", "brought", "left", "sat",
    "stood", "met", "spoke", "taught", "slept", "became", "sang", "swam", "heard", "kept", "put",
    "showed", "paid", "sent", "built", "won", "lost", "fell", "drove", "flew",
];

const PARTICIPLES: &[&str] = &[
    "gone", "eaten", "seen", "done", "taken", "given", "written", "known", "spoken", "driven",
    "flown", "fallen",
];

impl LexiconTagger {
    pub fn new() -> Self {
        Self
    }

    pub fn tag_word(&self, word: &str) -> PosTag {
        if let Some(tag) = Self::closed_class(word) {
            return tag;
        }
        if word.chars().all(|c| c.is_ascii_digit()) || NUMBER_WORDS.contains(&word) {
            return PosTag::Cd;
        }
        if NOUN_EXCEPTIONS.contains(&word) {
            return if word.ends_with('s') && word.len() > 3 && !word.ends_with("ss") && word != "news" {
                PosTag::Nns
            } else {
                PosTag::Nn
            };
        }
        if ADJECTIVES.contains(&word) {
            return PosTag::Jj;
        }
        if let Some(tag) = Self::verb_form(word) {
            return tag;
        }
        if word.len() > 3 && word.ends_with("ly") {
            return PosTag::Rb;
        }
        if word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") {
            return PosTag::Nns;
        }
        PosTag::Nn
    }

    fn closed_class(word: &str) -> Option<PosTag> {
        let tag = if PRONOUNS.contains(&word) {
            PosTag::Prp
        } else if POSSESSIVES.contains(&word) {
            PosTag::PrpPossessive
        } else if DETERMINERS.contains(&word) {
            PosTag::Dt
        } else if word == "to" {
            PosTag::To
        } else if word == "there" {
            PosTag::Ex
        } else if PREPOSITIONS.contains(&word) {
            PosTag::In
        } else if CONJUNCTIONS.contains(&word) {
            PosTag::Cc
        } else if MODALS.contains(&word) {
            PosTag::Md
        } else if ADVERBS.contains(&word) {
            PosTag::Rb
        } else if INTERJECTIONS.contains(&word) {
            PosTag::Uh
        } else if WH_PRONOUNS.contains(&word) {
            PosTag::Wp
        } else if WH_DETERMINERS.contains(&word) {
            PosTag::Wdt
        } else if WH_ADVERBS.contains(&word) {
            PosTag::Wrb
        } else {
            return Self::auxiliary(word);
        };
        Some(tag)
    }

    fn auxiliary(word: &str) -> Option<PosTag> {
        let tag = match word {
            "be" => PosTag::Vb,
            "am" | "are" | "have" | "do" => PosTag::Vbp,
            "is" | "has" | "does" => PosTag::Vbz,
            "was" | "were" | "had" | "did" => PosTag::Vbd,
            "been" => PosTag::Vbn,
            "being" => PosTag::Vbg,
            _ => return None,
        };
        Some(tag)
    }

    fn verb_form(word: &str) -> Option<PosTag> {
        if BASE_VERBS.contains(&word) {
            return Some(PosTag::Vbp);
        }
        if IRREGULAR_PAST.contains(&word) {
            return Some(PosTag::Vbd);
        }
        if PARTICIPLES.contains(&word) {
            return Some(PosTag::Vbn);
        }
        let third_person = word
            .strip_suffix("es")
            .filter(|stem| BASE_VERBS.contains(stem))
            .or_else(|| word.strip_suffix('s').filter(|stem| BASE_VERBS.contains(stem)))
            .or_else(|| {
                word.strip_suffix("ies")
                    .map(|stem| format!("{stem}y"))
                    .filter(|stem| BASE_VERBS.contains(&stem.as_str()))
                    .map(|_| word)
            });
        if third_person.is_some() {
            return Some(PosTag::Vbz);
        }
        if word.len() > 4 && word.ends_with("ing") {
            return Some(PosTag::Vbg);
        }
        if word.len() > 4 && word.ends_with("ed") {
            return Some(PosTag::Vbd);
        }
        None
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Vec<(String, PosTag)> {
        tokens
            .iter()
            .map(|token| (token.clone(), self.tag_word(token)))
            .collect()
    }
}
