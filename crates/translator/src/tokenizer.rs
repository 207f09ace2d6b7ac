//! Word tokenization in the Penn Treebank manner: punctuation becomes its own
//! token and contractions are split (`don't` -> `do` `n't`). Only purely
//! alphanumeric tokens survive [`tokenize`].

const SPLIT_PUNCT: &[char] = &[
    ';', '@', '#', '$', '%', '&', '!', '?', '"', '(', ')', '[', ']', '{', '}', '<', '>', '“',
    '”', '…',
];

/// Separators that stay inside numbers (`1,000`, `10:30`).
const NUMERIC_SEPARATORS: &[char] = &[',', ':'];

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '’'
}

/// Lowercase, split and keep alphanumeric tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    raw_tokens(&text.to_lowercase())
        .into_iter()
        .filter(|t| is_alphanumeric_token(t))
        .collect()
}

pub fn is_alphanumeric_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}

/// All tokens, punctuation included.
pub fn raw_tokens(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for word in text.split_whitespace() {
        let mut piece = String::new();
        let mut chars = word.chars().peekable();
        while let Some(c) = chars.next() {
            let splits = SPLIT_PUNCT.contains(&c)
                || (NUMERIC_SEPARATORS.contains(&c)
                    && !chars.peek().is_some_and(|next| next.is_ascii_digit()));
            if splits {
                flush_piece(&mut piece, &mut out);
                out.push(c.to_string());
            } else {
                piece.push(c);
            }
        }
        flush_piece(&mut piece, &mut out);
    }
    out
}

fn flush_piece(piece: &mut String, out: &mut Vec<String>) {
    if piece.is_empty() {
        return;
    }
    let word = std::mem::take(piece);

    // A sentence-final period is split off, inner ones (u.s., 3.5) stay
    let trailing_period = word
        .strip_suffix('.')
        .is_some_and(|stem| !stem.is_empty() && !stem.contains('.'));
    let word = if trailing_period {
        word[..word.len() - 1].to_string()
    } else {
        word
    };

    split_contraction(&word, out);
    if trailing_period {
        out.push(".".to_string());
    }
}

fn split_contraction(word: &str, out: &mut Vec<String>) {
    let trimmed = word.trim_matches(is_apostrophe);
    if trimmed.is_empty() {
        out.push(word.to_string());
        return;
    }
    if trimmed == "cannot" {
        out.push("can".to_string());
        out.push("not".to_string());
        return;
    }

    let normalized = trimmed.replace('’', "'");
    if let Some(stem) = normalized.strip_suffix("n't") {
        if !stem.is_empty() {
            out.push(stem.to_string());
            out.push("n't".to_string());
            return;
        }
    }
    match normalized.find('\'') {
        Some(pos) if pos > 0 => {
            out.push(normalized[..pos].to_string());
            out.push(normalized[pos..].to_string());
        }
        _ => out.push(normalized),
    }
}
