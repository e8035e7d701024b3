//! Rule tokenizer.
//!
//! Splits on whitespace, peels punctuation into separate tokens, and
//! splits English negative contractions so the negation marker surfaces
//! as its own token.

/// Characters treated as standalone punctuation tokens.
fn is_punct(c: char) -> bool {
    matches!(
        c,
        '.' | ',' | '!' | '?' | ';' | ':' | '"' | '(' | ')' | '[' | ']' | '{' | '}' | '¿' | '¡'
            | '«' | '»' | '…'
    )
}

/// Contractions with irregular stems.
static CONTRACTIONS: &[(&str, &[&str])] = &[
    ("can't", &["can", "n't"]),
    ("won't", &["will", "n't"]),
    ("shan't", &["shall", "n't"]),
    ("cannot", &["can", "not"]),
];

fn push_word(out: &mut Vec<String>, word: &str) {
    if word.is_empty() {
        return;
    }
    let lower = word.to_lowercase();
    if let Some((_, parts)) = CONTRACTIONS.iter().find(|(c, _)| *c == lower) {
        for part in *parts {
            out.push((*part).to_string());
        }
        return;
    }
    // Generic n't split: "don't" -> "do" + "n't".
    if lower.len() > 3 && lower.ends_with("n't") {
        let stem_len = word.len() - 3;
        out.push(word[..stem_len].to_string());
        out.push("n't".to_string());
        return;
    }
    out.push(word.to_string());
}

/// Tokenizes raw text into surface tokens.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let mut out = Vec::new();

    for chunk in text.split_whitespace() {
        let mut leading = Vec::new();
        let mut trailing = Vec::new();

        let mut rest = chunk;
        loop {
            let mut chars = rest.chars();
            match chars.next() {
                Some(c) if is_punct(c) => {
                    leading.push(c);
                    rest = &rest[c.len_utf8()..];
                }
                _ => break,
            }
        }
        loop {
            let mut chars = rest.chars();
            match chars.next_back() {
                Some(c) if is_punct(c) => {
                    trailing.push(c);
                    rest = &rest[..rest.len() - c.len_utf8()];
                }
                _ => break,
            }
        }

        for c in leading {
            out.push(c.to_string());
        }
        push_word(&mut out, rest);
        for c in trailing.into_iter().rev() {
            out.push(c.to_string());
        }
    }

    out
}

/// True if the whole token is punctuation.
#[must_use]
pub fn is_punct_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_punct)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(text: &str) -> Vec<String> {
        tokenize(text)
    }

    #[test]
    fn splits_terminal_punctuation() {
        assert_eq!(
            toks("The boy runs."),
            vec!["The", "boy", "runs", "."]
        );
    }

    #[test]
    fn splits_contractions() {
        assert_eq!(toks("don't stop"), vec!["do", "n't", "stop"]);
        assert_eq!(toks("He won't go."), vec!["He", "will", "n't", "go", "."]);
        assert_eq!(toks("I can't."), vec!["I", "can", "n't", "."]);
    }

    #[test]
    fn spanish_inverted_marks() {
        assert_eq!(toks("¿Corre el niño?"), vec!["¿", "Corre", "el", "niño", "?"]);
    }

    #[test]
    fn empty_input() {
        assert!(toks("").is_empty());
        assert!(toks("   ").is_empty());
    }

    #[test]
    fn bare_punctuation_cluster() {
        assert_eq!(toks("?!"), vec!["?", "!"]);
        assert!(is_punct_token("?"));
        assert!(!is_punct_token("boy"));
    }
}
