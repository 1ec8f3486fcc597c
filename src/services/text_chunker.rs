//! Splits readable text into bounded-length chunks for the speech engine.
//!
//! Sentences are accumulated greedily while the chunk stays within the limit.
//! A sentence longer than the limit is split on word boundaries; a single word
//! longer than the limit is split on character boundaries. Lengths are counted
//! in characters, not bytes.

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Splits one block of text into sentences, keeping terminal punctuation.
///
/// A sentence ends at `.`, `!`, `?` or `…` (plus any closing quotes or
/// brackets) followed by whitespace or the end of the text.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if !matches!(c, '.' | '!' | '?' | '…') {
            continue;
        }
        while let Some(&next) = chars.peek() {
            if matches!(next, '.' | '!' | '?' | '…' | '"' | '\'' | ')' | ']' | '»' | '”') {
                current.push(next);
                chars.next();
            } else {
                break;
            }
        }
        if chars.peek().map_or(true, |next| next.is_whitespace()) {
            let sentence = current.split_whitespace().collect::<Vec<_>>().join(" ");
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            current.clear();
        }
    }

    let sentence = current.split_whitespace().collect::<Vec<_>>().join(" ");
    if !sentence.is_empty() {
        sentences.push(sentence);
    }
    sentences
}

/// Hard-splits an over-long sentence on word boundaries.
fn split_words(sentence: &str, max_chars: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();

    for word in sentence.split_whitespace() {
        if char_len(word) > max_chars {
            if !current.is_empty() {
                pieces.push(std::mem::take(&mut current));
            }
            let chars: Vec<char> = word.chars().collect();
            for slice in chars.chunks(max_chars) {
                pieces.push(slice.iter().collect());
            }
            continue;
        }
        if current.is_empty() {
            current.push_str(word);
        } else if char_len(&current) + 1 + char_len(word) <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            pieces.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Chunks a sequence of readable blocks. Block ends are sentence ends.
///
/// Every returned chunk is non-empty and at most `max_chars` characters long.
pub fn chunk_blocks<S: AsRef<str>>(blocks: &[S], max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();

    for sentence in blocks.iter().flat_map(|b| split_sentences(b.as_ref())) {
        let len = char_len(&sentence);
        if len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            chunks.extend(split_words(&sentence, max_chars));
            continue;
        }
        if current.is_empty() {
            current = sentence;
        } else if char_len(&current) + 1 + len <= max_chars {
            current.push(' ');
            current.push_str(&sentence);
        } else {
            chunks.push(std::mem::replace(&mut current, sentence));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Chunks a single text.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    chunk_blocks(&[text], max_chars)
}
