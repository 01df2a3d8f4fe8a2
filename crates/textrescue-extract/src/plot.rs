//! Plot transition detection: sentences opening with a transition marker.

/// Sentence prefixes treated as plot transitions. Case-sensitive.
pub const PLOT_MARKERS: &[&str] = &["Suddenly,", "Then,", "Later,", "Meanwhile,"];

/// Split text after `.`, `?` or `!` when followed by whitespace.
///
/// The punctuation stays with its sentence and the whitespace run between
/// sentences is dropped. Sentences are otherwise verbatim, so leading
/// whitespace on the first one survives and trailing whitespace after the
/// last terminator yields an empty final sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '?' | '!') {
            continue;
        }
        let end = i + c.len_utf8();
        if !chars.peek().map_or(false, |&(_, n)| is_sentence_gap(n)) {
            continue;
        }
        sentences.push(&text[start..end]);
        start = text.len();
        while let Some(&(j, n)) = chars.peek() {
            if is_sentence_gap(n) {
                chars.next();
            } else {
                start = j;
                break;
            }
        }
    }
    sentences.push(&text[start..]);
    sentences
}

/// Whitespace that separates sentences: Unicode White_Space without NEL,
/// plus the byte order mark.
fn is_sentence_gap(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}'
}

/// Whether a sentence opens with one of [`PLOT_MARKERS`].
pub fn is_plot_sentence(sentence: &str) -> bool {
    PLOT_MARKERS.iter().any(|m| sentence.starts_with(m))
}

/// Plot sentences in text order.
pub fn find_plot_sentences(text: &str) -> Vec<&str> {
    split_sentences(text)
        .into_iter()
        .filter(|s| is_plot_sentence(s))
        .collect()
}
