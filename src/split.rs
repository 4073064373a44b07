//! # Message Splitting Module
//!
//! Splits a combined menu message into transport-safe chunks. Telegram
//! rejects messages over its length limit, so the combined message is cut
//! along line boundaries whenever possible; only a single line that is
//! itself over budget gets cut mid-line, preferring the nearest space.

/// Telegram's maximum message length.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Split `text` into ordered chunks of at most `max_len` characters.
///
/// A text already within budget comes back as a single untouched chunk.
/// Otherwise lines accumulate into chunks greedily; a line that would
/// push the current chunk over budget starts the next chunk. A line
/// longer than the whole budget is cut at the nearest preceding space, or
/// hard-cut when it has no spaces. Rejoining the chunks preserves every
/// line and word in order, modulo trailing whitespace per chunk.
pub fn split_message(text: &str, max_len: usize) -> Vec<String> {
    debug_assert!(max_len >= 1);
    if char_len(text) <= max_len {
        return vec![text.to_string()];
    }

    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for line in text.split('\n') {
        let line_len = char_len(line);
        let appended_len = if current.is_empty() {
            line_len
        } else {
            current_len + 1 + line_len
        };

        if appended_len <= max_len {
            if !current.is_empty() {
                current.push('\n');
                current_len += 1;
            }
            current.push_str(line);
            current_len += line_len;
            continue;
        }

        if !current.is_empty() {
            push_chunk(&mut chunks, &current);
            current.clear();
            current_len = 0;
        }

        if line_len <= max_len {
            current.push_str(line);
            current_len = line_len;
        } else {
            // Pathological single line over budget: cut it down on its own.
            let mut pieces = split_long_line(line, max_len);
            let last = pieces.pop();
            for piece in pieces {
                push_chunk(&mut chunks, &piece);
            }
            if let Some(last) = last {
                current_len = char_len(&last);
                current = last;
            }
        }
    }

    if !current.trim().is_empty() {
        push_chunk(&mut chunks, &current);
    }

    chunks
}

fn push_chunk(chunks: &mut Vec<String>, chunk: &str) {
    let trimmed = chunk.trim_end();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}

/// Cut one over-budget line into pieces of at most `max_len` characters,
/// breaking at the nearest space before the boundary when one exists.
fn split_long_line(line: &str, max_len: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut rest: Vec<char> = line.chars().collect();

    while rest.len() > max_len {
        let window = &rest[..max_len];
        let cut = window
            .iter()
            .rposition(|c| *c == ' ')
            .filter(|pos| *pos > 0)
            .unwrap_or(max_len);
        let piece: String = rest[..cut].iter().collect();
        pieces.push(piece);
        // Skip the space the cut landed on.
        let skip = if cut < max_len { cut + 1 } else { cut };
        rest.drain(..skip);
    }

    if !rest.is_empty() {
        pieces.push(rest.into_iter().collect());
    }
    pieces
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(split_message("Maanantai: keitto", 100), vec!["Maanantai: keitto"]);
    }

    #[test]
    fn test_exact_budget_is_one_chunk() {
        let text = "a".repeat(50);
        assert_eq!(split_message(&text, 50), vec![text]);
    }

    #[test]
    fn test_one_over_budget_splits() {
        let text = format!("{}\n{}", "a".repeat(30), "b".repeat(21));
        let chunks = split_message(&text, 51);
        assert!(chunks.len() >= 2);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 51);
        }
    }

    #[test]
    fn test_splits_on_line_boundaries() {
        let text = "first line\nsecond line\nthird line";
        let chunks = split_message(text, 24);
        assert_eq!(chunks, vec!["first line\nsecond line", "third line"]);
    }

    #[test]
    fn test_long_line_breaks_at_space() {
        let text = "Lohikeitto ja hernekeitto seka kasvislasagne ja makaronilaatikko";
        let chunks = split_message(text, 30);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 30);
        }
        assert_eq!(words(&chunks.join("\n")), words(text));
    }

    #[test]
    fn test_long_line_without_spaces_hard_cuts() {
        let text = "x".repeat(95);
        let chunks = split_message(&text, 30);
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks.iter().map(|c| c.chars().count()).sum::<usize>(), 95);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 30);
        }
    }

    #[test]
    fn test_round_trip_preserves_words() {
        let text = "🍽️ <b>Kahvila Epilä</b>\n\n<b>Maanantai:</b>\n• Hernekeitto (L)\n• Pannukakku\n\n<b>Tiistai:</b>\n• Kalakeitto (L, G)";
        for max_len in [10, 25, 60, 4096] {
            let chunks = split_message(text, max_len);
            assert_eq!(words(&chunks.join("\n")), words(text), "max_len {}", max_len);
            for chunk in &chunks {
                assert!(chunk.chars().count() <= max_len);
            }
        }
    }

    #[test]
    fn test_multibyte_text_respects_char_budget() {
        let text = "ääkkösiä ".repeat(40);
        let chunks = split_message(text.trim_end(), 25);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 25);
        }
        assert_eq!(words(&chunks.join("\n")), words(&text));
    }
}
