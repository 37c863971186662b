//! Greedy word wrapping against an external width oracle.

use crate::config::LineBreakOptions;
use safedoc_traits::MeasureError;
use safedoc_types::Px;
use unicode_segmentation::UnicodeSegmentation;

/// Breaks `text` into lines no wider than `max_width`.
///
/// Words are packed greedily, joined by a single space. A word that does not
/// fit on an empty line is split at grapheme boundaries into the longest
/// fitting fragments. A single grapheme wider than `max_width` is emitted on
/// its own line, so this always terminates.
///
/// Blank input yields no lines.
pub fn break_lines<F>(
    text: &str,
    max_width: Px,
    options: &LineBreakOptions,
    mut measure: F,
) -> Result<Vec<String>, MeasureError>
where
    F: FnMut(&str) -> Result<Px, MeasureError>,
{
    let mut lines = Vec::new();
    if text.trim().is_empty() {
        return Ok(lines);
    }

    let segments: Vec<&str> = if options.preserve_newlines {
        text.split('\n').collect()
    } else {
        vec![text]
    };

    for segment in segments {
        let words: Vec<&str> = if options.collapse_whitespace {
            segment.split_whitespace().collect()
        } else {
            // Empty tokens stand for the extra spaces of a whitespace run.
            segment.split(char::is_whitespace).collect()
        };

        if words.iter().all(|w| w.is_empty()) {
            lines.push(String::new());
            continue;
        }
        wrap_words(&words, max_width, options, &mut measure, &mut lines)?;
    }

    // Blank segments at the edges would only add empty lines around the text.
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    let leading = lines.iter().take_while(|l| l.is_empty()).count();
    lines.drain(..leading);

    Ok(lines)
}

fn wrap_words<F>(
    words: &[&str],
    max_width: Px,
    options: &LineBreakOptions,
    measure: &mut F,
    lines: &mut Vec<String>,
) -> Result<(), MeasureError>
where
    F: FnMut(&str) -> Result<Px, MeasureError>,
{
    let mut current = String::new();

    for &word in words {
        if current.is_empty() {
            if word.is_empty() {
                continue;
            }
            current = start_line(word, max_width, options, measure, lines)?;
            continue;
        }

        let candidate = format!("{} {}", current, word);
        if measure(&candidate)? <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            if !word.is_empty() {
                current = start_line(word, max_width, options, measure, lines)?;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    Ok(())
}

/// Places `word` at the start of a fresh line. Full fragments of an
/// over-long word are pushed to `lines`; the returned remainder stays open
/// for following words.
fn start_line<F>(
    word: &str,
    max_width: Px,
    options: &LineBreakOptions,
    measure: &mut F,
    lines: &mut Vec<String>,
) -> Result<String, MeasureError>
where
    F: FnMut(&str) -> Result<Px, MeasureError>,
{
    if measure(word)? <= max_width {
        return Ok(word.to_string());
    }

    log::trace!("Breaking over-long word of {} bytes", word.len());
    let graphemes: Vec<&str> = word.graphemes(true).collect();
    let mut start = 0;

    while start < graphemes.len() {
        let rest = graphemes[start..].concat();
        if measure(&rest)? <= max_width {
            return Ok(rest);
        }

        let mut fragment = graphemes[start].to_string();
        let mut end = start + 1;
        while end < graphemes.len() {
            let mut candidate = fragment.clone();
            candidate.push_str(graphemes[end]);
            let probe = if options.hyphenate_long_words {
                format!("{}-", candidate)
            } else {
                candidate.clone()
            };
            if measure(&probe)? <= max_width {
                fragment = candidate;
                end += 1;
            } else {
                break;
            }
        }

        if options.hyphenate_long_words {
            let hyphenated = format!("{}-", fragment);
            if measure(&hyphenated)? <= max_width {
                fragment = hyphenated;
            }
        }
        lines.push(fragment);
        start = end;
    }

    Ok(String::new())
}
