use super::{
    kinds::{BracketMatch, CodeSpan, Emphasis, Image, Link},
    types::TextSpan,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    #[error("unbalanced `{delimiter}` delimiter in {text:?}")]
    UnbalancedDelimiter {
        delimiter: &'static str,
        text: String,
    },
}

/// Parses one text run into an ordered list of [`TextSpan`]s.
///
/// Fails if any emphasis or code delimiter is left unmatched in the text that
/// reaches its pass.
pub fn parse_inline(text: &str) -> Result<Vec<TextSpan>, InlineError> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_spans_delimiter(spans, Emphasis::BOLD, TextSpan::Bold)?;
    let spans = split_spans_delimiter(spans, Emphasis::UNDERSCORE, TextSpan::Italic)?;
    let spans = split_spans_delimiter(spans, Emphasis::STAR, TextSpan::Italic)?;
    let spans = split_spans_delimiter(spans, CodeSpan::TICK, TextSpan::Code)?;
    let spans = split_spans_image(spans);
    Ok(split_spans_link(spans))
}

/// Splits every `Plain` span on `delimiter`.
///
/// Parts at even positions stay `Plain`, odd positions become `wrap(part)`.
/// Empty parts are kept so the alternation is preserved. Non-plain spans pass
/// through untouched.
pub fn split_spans_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &'static str,
    wrap: fn(String) -> TextSpan,
) -> Result<Vec<TextSpan>, InlineError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let text = match span {
            TextSpan::Plain(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };
        if text.matches(delimiter).count() % 2 != 0 {
            return Err(InlineError::UnbalancedDelimiter { delimiter, text });
        }
        out.extend(text.split(delimiter).enumerate().map(|(i, part)| {
            if i % 2 == 0 {
                TextSpan::plain(part)
            } else {
                wrap(part.to_string())
            }
        }));
    }
    Ok(out)
}

/// Pulls `![alt](url)` images out of every `Plain` span.
pub fn split_spans_image(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_bracket(spans, Image::find)
}

/// Pulls `[text](url)` links out of every `Plain` span.
pub fn split_spans_link(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_bracket(spans, Link::find)
}

/// Repeatedly takes the first match out of the remaining text of each plain
/// run. Text around a match is kept only if non-empty; a run without any
/// match is passed through as it was.
fn split_spans_bracket(
    spans: Vec<TextSpan>,
    find: fn(&str) -> Option<BracketMatch>,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let text = match span {
            TextSpan::Plain(text) if find(&text).is_some() => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let mut rest = text.as_str();
        while let Some(BracketMatch { range, span }) = find(rest) {
            if range.start > 0 {
                out.push(TextSpan::plain(&rest[..range.start]));
            }
            out.push(span);
            rest = &rest[range.end..];
        }
        if !rest.is_empty() {
            out.push(TextSpan::plain(rest));
        }
    }
    out
}
