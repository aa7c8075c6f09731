//! Rebuilding an expression's source spelling from its tokens.
//!
//! Tokens do not carry the whitespace between them, but their spans carry
//! line/column positions. Two tokens are written next to each other when the
//! first ends where the second starts, and separated by one space otherwise,
//! so `v[0]+v[1]` and `v[0] + v[1]` both come out as written, and a
//! multi-line expression is folded onto one line.
//!
//! Tokens without a location (zero-width spans, e.g. created by `quote!`)
//! fall back to punctuation spacing: a space between tokens unless the first
//! is joint punctuation, an opening delimiter, or a `.`.

use proc_macro2::{Delimiter, LineColumn, Span, TokenStream, TokenTree};

/// Source spelling of `tokens`, on a single line.
pub fn source_spelling(tokens: &TokenStream) -> String {
    let mut writer = SpellingWriter::default();
    writer.push_stream(tokens.clone());
    writer.text
}

/// Where the previous piece ended and whether the next one attaches to it.
#[derive(Clone, Copy)]
struct Boundary {
    end: Option<LineColumn>,
    glue: bool,
}

#[derive(Default)]
struct SpellingWriter {
    text: String,
    previous: Option<Boundary>,
}

impl SpellingWriter {
    fn push_stream(&mut self, tokens: TokenStream) {
        for tree in tokens {
            match tree {
                TokenTree::Group(group) => {
                    let (open, close) = match group.delimiter() {
                        Delimiter::Parenthesis => ("(", ")"),
                        Delimiter::Bracket => ("[", "]"),
                        Delimiter::Brace => ("{", "}"),
                        Delimiter::None => {
                            self.push_stream(group.stream());
                            continue;
                        }
                    };
                    self.push_piece(open, group.span_open(), false, true);
                    self.push_stream(group.stream());
                    self.push_piece(close, group.span_close(), true, false);
                }
                TokenTree::Punct(punct) => {
                    let ch = punct.as_char();
                    let joint = punct.spacing() == proc_macro2::Spacing::Joint;
                    let mut buffer = [0u8; 4];
                    self.push_piece(
                        ch.encode_utf8(&mut buffer),
                        punct.span(),
                        ch == '.',
                        joint || ch == '.',
                    );
                }
                TokenTree::Ident(ident) => {
                    self.push_piece(&ident.to_string(), ident.span(), false, false);
                }
                TokenTree::Literal(literal) => {
                    self.push_piece(&literal.to_string(), literal.span(), false, false);
                }
            }
        }
    }

    fn push_piece(&mut self, text: &str, span: Span, glue_before: bool, glue_after: bool) {
        let location = locate(span);

        if let Some(previous) = self.previous {
            let adjacent = match (previous.end, location) {
                (Some(end), Some((start, _))) => end == start,
                _ => previous.glue || glue_before,
            };
            if !adjacent {
                self.text.push(' ');
            }
        }

        self.text.push_str(text);
        self.previous = Some(Boundary {
            end: location.map(|(_, end)| end),
            glue: glue_after,
        });
    }
}

/// Start and end of a span, or `None` when the span has no real extent.
fn locate(span: Span) -> Option<(LineColumn, LineColumn)> {
    let start = span.start();
    let end = span.end();
    (start != end).then_some((start, end))
}
