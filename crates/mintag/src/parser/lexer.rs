//! Scanner for tag markup.
//!
//! A single left-to-right pass with one character of lookahead turns the
//! input into a flat token stream; a second pass splits each tag token's
//! interior into name and argument child tokens. No tree is built here.
//!
//! Malformed tag-like spans never fail: an unterminated `<` rewinds and the
//! span is scanned again as plain text.

use crate::syntax::Syntax;

/// A half-open byte range into the source string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// The length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether this span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// The text this span covers.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// The kind of a scanned token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Plain text.
    Text,
    /// An opening tag: `<name:arg>`.
    OpenTag,
    /// A closing tag: `</name>`.
    CloseTag,
    /// A self-closing tag: `<name/>`.
    OpenCloseTag,
    /// A name or argument span inside a tag token (second pass only).
    TagPart,
}

impl TokenKind {
    /// Whether this token is one of the tag kinds.
    pub fn is_tag(&self) -> bool {
        matches!(
            self,
            TokenKind::OpenTag | TokenKind::CloseTag | TokenKind::OpenCloseTag
        )
    }
}

/// A token produced by the scanner.
///
/// Tag tokens carry child tokens for their interior: the tag name first,
/// then one child per argument. When children are present they are never
/// empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    span: Span,
    kind: TokenKind,
    children: Vec<Token>,
}

impl Token {
    pub(crate) fn new(start: usize, end: usize, kind: TokenKind) -> Self {
        Token {
            span: Span::new(start, end),
            kind,
            children: Vec::new(),
        }
    }

    /// The source range this token covers.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The kind of this token.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The child tokens (name and argument parts for tag tokens).
    pub fn children(&self) -> &[Token] {
        &self.children
    }

    /// The text of this token within the source it was scanned from.
    pub fn value<'a>(&self, source: &'a str) -> &'a str {
        self.span.slice(source)
    }
}

#[derive(Clone, Copy)]
enum ScanState {
    Normal,
    /// Inside `<...`; `marker` indexes the `tag_start` char in `chars`.
    Tag { marker: usize },
    /// Inside a quoted argument; returns to `Tag` when `quote` recurs.
    Str { marker: usize, quote: char },
}

/// First pass: scans `message` and reports every matched region, in order,
/// to `consumer` as `(start, end, kind)` byte ranges. The regions cover the
/// whole input.
pub(crate) fn scan<F: FnMut(usize, usize, TokenKind)>(
    message: &str,
    syntax: &Syntax,
    mut consumer: F,
) {
    let chars: Vec<(usize, char)> = message.char_indices().collect();
    let mut state = ScanState::Normal;
    let mut escaped = false;
    // End of the last emitted token, and whether anything was emitted.
    let mut current_token_end = 0usize;
    let mut emitted = false;

    let mut i = 0;
    while i < chars.len() {
        let (pos, c) = chars[i];

        'body: {
            if escaped {
                escaped = false;
                break 'body;
            }

            // One character of lookahead decides whether an escape counts.
            if c == syntax.escape && i + 1 < chars.len() {
                let next = chars[i + 1].1;
                escaped = match state {
                    ScanState::Normal => next == syntax.tag_start || next == syntax.escape,
                    ScanState::Str { quote, .. } => next == quote || next == syntax.escape,
                    ScanState::Tag { .. } => {
                        // Escapes are not valid in tag names; an escaped
                        // tag-start means this was never a tag.
                        if next == syntax.tag_start {
                            state = ScanState::Normal;
                            true
                        } else {
                            false
                        }
                    }
                };
                if escaped {
                    break 'body;
                }
            }

            match state {
                ScanState::Normal => {
                    if c == syntax.tag_start {
                        state = ScanState::Tag { marker: i };
                    }
                }
                ScanState::Tag { marker } => {
                    if c == syntax.tag_end {
                        if i == marker + 1 {
                            // `<>` is empty, not a tag.
                            state = ScanState::Normal;
                            break 'body;
                        }

                        let tag_start_byte = chars[marker].0;
                        let end_byte = pos + c.len_utf8();
                        if current_token_end != tag_start_byte {
                            // Anything not matched up to this point is text.
                            consumer(current_token_end, tag_start_byte, TokenKind::Text);
                        }
                        current_token_end = end_byte;
                        emitted = true;

                        let kind = if chars[marker + 1].1 == syntax.close {
                            TokenKind::CloseTag
                        } else if i > marker + 1 && chars[i - 1].1 == syntax.close {
                            TokenKind::OpenCloseTag
                        } else {
                            TokenKind::OpenTag
                        };
                        consumer(tag_start_byte, end_byte, kind);
                        state = ScanState::Normal;
                    } else if c == syntax.tag_start {
                        // Not a tag after all, but a new one may start here.
                        state = ScanState::Tag { marker: i };
                    } else if syntax.is_quote(c) {
                        // Only enter the quote if it is ever closed.
                        if message[pos + c.len_utf8()..].contains(c) {
                            state = ScanState::Str { marker, quote: c };
                        }
                    }
                }
                ScanState::Str { marker, quote } => {
                    if c == quote {
                        state = ScanState::Tag { marker };
                    }
                }
            }

            if i == chars.len() - 1 {
                if let ScanState::Tag { marker } = state {
                    // End of input with an unmatched `<`: rewind to just
                    // after it and scan the rest as plain text. Quoted
                    // interiors may still contain tags of their own.
                    i = marker;
                    state = ScanState::Normal;
                }
            }
        }

        i += 1;
    }

    // Anything left over is plain text.
    if !emitted {
        consumer(0, message.len(), TokenKind::Text);
    } else if current_token_end != message.len() {
        consumer(current_token_end, message.len(), TokenKind::Text);
    }
}

/// Tokenize a markup string: first pass plus the per-tag second pass that
/// identifies name and argument parts.
pub fn tokenize(message: &str, syntax: &Syntax) -> Vec<Token> {
    let mut tokens = Vec::new();
    scan(message, syntax, |start, end, kind| {
        tokens.push(Token::new(start, end, kind));
    });
    for token in &mut tokens {
        split_parts(message, syntax, token);
    }
    tokens
}

/// Second pass over one tag token: splits the interior into `TagPart`
/// children on unescaped, unquoted separators. A separator directly
/// followed by `//` does not split, so unquoted URLs survive whole.
fn split_parts(message: &str, syntax: &Syntax, token: &mut Token) {
    let (inner_start, inner_end) = match token.kind {
        TokenKind::OpenTag => (
            token.span.start + syntax.tag_start.len_utf8(),
            token.span.end - syntax.tag_end.len_utf8(),
        ),
        TokenKind::CloseTag => (
            token.span.start + syntax.tag_start.len_utf8() + syntax.close.len_utf8(),
            token.span.end - syntax.tag_end.len_utf8(),
        ),
        TokenKind::OpenCloseTag => (
            token.span.start + syntax.tag_start.len_utf8(),
            token.span.end - syntax.tag_end.len_utf8() - syntax.close.len_utf8(),
        ),
        _ => return,
    };

    let mut escaped = false;
    let mut in_string: Option<char> = None;
    let mut marker = inner_start;

    for (offset, c) in message[inner_start..inner_end].char_indices() {
        let pos = inner_start + offset;

        if escaped {
            escaped = false;
            continue;
        }

        if c == syntax.escape {
            if let Some(next) = message[pos + c.len_utf8()..].chars().next() {
                escaped = match in_string {
                    None => next == syntax.tag_start || next == syntax.escape,
                    Some(quote) => next == quote || next == syntax.escape,
                };
                if escaped {
                    continue;
                }
            }
        }

        match in_string {
            None => {
                if c == syntax.separator {
                    if is_url_continuation(message, pos + c.len_utf8()) {
                        // `://` stays inside the current part.
                        continue;
                    }
                    if marker == pos {
                        // Separators side by side produce empty parts.
                        token.children.push(Token::new(pos, pos, TokenKind::TagPart));
                    } else {
                        token
                            .children
                            .push(Token::new(marker, pos, TokenKind::TagPart));
                    }
                    marker = pos + c.len_utf8();
                } else if syntax.is_quote(c) {
                    in_string = Some(c);
                }
            }
            Some(quote) => {
                if c == quote {
                    in_string = None;
                }
            }
        }
    }

    // Anything not matched is the final part, which also guarantees that a
    // tag token always has at least a name child.
    token
        .children
        .push(Token::new(marker, inner_end, TokenKind::TagPart));
}

/// Whether the text at `pos` begins with `//`.
fn is_url_continuation(message: &str, pos: usize) -> bool {
    message.as_bytes().get(pos) == Some(&b'/') && message.as_bytes().get(pos + 1) == Some(&b'/')
}
