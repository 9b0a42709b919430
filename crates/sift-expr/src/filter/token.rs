//! Tokenizer for filter expressions.
//!
//! Scanning never fails: structural problems (such as an unterminated
//! string literal) surface later as parse errors. Classification is by
//! spelling alone, case-insensitively; the parser decides whether a token
//! is in a valid position. Tokens preserve the input spelling for
//! diagnostics.

use std::fmt;

/// Classification of a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A property path such as `Age` or `Address.City`.
    Property,
    /// A comparison operator keyword (`eq`, `ne`, ..., `endswith`).
    Operator,
    /// A literal: quoted string, number, boolean, or `null`.
    Value,
    /// A logical keyword: `and`, `or`, `not`.
    Logical,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// End of input.
    End,
}

/// A classified lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The classification.
    pub kind: TokenKind,
    /// The lexeme as written (for quoted values: unquoted and unescaped).
    pub lexeme: String,
}

impl Token {
    fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::End => f.write_str("end of input"),
            _ => write!(f, "'{}'", self.lexeme),
        }
    }
}

/// Tokenize a filter input into its classified lexemes.
///
/// The returned sequence always ends with a single [`TokenKind::End`]
/// token.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut scanner = Scanner { input, pos: 0 };
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let done = token.kind == TokenKind::End;
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}

/// Cursor over the raw input. Positions only ever advance past ASCII
/// delimiters or whole words, so slicing stays on char boundaries.
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl Scanner<'_> {
    fn skip_whitespace(&mut self) {
        let bytes = self.input.as_bytes();
        while bytes.get(self.pos).is_some_and(u8::is_ascii_whitespace) {
            self.pos += 1;
        }
    }

    fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(&byte) = self.input.as_bytes().get(self.pos) else {
            return Token::new(TokenKind::End, "");
        };

        match byte {
            b'(' => {
                self.pos += 1;
                Token::new(TokenKind::LParen, "(")
            }
            b')' => {
                self.pos += 1;
                Token::new(TokenKind::RParen, ")")
            }
            b',' => {
                self.pos += 1;
                Token::new(TokenKind::Comma, ",")
            }
            quote @ (b'\'' | b'"') => self.read_quoted(quote),
            _ => self.read_word(),
        }
    }

    /// Read a quoted value. Fast path: no backslash before the closing
    /// quote, so the raw inner slice is the lexeme. Slow path: rescan with
    /// an escape-aware walker collapsing `\x` to `x` for any `x`. An
    /// unterminated literal yields what was read.
    fn read_quoted(&mut self, quote: u8) -> Token {
        self.pos += 1;
        let start = self.pos;
        let bytes = self.input.as_bytes();

        let mut i = start;
        let mut saw_escape = false;
        while i < bytes.len() && bytes[i] != quote {
            if bytes[i] == b'\\' {
                saw_escape = true;
                break;
            }
            i += 1;
        }

        if !saw_escape {
            let lexeme = &self.input[start..i];
            self.pos = if i < bytes.len() { i + 1 } else { i };
            return Token::new(TokenKind::Value, lexeme);
        }

        let mut lexeme = String::new();
        let mut consumed = self.input.len() - start;
        let mut chars = self.input[start..].char_indices();
        while let Some((offset, c)) = chars.next() {
            if c == char::from(quote) {
                consumed = offset + 1;
                break;
            }
            if c == '\\' {
                if let Some((_, escaped)) = chars.next() {
                    lexeme.push(escaped);
                }
                continue;
            }
            lexeme.push(c);
        }
        self.pos = start + consumed;
        Token::new(TokenKind::Value, lexeme)
    }

    /// Read a word: a run of non-whitespace, non-structural characters.
    fn read_word(&mut self) -> Token {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        while let Some(&byte) = bytes.get(self.pos) {
            if byte.is_ascii_whitespace() || matches!(byte, b'(' | b')' | b',') {
                break;
            }
            self.pos += 1;
        }
        let word = &self.input[start..self.pos];
        Token::new(classify_word(word), word)
    }
}

fn classify_word(word: &str) -> TokenKind {
    if is_one_of(word, &["and", "or", "not"]) {
        return TokenKind::Logical;
    }
    if is_one_of(
        word,
        &[
            "eq",
            "ne",
            "gt",
            "ge",
            "lt",
            "le",
            "contains",
            "startswith",
            "endswith",
        ],
    ) {
        return TokenKind::Operator;
    }
    if is_one_of(word, &["true", "false", "null"]) || word.parse::<f64>().is_ok() {
        return TokenKind::Value;
    }
    TokenKind::Property
}

fn is_one_of(word: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| word.eq_ignore_ascii_case(k))
}
