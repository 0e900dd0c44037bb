//! Lexer for the restricted Verilog subset.
//!
//! Turns source text into [`Token`]s: case-sensitive keywords, ordinary and
//! escaped identifiers, system identifiers, sized/based/real literals,
//! strings, and operators. Whitespace, comments, and compiler directive
//! lines are skipped. Because the signal rules never evaluate expressions,
//! all numeric literal flavors collapse into [`TokenKind::Number`] and most
//! operators into [`TokenKind::Op`]; only the tokens the parser dispatches
//! on keep dedicated kinds.

use vslint_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};
use vslint_source::{FileId, Span};

use crate::token::{lookup_keyword, Token, TokenKind};

/// Diagnostic code for lexer errors.
const E100: DiagnosticCode = DiagnosticCode::new(Category::Error, 100);

/// Lexes `source` into tokens, always terminated by [`TokenKind::Eof`].
///
/// Lexer errors go to `sink` and leave [`TokenKind::Error`] tokens in the
/// stream so the parser can recover past them.
pub fn lex(source: &str, file: FileId, sink: &DiagnosticSink) -> Vec<Token> {
    let mut lexer = Lexer {
        source: source.as_bytes(),
        pos: 0,
        file,
        sink,
    };
    lexer.run()
}

struct Lexer<'a> {
    source: &'a [u8],
    pos: usize,
    file: FileId,
    sink: &'a DiagnosticSink,
}

impl Lexer<'_> {
    fn run(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            self.skip_trivia();
            if self.at_end() {
                tokens.push(self.token(TokenKind::Eof, self.pos));
                return tokens;
            }
            let tok = self.next_token();
            tokens.push(tok);
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn peek(&self) -> u8 {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> u8 {
        *self.source.get(self.pos + offset).unwrap_or(&0)
    }

    fn bump(&mut self) -> u8 {
        let b = self.source[self.pos];
        self.pos += 1;
        b
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token {
        Token {
            kind,
            span: Span::new(self.file, start as u32, self.pos as u32),
        }
    }

    fn report(&self, msg: impl Into<String>, start: usize) {
        self.sink.emit(Diagnostic::error(
            E100,
            msg,
            Span::new(self.file, start as u32, self.pos as u32),
        ));
    }

    /// Skips whitespace, both comment forms, and compiler directive lines.
    ///
    /// Directives (`` `timescale``, `` `define``, ...) are ignored wholesale
    /// rather than rejected; preprocessing is out of scope and a directive
    /// line must not surface its arguments as signal references.
    fn skip_trivia(&mut self) {
        loop {
            while !self.at_end() && self.source[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            match (self.peek(), self.peek_at(1)) {
                (b'/', b'/') | (b'`', _) => {
                    while !self.at_end() && self.source[self.pos] != b'\n' {
                        self.pos += 1;
                    }
                }
                (b'/', b'*') => {
                    let start = self.pos;
                    self.pos += 2;
                    loop {
                        if self.at_end() {
                            self.report("unterminated block comment", start);
                            break;
                        }
                        if self.peek() == b'*' && self.peek_at(1) == b'/' {
                            self.pos += 2;
                            break;
                        }
                        self.pos += 1;
                    }
                }
                _ => return,
            }
        }
    }

    fn next_token(&mut self) -> Token {
        let start = self.pos;
        let b = self.peek();
        if is_ident_start(b) {
            return self.lex_word(start);
        }
        if b == b'\\' {
            return self.lex_escaped_identifier(start);
        }
        if b == b'$' {
            return self.lex_system_identifier(start);
        }
        if b.is_ascii_digit() {
            return self.lex_number(start);
        }
        if b == b'\'' && is_base_or_sign(self.peek_at(1)) {
            return self.lex_number(start);
        }
        if b == b'"' {
            return self.lex_string(start);
        }
        self.lex_punct(start)
    }

    fn lex_word(&mut self, start: usize) -> Token {
        while !self.at_end() && is_ident_char(self.source[self.pos]) {
            self.pos += 1;
        }
        let text = std::str::from_utf8(&self.source[start..self.pos]).unwrap_or("");
        let kind = lookup_keyword(text).unwrap_or(TokenKind::Identifier);
        self.token(kind, start)
    }

    /// An escaped identifier runs from `\` to the next whitespace.
    fn lex_escaped_identifier(&mut self, start: usize) -> Token {
        self.pos += 1;
        while !self.at_end() && !self.source[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if self.pos == start + 1 {
            self.report("empty escaped identifier", start);
            return self.token(TokenKind::Error, start);
        }
        self.token(TokenKind::Identifier, start)
    }

    fn lex_system_identifier(&mut self, start: usize) -> Token {
        self.pos += 1;
        if !is_ident_start(self.peek()) {
            self.report("expected identifier after '$'", start);
            return self.token(TokenKind::Error, start);
        }
        while !self.at_end() && is_ident_char(self.source[self.pos]) {
            self.pos += 1;
        }
        self.token(TokenKind::SystemIdent, start)
    }

    /// Lexes any numeric literal: plain decimal (`42`), sized or unsized
    /// based (`4'b1010`, `'hFF`, `8'sd3`), or real (`1.5`, `2e3`).
    fn lex_number(&mut self, start: usize) -> Token {
        self.eat_digits();
        if self.peek() == b'\'' && is_base_or_sign(self.peek_at(1)) {
            self.pos += 1;
            if self.peek().to_ascii_lowercase() == b's' {
                self.pos += 1;
            }
            if is_base_letter(self.peek()) {
                self.pos += 1;
            }
            // x/z/? digits and underscores are all legal in based values
            while !self.at_end() && is_based_digit(self.source[self.pos]) {
                self.pos += 1;
            }
            return self.token(TokenKind::Number, start);
        }
        if self.peek() == b'.' && self.peek_at(1).is_ascii_digit() {
            self.pos += 1;
            self.eat_digits();
        }
        if matches!(self.peek(), b'e' | b'E') {
            self.pos += 1;
            if matches!(self.peek(), b'+' | b'-') {
                self.pos += 1;
            }
            self.eat_digits();
        }
        self.token(TokenKind::Number, start)
    }

    fn eat_digits(&mut self) {
        while !self.at_end() && matches!(self.source[self.pos], b'0'..=b'9' | b'_') {
            self.pos += 1;
        }
    }

    fn lex_string(&mut self, start: usize) -> Token {
        self.pos += 1;
        loop {
            if self.at_end() || self.peek() == b'\n' {
                self.report("unterminated string literal", start);
                return self.token(TokenKind::Error, start);
            }
            match self.bump() {
                b'\\' => {
                    // escape sequence, skip the escaped byte
                    if !self.at_end() {
                        self.pos += 1;
                    }
                }
                b'"' => return self.token(TokenKind::StringLit, start),
                _ => {}
            }
        }
    }

    fn lex_punct(&mut self, start: usize) -> Token {
        let kind = match self.bump() {
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'[' => TokenKind::LBracket,
            b']' => TokenKind::RBracket,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semi,
            b':' => TokenKind::Colon,
            b'@' => TokenKind::At,
            b'#' => TokenKind::Hash,
            b'=' => {
                if self.peek() == b'=' {
                    // ==, ===
                    self.pos += 1;
                    if self.peek() == b'=' {
                        self.pos += 1;
                    }
                    TokenKind::Op
                } else {
                    TokenKind::Eq
                }
            }
            b'<' => match self.peek() {
                b'=' => {
                    self.pos += 1;
                    TokenKind::LtEq
                }
                b'<' => {
                    self.pos += 1;
                    if self.peek() == b'<' {
                        self.pos += 1;
                    }
                    TokenKind::Op
                }
                _ => TokenKind::Op,
            },
            b'>' => {
                if matches!(self.peek(), b'=' | b'>') {
                    let second = self.bump();
                    if second == b'>' && self.peek() == b'>' {
                        self.pos += 1;
                    }
                }
                TokenKind::Op
            }
            b'!' | b'+' | b'-' | b'*' | b'/' | b'%' | b'&' | b'|' | b'^' | b'~' | b'?' | b'.' => {
                // multi-char forms (&&, ||, **, !=, !==, ~^, ~&, ~|) fold
                // into the same Op kind, so eat any operator continuation
                while matches!(self.peek(), b'=' | b'&' | b'|' | b'*' | b'^') {
                    self.pos += 1;
                }
                TokenKind::Op
            }
            other => {
                // a multi-byte character is consumed whole, so spans stay on
                // char boundaries and one bad character yields one error
                if other >= 0x80 {
                    while matches!(self.peek(), 0x80..=0xBF) {
                        self.pos += 1;
                    }
                }
                let text = String::from_utf8_lossy(&self.source[start..self.pos]);
                self.report(format!("unrecognized character '{text}'"), start);
                TokenKind::Error
            }
        };
        self.token(kind, start)
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

fn is_base_letter(b: u8) -> bool {
    matches!(b.to_ascii_lowercase(), b'b' | b'o' | b'd' | b'h')
}

fn is_base_or_sign(b: u8) -> bool {
    is_base_letter(b) || b.to_ascii_lowercase() == b's'
}

fn is_based_digit(b: u8) -> bool {
    b.is_ascii_hexdigit() || matches!(b.to_ascii_lowercase(), b'x' | b'z' | b'?' | b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_clean(source: &str) -> Vec<TokenKind> {
        let sink = DiagnosticSink::new();
        let tokens = lex(source, FileId::from_raw(0), &sink);
        assert!(
            !sink.has_errors(),
            "unexpected lex errors: {:?}",
            sink.take_all()
        );
        tokens.iter().map(|t| t.kind).collect()
    }

    fn lex_with_errors(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
        let sink = DiagnosticSink::new();
        let tokens = lex(source, FileId::from_raw(0), &sink);
        (tokens, sink.take_all())
    }

    #[test]
    fn empty_input_yields_eof() {
        assert_eq!(lex_clean(""), vec![TokenKind::Eof]);
        assert_eq!(lex_clean("  \t\n"), vec![TokenKind::Eof]);
    }

    #[test]
    fn declaration_tokens() {
        assert_eq!(
            lex_clean("wire [7:0] data;"),
            vec![
                TokenKind::Wire,
                TokenKind::LBracket,
                TokenKind::Number,
                TokenKind::Colon,
                TokenKind::Number,
                TokenKind::RBracket,
                TokenKind::Identifier,
                TokenKind::Semi,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(
            lex_clean("module Module"),
            vec![TokenKind::Module, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn assignment_operators_stay_distinct() {
        assert_eq!(
            lex_clean("= <= == === != <"),
            vec![
                TokenKind::Eq,
                TokenKind::LtEq,
                TokenKind::Op,
                TokenKind::Op,
                TokenKind::Op,
                TokenKind::Op,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn number_flavors_collapse() {
        assert_eq!(
            lex_clean("0 42 1_000 4'b10x0 'hFF 8'sd3 1.5 2e3"),
            vec![TokenKind::Number; 8]
                .into_iter()
                .chain([TokenKind::Eof])
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn comments_and_directives_are_trivia() {
        assert_eq!(
            lex_clean("`timescale 1ns/1ps\nwire // eol\n/* block\n */ clk"),
            vec![TokenKind::Wire, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn escaped_and_system_identifiers() {
        assert_eq!(
            lex_clean("\\bus+1 $display"),
            vec![TokenKind::Identifier, TokenKind::SystemIdent, TokenKind::Eof]
        );
    }

    #[test]
    fn spans_cover_token_text() {
        let sink = DiagnosticSink::new();
        let tokens = lex("module top", FileId::from_raw(0), &sink);
        assert_eq!((tokens[0].span.start, tokens[0].span.end), (0, 6));
        assert_eq!((tokens[1].span.start, tokens[1].span.end), (7, 10));
    }

    #[test]
    fn unterminated_string_reports_error() {
        let (tokens, errors) = lex_with_errors("\"oops\nwire");
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Error));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("unterminated string"));
    }

    #[test]
    fn unterminated_block_comment_reports_error() {
        let (tokens, errors) = lex_with_errors("wire /* never closed");
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn unrecognized_byte_reports_error() {
        let (tokens, errors) = lex_with_errors("wire \x01 clk");
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Error));
        assert!(!errors.is_empty());
    }

    #[test]
    fn multibyte_character_is_one_error_on_char_boundaries() {
        let source = "module m; wire é; endmodule";
        let (tokens, errors) = lex_with_errors(source);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains('é'));
        assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::Error).count(),
            1
        );
        for t in &tokens {
            assert!(source.is_char_boundary(t.span.start as usize));
            assert!(source.is_char_boundary(t.span.end as usize));
        }
    }
}
