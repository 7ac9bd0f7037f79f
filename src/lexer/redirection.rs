// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `>`, `>>`, `<`, and their `&`-duplication forms.
//!
//! Validity of a duplication payload (`>&2`, `>&-`, vs. `>&a`, `>&1a`,
//! `>>&2`) is purely syntactic and is decided here; turning the result into
//! the matching parser failure is the parser's job (see `parse_error.rs`).

use super::Lexer;
use crate::token::{DupTarget, DupTargetResult, Span, Token, TokenKind};

impl Lexer<'_> {
    /// Lex `>`, `>>`, or `>&...`. Called when peek() has confirmed `>`.
    pub(super) fn lex_redirect_out(&mut self, start: usize, fd: Option<u32>) -> Token {
        self.chars.next(); // consume first >
        match self.peek_char() {
            Some('>') => {
                self.chars.next();
                match self.peek_char() {
                    Some('&') => {
                        self.chars.next();
                        self.consume_malformed_payload();
                        let end = self.current_position();
                        Token::new(
                            TokenKind::DuplicateFd {
                                source: fd.unwrap_or(1),
                                result: DupTargetResult::Invalid,
                                output: true,
                            },
                            Span::new(start, end),
                        )
                    }
                    _ => {
                        let end = self.current_position();
                        Token::new(TokenKind::RedirectAppend { fd }, Span::new(start, end))
                    }
                }
            }
            Some('&') => {
                self.chars.next();
                self.lex_dup_target(start, fd.unwrap_or(1), true)
            }
            _ => {
                let end = self.current_position();
                Token::new(TokenKind::RedirectOut { fd }, Span::new(start, end))
            }
        }
    }

    /// Lex `<` or `<&...`. Called when peek() has confirmed `<`.
    ///
    /// Heredocs (`<<`, `<<<`) are out of scope: a second `<` is simply a
    /// fresh token, which the parser will reject as a redirect with no
    /// filename.
    pub(super) fn lex_redirect_in(&mut self, start: usize, fd: Option<u32>) -> Token {
        self.chars.next(); // consume <
        match self.peek_char() {
            Some('&') => {
                self.chars.next();
                self.lex_dup_target(start, fd.unwrap_or(0), false)
            }
            _ => {
                let end = self.current_position();
                Token::new(TokenKind::RedirectIn { fd }, Span::new(start, end))
            }
        }
    }

    /// Read the payload following `>&`/`<&`: `-` (close), a run of digits
    /// (duplicate from fd), or anything else (ambiguous).
    fn lex_dup_target(&mut self, start: usize, source: u32, output: bool) -> Token {
        self.skip_whitespace();

        let result = match self.peek_char() {
            None => DupTargetResult::MissingEof,
            Some(c) if Self::is_word_boundary(c) => DupTargetResult::MissingOperator,
            Some('-') => {
                self.chars.next();
                DupTargetResult::Valid(DupTarget::Close)
            }
            Some(c) if c.is_ascii_digit() => {
                let digit_start = self.current_position();
                let mut digit_end = digit_start;
                while let Some(&(pos, c)) = self.chars.peek() {
                    if !c.is_ascii_digit() {
                        break;
                    }
                    digit_end = pos + 1;
                    self.chars.next();
                }
                match self.peek_char() {
                    Some(c) if !Self::is_word_boundary(c) => {
                        self.consume_malformed_payload();
                        DupTargetResult::Ambiguous
                    }
                    _ => {
                        let fd: u32 = self.input[digit_start..digit_end].parse().unwrap_or(u32::MAX);
                        DupTargetResult::Valid(DupTarget::Fd(fd))
                    }
                }
            }
            Some(_) => {
                self.consume_malformed_payload();
                DupTargetResult::Ambiguous
            }
        };

        let end = self.current_position();
        Token::new(TokenKind::DuplicateFd { source, result, output }, Span::new(start, end))
    }

    /// Drain the rest of a malformed duplication payload up to the next
    /// word boundary so a later token doesn't pick up its tail.
    fn consume_malformed_payload(&mut self) {
        while let Some(c) = self.peek_char() {
            if Self::is_word_boundary(c) {
                break;
            }
            self.chars.next();
        }
    }
}
