// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word assembly: single/double quoting, backslash escaping, and gluing
//! adjacent fragments (`'a'"b"c` → one `Word("abc")`) into a single token.

use super::Lexer;
use crate::error::LexerError;
use crate::token::{Span, Token, TokenKind};

enum QuoteState {
    Unquoted,
    Single,
    Double,
}

impl<'a> Lexer<'a> {
    /// Assemble one `Word` token starting at `start`, switching between
    /// unquoted, single-quoted, and double-quoted reading as quotes open
    /// and close. Ends at the first unquoted word-boundary character.
    pub(super) fn lex_word(&mut self, start: usize) -> Result<Token, LexerError> {
        let mut word = String::new();
        let mut state = QuoteState::Unquoted;
        let mut end = start;

        loop {
            match state {
                QuoteState::Unquoted => match self.peek_char() {
                    None => break,
                    Some(c) if Self::is_word_boundary(c) => break,
                    Some('\'') => {
                        let (pos, _) = self.chars.next().unwrap();
                        end = pos + 1;
                        state = QuoteState::Single;
                    }
                    Some('"') => {
                        let (pos, _) = self.chars.next().unwrap();
                        end = pos + 1;
                        state = QuoteState::Double;
                    }
                    Some('\\') => {
                        let (bpos, _) = self.chars.next().unwrap();
                        match self.chars.next() {
                            Some((pos, c)) => {
                                word.push(c);
                                end = pos + c.len_utf8();
                            }
                            None => {
                                return Err(LexerError::TrailingBackslash {
                                    span: Span::new(bpos, bpos + 1),
                                });
                            }
                        }
                    }
                    Some(_) => {
                        let (pos, c) = self.chars.next().unwrap();
                        word.push(c);
                        end = pos + c.len_utf8();
                    }
                },
                QuoteState::Single => match self.chars.next() {
                    Some((pos, '\'')) => {
                        end = pos + 1;
                        state = QuoteState::Unquoted;
                    }
                    Some((pos, c)) => {
                        word.push(c);
                        end = pos + c.len_utf8();
                    }
                    None => {
                        return Err(LexerError::UnclosedQuote {
                            span: Span::new(start, self.input.len()),
                        });
                    }
                },
                QuoteState::Double => match self.peek_char() {
                    None => {
                        return Err(LexerError::UnclosedQuote {
                            span: Span::new(start, self.input.len()),
                        });
                    }
                    Some('"') => {
                        let (pos, _) = self.chars.next().unwrap();
                        end = pos + 1;
                        state = QuoteState::Unquoted;
                    }
                    Some('\\') => {
                        let mut lookahead = self.chars.clone();
                        lookahead.next();
                        match lookahead.peek().copied() {
                            Some((npos, nc)) if matches!(nc, '"' | '\\' | '$' | '`') => {
                                self.chars.next();
                                self.chars.next();
                                word.push(nc);
                                end = npos + nc.len_utf8();
                            }
                            _ => {
                                let (bpos, _) = self.chars.next().unwrap();
                                word.push('\\');
                                end = bpos + 1;
                                if let Some((pos, c)) = self.chars.next() {
                                    word.push(c);
                                    end = pos + c.len_utf8();
                                }
                            }
                        }
                    }
                    Some(_) => {
                        let (pos, c) = self.chars.next().unwrap();
                        word.push(c);
                        end = pos + c.len_utf8();
                    }
                },
            }
        }

        Ok(Token::new(TokenKind::Word(word), Span::new(start, end)))
    }
}
