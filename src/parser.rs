// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive-descent parser: tokens in, a [`Command`] chain out.
//!
//! A pipeline is a `|`-joined run of simple commands; a statement chains
//! pipelines via `;`, `&&`, `||`, or a trailing `&`. Each layer validates
//! its own slot before descending, so the grammar never has to backtrack.

use crate::ast::*;
use crate::lexer::Lexer;
use crate::parse_error::ParseError;
use crate::span::Span;
use crate::token::{Token, TokenKind};

#[path = "parser/redirections.rs"]
mod redirections;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    input_len: usize,
}

impl Parser {
    /// Parse a full line into the head [`Command`] of its statement chain.
    pub fn parse(input: &str) -> Result<Command, ParseError> {
        let tokens = Lexer::tokenize(input)?;
        if tokens.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let mut parser = Parser { tokens, pos: 0, input_len: input.len() };
        parser.expect_pipeline_start()?;
        parser.parse_statement()
    }

    /// Grammar: pipeline ((';' | '&&' | '||' | trailing '&') statement)?
    fn parse_statement(&mut self) -> Result<Command, ParseError> {
        let mut head = self.parse_pipeline()?;

        match self.peek_kind() {
            Some(TokenKind::Semi) => {
                self.advance();
                self.check_no_dangling_sequencer()?;
                if self.peek().is_some() {
                    head.next_command = Some(Box::new(self.parse_statement()?));
                    head.next_command_operator = None;
                }
            }
            Some(TokenKind::And | TokenKind::Or) => {
                let op = if matches!(self.peek_kind(), Some(TokenKind::And)) {
                    SequenceOperator::And
                } else {
                    SequenceOperator::Or
                };
                self.advance();
                self.expect_pipeline_start()?;
                head.next_command = Some(Box::new(self.parse_statement()?));
                head.next_command_operator = Some(op);
            }
            Some(TokenKind::Ampersand) => {
                self.advance();
                head.asynchronous = true;
                // A trailing `&` closes its statement the same way `;` does:
                // legal at end of input, but not directly before another
                // sequencer.
                self.check_no_dangling_sequencer()?;
                if self.peek().is_some() {
                    head.next_command = Some(Box::new(self.parse_statement()?));
                    head.next_command_operator = None;
                }
            }
            _ => {}
        }

        Ok(head)
    }

    /// Grammar: simple_command ('|' pipeline)?
    fn parse_pipeline(&mut self) -> Result<Command, ParseError> {
        let mut head = self.parse_simple_command()?;
        if matches!(self.peek_kind(), Some(TokenKind::Pipe)) {
            self.advance();
            self.expect_pipe_rhs()?;
            head.pipe_command = Some(Box::new(self.parse_pipeline()?));
        }
        Ok(head)
    }

    /// Grammar: (word | redirection)+, in any order; the first word read is
    /// the command, every later word is an argument.
    fn parse_simple_command(&mut self) -> Result<Command, ParseError> {
        let slot_start = self.current_span();
        let mut descriptors = DescriptorTable::with_defaults();
        let mut command = None;
        let mut args = Vec::new();

        loop {
            match self.peek_kind() {
                Some(TokenKind::Word(_)) => {
                    let word = self.advance_word();
                    match &mut command {
                        None => command = Some(word),
                        Some(_) => args.push(word),
                    }
                }
                Some(kind) if kind.is_redirection() => {
                    self.consume_redirection(&mut descriptors)?;
                }
                _ => break,
            }
        }

        let command = command.ok_or(ParseError::EmptyStatement { span: slot_start })?;

        Ok(Command {
            command,
            args,
            descriptors,
            pipe_command: None,
            next_command: None,
            next_command_operator: None,
            asynchronous: false,
        })
    }

    fn advance_word(&mut self) -> Word {
        match self.advance() {
            Some(Token { kind: TokenKind::Word(s), .. }) => Word::new(s.clone()),
            _ => unreachable!("caller already matched on a Word token"),
        }
    }

    #[inline]
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    #[inline]
    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Span of the token at the current position, or an empty span at
    /// end-of-input if there isn't one.
    fn current_span(&self) -> Span {
        self.peek().map(|t| t.span).unwrap_or_else(|| self.eof_span())
    }

    /// Span of the most recently consumed token.
    fn last_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.span)
            .unwrap_or_else(|| self.eof_span())
    }

    fn eof_span(&self) -> Span {
        Span::empty(self.input_len)
    }

    /// Validate that a new pipeline may start here: fails with
    /// `EmptyStatement`, at end-of-input or at the offending token's own
    /// position if one sits in this slot already.
    fn expect_pipeline_start(&self) -> Result<(), ParseError> {
        self.expect_command_start(|span| ParseError::EmptyStatement { span })
    }

    /// Validate that a `|`'s right-hand side may start here: end-of-input
    /// is `UnexpectedStatementFinish` instead of `EmptyStatement`.
    fn expect_pipe_rhs(&self) -> Result<(), ParseError> {
        self.expect_command_start(|span| ParseError::UnexpectedStatementFinish {
            expected: "command",
            span,
        })
    }

    fn expect_command_start(&self, eof_err: impl FnOnce(Span) -> ParseError) -> Result<(), ParseError> {
        match self.peek() {
            None => Err(eof_err(self.eof_span())),
            Some(tok) if tok.kind.is_sequencer() => Err(ParseError::EmptyStatement { span: tok.span }),
            _ => Ok(()),
        }
    }

    /// After a `;` or trailing `&`: stopping here is fine, but another
    /// sequencer right behind it (`;;`, `& &&`, ...) is not.
    fn check_no_dangling_sequencer(&self) -> Result<(), ParseError> {
        match self.peek() {
            Some(tok) if tok.kind.is_sequencer() => Err(ParseError::EmptyStatement { span: tok.span }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "parser_tests/mod.rs"]
mod tests;
