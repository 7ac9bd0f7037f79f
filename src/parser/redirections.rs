// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirection-token consumption and left-to-right descriptor resolution.

use super::Parser;
use crate::ast::*;
use crate::parse_error::ParseError;
use crate::span::Span;
use crate::token::{DupTarget, DupTargetResult, Token, TokenKind};

impl Parser {
    pub(super) fn is_redirection_token(&self) -> bool {
        self.peek_kind().is_some_and(TokenKind::is_redirection)
    }

    /// Consume one redirection token, plus its filename word if it takes
    /// one, and apply its effect to `table`.
    pub(super) fn consume_redirection(&mut self, table: &mut DescriptorTable) -> Result<(), ParseError> {
        let token = match self.advance() {
            Some(t) => t.clone(),
            None => unreachable!("is_redirection_token verified a token exists"),
        };

        match token.kind {
            TokenKind::RedirectOut { fd } => {
                self.apply_file_redirect(table, fd.unwrap_or(1), RedirectionOperator::Output)
            }
            TokenKind::RedirectAppend { fd } => {
                self.apply_file_redirect(table, fd.unwrap_or(1), RedirectionOperator::Append)
            }
            TokenKind::RedirectIn { fd } => {
                self.apply_file_redirect(table, fd.unwrap_or(0), RedirectionOperator::Input)
            }
            TokenKind::DuplicateFd { source, result, output } => {
                self.apply_duplication(table, source, result, output, token.span)
            }
            _ => unreachable!("is_redirection_token already verified"),
        }
    }

    fn apply_file_redirect(
        &mut self,
        table: &mut DescriptorTable,
        fd: u32,
        operator: RedirectionOperator,
    ) -> Result<(), ParseError> {
        let name = self.expect_redirect_target()?;
        let mode = match operator {
            RedirectionOperator::Input => DescriptorMode::Read,
            RedirectionOperator::Output | RedirectionOperator::Append => DescriptorMode::Write,
        };
        let descriptor = CommandFileDescriptor::new(FileTarget::File(File { name }), operator);
        let resolved = CommandDescriptor::new(mode, descriptor)
            .map_err(|source| ParseError::InvalidDescriptorData { source, span: self.last_span() })?;
        table.set(fd, DescriptorEntry::Open(resolved));
        Ok(())
    }

    /// The token right after a plain redirect operator must be a filename
    /// word: another operator there is `EmptyRedirect`, end-of-input is
    /// `UnexpectedStatementFinish`.
    fn expect_redirect_target(&mut self) -> Result<Word, ParseError> {
        match self.peek() {
            None => {
                return Err(ParseError::UnexpectedStatementFinish {
                    expected: "redirect target",
                    span: self.eof_span(),
                });
            }
            Some(tok) if tok.kind.is_sequencer() || tok.kind.is_redirection() => {
                return Err(ParseError::EmptyRedirect { span: tok.span });
            }
            _ => {}
        }

        match self.advance() {
            Some(Token { kind: TokenKind::Word(s), .. }) => Ok(Word::new(s.clone())),
            _ => unreachable!("only a word token can follow a validated redirect operator"),
        }
    }

    fn apply_duplication(
        &mut self,
        table: &mut DescriptorTable,
        fd: u32,
        result: DupTargetResult,
        output: bool,
        span: Span,
    ) -> Result<(), ParseError> {
        match result {
            DupTargetResult::Invalid => Err(ParseError::InvalidRedirection { span }),
            DupTargetResult::Ambiguous => Err(ParseError::AmbiguousRedirect { span }),
            DupTargetResult::MissingEof => {
                Err(ParseError::UnexpectedStatementFinish { expected: "duplication target", span })
            }
            DupTargetResult::MissingOperator => Err(ParseError::EmptyRedirect { span }),
            DupTargetResult::Valid(DupTarget::Close) => {
                table.set(fd, DescriptorEntry::Closed(CommandDescriptorClosed));
                Ok(())
            }
            DupTargetResult::Valid(DupTarget::Fd(source_fd)) => match table.get(source_fd).cloned() {
                Some(DescriptorEntry::Open(source)) => {
                    table.set(fd, DescriptorEntry::Open(source.duplicated_for(output)));
                    Ok(())
                }
                _ => Err(ParseError::BadFileDescriptor { fd: source_fd, span }),
            },
        }
    }
}
