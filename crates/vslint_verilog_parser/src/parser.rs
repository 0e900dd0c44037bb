//! Recursive descent parser producing the signal-level module model.
//!
//! The parser does not build an expression AST. Declarations, assignment
//! targets, and procedural structure are parsed precisely; every other
//! expression position is scanned for identifier occurrences, which is all
//! the signal rules consume. Errors are reported to the [`DiagnosticSink`]
//! and recovery resumes at the next statement boundary, so one malformed
//! statement never hides findings in the rest of the module.

use std::collections::HashSet;

use vslint_common::{Ident, Interner};
use vslint_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};
use vslint_model::{
    AssignKind, AssignStmt, BlockKind, Direction, ModuleModel, NameRef, NetDecl, NetKind,
    PortDecl, PortStyle, SourceModel,
};
use vslint_source::{FileId, Span};

use crate::token::{Token, TokenKind};

/// Diagnostic code for parse errors.
const E101: DiagnosticCode = DiagnosticCode::new(Category::Error, 101);

/// Parses a lexed token stream into a [`SourceModel`].
pub struct ModelParser<'src> {
    tokens: Vec<Token>,
    pos: usize,
    source: &'src str,
    file: FileId,
    interner: &'src Interner,
    sink: &'src DiagnosticSink,
    /// Names that are legal references but not signals: parameters,
    /// localparams, and `integer`/`genvar`-class variables. Occurrences of
    /// these are dropped so they feed neither usage counts nor
    /// undefined-reference findings.
    non_signals: HashSet<Ident>,
}

impl<'src> ModelParser<'src> {
    /// Creates a parser over `tokens`, which must have been lexed from
    /// `source` for `file`.
    pub fn new(
        tokens: Vec<Token>,
        source: &'src str,
        file: FileId,
        interner: &'src Interner,
        sink: &'src DiagnosticSink,
    ) -> Self {
        Self {
            tokens,
            pos: 0,
            source,
            file,
            interner,
            sink,
            non_signals: HashSet::new(),
        }
    }

    fn current(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    fn current_span(&self) -> Span {
        self.tokens[self.pos].span
    }

    fn current_text(&self) -> &'src str {
        let span = self.current_span();
        &self.source[span.start as usize..span.end as usize]
    }

    fn prev_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            self.current_span()
        }
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current() == kind
    }

    fn at_eof(&self) -> bool {
        self.at(TokenKind::Eof)
    }

    fn advance(&mut self) {
        if !self.at_eof() {
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, what: &str) {
        if !self.eat(kind) {
            self.expected(what);
        }
    }

    fn error(&self, msg: impl Into<String>) {
        self.sink
            .emit(Diagnostic::error(E101, msg, self.current_span()));
    }

    fn expected(&self, what: &str) {
        self.error(format!("expected {what}, found {:?}", self.current()));
    }

    /// Skips to just past the next semicolon.
    fn recover_to_semi(&mut self) {
        while !self.at_eof() && !self.at(TokenKind::Semi) {
            self.advance();
        }
        self.eat(TokenKind::Semi);
    }

    /// Consumes the current identifier token as a [`NameRef`].
    ///
    /// Escaped identifiers drop their leading backslash, so `\foo` and a
    /// later plain `foo` intern to the same name.
    fn ident_ref(&mut self) -> NameRef {
        let span = self.current_span();
        let text = self.current_text().trim_start_matches('\\');
        let name = self.interner.intern(text);
        self.advance();
        NameRef::new(name, span)
    }

    fn is_non_signal(&self, name: Ident) -> bool {
        self.non_signals.contains(&name)
    }

    // === Top level ===

    /// Parses the whole token stream into a [`SourceModel`].
    pub fn parse_source_file(&mut self) -> SourceModel {
        let mut modules = Vec::new();
        while !self.at_eof() {
            if self.at(TokenKind::Module) {
                modules.push(self.parse_module());
            } else {
                self.error("expected 'module'");
                self.advance();
            }
        }
        let span = Span::new(self.file, 0, self.source.len() as u32);
        SourceModel { modules, span }
    }

    fn parse_module(&mut self) -> ModuleModel {
        let start = self.current_span();
        self.advance(); // module
        self.non_signals.clear();

        let name = if self.at(TokenKind::Identifier) {
            self.ident_ref().name
        } else {
            self.expected("module name");
            self.interner.intern("<missing>")
        };
        let mut module = ModuleModel::new(name, start);

        if self.at(TokenKind::Hash) {
            self.parse_parameter_port_list();
        }

        if self.at(TokenKind::LParen) {
            self.parse_port_list(&mut module);
        }
        self.expect(TokenKind::Semi, "';' after module header");

        loop {
            match self.current() {
                TokenKind::Endmodule => {
                    self.advance();
                    break;
                }
                TokenKind::Eof => {
                    self.error("unexpected end of file, missing 'endmodule'");
                    break;
                }
                TokenKind::Input | TokenKind::Output | TokenKind::Inout => {
                    let port = self.parse_port_decl(TokenKind::Semi);
                    self.expect(TokenKind::Semi, "';' after port declaration");
                    module.ports.push(port);
                }
                TokenKind::Wire | TokenKind::Reg => {
                    let decl = self.parse_net_decl(&mut module.reads);
                    module.decls.push(decl);
                }
                TokenKind::VarType => self.parse_var_decl(),
                TokenKind::Parameter | TokenKind::Localparam => self.parse_parameter_decl(),
                TokenKind::Assign => {
                    self.parse_continuous_assign(&mut module);
                }
                TokenKind::Always => {
                    self.advance();
                    if self.at(TokenKind::At) {
                        self.parse_sensitivity(&mut module.reads);
                    }
                    self.parse_statement(BlockKind::Always, &mut module);
                }
                TokenKind::Initial => {
                    self.advance();
                    self.parse_statement(BlockKind::Initial, &mut module);
                }
                TokenKind::Identifier => self.parse_instantiation(&mut module),
                _ => {
                    self.expected("a declaration, 'assign', 'always', or 'initial'");
                    self.recover_to_semi();
                }
            }
        }

        module.span = start.merge(self.prev_span());
        module
    }

    /// Skips a `#(...)` parameter port list, registering every parameter
    /// name (an identifier directly before `=`) as a non-signal.
    fn parse_parameter_port_list(&mut self) {
        self.advance(); // #
        if !self.at(TokenKind::LParen) {
            self.expected("'(' after '#'");
            return;
        }
        self.advance();
        let mut depth = 1usize;
        while !self.at_eof() && depth > 0 {
            match self.current() {
                TokenKind::LParen => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::RParen => {
                    depth -= 1;
                    self.advance();
                }
                TokenKind::Identifier => {
                    let r = self.ident_ref();
                    if self.at(TokenKind::Eq) {
                        self.non_signals.insert(r.name);
                    }
                }
                _ => self.advance(),
            }
        }
    }

    /// Parses the `(...)` port list, deciding between the ANSI and
    /// non-ANSI styles from the first token inside.
    ///
    /// Non-ANSI lists carry bare names whose declarations follow in the
    /// body, so the list itself contributes nothing to the model beyond
    /// the style tag.
    fn parse_port_list(&mut self, module: &mut ModuleModel) {
        self.advance(); // (
        if self.eat(TokenKind::RParen) {
            module.port_style = PortStyle::Empty;
            return;
        }
        if matches!(
            self.current(),
            TokenKind::Input | TokenKind::Output | TokenKind::Inout
        ) {
            module.port_style = PortStyle::Ansi;
            loop {
                let port = self.parse_port_decl(TokenKind::RParen);
                module.ports.push(port);
                if self.eat(TokenKind::RParen) {
                    return;
                }
                if !matches!(
                    self.current(),
                    TokenKind::Input | TokenKind::Output | TokenKind::Inout
                ) {
                    self.expected("a port direction or ')'");
                    while !self.at_eof() && !self.eat(TokenKind::RParen) {
                        self.advance();
                    }
                    return;
                }
            }
        }
        module.port_style = PortStyle::NonAnsi;
        let mut depth = 1usize;
        while !self.at_eof() && depth > 0 {
            match self.current() {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => depth -= 1,
                _ => {}
            }
            self.advance();
        }
    }

    /// Parses one direction group: `input [wire|reg] [signed] [range] name
    /// {, name}`. Used for ANSI header groups (terminated by the next
    /// direction keyword or `)`) and for body port declarations
    /// (terminated by `;`).
    fn parse_port_decl(&mut self, terminator: TokenKind) -> PortDecl {
        let start = self.current_span();
        let direction = match self.current() {
            TokenKind::Input => Direction::Input,
            TokenKind::Output => Direction::Output,
            _ => Direction::Inout,
        };
        self.advance();

        let net = if self.eat(TokenKind::Wire) {
            Some(NetKind::Wire)
        } else if self.eat(TokenKind::Reg) {
            Some(NetKind::Reg)
        } else {
            None
        };
        self.eat(TokenKind::Signedness);
        let width = self.parse_width();

        let mut names = Vec::new();
        loop {
            if self.at(TokenKind::Identifier) {
                names.push(self.ident_ref());
            } else {
                self.expected("port name");
                break;
            }
            if !self.eat(TokenKind::Comma) {
                break;
            }
            // in an ANSI header a comma may start the next direction group
            if !self.at(TokenKind::Identifier) {
                break;
            }
        }
        if names.is_empty() && terminator == TokenKind::Semi {
            // skip to the ';', which the caller consumes
            while !self.at_eof() && !self.at(TokenKind::Semi) {
                self.advance();
            }
        }

        PortDecl {
            direction,
            net,
            width,
            names,
            span: start.merge(self.prev_span()),
        }
    }

    /// Parses `wire`/`reg` declarations: `reg [7:0] a, b;` with optional
    /// unpacked dimensions after each name. Identifiers inside unpacked
    /// dimensions count as reads.
    fn parse_net_decl(&mut self, reads: &mut Vec<NameRef>) -> NetDecl {
        let start = self.current_span();
        let kind = if self.at(TokenKind::Reg) {
            NetKind::Reg
        } else {
            NetKind::Wire
        };
        self.advance();
        self.eat(TokenKind::Signedness);
        let width = self.parse_width();

        let mut names = Vec::new();
        loop {
            if self.at(TokenKind::Identifier) {
                names.push(self.ident_ref());
            } else {
                self.expected("signal name");
                break;
            }
            while self.at(TokenKind::LBracket) {
                self.collect_reads_in_brackets(reads);
            }
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::Semi, "';' after declaration");

        NetDecl {
            kind,
            width,
            names,
            span: start.merge(self.prev_span()),
        }
    }

    /// Registers `integer i, j;` (and `genvar`, `real`, ...) names as
    /// non-signals and discards the declaration.
    fn parse_var_decl(&mut self) {
        self.advance();
        while self.at(TokenKind::Identifier) {
            let r = self.ident_ref();
            self.non_signals.insert(r.name);
            // skip an initializer or array dimension
            while !self.at_eof()
                && !matches!(self.current(), TokenKind::Comma | TokenKind::Semi)
            {
                self.advance();
            }
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::Semi, "';' after variable declaration");
    }

    /// Registers `parameter NAME = expr;` names as non-signals and skips
    /// the value expression.
    fn parse_parameter_decl(&mut self) {
        self.advance();
        while !self.at_eof() && !self.at(TokenKind::Semi) {
            if self.at(TokenKind::Identifier) {
                let r = self.ident_ref();
                if self.at(TokenKind::Eq) {
                    self.non_signals.insert(r.name);
                }
            } else {
                self.advance();
            }
        }
        self.expect(TokenKind::Semi, "';' after parameter");
    }

    /// Skips a module instantiation, `sub #(.WIDTH(4)) u1 (.in(a), .out(w))`,
    /// harvesting connection identifiers as reads. Elaboration is out of
    /// scope, but a signal used only as a port connection is still used.
    /// The submodule type, instance name, and formal names after `.` are
    /// not signals of this module.
    fn parse_instantiation(&mut self, module: &mut ModuleModel) {
        self.advance(); // submodule type
        if self.eat(TokenKind::Hash) {
            if self.at(TokenKind::LParen) {
                self.collect_connection_reads(&mut module.reads);
            } else {
                self.eat(TokenKind::Number);
            }
        }
        if self.at(TokenKind::Identifier) {
            self.advance(); // instance name
        } else {
            self.expected("instance name");
            self.recover_to_semi();
            return;
        }
        // instance array range, e.g. u[3:0]
        while self.at(TokenKind::LBracket) {
            let mut ignored = Vec::new();
            self.collect_reads_in_brackets(&mut ignored);
            module.reads.append(&mut ignored);
        }
        if self.at(TokenKind::LParen) {
            self.collect_connection_reads(&mut module.reads);
        } else {
            self.expected("'(' before port connections");
            self.recover_to_semi();
            return;
        }
        self.expect(TokenKind::Semi, "';' after instantiation");
    }

    /// Captures a `[msb:lsb]` range as raw source text, brackets included.
    fn parse_width(&mut self) -> Option<String> {
        if !self.at(TokenKind::LBracket) {
            return None;
        }
        let start = self.current_span().start;
        let mut depth = 0usize;
        loop {
            match self.current() {
                TokenKind::LBracket => depth += 1,
                TokenKind::RBracket => {
                    depth -= 1;
                    if depth == 0 {
                        self.advance();
                        break;
                    }
                }
                TokenKind::Eof => {
                    self.error("unterminated range");
                    break;
                }
                _ => {}
            }
            self.advance();
        }
        let end = self.prev_span().end;
        Some(self.source[start as usize..end as usize].to_string())
    }

    /// Parses `assign target = expr;`.
    ///
    /// Only a simple identifier target produces an [`AssignStmt`]; a
    /// concatenation or other non-identifier target degrades to plain
    /// reads so its signals still count as referenced.
    fn parse_continuous_assign(&mut self, module: &mut ModuleModel) {
        let start = self.current_span();
        self.advance(); // assign
        if !self.at(TokenKind::Identifier) {
            let mut rhs = Vec::new();
            self.collect_reads_to_semi(&mut rhs);
            module.reads.append(&mut rhs);
            return;
        }
        let target = self.ident_ref();
        let mut rhs = Vec::new();
        while self.at(TokenKind::LBracket) {
            self.collect_reads_in_brackets(&mut rhs);
        }
        self.expect(TokenKind::Eq, "'='");
        self.collect_reads_to_semi(&mut rhs);
        module.assigns.push(AssignStmt {
            kind: AssignKind::Continuous,
            target: Some(target),
            rhs,
            span: start.merge(self.prev_span()),
        });
    }

    /// Parses `@*`, `@(*)`, or `@(posedge clk or negedge rst)`, recording
    /// signal occurrences as reads.
    fn parse_sensitivity(&mut self, reads: &mut Vec<NameRef>) {
        self.advance(); // @
        if self.at(TokenKind::Op) && self.current_text() == "*" {
            self.advance();
            return;
        }
        if !self.at(TokenKind::LParen) {
            self.expected("'(' or '*' after '@'");
            return;
        }
        self.collect_reads_in_parens(reads);
    }

    /// Parses one procedural statement inside an `always` or `initial`
    /// block.
    fn parse_statement(&mut self, block: BlockKind, module: &mut ModuleModel) {
        if self.eat(TokenKind::Hash) {
            // delay control: #10 or #(expr)
            if self.at(TokenKind::LParen) {
                let mut ignored = Vec::new();
                self.collect_reads_in_parens(&mut ignored);
                module.reads.append(&mut ignored);
            } else {
                self.eat(TokenKind::Number);
            }
        }
        match self.current() {
            TokenKind::Begin => {
                self.advance();
                // optional named block: begin : label
                if self.eat(TokenKind::Colon) {
                    self.eat(TokenKind::Identifier);
                }
                while !matches!(
                    self.current(),
                    TokenKind::End | TokenKind::Endmodule | TokenKind::Eof
                ) {
                    self.parse_statement(block, module);
                }
                self.expect(TokenKind::End, "'end'");
            }
            TokenKind::If => {
                self.advance();
                if self.at(TokenKind::LParen) {
                    self.collect_reads_in_parens(&mut module.reads);
                } else {
                    self.expected("'(' after 'if'");
                }
                self.parse_statement(block, module);
                if self.eat(TokenKind::Else) {
                    self.parse_statement(block, module);
                }
            }
            TokenKind::Case => {
                self.advance();
                if self.at(TokenKind::LParen) {
                    self.collect_reads_in_parens(&mut module.reads);
                }
                while !matches!(
                    self.current(),
                    TokenKind::Endcase | TokenKind::Endmodule | TokenKind::Eof
                ) {
                    if self.eat(TokenKind::Default) {
                        self.eat(TokenKind::Colon);
                    } else {
                        // case item labels up to the ':'
                        while !matches!(
                            self.current(),
                            TokenKind::Colon | TokenKind::Endcase | TokenKind::Eof
                        ) {
                            if self.at(TokenKind::Identifier) {
                                let r = self.ident_ref();
                                if !self.is_non_signal(r.name) {
                                    module.reads.push(r);
                                }
                            } else {
                                self.advance();
                            }
                        }
                        self.expect(TokenKind::Colon, "':' after case label");
                    }
                    self.parse_statement(block, module);
                }
                self.expect(TokenKind::Endcase, "'endcase'");
            }
            TokenKind::For | TokenKind::While | TokenKind::Repeat => {
                self.advance();
                if self.at(TokenKind::LParen) {
                    self.collect_reads_in_parens(&mut module.reads);
                } else {
                    self.expected("'('");
                }
                self.parse_statement(block, module);
            }
            TokenKind::Forever => {
                self.advance();
                self.parse_statement(block, module);
            }
            TokenKind::SystemIdent => {
                // system task call: arguments count as reads
                self.advance();
                if self.at(TokenKind::LParen) {
                    self.collect_reads_in_parens(&mut module.reads);
                }
                self.expect(TokenKind::Semi, "';' after system task");
            }
            TokenKind::Semi => self.advance(),
            TokenKind::Identifier => self.parse_procedural_assign(block, module),
            TokenKind::End | TokenKind::Endcase | TokenKind::Endmodule | TokenKind::Eof => {
                // caller's terminator; report and let the caller consume it
                self.expected("a statement");
            }
            _ => {
                self.expected("a statement");
                self.recover_to_semi();
            }
        }
    }

    /// Parses `target = expr;` or `target <= expr;` inside a procedural
    /// block. An assignment to a non-signal (a loop `integer`, say) keeps
    /// its RHS reads but produces no [`AssignStmt`].
    fn parse_procedural_assign(&mut self, block: BlockKind, module: &mut ModuleModel) {
        let start = self.current_span();
        let target = self.ident_ref();
        let mut rhs = Vec::new();
        while self.at(TokenKind::LBracket) {
            self.collect_reads_in_brackets(&mut rhs);
        }
        if !self.eat(TokenKind::Eq) && !self.eat(TokenKind::LtEq) {
            self.expected("'=' or '<='");
            self.recover_to_semi();
            return;
        }
        self.collect_reads_to_semi(&mut rhs);
        if self.is_non_signal(target.name) {
            module.reads.append(&mut rhs);
            return;
        }
        module.assigns.push(AssignStmt {
            kind: AssignKind::Procedural(block),
            target: Some(target),
            rhs,
            span: start.merge(self.prev_span()),
        });
    }

    // === Identifier harvesting ===

    fn push_read(&self, r: NameRef, reads: &mut Vec<NameRef>) {
        if !self.is_non_signal(r.name) {
            reads.push(r);
        }
    }

    /// Collects identifier occurrences up to and including the matching
    /// `)`. The parser must be positioned at `(`.
    fn collect_reads_in_parens(&mut self, reads: &mut Vec<NameRef>) {
        self.advance(); // (
        let mut depth = 1usize;
        while depth > 0 {
            match self.current() {
                TokenKind::LParen => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::RParen => {
                    depth -= 1;
                    self.advance();
                }
                TokenKind::Identifier => {
                    let r = self.ident_ref();
                    self.push_read(r, reads);
                }
                TokenKind::Eof => {
                    self.error("unterminated '('");
                    return;
                }
                _ => self.advance(),
            }
        }
    }

    /// Like [`collect_reads_in_parens`](Self::collect_reads_in_parens), but
    /// an identifier directly after `.` is a formal port or parameter name
    /// of the instantiated module and is skipped.
    fn collect_connection_reads(&mut self, reads: &mut Vec<NameRef>) {
        self.advance(); // (
        let mut depth = 1usize;
        while depth > 0 {
            match self.current() {
                TokenKind::LParen => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::RParen => {
                    depth -= 1;
                    self.advance();
                }
                TokenKind::Op if self.current_text() == "." => {
                    self.advance();
                    self.eat(TokenKind::Identifier);
                }
                TokenKind::Identifier => {
                    let r = self.ident_ref();
                    self.push_read(r, reads);
                }
                TokenKind::Eof => {
                    self.error("unterminated '('");
                    return;
                }
                _ => self.advance(),
            }
        }
    }

    /// Collects identifier occurrences up to and including the matching
    /// `]`. The parser must be positioned at `[`.
    fn collect_reads_in_brackets(&mut self, reads: &mut Vec<NameRef>) {
        self.advance(); // [
        let mut depth = 1usize;
        while depth > 0 {
            match self.current() {
                TokenKind::LBracket => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::RBracket => {
                    depth -= 1;
                    self.advance();
                }
                TokenKind::Identifier => {
                    let r = self.ident_ref();
                    self.push_read(r, reads);
                }
                TokenKind::Eof => {
                    self.error("unterminated '['");
                    return;
                }
                _ => self.advance(),
            }
        }
    }

    /// Collects identifier occurrences up to and including the next `;`.
    fn collect_reads_to_semi(&mut self, reads: &mut Vec<NameRef>) {
        loop {
            match self.current() {
                TokenKind::Semi => {
                    self.advance();
                    return;
                }
                TokenKind::Eof => {
                    self.error("unexpected end of file, missing ';'");
                    return;
                }
                TokenKind::Identifier => {
                    let r = self.ident_ref();
                    self.push_read(r, reads);
                }
                _ => self.advance(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    fn parse(source: &str) -> (SourceModel, Vec<Diagnostic>, Interner) {
        let interner = Interner::new();
        let sink = DiagnosticSink::new();
        let file = FileId::from_raw(0);
        let tokens = lex(source, file, &sink);
        let mut parser = ModelParser::new(tokens, source, file, &interner, &sink);
        let model = parser.parse_source_file();
        let diags = sink.take_all();
        (model, diags, interner)
    }

    fn parse_clean(source: &str) -> (SourceModel, Interner) {
        let (model, diags, interner) = parse(source);
        assert!(diags.is_empty(), "unexpected parse errors: {diags:?}");
        (model, interner)
    }

    fn names(interner: &Interner, refs: &[NameRef]) -> Vec<String> {
        refs.iter()
            .map(|r| interner.resolve(r.name).to_string())
            .collect()
    }

    #[test]
    fn empty_module_parses() {
        let (model, interner) = parse_clean("module top; endmodule");
        assert_eq!(model.modules.len(), 1);
        let m = &model.modules[0];
        assert_eq!(interner.resolve(m.name), "top");
        assert_eq!(m.port_style, PortStyle::Empty);
        assert!(m.ports.is_empty() && m.decls.is_empty() && m.assigns.is_empty());
    }

    #[test]
    fn ansi_header_groups() {
        let (model, interner) = parse_clean(
            "module m(input wire clk, input [7:0] din, output reg [7:0] dout); endmodule",
        );
        let m = &model.modules[0];
        assert_eq!(m.port_style, PortStyle::Ansi);
        assert_eq!(m.ports.len(), 3);
        assert_eq!(m.ports[0].direction, Direction::Input);
        assert_eq!(m.ports[0].net, Some(NetKind::Wire));
        assert_eq!(m.ports[1].net, None);
        assert_eq!(m.ports[1].width.as_deref(), Some("[7:0]"));
        assert_eq!(m.ports[2].direction, Direction::Output);
        assert_eq!(m.ports[2].net, Some(NetKind::Reg));
        assert_eq!(names(&interner, &m.ports[1].names), ["din"]);
    }

    #[test]
    fn instantiation_connections_count_as_reads() {
        let (model, interner) = parse_clean(
            "module top(input a, output y);\n  wire w;\n  sub u1 (.in(a), .out(w));\n  assign y = w;\nendmodule",
        );
        let m = &model.modules[0];
        // formal names 'in'/'out', the type, and the instance name are not reads
        assert_eq!(names(&interner, &m.reads), ["a", "w"]);
    }

    #[test]
    fn parameterized_instantiation_skips_parameter_names() {
        let (model, interner) = parse_clean(
            "module top(input a, output y);\n  sub #(.WIDTH(4)) u1 (.in(a), .out(y));\nendmodule",
        );
        let m = &model.modules[0];
        assert_eq!(names(&interner, &m.reads), ["a", "y"]);
    }

    #[test]
    fn positional_instantiation_connections() {
        let (model, interner) =
            parse_clean("module top(input a, output y);\n  sub u1 (a, y);\nendmodule");
        let m = &model.modules[0];
        assert_eq!(names(&interner, &m.reads), ["a", "y"]);
    }

    #[test]
    fn ansi_group_with_shared_head() {
        let (model, interner) = parse_clean("module m(input a, b, output y); endmodule");
        let m = &model.modules[0];
        assert_eq!(m.ports.len(), 2);
        assert_eq!(names(&interner, &m.ports[0].names), ["a", "b"]);
        assert_eq!(names(&interner, &m.ports[1].names), ["y"]);
    }

    #[test]
    fn non_ansi_ports_come_from_body() {
        let (model, interner) = parse_clean(
            "module m(din, dout);\n  input [3:0] din;\n  output reg [3:0] dout;\nendmodule",
        );
        let m = &model.modules[0];
        assert_eq!(m.port_style, PortStyle::NonAnsi);
        assert_eq!(m.ports.len(), 2);
        assert_eq!(names(&interner, &m.ports[0].names), ["din"]);
        assert_eq!(m.ports[1].net, Some(NetKind::Reg));
        assert_eq!(m.ports[1].width.as_deref(), Some("[3:0]"));
    }

    #[test]
    fn net_decls_with_multiple_names() {
        let (model, interner) = parse_clean("module m; wire [15:0] a, b; reg c; endmodule");
        let m = &model.modules[0];
        assert_eq!(m.decls.len(), 2);
        assert_eq!(m.decls[0].kind, NetKind::Wire);
        assert_eq!(m.decls[0].width.as_deref(), Some("[15:0]"));
        assert_eq!(names(&interner, &m.decls[0].names), ["a", "b"]);
        assert_eq!(m.decls[1].kind, NetKind::Reg);
        assert!(m.decls[1].width.is_none());
    }

    #[test]
    fn continuous_assign_harvests_rhs() {
        let (model, interner) =
            parse_clean("module m; wire y, a, b; assign y = a & ~b | 4'b1010; endmodule");
        let m = &model.modules[0];
        assert_eq!(m.assigns.len(), 1);
        let a = &m.assigns[0];
        assert_eq!(a.kind, AssignKind::Continuous);
        assert_eq!(interner.resolve(a.target.unwrap().name), "y");
        assert_eq!(names(&interner, &a.rhs), ["a", "b"]);
    }

    #[test]
    fn indexed_target_keeps_index_reads() {
        let (model, interner) = parse_clean("module m; assign mem[addr] = din; endmodule");
        let a = &model.modules[0].assigns[0];
        assert_eq!(interner.resolve(a.target.unwrap().name), "mem");
        assert_eq!(names(&interner, &a.rhs), ["addr", "din"]);
    }

    #[test]
    fn concatenation_target_degrades_to_reads() {
        let (model, interner) = parse_clean("module m; assign {co, sum} = a + b; endmodule");
        let m = &model.modules[0];
        assert!(m.assigns.is_empty());
        assert_eq!(names(&interner, &m.reads), ["co", "sum", "a", "b"]);
    }

    #[test]
    fn always_block_with_sensitivity() {
        let (model, interner) = parse_clean(
            "module m;\nreg q;\nalways @(posedge clk or negedge rst_n) begin\n  q <= d;\nend\nendmodule",
        );
        let m = &model.modules[0];
        assert_eq!(names(&interner, &m.reads), ["clk", "rst_n"]);
        assert_eq!(m.assigns.len(), 1);
        let a = &m.assigns[0];
        assert_eq!(a.kind, AssignKind::Procedural(BlockKind::Always));
        assert_eq!(interner.resolve(a.target.unwrap().name), "q");
        assert_eq!(names(&interner, &a.rhs), ["d"]);
    }

    #[test]
    fn star_sensitivity_forms() {
        for src in [
            "module m; always @* q = d; endmodule",
            "module m; always @(*) q = d; endmodule",
        ] {
            let (model, interner) = parse_clean(src);
            let m = &model.modules[0];
            assert!(m.reads.is_empty(), "{src}");
            assert_eq!(interner.resolve(m.assigns[0].target.unwrap().name), "q");
        }
    }

    #[test]
    fn initial_block_kind() {
        let (model, _) = parse_clean("module m; initial q = 0; endmodule");
        assert_eq!(
            model.modules[0].assigns[0].kind,
            AssignKind::Procedural(BlockKind::Initial)
        );
    }

    #[test]
    fn blocking_and_nonblocking_are_both_procedural() {
        let (model, _) =
            parse_clean("module m; always @(*) begin a = 1; b <= 2; end endmodule");
        let m = &model.modules[0];
        assert_eq!(m.assigns.len(), 2);
        assert!(m
            .assigns
            .iter()
            .all(|a| a.kind == AssignKind::Procedural(BlockKind::Always)));
    }

    #[test]
    fn if_and_case_conditions_are_reads() {
        let (model, interner) = parse_clean(
            "module m;\nalways @(*) begin\n  if (en) q = d;\n  else case (sel)\n    2'b00: q = x0;\n    default: q = x1;\n  endcase\nend\nendmodule",
        );
        let m = &model.modules[0];
        assert_eq!(names(&interner, &m.reads), ["en", "sel"]);
        assert_eq!(m.assigns.len(), 3);
    }

    #[test]
    fn case_label_identifiers_are_reads() {
        let (model, interner) = parse_clean(
            "module m; always @(*) case (s) IDLE_STATE: q = 0; endcase endmodule",
        );
        let m = &model.modules[0];
        assert_eq!(names(&interner, &m.reads), ["s", "IDLE_STATE"]);
    }

    #[test]
    fn parameters_are_not_signal_references() {
        let (model, interner) = parse_clean(
            "module m #(parameter WIDTH = 8) ();\n  localparam DEPTH = 4;\n  wire [WIDTH-1:0] bus;\n  assign bus = DEPTH;\nendmodule",
        );
        let m = &model.modules[0];
        assert_eq!(m.assigns.len(), 1);
        assert!(m.assigns[0].rhs.is_empty());
        assert!(m.reads.is_empty());
        assert_eq!(names(&interner, &m.decls[0].names), ["bus"]);
    }

    #[test]
    fn integer_loop_variable_is_invisible() {
        let (model, interner) = parse_clean(
            "module m;\nreg [7:0] acc;\ninteger i;\ninitial for (i = 0; i < 8; i = i + 1) acc = acc + i;\nendmodule",
        );
        let m = &model.modules[0];
        assert_eq!(m.assigns.len(), 1);
        assert_eq!(interner.resolve(m.assigns[0].target.unwrap().name), "acc");
        assert_eq!(names(&interner, &m.assigns[0].rhs), ["acc"]);
        assert!(m.reads.is_empty());
    }

    #[test]
    fn system_task_arguments_are_reads() {
        let (model, interner) =
            parse_clean("module m; initial $display(\"%d\", counter); endmodule");
        assert_eq!(names(&interner, &model.modules[0].reads), ["counter"]);
    }

    #[test]
    fn multiple_modules_in_one_file() {
        let (model, interner) = parse_clean("module a; endmodule\nmodule b; endmodule");
        assert_eq!(model.modules.len(), 2);
        assert_eq!(interner.resolve(model.modules[0].name), "a");
        assert_eq!(interner.resolve(model.modules[1].name), "b");
    }

    #[test]
    fn bad_statement_recovers_within_module() {
        let (model, diags, interner) =
            parse("module m; wire w; ??? bad ; assign w = 1; endmodule");
        assert!(!diags.is_empty());
        let m = &model.modules[0];
        assert_eq!(m.assigns.len(), 1);
        assert_eq!(interner.resolve(m.assigns[0].target.unwrap().name), "w");
    }

    #[test]
    fn missing_endmodule_reports_error() {
        let (model, diags, _) = parse("module m; wire w;");
        assert_eq!(model.modules.len(), 1);
        assert!(diags
            .iter()
            .any(|d| d.message.contains("missing 'endmodule'")));
    }

    #[test]
    fn garbage_before_module_is_skipped() {
        let (model, diags, interner) = parse("wire x; module m; endmodule");
        assert!(!diags.is_empty());
        assert_eq!(model.modules.len(), 1);
        assert_eq!(interner.resolve(model.modules[0].name), "m");
    }

    #[test]
    fn module_span_covers_declaration() {
        let src = "module m; endmodule";
        let (model, _) = parse_clean(src);
        let span = model.modules[0].span;
        assert_eq!(span.start, 0);
        assert_eq!(span.end, src.len() as u32);
    }
}
