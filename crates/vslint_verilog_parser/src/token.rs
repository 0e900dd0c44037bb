//! Token types for the restricted Verilog lexer.
//!
//! Only the keywords that shape declarations, assignments, and procedural
//! blocks get their own variants. Every other reserved word lexes as
//! [`TokenKind::OtherKeyword`] so it can never be mistaken for a signal
//! name, which is all the signal rules need.

use serde::{Deserialize, Serialize};
use vslint_source::Span;

/// A token kind in the restricted Verilog subset.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TokenKind {
    // === Structural keywords ===
    /// `module`
    Module,
    /// `endmodule`
    Endmodule,
    /// `input`
    Input,
    /// `output`
    Output,
    /// `inout`
    Inout,
    /// `wire`
    Wire,
    /// `reg`
    Reg,
    /// `assign`
    Assign,
    /// `always`
    Always,
    /// `initial`
    Initial,
    /// `begin`
    Begin,
    /// `end`
    End,
    /// `if`
    If,
    /// `else`
    Else,
    /// `case`, `casex`, or `casez`
    Case,
    /// `endcase`
    Endcase,
    /// `default`
    Default,
    /// `for`
    For,
    /// `while`
    While,
    /// `repeat`
    Repeat,
    /// `forever`
    Forever,
    /// `posedge`
    Posedge,
    /// `negedge`
    Negedge,
    /// `or` (in sensitivity lists)
    Or,
    /// `signed` or `unsigned`
    Signedness,
    /// `parameter`
    Parameter,
    /// `localparam`
    Localparam,
    /// `integer`, `real`, `time`, `realtime`, or `genvar`
    VarType,
    /// Any other reserved word; never a signal name.
    OtherKeyword,

    // === Names and literals ===
    /// An ordinary or escaped identifier.
    Identifier,
    /// A decimal, sized, or based numeric literal (`42`, `4'b1010`, `'hFF`).
    Number,
    /// A string literal.
    StringLit,
    /// A system identifier (`$display`, `$time`).
    SystemIdent,

    // === Punctuation and operators ===
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `;`
    Semi,
    /// `:`
    Colon,
    /// `@`
    At,
    /// `#`
    Hash,
    /// `=` (plain assignment, not `==`)
    Eq,
    /// `<=` (non-blocking assignment or comparison)
    LtEq,
    /// Any other operator (`+`, `==`, `&&`, `>>`, `?`, ...).
    Op,

    // === Control ===
    /// End of file.
    Eof,
    /// A byte sequence the lexer could not tokenize.
    Error,
}

/// A token paired with its source span.
///
/// Token text is not stored; identifier spellings are recovered from the
/// source via the span.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Token {
    /// The token kind.
    pub kind: TokenKind,
    /// The source range of the token.
    pub span: Span,
}

/// Maps an identifier spelling to its keyword token, if it is reserved.
///
/// The reserved set matches IEEE 1364 so that keywords in skipped
/// constructs (`generate`, `task`, gate primitives) never leak into the
/// model as signal references.
pub fn lookup_keyword(text: &str) -> Option<TokenKind> {
    Some(match text {
        "module" => TokenKind::Module,
        "endmodule" => TokenKind::Endmodule,
        "input" => TokenKind::Input,
        "output" => TokenKind::Output,
        "inout" => TokenKind::Inout,
        "wire" => TokenKind::Wire,
        "reg" => TokenKind::Reg,
        "assign" => TokenKind::Assign,
        "always" => TokenKind::Always,
        "initial" => TokenKind::Initial,
        "begin" => TokenKind::Begin,
        "end" => TokenKind::End,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "case" | "casex" | "casez" => TokenKind::Case,
        "endcase" => TokenKind::Endcase,
        "default" => TokenKind::Default,
        "for" => TokenKind::For,
        "while" => TokenKind::While,
        "repeat" => TokenKind::Repeat,
        "forever" => TokenKind::Forever,
        "posedge" => TokenKind::Posedge,
        "negedge" => TokenKind::Negedge,
        "or" => TokenKind::Or,
        "signed" | "unsigned" => TokenKind::Signedness,
        "parameter" => TokenKind::Parameter,
        "localparam" => TokenKind::Localparam,
        "integer" | "real" | "time" | "realtime" | "genvar" => TokenKind::VarType,
        "and" | "not" | "xor" | "nor" | "nand" | "xnor" | "buf" | "bufif0" | "bufif1"
        | "notif0" | "notif1" | "defparam" | "task" | "endtask" | "function" | "endfunction"
        | "generate" | "endgenerate" | "fork" | "join" | "supply0" | "supply1" | "tri"
        | "tri0" | "tri1" | "wand" | "wor" | "trireg" | "disable" | "deassign" | "force"
        | "release" | "wait" | "automatic" | "edge" | "scalared" | "vectored" | "specify"
        | "endspecify" | "small" | "medium" | "large" | "macromodule" | "primitive"
        | "endprimitive" | "table" | "endtable" | "event" | "highz0" | "highz1" | "pull0"
        | "pull1" | "pulldown" | "pullup" | "rcmos" | "rnmos" | "rpmos" | "rtran"
        | "rtranif0" | "rtranif1" | "tran" | "tranif0" | "tranif1" | "cmos" | "nmos"
        | "pmos" | "strong0" | "strong1" | "weak0" | "weak1" | "ifnone" | "incdir"
        | "include" | "instance" | "liblist" | "library" | "use" | "cell" | "config"
        | "endconfig" | "design" | "noshowcancelled" | "pulsestyle_ondetect"
        | "pulsestyle_onevent" | "showcancelled" | "specparam" => TokenKind::OtherKeyword,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_keywords_have_variants() {
        assert_eq!(lookup_keyword("module"), Some(TokenKind::Module));
        assert_eq!(lookup_keyword("assign"), Some(TokenKind::Assign));
        assert_eq!(lookup_keyword("reg"), Some(TokenKind::Reg));
        assert_eq!(lookup_keyword("casez"), Some(TokenKind::Case));
        assert_eq!(lookup_keyword("genvar"), Some(TokenKind::VarType));
    }

    #[test]
    fn other_reserved_words_are_keywords() {
        assert_eq!(lookup_keyword("task"), Some(TokenKind::OtherKeyword));
        assert_eq!(lookup_keyword("generate"), Some(TokenKind::OtherKeyword));
        assert_eq!(lookup_keyword("pullup"), Some(TokenKind::OtherKeyword));
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(lookup_keyword("Module"), None);
        assert_eq!(lookup_keyword("WIRE"), None);
    }

    #[test]
    fn ordinary_names_are_not_keywords() {
        assert_eq!(lookup_keyword("clk"), None);
        assert_eq!(lookup_keyword("dout"), None);
        assert_eq!(lookup_keyword("regfile"), None);
    }
}
