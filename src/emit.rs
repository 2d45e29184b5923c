//! Literal-table rendering.
//!
//! Produces the body of the two-level map literal that follows the anchor
//! line, closing brace included:
//!
//! ```text
//! 	"female": {
//! 		"fc01": "Loli",
//! 	},
//! }
//! ```

use std::fmt::Write as _;

use crate::normalize::NormalizedTable;

/// Render `table` in its own iteration order. Total and deterministic.
pub fn render_table(table: &NormalizedTable) -> String {
    let mut out = String::new();

    for (category, labels) in table.iter() {
        out.push('\t');
        push_quoted(&mut out, category);
        out.push_str(": {\n");

        for (code, label) in labels {
            out.push_str("\t\t");
            push_quoted(&mut out, code);
            out.push_str(": ");
            push_quoted(&mut out, label);
            out.push_str(",\n");
        }

        out.push_str("\t},\n");
    }

    out.push_str("}\n");
    out
}

/// Double-quoted string literal with Go-style escapes.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    push_quoted(&mut out, s);
    out
}

fn push_quoted(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0B}' => out.push_str("\\v"),
            c if c.is_control() || is_invisible(c) => {
                let code = c as u32;
                // Writing into a String cannot fail
                let _ = if code < 0x80 {
                    write!(out, "\\x{code:02x}")
                } else if code <= 0xFFFF {
                    write!(out, "\\u{code:04x}")
                } else {
                    write!(out, "\\U{code:08x}")
                };
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Non-ASCII separators and format characters that would render as nothing
/// (or as plain space) inside the generated literal.
fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{a0}'
            | '\u{ad}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200f}'
            | '\u{2028}'..='\u{202f}'
            | '\u{205f}'..='\u{2064}'
            | '\u{3000}'
            | '\u{feff}'
            | '\u{e0001}'..='\u{e007f}'
    )
}
