use crate::source::floor_char_boundary;
use crate::{Diagnostic, SourceFile};

fn push_caret_line(out: &mut String, indent: &str, line_text: &str, col: u32) {
    out.push('\n');
    out.push_str(indent);
    out.push_str(line_text);
    out.push('\n');
    out.push_str(indent);
    out.extend(std::iter::repeat_n(' ', col as usize));
    out.push('^');
}

/// Render one diagnostic as `Error:line:col: file: message` plus a source
/// excerpt with a caret under the offending column.
pub fn render_diagnostic(source: &SourceFile, diag: &Diagnostic) -> String {
    let text = source.text.as_str();
    let mut out = String::new();
    match diag.span {
        Some(span) => {
            let start = floor_char_boundary(text, span.start.0 as usize);
            let (line, col) = source.text.line_col(start as u32);
            out.push_str(&format!(
                "Error:{}:{}: {}: {}",
                line + 1,
                col + 1,
                source.name,
                diag.message
            ));
            push_caret_line(&mut out, "  | ", source.text.line_text(start), col);
        }
        None => {
            out.push_str(&format!("Error: {}: {}", source.name, diag.message));
        }
    }
    for label in &diag.labels {
        let lstart = floor_char_boundary(text, label.span.start.0 as usize);
        let (ll, lc) = source.text.line_col(lstart as u32);
        out.push_str("\n  = note: ");
        out.push_str(&label.message);
        push_caret_line(&mut out, "    | ", source.text.line_text(lstart), lc);
        out.push_str(&format!("  ({}:{}:{})", source.name, ll + 1, lc + 1));
    }
    if let Some(h) = &diag.help {
        out.push_str("\n  = help: ");
        out.push_str(h);
    }
    out
}

pub fn render_diagnostics(source: &SourceFile, diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| render_diagnostic(source, d))
        .collect::<Vec<_>>()
        .join("\n")
}
