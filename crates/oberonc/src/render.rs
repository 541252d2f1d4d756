//! Renders diagnostics against the source text they point into

use oberon_tokens::Diagnostic;
use owo_colors::{OwoColorize, Stream, Style};
use std::fmt::{Display, Write};

/// Formats a [Diagnostic] as a header, its location, and the offending source line with a caret
/// under the column.
///
/// ```text
/// error[parse]: expected `;`, found `}`
///  --> main.ob:2:12
///   |
/// 1 | function f() {
/// 2 |   return 1 }
///   |            ^
/// 3 |
/// ```
#[derive(Debug, Clone)]
pub struct DiagnosticRenderer {
    context: usize,
    stream: Option<Stream>,
}

impl Default for DiagnosticRenderer {
    fn default() -> Self {
        Self {
            context: 1,
            stream: None,
        }
    }
}

impl DiagnosticRenderer {
    /// Creates a renderer that never colors its output
    pub fn new() -> Self {
        Self::default()
    }

    /// How many lines to show either side of the offending line
    pub fn context(mut self, lines: usize) -> Self {
        self.context = lines;
        self
    }

    /// Colors output when `stream` supports it
    pub fn colored(mut self, stream: Stream) -> Self {
        self.stream = Some(stream);
        self
    }

    fn paint(&self, text: impl Display, style: Style) -> String {
        match self.stream {
            Some(stream) => text
                .if_supports_color(stream, |t| t.style(style))
                .to_string(),
            None => text.to_string(),
        }
    }

    /// Renders a diagnostic. Without `source` only the header and location are written.
    pub fn render(&self, diagnostic: &dyn Diagnostic, source: Option<&str>) -> String {
        let mut out = String::new();
        // writing into a String never fails
        let _ = self.render_into(&mut out, diagnostic, source);
        out
    }

    fn render_into(
        &self,
        f: &mut String,
        diagnostic: &dyn Diagnostic,
        source: Option<&str>,
    ) -> std::fmt::Result {
        let error = Style::new().red().bold();
        let gutter = Style::new().blue().bold();
        let location = diagnostic.location();

        writeln!(
            f,
            "{}: {}",
            self.paint(format_args!("error[{}]", diagnostic.kind()), error),
            self.paint(diagnostic.message(), Style::new().bold())
        )?;

        let Some(source) = source else {
            return writeln!(f, " {} {location}", self.paint("-->", gutter));
        };
        let lines = source.lines().collect::<Vec<_>>();
        let base = location.line();
        if base == 0 || base > lines.len().max(1) {
            return writeln!(f, " {} {location}", self.paint("-->", gutter));
        }

        let first = base.saturating_sub(self.context).max(1);
        let last = (base + self.context).min(lines.len().max(1));
        let width = last.to_string().len();
        writeln!(
            f,
            "{:width$}{} {location}",
            "",
            self.paint("-->", gutter)
        )?;
        writeln!(f, "{:width$} {}", "", self.paint("|", gutter))?;
        for line in first..=last {
            let text = lines.get(line - 1).copied().unwrap_or("");
            let number = self.paint(format_args!("{line:>width$} |"), gutter);
            if text.trim_end().is_empty() {
                writeln!(f, "{number}")?;
            } else {
                writeln!(f, "{number} {}", text.trim_end())?;
            }
            if line == base {
                let offset = text
                    .chars()
                    .take(location.column().saturating_sub(1))
                    .map(|c| if c == '\t' { '\t' } else { ' ' })
                    .collect::<String>();
                let padding = " ".repeat(
                    location.column().saturating_sub(1) - offset.chars().count(),
                );
                writeln!(
                    f,
                    "{:width$} {} {offset}{padding}{}",
                    "",
                    self.paint("|", gutter),
                    self.paint("^", error)
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oberon_ast_parsing::parse_unit;

    fn render(file: &str, text: &str) -> String {
        let error = parse_unit(file, text).unwrap_err();
        DiagnosticRenderer::new().render(&error, Some(text))
    }

    #[test]
    fn test_render_with_context() {
        let rendered = render("main.ob", "function f() {\n  return 1 }\n\n");
        assert_eq!(
            rendered,
            "error[parse]: expected `;`, found `}`\n\
             \x20--> main.ob:2:12\n\
             \x20 |\n\
             1 | function f() {\n\
             2 |   return 1 }\n\
             \x20 |            ^\n\
             3 |\n"
        );
    }

    #[test]
    fn test_render_first_line() {
        let rendered = render("lex.ob", "#");
        assert_eq!(
            rendered,
            "error[lex]: invalid character '#'\n\
             \x20--> lex.ob:1:1\n\
             \x20 |\n\
             1 | #\n\
             \x20 | ^\n"
        );
    }

    #[test]
    fn test_tabs_kept_under_caret() {
        let rendered = render("tab.ob", "\t@");
        assert!(rendered.contains("1 | \t@\n  | \t^\n"), "{rendered}");
    }

    #[test]
    fn test_render_without_source() {
        let error = parse_unit("gone.ob", "function").unwrap_err();
        let rendered = DiagnosticRenderer::new().render(&error, None);
        assert_eq!(
            rendered,
            "error[parse]: unexpected end of input, expected identifier\n --> gone.ob:1:9\n"
        );
    }

    #[test]
    fn test_no_context() {
        let text = "function f() {\n  x = ;\n}";
        let error = parse_unit("ctx.ob", text).unwrap_err();
        let rendered = DiagnosticRenderer::new().context(0).render(&error, Some(text));
        assert!(!rendered.contains("function f()"), "{rendered}");
        assert!(rendered.contains("2 |   x = ;\n"), "{rendered}");
    }
}
