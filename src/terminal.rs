//! Terminal queries and styled line output.

use crossterm::style::{Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{queue, terminal};
use ratatui::style::{Color, Modifier};
use ratatui::text::Line;
use std::io::{self, Stdout, Write};

/// Get the current terminal width, falling back to 80 if unavailable.
pub fn terminal_width() -> u16 {
    terminal::size().map(|(w, _)| w).unwrap_or(80)
}

/// Create a BufWriter wrapping stdout with a generous buffer.
pub fn buffered_stdout() -> io::BufWriter<Stdout> {
    io::BufWriter::with_capacity(64 * 1024, io::stdout())
}

/// Write lines to `writer`, one per row.
///
/// With `use_color`, span styles become ANSI sequences and every span is
/// followed by a reset; otherwise only the text is written. The caller
/// flushes.
pub fn write_lines<W: Write>(writer: &mut W, lines: &[Line<'_>], use_color: bool) -> io::Result<()> {
    for line in lines {
        for span in &line.spans {
            if !use_color {
                write!(writer, "{}", span.content)?;
                continue;
            }
            let style = span.style;
            if let Some(fg) = style.fg {
                queue!(writer, SetForegroundColor(to_term_color(fg)))?;
            }
            if style.add_modifier.contains(Modifier::BOLD) {
                queue!(writer, SetAttribute(Attribute::Bold))?;
            }
            if style.add_modifier.contains(Modifier::DIM) {
                queue!(writer, SetAttribute(Attribute::Dim))?;
            }
            queue!(
                writer,
                Print(&span.content),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// ratatui names the bright palette `Light*`; crossterm names the normal one `Dark*`.
fn to_term_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
    }
}
