//! Welcome banner: "HENRY" in figlet's standard font, shaded left to right
//! like a rising chart, underlined by a ledger rule and a centered tagline.

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{self, Write, stdout};

type Rgb = (u8, u8, u8);

/// Savanna orange (#f39c12).
const SAVANNA: Rgb = (0xf3, 0x9c, 0x12);
/// Ocean teal (#16a085).
const OCEAN: Rgb = (0x16, 0xa0, 0x85);

const TAGLINE: &str = "business ledger & advisor";

fn shade(from: Rgb, to: Rgb, t: f64) -> Rgb {
    let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    (mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

fn render_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("HENRY").map(|figure| figure.to_string()))
        .unwrap_or_else(|| "HENRY\n".to_string())
}

/// Lines of the figure without the blank padding rows figlet appends.
fn art_lines(art: &str) -> Vec<&str> {
    art.lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .collect()
}

fn width_of(lines: &[&str]) -> usize {
    lines.iter().map(|l| l.chars().count()).max().unwrap_or(0)
}

fn centered(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.chars().count()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Column `col` of a figure `width` wide, as a colour on the orange-to-teal ramp.
fn column_color(col: usize, width: usize) -> Color {
    let t = if width <= 1 {
        1.0
    } else {
        col as f64 / (width - 1) as f64
    };
    let (r, g, b) = shade(SAVANNA, OCEAN, t);
    Color::Rgb { r, g, b }
}

fn write_banner(out: &mut impl Write) -> io::Result<()> {
    let art = render_art();
    let lines = art_lines(&art);
    let width = width_of(&lines).max(TAGLINE.len());

    for line in &lines {
        for (col, ch) in line.chars().enumerate() {
            queue!(out, SetForegroundColor(column_color(col, width)), Print(ch))?;
        }
        queue!(out, Print("\r\n"))?;
    }

    let rule: String = "─".repeat(width);
    let footer = format!("v{} · {}", env!("CARGO_PKG_VERSION"), TAGLINE);
    queue!(
        out,
        SetForegroundColor(column_color(width, width)),
        Print(rule),
        Print("\r\n"),
        Print(centered(&footer, width)),
        Print("\r\n"),
        ResetColor
    )?;
    out.flush()
}

/// Prints the banner to stdout. Terminal write failures are ignored.
pub fn print_welcome() {
    let _ = write_banner(&mut stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_endpoints() {
        assert_eq!(shade(SAVANNA, OCEAN, 0.0), SAVANNA);
        assert_eq!(shade(SAVANNA, OCEAN, 1.0), OCEAN);
    }

    #[test]
    fn test_art_has_no_blank_rows() {
        let art = render_art();
        let lines = art_lines(&art);
        assert!(!lines.is_empty());
        assert!(lines.iter().all(|l| !l.trim().is_empty()));
    }

    #[test]
    fn test_centered() {
        assert_eq!(centered("ab", 6), "  ab");
        assert_eq!(centered("too long", 3), "too long");
    }

    #[test]
    fn test_banner_ends_with_tagline() {
        let mut buf = Vec::new();
        write_banner(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("─"));
        assert!(text.contains(TAGLINE));
    }
}
