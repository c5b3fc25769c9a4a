//! Startup banner: "MEETOP" in figlet's standard font with a two-color gradient.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Meetup red (#f65858).
const MEETUP_RED: (u8, u8, u8) = (0xf6, 0x58, 0x58);
/// Slack aubergine (#611f69).
const AUBERGINE: (u8, u8, u8) = (0x61, 0x1f, 0x69);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Falls back to a plain title line when the font cannot be loaded.
fn banner_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("MEETOP").map(|f| f.to_string()))
        .unwrap_or_else(|| "MEETOP\n".to_string())
}

pub fn print_welcome() {
    let mut out = stdout();
    let art = banner_art();
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(MEETUP_RED, AUBERGINE, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\n"));
        let _ = out.execute(ResetColor);
    }

    let _ = out.execute(Print(format!(
        "v{}  create once, announce everywhere\n\n",
        env!("CARGO_PKG_VERSION")
    )));
    let _ = out.flush();
}
