//! Console encoding: turns controller notifications into styled bytes.
//!
//! Everything here writes into a caller-owned `Vec<u8>` via crossterm commands
//! and never touches stdout, so output can be assembled, tested, and flushed
//! in one write.

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::style::{Rgb, Tone};
use crate::types::DrawResult;

pub const BANNER: &str = "Guess the secret number! Type a number, `r` for a new round, `q` to quit.";
pub const NEW_ROUND: &str = "Starting a new round.";
pub const PROMPT: &str = "> ";

/// Tone and text shown for an attempt outcome.
pub fn outcome_line(outcome: DrawResult) -> (Tone, &'static str) {
    match outcome {
        DrawResult::Correct => (Tone::Success, "You won! That was the secret number."),
        DrawResult::TooLow => (Tone::Hint, "Your number is too small."),
        DrawResult::TooHigh => (Tone::Hint, "Your number is too big."),
        DrawResult::NoMoreAttempts => (Tone::Error, "You lost, no attempts left."),
    }
}

/// Encode a single styled line into `out`.
pub fn encode_line_into(out: &mut Vec<u8>, tone: Tone, text: &str) -> Result<()> {
    apply_tone_into(out, tone)?;
    out.queue(Print(text))?;
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(Print("\n"))?;
    Ok(())
}

pub fn encode_outcome_into(out: &mut Vec<u8>, outcome: DrawResult) -> Result<()> {
    let (tone, text) = outcome_line(outcome);
    encode_line_into(out, tone, text)
}

pub fn encode_prompt_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(Print(PROMPT))?;
    Ok(())
}

fn apply_tone_into(out: &mut Vec<u8>, tone: Tone) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(tone.fg())))?;
    if tone.bold() {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(bytes: &[u8]) -> String {
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn line_contains_text_and_trailing_newline() {
        let mut out = Vec::new();
        encode_line_into(&mut out, Tone::Warning, "careful").unwrap();
        let s = text(&out);
        assert!(s.contains("careful"));
        assert!(s.ends_with('\n'));
        // Styled: starts with an escape sequence.
        assert!(s.starts_with('\u{1b}'));
    }

    #[test]
    fn outcomes_use_their_own_line() {
        let mut out = Vec::new();
        encode_outcome_into(&mut out, DrawResult::Correct).unwrap();
        assert!(text(&out).contains("You won!"));

        out.clear();
        encode_outcome_into(&mut out, DrawResult::TooLow).unwrap();
        assert!(text(&out).contains("too small"));
        assert_eq!(text(&out).matches('\n').count(), 1);
    }

    #[test]
    fn tone_colour_conversion() {
        let fg = Tone::Error.fg();
        assert_eq!(
            rgb_to_color(fg),
            Color::Rgb {
                r: fg.r,
                g: fg.g,
                b: fg.b
            }
        );
    }
}
