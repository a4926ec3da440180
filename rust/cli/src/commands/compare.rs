//! Compare command handler.
//!
//! Evaluates two hands and reports the result from the first hand's side.

use crate::commands::eval::hand_json;
use crate::error::CliError;
use crate::formatters::{CardStyle, format_evaluated};
use pokerhand_engine::hand::Hand;
use std::io::Write;

pub fn handle_compare_command(
    hand: &str,
    against: &str,
    json: bool,
    style: CardStyle,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let first = Hand::parse(hand)?;
    let second = Hand::parse(against)?;
    let outcome = first.compare(&second);

    if json {
        let v = serde_json::json!({
            "hand": hand_json(&first),
            "against": hand_json(&second),
            "result": outcome.label(),
        });
        writeln!(out, "{}", v)?;
    } else {
        writeln!(out, "Hand: {}", format_evaluated(&first, style))?;
        writeln!(out, "Against: {}", format_evaluated(&second, style))?;
        writeln!(out, "Result: {}", outcome)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_two_pair_by_top_pair() {
        let mut out = Vec::new();
        handle_compare_command(
            "Ts Td 6d 2s 2h",
            "Qs Qd 5d 5h Tc",
            false,
            CardStyle::Ascii,
            &mut out,
        )
        .unwrap();
        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Hand: [Ts Td 2s 2h 6d] two pair");
        assert_eq!(lines[1], "Against: [Qs Qd 5d 5h Tc] two pair");
        assert_eq!(lines[2], "Result: lose");
    }

    #[test]
    fn test_compare_json_draw() {
        let mut out = Vec::new();
        handle_compare_command(
            "Ah Jd 9h 3h 2h",
            "As Jc 9c 3d 2s",
            true,
            CardStyle::Ascii,
            &mut out,
        )
        .unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["result"], "draw");
        assert_eq!(v["hand"]["category"], "high card");
    }

    #[test]
    fn test_compare_reports_bad_rival() {
        let mut out = Vec::new();
        let result = handle_compare_command(
            "Ah Jd 9h 3h 2h",
            "As Jc 9c 3d",
            false,
            CardStyle::Ascii,
            &mut out,
        );
        assert!(matches!(result, Err(CliError::Hand(_))));
    }
}
