//! Hex color arithmetic for derived avatar shades.

/// Parses `#rrggbb` (either case) into its three channels.
///
/// Returns `None` for anything that is not a `#` followed by exactly six hex digits.
pub fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    Some([(value >> 16) as u8, (value >> 8) as u8, value as u8])
}

/// Shifts every channel of a hex color by `amount`, clamping to `0..=255`.
///
/// The result is always `#rrggbb` in lowercase. Input that does not parse
/// as a six-digit hex color is returned unchanged, so the function is total.
///
/// # Arguments
///
/// * `hex` - Base color, e.g. `#E0A370`
/// * `amount` - Signed per-channel offset (`-30` for a shadow, `20` for a highlight)
pub fn adjust_brightness(hex: &str, amount: i16) -> String {
    let Some(channels) = parse_hex(hex) else {
        return hex.to_string();
    };

    let [r, g, b] = channels.map(|c| (c as i16 + amount).clamp(0, 255) as u8);
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darken_and_lighten() {
        assert_eq!(adjust_brightness("#E0A370", -30), "#c28552");
        assert_eq!(adjust_brightness("#E0A370", 20), "#f4b784");
    }

    #[test]
    fn test_clamps_each_channel() {
        assert_eq!(adjust_brightness("#FFFFFF", 20), "#ffffff");
        assert_eq!(adjust_brightness("#000000", -30), "#000000");
        assert_eq!(adjust_brightness("#FF0010", 20), "#ff1424");
        assert_eq!(adjust_brightness("#05FF80", -10), "#00f576");
    }

    #[test]
    fn test_output_is_lowercase_and_padded() {
        assert_eq!(adjust_brightness("#0A0B0C", 0), "#0a0b0c");
        assert_eq!(adjust_brightness("#2C1810", -20), "#180400");
    }

    #[test]
    fn test_symmetric_when_channels_stay_in_range() {
        let base = "#8d5524";
        let shifted = adjust_brightness(base, 15);
        assert_eq!(adjust_brightness(&shifted, -15), base);
    }

    #[test]
    fn test_invalid_input_is_returned_unchanged() {
        for input in ["", "#", "E0A370", "#E0A37", "#E0A3700", "#GGGGGG", "rgb(0,0,0)", "#ÿÿÿ"] {
            assert_eq!(adjust_brightness(input, 20), input);
        }
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#FF6B35"), Some([0xff, 0x6b, 0x35]));
        assert_eq!(parse_hex("#ff6b35"), Some([0xff, 0x6b, 0x35]));
        assert_eq!(parse_hex("ff6b35"), None);
    }
}
