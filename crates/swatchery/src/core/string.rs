use crate::error::InvalidColorError;

/// Normalize a hexadecimal color code.
///
/// This function trims surrounding white space, strips at most one leading
/// `#`, trims again, and lower-cases the remaining digits. Hence `# fff` is
/// as valid as `#fff `. It then expands three- and
/// four-digit codes by doubling each of the first three digits, passes
/// six-digit codes through, and truncates eight-digit codes to six digits.
/// Alpha digits are dropped either way. The result always is a six-digit,
/// lower-case code without `#`.
///
/// The number of characters is checked before the characters themselves.
/// Hence `#55555` fails with [`InvalidColorError::UnexpectedLength`], whereas
/// `ffffxx` fails with [`InvalidColorError::MalformedHex`].
pub fn normalize_hex(s: &str) -> Result<String, InvalidColorError> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s).trim();

    let length = s.chars().count();
    if !matches!(length, 3 | 4 | 6 | 8) {
        return Err(InvalidColorError::UnexpectedLength(length));
    } else if !s.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(InvalidColorError::MalformedHex);
    }

    let s = s.to_ascii_lowercase();
    Ok(match length {
        3 | 4 => s.chars().take(3).flat_map(|c| [c, c]).collect(),
        8 => s[..6].to_owned(),
        _ => s,
    })
}

/// Parse a hexadecimal color code into its three 8-bit RGB components.
///
/// The code is [normalized](normalize_hex) first, so this function accepts
/// everything that function does.
pub fn parse_hex(s: &str) -> Result<[u8; 3], InvalidColorError> {
    let hex = normalize_hex(s)?;

    fn parse_byte(hex: &str, index: usize) -> Result<u8, InvalidColorError> {
        let t = hex
            .get(2 * index..2 * index + 2)
            .ok_or(InvalidColorError::MalformedHex)?;
        u8::from_str_radix(t, 16).map_err(|_| InvalidColorError::MalformedHex)
    }

    let r = parse_byte(&hex, 0)?;
    let g = parse_byte(&hex, 1)?;
    let b = parse_byte(&hex, 2)?;
    Ok([r, g, b])
}

/// Format three 8-bit RGB components as a six-digit, lower-case hexadecimal
/// color code without `#`.
pub fn format_hex(rgb: [u8; 3]) -> String {
    let [r, g, b] = rgb;
    format!("{:02x}{:02x}{:02x}", r, g, b)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{format_hex, normalize_hex, parse_hex};
    use crate::error::InvalidColorError;

    #[test]
    fn test_normalize() -> Result<(), InvalidColorError> {
        assert_eq!(normalize_hex("f1d35a")?, "f1d35a");
        assert_eq!(normalize_hex("Ab1")?, "aabb11");
        assert_eq!(normalize_hex("#FFF")?, "ffffff");
        assert_eq!(normalize_hex("#1234")?, "112233");
        assert_eq!(normalize_hex("12345678")?, "123456");
        assert_eq!(normalize_hex("  #C0FFEE \n")?, "c0ffee");
        Ok(())
    }

    #[test]
    fn test_normalize_white_space_around_hash() -> Result<(), InvalidColorError> {
        assert_eq!(normalize_hex("# fff")?, "ffffff");
        assert_eq!(normalize_hex(" # C0FFEE\t")?, "c0ffee");
        assert_eq!(normalize_hex("#\n123456")?, "123456");

        // Inner white space still counts, and only one hash is stripped.
        assert_eq!(normalize_hex("f f f"), Err(InvalidColorError::UnexpectedLength(5)));
        assert_eq!(normalize_hex("# #fff"), Err(InvalidColorError::MalformedHex));
        Ok(())
    }

    #[test]
    fn test_normalize_errors() {
        assert_eq!(
            normalize_hex("#1"),
            Err(InvalidColorError::UnexpectedLength(1))
        );
        assert_eq!(
            normalize_hex("22"),
            Err(InvalidColorError::UnexpectedLength(2))
        );
        assert_eq!(
            normalize_hex("#55555"),
            Err(InvalidColorError::UnexpectedLength(5))
        );
        assert_eq!(
            normalize_hex("7777777"),
            Err(InvalidColorError::UnexpectedLength(7))
        );
        assert_eq!(
            normalize_hex("#999999999"),
            Err(InvalidColorError::UnexpectedLength(9))
        );
        assert_eq!(normalize_hex(""), Err(InvalidColorError::UnexpectedLength(0)));
        // Only one hash is stripped.
        assert_eq!(normalize_hex("##fff"), Err(InvalidColorError::MalformedHex));
        assert_eq!(normalize_hex("ffffxx"), Err(InvalidColorError::MalformedHex));
        assert_eq!(normalize_hex("ggg"), Err(InvalidColorError::MalformedHex));
        // Multi-byte characters count once.
        assert_eq!(normalize_hex("ffé"), Err(InvalidColorError::MalformedHex));
    }

    #[test]
    fn test_parse_and_format() -> Result<(), InvalidColorError> {
        assert_eq!(parse_hex("ff0080")?, [255, 0, 128]);
        assert_eq!(parse_hex("#fd0")?, [255, 221, 0]);
        assert_eq!(parse_hex("#000000cc")?, [0, 0, 0]);
        assert_eq!(parse_hex("12"), Err(InvalidColorError::UnexpectedLength(2)));

        assert_eq!(format_hex([255, 0, 128]), "ff0080");
        assert_eq!(format_hex([0, 10, 171]), "000aab");
        assert_eq!(format_hex(parse_hex("#2277FF")?), "2277ff");
        Ok(())
    }

    mod proptests {
        use super::super::normalize_hex;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn normalize_is_idempotent(
                code in "#?([0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})"
            ) {
                let once = normalize_hex(&code).map_err(|e| TestCaseError::fail(e.to_string()))?;
                prop_assert_eq!(once.len(), 6);
                prop_assert_eq!(normalize_hex(&once), Ok(once.clone()));
            }
        }
    }
}
