use crate::HexColorError;

/// Byte offset of the first digit after an optional `#` or `0x` prefix.
const fn digits_start(bytes: &[u8]) -> usize {
    if !bytes.is_empty() && bytes[0] == b'#' {
        1
    } else if bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') {
        2
    } else {
        0
    }
}

const fn nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Parses `#RRGGBB`, `0xRRGGBB` or `RRGGBB` into its three channels.
pub const fn parse_hex(s: &str) -> Result<[u8; 3], HexColorError> {
    let bytes = s.as_bytes();
    let start = digits_start(bytes);
    if bytes.len() - start != 6 {
        return Err(HexColorError::InvalidLength);
    }

    let mut channels = [0u8; 3];
    let mut i = 0;
    while i < 6 {
        let index = start + i;
        let Some(value) = nibble(bytes[index]) else {
            return Err(HexColorError::InvalidDigit(index));
        };
        let channel = i / 2;
        channels[channel] = (channels[channel] << 4) | value;
        i += 1;
    }
    Ok(channels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert_eq!(parse_hex("#FF8000"), Ok([255, 128, 0]));
        assert_eq!(parse_hex("0x00ff10"), Ok([0, 255, 16]));
        assert_eq!(parse_hex("0A0B0C"), Ok([10, 11, 12]));
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_hex("#FFF"), Err(HexColorError::InvalidLength));
        assert_eq!(parse_hex("#12G456"), Err(HexColorError::InvalidDigit(3)));
    }
}
