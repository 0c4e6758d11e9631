//! PEM text envelope: base64-wrapped DER with BEGIN/END label lines.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use keywire_types::{CodecError, FormatError};

/// A parsed PEM block.
#[derive(Debug, Clone)]
pub struct PemBlock {
    /// The label (e.g., "EC PRIVATE KEY", "PUBLIC KEY").
    pub label: String,
    /// The decoded binary data.
    pub data: Vec<u8>,
}

const BEGIN_PREFIX: &str = "-----BEGIN ";
const END_PREFIX: &str = "-----END ";
const DASHES_SUFFIX: &str = "-----";

/// Parse the first PEM block of `input`, whatever its label.
pub fn parse(input: &str) -> Result<PemBlock, CodecError> {
    let mut lines = input.lines();

    let label = loop {
        let line = match lines.next() {
            Some(line) => line.trim(),
            None => return Err(FormatError::PemMissingDelimiters.into()),
        };
        if let Some(label) = line
            .strip_prefix(BEGIN_PREFIX)
            .and_then(|s| s.strip_suffix(DASHES_SUFFIX))
        {
            break label.to_string();
        }
    };

    let end_marker = format!("{END_PREFIX}{label}{DASHES_SUFFIX}");
    let mut body = String::new();
    let mut found_end = false;
    for line in lines {
        let line = line.trim();
        if line == end_marker {
            found_end = true;
            break;
        }
        body.push_str(line);
    }
    if !found_end {
        return Err(FormatError::PemMissingDelimiters.into());
    }

    let data = STANDARD
        .decode(&body)
        .map_err(|_| FormatError::PemInvalidBase64)?;
    Ok(PemBlock { label, data })
}

/// Parse a PEM block and require its label to match exactly. The label
/// check happens before any base64 or DER work.
pub fn decode(input: &str, expected_label: &str) -> Result<Vec<u8>, CodecError> {
    let block = parse(input)?;
    if block.label != expected_label {
        return Err(FormatError::PemLabelMismatch {
            expected: expected_label.to_string(),
            found: block.label,
        }
        .into());
    }
    Ok(block.data)
}

/// Encode binary data as a PEM string with the given label. The base64
/// body wraps at 64 columns; every line is newline-terminated.
pub fn encode(label: &str, data: &[u8]) -> String {
    let base64 = STANDARD.encode(data);
    let mut output = format!("{BEGIN_PREFIX}{label}{DASHES_SUFFIX}\n");

    let mut rest = base64.as_str();
    while !rest.is_empty() {
        let (line, tail) = rest.split_at(rest.len().min(64));
        output.push_str(line);
        output.push('\n');
        rest = tail;
    }

    output.push_str(&format!("{END_PREFIX}{label}{DASHES_SUFFIX}\n"));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let data = b"arbitrary payload bytes";
        let pem = encode("TEST DATA", data);
        let block = parse(&pem).unwrap();
        assert_eq!(block.label, "TEST DATA");
        assert_eq!(block.data, data);
    }

    #[test]
    fn test_body_wraps_at_64_columns() {
        let pem = encode("X", &[0xAB; 60]);
        let lines: Vec<&str> = pem.lines().collect();
        // 60 bytes -> 80 base64 chars -> lines of 64 and 16
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].len(), 64);
        assert_eq!(lines[2].len(), 16);
    }

    #[test]
    fn test_decode_checks_label() {
        let pem = encode("EC PRIVATE KEY", &[1, 2, 3]);
        assert_eq!(decode(&pem, "EC PRIVATE KEY").unwrap(), vec![1, 2, 3]);

        let err = decode(&pem, "PUBLIC KEY").unwrap_err();
        assert_eq!(
            err,
            CodecError::Format(FormatError::PemLabelMismatch {
                expected: "PUBLIC KEY".to_string(),
                found: "EC PRIVATE KEY".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_begin_rejected() {
        let err = parse("not a pem document").unwrap_err();
        assert_eq!(err, CodecError::Format(FormatError::PemMissingDelimiters));
    }

    #[test]
    fn test_missing_end_rejected() {
        let text = "-----BEGIN PUBLIC KEY-----\nAQID\n";
        let err = parse(text).unwrap_err();
        assert_eq!(err, CodecError::Format(FormatError::PemMissingDelimiters));
    }

    #[test]
    fn test_corrupt_base64_rejected() {
        let text = "-----BEGIN PUBLIC KEY-----\n!!!!\n-----END PUBLIC KEY-----\n";
        let err = parse(text).unwrap_err();
        assert_eq!(err, CodecError::Format(FormatError::PemInvalidBase64));
    }

    #[test]
    fn test_parse_skips_leading_text() {
        let text = "preamble chatter\n-----BEGIN CERTIFICATE-----\nAQID\n-----END CERTIFICATE-----\n";
        let block = parse(text).unwrap();
        assert_eq!(block.label, "CERTIFICATE");
        assert_eq!(block.data, vec![1, 2, 3]);
    }
}
