//! `SubjectPublicKeyInfo` structure for EC public keys.

use keywire_types::CodecError;
use keywire_utils::asn1::{BitString, Decoder, Encoder};
use keywire_utils::oid::Oid;

use crate::sec1::require_consumed;

/// A public key paired with its algorithm identifier.
///
/// ```text
/// SubjectPublicKeyInfo ::= SEQUENCE {
///     algorithm        SEQUENCE {
///         algorithm    OBJECT IDENTIFIER,  -- id-ecPublicKey
///         curve        OBJECT IDENTIFIER
///     },
///     subjectPublicKey BIT STRING  -- uncompressed point
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectPublicKeyInfo {
    pub algorithm: Oid,
    pub curve: Oid,
    pub public_key: BitString,
}

/// Parse a DER-encoded `SubjectPublicKeyInfo`.
pub fn parse_subject_public_key_info_der(der: &[u8]) -> Result<SubjectPublicKeyInfo, CodecError> {
    let mut outer = Decoder::new(der);
    let mut seq = outer.read_sequence()?;
    require_consumed(&outer)?;

    let mut alg = seq.read_sequence()?;
    let algorithm = Oid::from_der_value(alg.read_oid()?)?;
    let curve = Oid::from_der_value(alg.read_oid()?)?;
    require_consumed(&alg)?;

    let (unused_bits, data) = seq.read_bit_string()?;
    require_consumed(&seq)?;

    Ok(SubjectPublicKeyInfo {
        algorithm,
        curve,
        public_key: BitString {
            unused_bits,
            data: data.to_vec(),
        },
    })
}

/// Encode a `SubjectPublicKeyInfo` to DER.
pub fn encode_subject_public_key_info_der(info: &SubjectPublicKeyInfo) -> Vec<u8> {
    let mut alg = Encoder::new();
    alg.write_oid(&info.algorithm.to_der_value());
    alg.write_oid(&info.curve.to_der_value());

    let mut body = Encoder::new();
    body.write_sequence(&alg.finish());
    body.write_bit_string(info.public_key.unused_bits, &info.public_key.data);

    let mut outer = Encoder::new();
    outer.write_sequence(&body.finish());
    outer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use keywire_utils::oid::known;

    fn hex(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }

    const POINT: &str = "04147b79e9e1dd3324ceea115ff4037b6c877c73777131418bfb2b713effd0f502327b923861581bd5535eeae006765269f404f5f5c52214e9721b04aa7d040a75";

    // OpenSSL-produced secp256k1 SubjectPublicKeyInfo for the point above.
    fn reference_der() -> Vec<u8> {
        hex(&format!(
            "3056301006072a8648ce3d020106052b8104000a03420004{}",
            &POINT[2..]
        ))
    }

    #[test]
    fn test_parse_reference_der() {
        let info = parse_subject_public_key_info_der(&reference_der()).unwrap();
        assert_eq!(info.algorithm, known::ec_public_key());
        assert_eq!(info.curve.arcs(), &[1, 3, 132, 0, 10]);
        assert_eq!(info.public_key.unused_bits, 0);
        assert_eq!(info.public_key.data, hex(POINT));
    }

    #[test]
    fn test_encode_matches_reference_der() {
        let info = SubjectPublicKeyInfo {
            algorithm: known::ec_public_key(),
            curve: Oid::new(&[1, 3, 132, 0, 10]),
            public_key: BitString {
                unused_bits: 0,
                data: hex(POINT),
            },
        };
        assert_eq!(encode_subject_public_key_info_der(&info), reference_der());
    }

    #[test]
    fn test_trailing_garbage_after_structure_rejected() {
        use keywire_types::StructuralError;

        let mut der = reference_der();
        der.extend_from_slice(&[0x00, 0x00]);
        let err = parse_subject_public_key_info_der(&der).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Structure(StructuralError::TrailingData { .. })
        ));
    }

    #[test]
    fn test_private_key_der_is_wrong_shape() {
        // SEC1 private key starts with an INTEGER, not the algorithm SEQUENCE
        let der = hex("30250201010420844055cca13efd78ce79a4c3a4c5aba5db0ebeb7ae9d56906c03d333c5668d5b");
        assert!(matches!(
            parse_subject_public_key_info_der(&der).unwrap_err(),
            CodecError::Structure(_)
        ));
    }
}
