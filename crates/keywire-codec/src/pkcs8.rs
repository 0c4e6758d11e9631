//! PKCS#8 `PrivateKeyInfo` wrapping an EC private key.

use keywire_types::CodecError;
use keywire_utils::asn1::{tags, BitString, Decoder, Encoder};
use keywire_utils::oid::Oid;

use crate::sec1::{
    encode_ec_private_key_der, parse_ec_private_key_der, require_consumed, EcPrivateKey,
};

/// An algorithm-wrapped EC private key.
///
/// ```text
/// PrivateKeyInfo ::= SEQUENCE {
///     version             INTEGER,
///     privateKeyAlgorithm SEQUENCE {
///         algorithm       OBJECT IDENTIFIER,  -- id-ecPublicKey
///         curve           OBJECT IDENTIFIER
///     },
///     privateKey          OCTET STRING,  -- DER-encoded ECPrivateKey
///     attributes      [0] EXPLICIT BIT STRING OPTIONAL
/// }
/// ```
///
/// The nested `ECPrivateKey` is held by value: its DER bytes are decoded
/// recursively on parse and re-encoded on write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcPrivateKeyInfo {
    /// INTEGER content bytes as received; 0 when built fresh.
    pub version: Vec<u8>,
    /// The EC public-key algorithm identifier.
    pub algorithm: Oid,
    /// The curve identifier, duplicated from the nested key's parameters
    /// by some producers.
    pub curve: Oid,
    /// The contained SEC1 structure.
    pub private_key: EcPrivateKey,
    /// Opaque attributes, passed through untouched.
    pub attributes: Option<BitString>,
}

/// Parse a DER-encoded `PrivateKeyInfo`.
///
/// When the nested SEC1 structure omits its own `parameters` field, the
/// outer curve identifier is trusted and copied in, so the returned key
/// is always usable as a solo SEC1 structure.
pub fn parse_ec_private_key_info_der(der: &[u8]) -> Result<EcPrivateKeyInfo, CodecError> {
    let mut outer = Decoder::new(der);
    let mut seq = outer.read_sequence()?;
    require_consumed(&outer)?;

    let version = seq.read_integer()?.to_vec();

    let mut alg = seq.read_sequence()?;
    let algorithm = Oid::from_der_value(alg.read_oid()?)?;
    let curve = Oid::from_der_value(alg.read_oid()?)?;
    require_consumed(&alg)?;

    let mut private_key = parse_ec_private_key_der(seq.read_octet_string()?)?;
    if private_key.parameters.is_none() {
        private_key.parameters = Some(curve.clone());
    }

    let attributes = match seq.try_read_explicit(0)? {
        Some(mut inner) => {
            let (unused_bits, data) = inner.read_bit_string()?;
            Some(BitString {
                unused_bits,
                data: data.to_vec(),
            })
        }
        None => None,
    };
    require_consumed(&seq)?;

    Ok(EcPrivateKeyInfo {
        version,
        algorithm,
        curve,
        private_key,
        attributes,
    })
}

/// Encode a `PrivateKeyInfo` to DER.
pub fn encode_ec_private_key_info_der(info: &EcPrivateKeyInfo) -> Vec<u8> {
    let mut alg = Encoder::new();
    alg.write_oid(&info.algorithm.to_der_value());
    alg.write_oid(&info.curve.to_der_value());

    let mut body = Encoder::new();
    body.write_tlv(tags::INTEGER, &info.version);
    body.write_sequence(&alg.finish());
    body.write_octet_string(&encode_ec_private_key_der(&info.private_key));

    if let Some(attrs) = &info.attributes {
        let mut inner = Encoder::new();
        inner.write_bit_string(attrs.unused_bits, &attrs.data);
        body.write_explicit(0, &inner.finish());
    }

    let mut outer = Encoder::new();
    outer.write_sequence(&body.finish());
    outer.finish()
}

/// Parse private-key DER that may be either a bare SEC1 structure or a
/// PKCS#8 `PrivateKeyInfo`. The two are distinguished by the field after
/// the version INTEGER: an OCTET STRING means SEC1, a SEQUENCE means
/// PKCS#8, in which case the nested SEC1 key is unwrapped and returned.
pub fn parse_any_private_key_der(der: &[u8]) -> Result<EcPrivateKey, CodecError> {
    let mut outer = Decoder::new(der);
    let mut seq = outer.read_sequence()?;
    let _version = seq.read_integer()?;

    if seq.peek_tag()?.leading_byte() == tags::SEQUENCE {
        Ok(parse_ec_private_key_info_der(der)?.private_key)
    } else {
        parse_ec_private_key_der(der)
    }
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

    const SCALAR: &str = "844055cca13efd78ce79a4c3a4c5aba5db0ebeb7ae9d56906c03d333c5668d5b";
    const POINT: &str = "04147b79e9e1dd3324ceea115ff4037b6c877c73777131418bfb2b713effd0f502327b923861581bd5535eeae006765269f404f5f5c52214e9721b04aa7d040a75";

    fn sec1_reference_der() -> Vec<u8> {
        hex(&format!(
            "30740201010420{SCALAR}a00706052b8104000aa14403420004{}",
            &POINT[2..]
        ))
    }

    // OpenSSL-produced secp256k1 PKCS#8 DER wrapping the SEC1 key above.
    fn pkcs8_reference_der() -> Vec<u8> {
        let mut der = hex("30818d020100301006072a8648ce3d020106052b8104000a0476");
        der.extend_from_slice(&sec1_reference_der());
        der
    }

    #[test]
    fn test_parse_reference_der() {
        let info = parse_ec_private_key_info_der(&pkcs8_reference_der()).unwrap();
        assert_eq!(info.version, vec![0]);
        assert_eq!(info.algorithm, known::ec_public_key());
        assert_eq!(info.curve.arcs(), &[1, 3, 132, 0, 10]);
        assert_eq!(info.private_key.private_key, hex(SCALAR));
        assert_eq!(info.private_key.public_key.as_ref().unwrap().data, hex(POINT));
        assert!(info.attributes.is_none());
    }

    #[test]
    fn test_encode_matches_reference_der() {
        let info = parse_ec_private_key_info_der(&pkcs8_reference_der()).unwrap();
        assert_eq!(encode_ec_private_key_info_der(&info), pkcs8_reference_der());
    }

    #[test]
    fn test_outer_curve_fills_missing_inner_parameters() {
        // Nested SEC1 with scalar only, as OpenSSL's pkcs8 tool emits
        let inner = hex(&format!("30250201010420{SCALAR}"));
        let mut der = Encoder::new();
        let mut alg = Encoder::new();
        alg.write_oid(&known::ec_public_key().to_der_value());
        alg.write_oid(&Oid::new(&[1, 3, 132, 0, 10]).to_der_value());
        let mut body = Encoder::new();
        body.write_tlv(tags::INTEGER, &[0]);
        body.write_sequence(&alg.finish());
        body.write_octet_string(&inner);
        der.write_sequence(&body.finish());

        let info = parse_ec_private_key_info_der(&der.finish()).unwrap();
        assert_eq!(
            info.private_key.parameters.as_ref().unwrap().arcs(),
            &[1, 3, 132, 0, 10]
        );
    }

    #[test]
    fn test_parse_any_detects_sec1() {
        let key = parse_any_private_key_der(&sec1_reference_der()).unwrap();
        assert_eq!(key.private_key, hex(SCALAR));
    }

    #[test]
    fn test_parse_any_unwraps_pkcs8() {
        let key = parse_any_private_key_der(&pkcs8_reference_der()).unwrap();
        assert_eq!(key.private_key, hex(SCALAR));
        assert_eq!(key.public_key.as_ref().unwrap().data, hex(POINT));
    }

    #[test]
    fn test_attributes_pass_through() {
        let mut info = parse_ec_private_key_info_der(&pkcs8_reference_der()).unwrap();
        info.attributes = Some(BitString {
            unused_bits: 0,
            data: vec![0xDE, 0xAD],
        });
        let der = encode_ec_private_key_info_der(&info);
        let reparsed = parse_ec_private_key_info_der(&der).unwrap();
        assert_eq!(reparsed.attributes.as_ref().unwrap().data, vec![0xDE, 0xAD]);
    }

    #[test]
    fn test_trailing_garbage_after_structure_rejected() {
        use keywire_types::StructuralError;

        let mut der = pkcs8_reference_der();
        der.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
        let err = parse_ec_private_key_info_der(&der).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Structure(StructuralError::TrailingData { .. })
        ));
    }

    #[test]
    fn test_truncated_pkcs8_rejected() {
        let mut der = pkcs8_reference_der();
        der.truncate(40);
        assert!(matches!(
            parse_ec_private_key_info_der(&der).unwrap_err(),
            CodecError::Format(_)
        ));
    }
}
