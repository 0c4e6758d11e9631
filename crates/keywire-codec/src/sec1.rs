//! SEC1 / RFC 5915 `ECPrivateKey` structure.

use std::fmt;

use keywire_types::{CodecError, StructuralError};
use keywire_utils::asn1::{tags, BitString, Decoder, Encoder};
use keywire_utils::oid::Oid;
use zeroize::Zeroize;

/// A bare EC private key (PKCS#1-style container).
///
/// ```text
/// ECPrivateKey ::= SEQUENCE {
///     version        INTEGER { ecPrivkeyVer1(1) },
///     privateKey     OCTET STRING,
///     parameters [0] EXPLICIT OBJECT IDENTIFIER OPTIONAL,
///     publicKey  [1] EXPLICIT BIT STRING OPTIONAL
/// }
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct EcPrivateKey {
    /// INTEGER content bytes exactly as received. Fresh structures carry 1;
    /// the decoder preserves whatever a producer wrote so that
    /// decode-then-re-encode is byte-identical.
    pub version: Vec<u8>,
    /// The private scalar, big-endian.
    pub private_key: Vec<u8>,
    /// Curve OID. Present in solo SEC1 encodings; absent when a PKCS#8
    /// producer relied on the outer algorithm identifier.
    pub parameters: Option<Oid>,
    /// Uncompressed public point (`0x04 || X || Y`) as a BIT STRING.
    pub public_key: Option<BitString>,
}

impl EcPrivateKey {
    /// Build a fresh version-1 structure around a raw scalar. The public
    /// point, when given, is wrapped with an unused-bit count of 0.
    pub fn new(
        private_key: Vec<u8>,
        parameters: Option<Oid>,
        public_point: Option<Vec<u8>>,
    ) -> Self {
        EcPrivateKey {
            version: vec![1],
            private_key,
            parameters,
            public_key: public_point.map(|data| BitString {
                unused_bits: 0,
                data,
            }),
        }
    }
}

impl Drop for EcPrivateKey {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

// The scalar never appears in Debug output, only its length.
impl fmt::Debug for EcPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcPrivateKey")
            .field("version", &self.version)
            .field(
                "private_key",
                &format_args!("[{} bytes]", self.private_key.len()),
            )
            .field("parameters", &self.parameters)
            .field("public_key", &self.public_key)
            .finish()
    }
}

/// Parse a DER-encoded `ECPrivateKey`. The input must be exactly one
/// structure: unconsumed bytes inside the SEQUENCE or after it are
/// rejected rather than dropped.
pub fn parse_ec_private_key_der(der: &[u8]) -> Result<EcPrivateKey, CodecError> {
    let mut outer = Decoder::new(der);
    let mut seq = outer.read_sequence()?;
    require_consumed(&outer)?;

    let version = seq.read_integer()?.to_vec();
    let private_key = seq.read_octet_string()?.to_vec();

    let parameters = match seq.try_read_explicit(0)? {
        Some(mut inner) => Some(Oid::from_der_value(inner.read_oid()?)?),
        None => None,
    };

    let public_key = match seq.try_read_explicit(1)? {
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

    Ok(EcPrivateKey {
        version,
        private_key,
        parameters,
        public_key,
    })
}

/// Reject leftover bytes once a structure's last field has been read.
pub(crate) fn require_consumed(decoder: &Decoder<'_>) -> Result<(), CodecError> {
    if decoder.is_empty() {
        Ok(())
    } else {
        Err(StructuralError::TrailingData {
            offset: decoder.offset(),
        }
        .into())
    }
}

/// Encode an `ECPrivateKey` to DER.
pub fn encode_ec_private_key_der(key: &EcPrivateKey) -> Vec<u8> {
    let mut body = Encoder::new();
    body.write_tlv(tags::INTEGER, &key.version);
    body.write_octet_string(&key.private_key);

    if let Some(oid) = &key.parameters {
        let mut inner = Encoder::new();
        inner.write_oid(&oid.to_der_value());
        body.write_explicit(0, &inner.finish());
    }
    if let Some(point) = &key.public_key {
        let mut inner = Encoder::new();
        inner.write_bit_string(point.unused_bits, &point.data);
        body.write_explicit(1, &inner.finish());
    }

    let mut outer = Encoder::new();
    outer.write_sequence(&body.finish());
    outer.finish()
}
