//! Format conversion pipeline for EC key material.
//!
//! Each operation is one linear pass: parse the source representation
//! into a structure, optionally re-wrap the container, and serialize the
//! destination representation. No state survives a call.

use keywire_types::{CodecError, FormatError, KeyFormat, PrivateKeyContainer};
use keywire_utils::asn1::BitString;
use keywire_utils::oid::{known, Oid};
use keywire_utils::pem;

use crate::curves::{self, CurveDescriptor};
use crate::pkcs8::{self, EcPrivateKeyInfo};
use crate::sec1::{self, EcPrivateKey};
use crate::spki::{self, SubjectPublicKeyInfo};

/// PEM label for bare SEC1 private keys.
const SEC1_LABEL: &str = "EC PRIVATE KEY";
/// PEM label for PKCS#8 private keys.
const PKCS8_LABEL: &str = "PRIVATE KEY";
/// PEM label for SubjectPublicKeyInfo.
const SPKI_LABEL: &str = "PUBLIC KEY";

/// A key codec bound to one curve.
///
/// Raw and DER values cross this API hex-encoded; PEM values are the
/// envelope text itself. Construction fails immediately on a curve name
/// the registry cannot resolve.
#[derive(Debug)]
pub struct KeyEncoder {
    curve: &'static CurveDescriptor,
}

impl KeyEncoder {
    pub fn new(curve_name: &str) -> Result<Self, CodecError> {
        let curve =
            curves::resolve(curve_name).ok_or_else(|| curves::unknown_curve_error(curve_name))?;
        Ok(KeyEncoder { curve })
    }

    /// The descriptor this encoder is bound to.
    pub fn curve(&self) -> &'static CurveDescriptor {
        self.curve
    }

    fn curve_oid(&self) -> Oid {
        Oid::new(self.curve.oid_arcs)
    }

    /// Convert a private key between representations.
    ///
    /// A raw source is the bare scalar; the resulting structure carries no
    /// public point (deriving one from the scalar is curve arithmetic and
    /// belongs to the caller — see [`encode_keypair`](Self::encode_keypair)).
    /// DER and PEM sources may be either SEC1 or PKCS#8; PKCS#8 input is
    /// unwrapped to its nested SEC1 key before re-encoding.
    pub fn encode_private(
        &self,
        key: &str,
        from: KeyFormat,
        to: KeyFormat,
        container: PrivateKeyContainer,
    ) -> Result<String, CodecError> {
        let parsed = self.parse_private(key, from)?;
        self.serialize_private(parsed, to, container)
    }

    /// Compose a raw private scalar with an externally derived public
    /// point and encode the pair. The point is wrapped with an unused-bit
    /// count of 0.
    pub fn encode_keypair(
        &self,
        private_hex: &str,
        public_hex: &str,
        to: KeyFormat,
        container: PrivateKeyContainer,
    ) -> Result<String, CodecError> {
        let key = EcPrivateKey::new(
            decode_hex(private_hex)?,
            Some(self.curve_oid()),
            Some(decode_hex(public_hex)?),
        );
        self.serialize_private(key, to, container)
    }

    /// Convert a public key between representations. A raw source is the
    /// uncompressed point with no OID framing; the algorithm pair is
    /// fabricated from the bound curve.
    pub fn encode_public(
        &self,
        key: &str,
        from: KeyFormat,
        to: KeyFormat,
    ) -> Result<String, CodecError> {
        let parsed = self.parse_public(key, from)?;
        Ok(match to {
            KeyFormat::Raw => hex::encode(&parsed.public_key.data),
            KeyFormat::Der => hex::encode(spki::encode_subject_public_key_info_der(&parsed)),
            KeyFormat::Pem => pem::encode(
                SPKI_LABEL,
                &spki::encode_subject_public_key_info_der(&parsed),
            ),
        })
    }

    fn parse_private(&self, key: &str, from: KeyFormat) -> Result<EcPrivateKey, CodecError> {
        match from {
            KeyFormat::Raw => Ok(EcPrivateKey::new(
                decode_hex(key)?,
                Some(self.curve_oid()),
                None,
            )),
            KeyFormat::Der => pkcs8::parse_any_private_key_der(&decode_hex(key)?),
            KeyFormat::Pem => {
                let block = pem::parse(key)?;
                match block.label.as_str() {
                    SEC1_LABEL => sec1::parse_ec_private_key_der(&block.data),
                    PKCS8_LABEL => {
                        Ok(pkcs8::parse_ec_private_key_info_der(&block.data)?.private_key)
                    }
                    _ => Err(FormatError::PemLabelMismatch {
                        expected: format!("{SEC1_LABEL} or {PKCS8_LABEL}"),
                        found: block.label,
                    }
                    .into()),
                }
            }
        }
    }

    fn serialize_private(
        &self,
        key: EcPrivateKey,
        to: KeyFormat,
        container: PrivateKeyContainer,
    ) -> Result<String, CodecError> {
        if to == KeyFormat::Raw {
            return Ok(hex::encode(&key.private_key));
        }
        let (der, label) = match container {
            PrivateKeyContainer::Pkcs1 => (sec1::encode_ec_private_key_der(&key), SEC1_LABEL),
            PrivateKeyContainer::Pkcs8 => (
                pkcs8::encode_ec_private_key_info_der(&self.wrap_pkcs8(key)),
                PKCS8_LABEL,
            ),
        };
        Ok(match to {
            KeyFormat::Der => hex::encode(der),
            _ => pem::encode(label, &der),
        })
    }

    /// Wrap a SEC1 key into a PKCS#8 `PrivateKeyInfo`. The inner
    /// `parameters` field is normalized to the bound curve, matching the
    /// reference behavior: a producer's divergent or missing inner OID
    /// comes out pinned to the encoder's curve at both levels.
    fn wrap_pkcs8(&self, mut key: EcPrivateKey) -> EcPrivateKeyInfo {
        key.parameters = Some(self.curve_oid());
        EcPrivateKeyInfo {
            version: vec![0],
            algorithm: known::ec_public_key(),
            curve: self.curve_oid(),
            private_key: key,
            attributes: None,
        }
    }

    fn parse_public(&self, key: &str, from: KeyFormat) -> Result<SubjectPublicKeyInfo, CodecError> {
        match from {
            KeyFormat::Raw => Ok(SubjectPublicKeyInfo {
                algorithm: known::ec_public_key(),
                curve: self.curve_oid(),
                public_key: BitString {
                    unused_bits: 0,
                    data: decode_hex(key)?,
                },
            }),
            KeyFormat::Der => spki::parse_subject_public_key_info_der(&decode_hex(key)?),
            KeyFormat::Pem => {
                spki::parse_subject_public_key_info_der(&pem::decode(key, SPKI_LABEL)?)
            }
        }
    }
}

fn decode_hex(input: &str) -> Result<Vec<u8>, CodecError> {
    hex::decode(input.trim()).map_err(|_| FormatError::InvalidHex.into())
}
