//! Static registry of supported curves.

use keywire_types::CodecError;

/// One supported curve: canonical name, accepted aliases, and the OID
/// arc sequence identifying it in key structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveDescriptor {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub oid_arcs: &'static [u32],
}

// Fully initialized before any lookup; read-only thereafter, so
// concurrent resolution needs no locking.
static CURVES: &[CurveDescriptor] = &[
    CurveDescriptor {
        name: "secp256k1",
        aliases: &[],
        oid_arcs: &[1, 3, 132, 0, 10],
    },
    CurveDescriptor {
        name: "p192",
        aliases: &["prime192v1"],
        oid_arcs: &[1, 2, 840, 10045, 3, 1, 1],
    },
    CurveDescriptor {
        name: "p224",
        aliases: &["secp224r1"],
        oid_arcs: &[1, 3, 132, 0, 33],
    },
    CurveDescriptor {
        name: "p256",
        aliases: &["prime256v1"],
        oid_arcs: &[1, 2, 840, 10045, 3, 1, 7],
    },
    CurveDescriptor {
        name: "p384",
        aliases: &["secp384r1"],
        oid_arcs: &[1, 3, 132, 0, 34],
    },
    CurveDescriptor {
        name: "p521",
        aliases: &["secp521r1"],
        oid_arcs: &[1, 3, 132, 0, 35],
    },
];

/// Resolve a curve name or alias to its descriptor. Matching is exact
/// and case-sensitive.
pub fn resolve(name: &str) -> Option<&'static CurveDescriptor> {
    CURVES
        .iter()
        .find(|c| c.name == name || c.aliases.contains(&name))
}

/// Iterate over the canonical curve names.
pub fn canonical_names() -> impl Iterator<Item = &'static str> {
    CURVES.iter().map(|c| c.name)
}

pub(crate) fn unknown_curve_error(name: &str) -> CodecError {
    CodecError::UnknownCurve {
        name: name.to_string(),
        supported: canonical_names().collect::<Vec<_>>().join(", "),
    }
}
