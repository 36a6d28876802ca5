//! Serializable manifest types read from extension artifacts.
//!
//! The default manifest scanner looks for an `extension.json` file at the
//! root of an artifact (a zip entry for archives, a plain file for exploded
//! directories) and deserializes it into these types. They are kept here, in
//! the protocol crate, so that alternate scanners and artifact-producing
//! tooling agree on one wire format.

use serde::{Deserialize, Serialize};

/// Name of the manifest entry at the root of an artifact.
pub const MANIFEST_ENTRY_NAME: &str = "extension.json";

/// The manifest an artifact carries to declare its structural metadata.
///
/// ```json
/// {
///   "extensions": [
///     { "id": "frobnicator", "entryType": "frob.FrobMain", "version": "1.2.0" }
///   ],
///   "declarations": [
///     { "key": "quarry.Extension", "owner": "frob.FrobMain", "values": { "id": "frobnicator" } },
///     { "key": "quarry.Handler", "owner": "frob.FrobMain", "member": "onLoad" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExtensionManifest {
    /// Extension entry points this artifact resolves to.
    #[serde(default)]
    pub extensions: Vec<ManifestExtension>,

    /// Structural declarations to record in the metadata table.
    #[serde(default)]
    pub declarations: Vec<ManifestDeclaration>,
}

/// One extension entry point declared by a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ManifestExtension {
    /// Stable identifier of the extension.
    pub id: String,

    /// Fully qualified name of the compiled type carrying the entry marker.
    pub entry_type: String,

    /// Declared version, if any.
    pub version: Option<String>,
}

/// One structural declaration listed by a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ManifestDeclaration {
    /// Declaration kind; must parse as a valid
    /// [`DeclarationKey`](crate::types::DeclarationKey).
    pub key: String,

    /// Fully qualified name of the compiled type carrying the declaration.
    pub owner: String,

    /// The declared member the declaration is attached to, when it is not on
    /// the type itself.
    pub member: Option<String>,

    /// Arbitrary key/value data carried by the declaration.
    #[serde(default)]
    pub values: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_manifest() {
        let raw = r#"{
            "extensions": [
                { "id": "frobnicator", "entryType": "frob.FrobMain", "version": "1.2.0" }
            ],
            "declarations": [
                { "key": "quarry.Extension", "owner": "frob.FrobMain", "values": { "id": "frobnicator" } },
                { "key": "quarry.Handler", "owner": "frob.FrobMain", "member": "onLoad" }
            ]
        }"#;

        let manifest: ExtensionManifest = serde_json::from_str(raw).unwrap();
        assert_eq!(manifest.extensions.len(), 1);
        assert_eq!(manifest.extensions[0].entry_type, "frob.FrobMain");
        assert_eq!(manifest.extensions[0].version.as_deref(), Some("1.2.0"));
        assert_eq!(manifest.declarations.len(), 2);
        assert_eq!(manifest.declarations[1].member.as_deref(), Some("onLoad"));
        assert!(manifest.declarations[1].values.is_null());
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let manifest: ExtensionManifest = serde_json::from_str("{}").unwrap();
        assert!(manifest.extensions.is_empty());
        assert!(manifest.declarations.is_empty());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let raw = r#"{ "extensions": [], "sneaky": true }"#;
        assert!(serde_json::from_str::<ExtensionManifest>(raw).is_err());
    }
}
