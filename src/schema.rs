//! Bundled schema resources.
//!
//! Schemas are looked up by name through [`SchemaSource`], so the compiled-in
//! set can be swapped for an in-memory map.

use std::collections::HashMap;

/// Name of the step schema.
pub const HELM_SCHEMA: &str = "helm.json";

/// Read-only lookup of schema resources by name.
pub trait SchemaSource: Send + Sync {
    /// Returns the raw bytes of the named resource, if bundled.
    fn find(&self, name: &str) -> Option<&[u8]>;
}

/// Resources compiled into the binary.
const EMBEDDED: &[(&str, &[u8])] = &[(HELM_SCHEMA, include_bytes!("../schema/helm.json"))];

/// Schema resources embedded at build time.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedSchemas;

impl SchemaSource for EmbeddedSchemas {
    fn find(&self, name: &str) -> Option<&[u8]> {
        EMBEDDED
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, bytes)| *bytes)
    }
}

impl SchemaSource for HashMap<String, Vec<u8>> {
    fn find(&self, name: &str) -> Option<&[u8]> {
        self.get(name).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_helm_schema_is_json() {
        let bytes = EmbeddedSchemas.find(HELM_SCHEMA).expect("helm.json is bundled");
        let schema: serde_json::Value = serde_json::from_slice(bytes).expect("valid JSON");
        assert!(schema["properties"]["status"].is_object());
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(EmbeddedSchemas.find("HELM.json").is_none());
        assert!(EmbeddedSchemas.find("helm").is_none());
    }

    #[test]
    fn test_in_memory_source() {
        let mut schemas = HashMap::new();
        schemas.insert("helm.json".to_string(), b"{}".to_vec());
        assert_eq!(schemas.find("helm.json"), Some(&b"{}"[..]));
        assert!(schemas.find("other.json").is_none());
    }
}
