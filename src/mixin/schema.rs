//! The `schema` operation.

use std::io::Write;

use crate::error::{MixinError, Result};
use crate::schema::HELM_SCHEMA;

use super::context::Mixin;

impl Mixin {
    /// Returns the JSON schema describing the accepted step syntax.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema is not bundled or is not UTF-8 text.
    pub fn get_schema(&self) -> Result<String> {
        let bytes = self
            .schemas
            .find(HELM_SCHEMA)
            .ok_or_else(|| MixinError::ResourceNotFound {
                name: HELM_SCHEMA.to_string(),
            })?;

        String::from_utf8(bytes.to_vec()).map_err(|_| MixinError::InvalidResource {
            name: HELM_SCHEMA.to_string(),
        })
    }

    /// Writes the schema to the output stream exactly as bundled.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be loaded or written.
    pub fn print_schema(&mut self) -> Result<()> {
        let schema = self.get_schema()?;
        self.out.write_all(schema.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::error::MixinError;
    use crate::mixin::Mixin;
    use crate::schema::{EmbeddedSchemas, SchemaSource};
    use crate::testing::SharedBuffer;

    #[test]
    fn test_get_schema_returns_bundled_bytes() {
        let schema = Mixin::default().get_schema().expect("schema is bundled");
        let bundled = EmbeddedSchemas.find("helm.json").expect("helm.json is bundled");
        assert_eq!(schema.as_bytes(), bundled);
    }

    #[test]
    fn test_print_schema_writes_exact_bytes() {
        let mut schemas = HashMap::new();
        schemas.insert("helm.json".to_string(), b"{\"type\": \"object\"}".to_vec());
        let out = SharedBuffer::default();
        let mut mixin = Mixin::default().with_schemas(schemas).with_output(out.clone());

        let expected = mixin.get_schema().expect("schema is present");
        mixin.print_schema().expect("print should succeed");

        assert_eq!(out.contents(), expected);
        assert_eq!(out.contents(), "{\"type\": \"object\"}");
    }

    #[test]
    fn test_missing_schema() {
        let mixin = Mixin::default().with_schemas(HashMap::<String, Vec<u8>>::new());
        let err = mixin.get_schema().unwrap_err();
        assert!(matches!(err, MixinError::ResourceNotFound { ref name } if name == "helm.json"));
    }

    #[test]
    fn test_print_schema_propagates_lookup_failure() {
        let out = SharedBuffer::default();
        let mut mixin = Mixin::default()
            .with_schemas(HashMap::<String, Vec<u8>>::new())
            .with_output(out.clone());

        assert!(mixin.print_schema().is_err());
        assert!(out.contents().is_empty());
    }

    #[test]
    fn test_non_utf8_schema() {
        let mut schemas = HashMap::new();
        schemas.insert("helm.json".to_string(), vec![0xff, 0xfe]);
        let mixin = Mixin::default().with_schemas(schemas);
        assert!(matches!(
            mixin.get_schema(),
            Err(MixinError::InvalidResource { .. })
        ));
    }
}
