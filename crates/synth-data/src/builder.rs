//! Record building: one value per field per row.

use std::sync::Arc;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{
    error::GenerateError,
    schema::{FieldDescriptor, GenerationRequest, GenerationResponse, Record},
    values::{ValueGenConfig, ValueGenerator},
};

/// Default number of rows when a request does not say.
pub const DEFAULT_ROWS: usize = 10;

/// Returns the default row count.
pub fn default_rows() -> usize {
    DEFAULT_ROWS
}

/// Builds synthetic records from field descriptors.
///
/// Holds the value generator behind an `Arc`, so clones are cheap and share
/// the same read-only catalog.
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    values: Arc<ValueGenerator>,
}

impl RecordBuilder {
    /// Creates a record builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with custom value generation configuration.
    pub fn with_config(config: ValueGenConfig) -> Result<Self, GenerateError> {
        Ok(Self {
            values: Arc::new(ValueGenerator::with_config(config)?),
        })
    }

    pub fn values(&self) -> &ValueGenerator {
        &self.values
    }

    /// Builds a single record, inserting fields in descriptor order.
    ///
    /// A repeated name overwrites the earlier value but keeps its position.
    pub fn build_one(&self, fields: &[FieldDescriptor], rng: &mut impl Rng) -> Record {
        let mut record = Record::with_capacity(fields.len());
        for field in fields {
            let value = self.values.generate(field.key(), field.kind(), rng);
            record.insert(field.key().to_string(), value);
        }
        record
    }

    /// Builds `rows` records.
    pub fn build(&self, fields: &[FieldDescriptor], rows: usize, rng: &mut impl Rng) -> Vec<Record> {
        (0..rows).map(|_| self.build_one(fields, rng)).collect()
    }

    /// Answers a full generation request.
    ///
    /// Uses a fresh entropy-seeded rng unless the request carries a seed.
    pub fn generate(&self, request: &GenerationRequest) -> GenerationResponse {
        let mut rng = match request.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        debug!(
            rows = request.rows,
            fields = request.fields.len(),
            seeded = request.seed.is_some(),
            "Generating records"
        );

        GenerationResponse {
            records: self.build(&request.fields, request.rows, &mut rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldType;

    fn fields(pairs: &[(&str, &str)]) -> Vec<FieldDescriptor> {
        pairs.iter()
            .map(|(name, ty)| FieldDescriptor::new(*name, *ty))
            .collect()
    }

    #[test]
    fn test_build_row_count_and_key_order() {
        let builder = RecordBuilder::new();
        let mut rng = rand::thread_rng();
        let fields = fields(&[
            ("Full Name", "string"),
            ("Age", "int"),
            ("score", "float"),
            ("active", "bool"),
            ("joined", "date"),
            ("blob", "binary"),
        ]);

        let records = builder.build(&fields, 25, &mut rng);
        assert_eq!(records.len(), 25);
        for record in &records {
            let keys: Vec<&str> = record.keys().map(String::as_str).collect();
            assert_eq!(keys, ["Full Name", "Age", "score", "active", "joined", "blob"]);
            assert!(record["Full Name"].is_string());
            let age = record["Age"].as_i64().unwrap();
            assert!((1..=120).contains(&age));
        }
    }

    #[test]
    fn test_build_zero_rows() {
        let builder = RecordBuilder::new();
        let mut rng = rand::thread_rng();
        let records = builder.build(&fields(&[("score", "float")]), 0, &mut rng);
        assert!(records.is_empty());
    }

    #[test]
    fn test_build_no_fields() {
        let builder = RecordBuilder::new();
        let mut rng = rand::thread_rng();
        let records = builder.build(&[], 3, &mut rng);
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.is_empty()));
    }

    #[test]
    fn test_duplicate_names_last_write_wins() {
        let builder = RecordBuilder::new();
        let mut rng = rand::thread_rng();
        let fields = fields(&[("value", "int"), ("other", "bool"), ("value", "bool")]);

        let record = builder.build_one(&fields, &mut rng);
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, ["value", "other"]);
        assert!(record["value"].is_boolean());
    }

    #[test]
    fn test_missing_name_and_type() {
        let builder = RecordBuilder::new();
        let mut rng = rand::thread_rng();
        let field = FieldDescriptor::default();
        assert_eq!(field.kind(), FieldType::Other);

        let record = builder.build_one(&[field], &mut rng);
        assert!(record[""].is_string());
    }

    #[test]
    fn test_same_seed_same_records() {
        let builder = RecordBuilder::new();
        let fields = fields(&[("name", "string"), ("user_id", "int"), ("ip", "string")]);

        let a = builder.build(&fields, 5, &mut StdRng::seed_from_u64(9));
        let b = builder.build(&fields, 5, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_config() {
        let config = ValueGenConfig {
            gender_options: vec!["X".to_string()],
            age_range: 18..=18,
            float_range: 2.5..=2.5,
            ..ValueGenConfig::default()
        };
        let builder = RecordBuilder::with_config(config).unwrap();
        let mut rng = StdRng::seed_from_u64(4);

        let records = builder.build(
            &fields(&[("gender", "string"), ("age", "int"), ("price", "float")]),
            10,
            &mut rng,
        );
        for record in &records {
            assert_eq!(record["gender"], "X");
            assert_eq!(record["age"], 18);
            assert_eq!(record["price"].as_f64(), Some(2.5));
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        #[allow(clippy::reversed_empty_ranges)]
        let config = ValueGenConfig {
            int_range: 10..=1,
            ..ValueGenConfig::default()
        };
        let err = RecordBuilder::with_config(config).unwrap_err();
        assert!(err.to_string().contains("int_range"), "{err}");
    }

    #[test]
    fn test_generate_request() {
        let builder = RecordBuilder::new();
        let request = GenerationRequest {
            fields: fields(&[("email", "string"), ("count", "int")]),
            rows: 4,
            seed: Some(1),
        };

        let response = builder.generate(&request);
        assert_eq!(response.records.len(), 4);
        assert_eq!(response, builder.generate(&request));
    }
}
