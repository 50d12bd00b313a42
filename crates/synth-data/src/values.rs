//! Single-value generation from a field name and declared type.

use std::ops::RangeInclusive;

use fake::{
    Fake,
    faker::{
        internet::en::{FreeEmail, IPv4},
        lorem::en::Word,
    },
};
use rand::Rng;
use serde_json::{Number, Value};
use time::{Date, OffsetDateTime};
use tracing::debug;

use crate::{
    error::GenerateError,
    schema::{FieldType, normalize_field_name},
    semantic::SemanticCatalog,
};

/// Configuration for value generation.
#[derive(Debug, Clone)]
pub struct ValueGenConfig {
    /// Values for fields whose name mentions a gender.
    pub gender_options: Vec<String>,
    /// Range for `int` fields whose name contains `age`.
    pub age_range: RangeInclusive<i64>,
    /// Range for `int` fields whose name contains `id`, `count` or `num`.
    pub identifier_range: RangeInclusive<i64>,
    /// Range for every other `int` field.
    pub int_range: RangeInclusive<i64>,
    /// Range for `float` fields, before rounding.
    pub float_range: RangeInclusive<f64>,
    /// Number of decimal places kept on `float` fields.
    pub float_decimals: i32,
    /// Earliest year for `date` fields. The latest date is today.
    pub date_min_year: i32,
}

impl Default for ValueGenConfig {
    fn default() -> Self {
        Self {
            gender_options: vec!["Male".to_string(), "Female".to_string()],
            age_range: 1..=120,
            identifier_range: 1000..=9999,
            int_range: 0..=1000,
            float_range: 1.0..=1000.0,
            float_decimals: 2,
            date_min_year: 1970,
        }
    }
}

impl ValueGenConfig {
    /// Checks that every range can be sampled.
    ///
    /// An empty `gender_options` is allowed: gender fields then get a
    /// dictionary word.
    pub fn validate(&self) -> Result<(), GenerateError> {
        for (label, range) in [
            ("age_range", &self.age_range),
            ("identifier_range", &self.identifier_range),
            ("int_range", &self.int_range),
        ] {
            if range.is_empty() {
                return Err(GenerateError::InvalidConfig(format!(
                    "{label} {}..={} is empty",
                    range.start(),
                    range.end()
                )));
            }
        }

        let (low, high) = (*self.float_range.start(), *self.float_range.end());
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(GenerateError::InvalidConfig(format!(
                "float_range {low}..={high} is not a finite, ordered range"
            )));
        }
        if !(0..=15).contains(&self.float_decimals) {
            return Err(GenerateError::InvalidConfig(format!(
                "float_decimals must be within 0..=15, got {}",
                self.float_decimals
            )));
        }

        let first = Date::from_calendar_date(self.date_min_year, time::Month::January, 1)?;
        if first > OffsetDateTime::now_utc().date() {
            return Err(GenerateError::InvalidConfig(format!(
                "date_min_year {} is in the future",
                self.date_min_year
            )));
        }

        Ok(())
    }
}

/// Generates one synthetic value per field from name heuristics and declared type.
#[derive(Debug, Clone, Default)]
pub struct ValueGenerator {
    config: ValueGenConfig,
    catalog: SemanticCatalog,
}

impl ValueGenerator {
    /// Creates a value generator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with custom configuration, rejecting ranges that
    /// cannot be sampled.
    pub fn with_config(config: ValueGenConfig) -> Result<Self, GenerateError> {
        config.validate()?;
        Ok(Self {
            config,
            catalog: SemanticCatalog::new(),
        })
    }

    pub fn config(&self) -> &ValueGenConfig {
        &self.config
    }

    pub fn catalog(&self) -> &SemanticCatalog {
        &self.catalog
    }

    /// Generates a value for one field. Never fails.
    ///
    /// Name overrides (`gender`, `email`, `ip`) win over the declared type;
    /// everything else dispatches on the type.
    pub fn generate(&self, field_name: &str, field_type: FieldType, rng: &mut impl Rng) -> Value {
        let name = normalize_field_name(field_name);

        if name.contains("gender") {
            return self.generate_gender(rng);
        }
        if name.contains("email") {
            let email: String = FreeEmail().fake_with_rng(rng);
            return Value::String(email);
        }
        if name.contains("ip") {
            let ip: String = IPv4().fake_with_rng(rng);
            return Value::String(ip);
        }

        match field_type {
            FieldType::String => self.generate_string(&name, rng),
            FieldType::Int => Value::from(self.generate_int(&name, rng)),
            FieldType::Float => self.generate_float(rng),
            FieldType::Bool => Value::Bool(rng.gen_bool(0.5)),
            FieldType::Date => match self.generate_date(rng) {
                Ok(date) => Value::String(date.to_string()),
                Err(e) => {
                    debug!(field = field_name, "date generation failed: {e}");
                    dictionary_word(rng)
                }
            },
            FieldType::Other => dictionary_word(rng),
        }
    }

    fn generate_gender(&self, rng: &mut impl Rng) -> Value {
        let options = &self.config.gender_options;
        if options.is_empty() {
            return dictionary_word(rng);
        }
        Value::String(options[rng.gen_range(0..options.len())].clone())
    }

    /// Looks the normalized name up in the semantic catalog, falling back to a word.
    fn generate_string(&self, name: &str, rng: &mut impl Rng) -> Value {
        let Some(semantic) = self.catalog.lookup(name) else {
            return dictionary_word(rng);
        };

        match semantic.generate(rng).and_then(|v| v.into_json()) {
            Ok(value) => value,
            Err(e) => {
                debug!(field = name, ?semantic, "semantic generator failed: {e}");
                dictionary_word(rng)
            }
        }
    }

    fn generate_int(&self, name: &str, rng: &mut impl Rng) -> i64 {
        let range = if name.contains("age") {
            &self.config.age_range
        } else if ["id", "count", "num"].iter().any(|k| name.contains(k)) {
            &self.config.identifier_range
        } else {
            &self.config.int_range
        };
        rng.gen_range(range.clone())
    }

    fn generate_float(&self, rng: &mut impl Rng) -> Value {
        let raw = rng.gen_range(self.config.float_range.clone());
        let scale = 10f64.powi(self.config.float_decimals);
        let rounded = (raw * scale).round() / scale;
        Number::from_f64(rounded).map_or(Value::Null, Value::Number)
    }

    /// A calendar date between January 1st of `date_min_year` and today.
    fn generate_date(&self, rng: &mut impl Rng) -> Result<Date, GenerateError> {
        let first = Date::from_calendar_date(self.config.date_min_year, time::Month::January, 1)?;
        let today = OffsetDateTime::now_utc().date();
        let (from, to) = (first.to_julian_day(), today.to_julian_day());
        let day = rng.gen_range(from..=to.max(from));
        Ok(Date::from_julian_day(day)?)
    }
}

/// Generic fallback string.
fn dictionary_word(rng: &mut impl Rng) -> Value {
    let word: String = Word().fake_with_rng(rng);
    Value::String(word)
}
