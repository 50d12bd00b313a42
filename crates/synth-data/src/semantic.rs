//! Semantic generators: realistic values for well-known field names.
//!
//! A field whose normalized name exactly matches an entry in the
//! [`SemanticCatalog`] gets a value from the matching [`Semantic`] generator
//! instead of a dictionary word. The catalog is an explicit table built once
//! at startup and shared read-only between requests.

use std::collections::HashMap;

use fake::{
    Dummy, Fake,
    faker::{
        address::en::{
            BuildingNumber, CityName, CountryCode, CountryName, Latitude as LatitudeFaker,
            Longitude as LongitudeFaker, PostCode, SecondaryAddress, StateAbbr, StateName,
            StreetName, StreetSuffix, TimeZone,
        },
        barcode::en::{Isbn, Isbn10, Isbn13},
        color::en::{HexColor, RgbColor},
        company::en::{Bs, Buzzword, CatchPhrase, CompanyName, CompanySuffix, Industry, Profession},
        creditcard::en::CreditCardNumber,
        currency::en::{CurrencyCode, CurrencyName, CurrencySymbol},
        filesystem::en::{FileExtension, FileName, FilePath, MimeType},
        finance::en::Bic,
        internet::en::{DomainSuffix, MACAddress, Password, UserAgent, Username},
        job::en::Title as JobTitle,
        lorem::en::{Paragraph, Sentence, Word},
        name::en::{FirstName, LastName, Name, Suffix, Title},
        phone_number::en::{CellNumber, PhoneNumber},
        time::en::{Date as DateFaker, DateTimeBetween, Time as TimeFaker},
    },
    uuid::UUIDv4,
};
use rand::Rng;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde_json::{Number, Value};
use time::{Date, Duration, OffsetDateTime, format_description::well_known::Rfc3339};
use uuid::Uuid;

use crate::error::GenerateError;

/// Oldest age produced for a date of birth.
const MAX_AGE_YEARS: i64 = 115;

/// A named, zero-argument generator of some realistic domain value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Semantic {
    // Person
    Name,
    FirstName,
    LastName,
    Prefix,
    Suffix,
    // Address
    Address,
    StreetAddress,
    StreetName,
    StreetSuffix,
    BuildingNumber,
    SecondaryAddress,
    City,
    State,
    StateAbbr,
    Country,
    CountryCode,
    Postcode,
    Timezone,
    Latitude,
    Longitude,
    // Company
    Company,
    CompanySuffix,
    CatchPhrase,
    Bs,
    Buzzword,
    Industry,
    Job,
    // Internet
    Username,
    Password,
    DomainName,
    Tld,
    Url,
    Uri,
    Hostname,
    UserAgent,
    MacAddress,
    // Phone
    PhoneNumber,
    CellNumber,
    // Lorem
    Word,
    Sentence,
    Paragraph,
    Text,
    // Finance
    CreditCardNumber,
    CurrencyCode,
    CurrencyName,
    CurrencySymbol,
    Bic,
    // Barcode
    Isbn,
    Isbn10,
    Isbn13,
    // Filesystem
    FileName,
    FileExtension,
    FilePath,
    MimeType,
    // Date and time
    Date,
    DateOfBirth,
    DateTime,
    Iso8601,
    Time,
    Year,
    Month,
    MonthName,
    DayOfWeek,
    DayOfMonth,
    UnixTime,
    AmPm,
    // Misc
    Uuid4,
    HexColor,
    RgbColor,
    Boolean,
    Integer,
    Decimal,
}

/// Raw output of a semantic generator, before conversion to JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum SemanticValue {
    Text(String),
    Integer(i64),
    Bool(bool),
    Decimal(Decimal),
    Date(Date),
    DateTime(OffsetDateTime),
}

impl SemanticValue {
    /// Converts to JSON: dates become ISO-8601 strings and decimals become floats.
    pub fn into_json(self) -> Result<Value, GenerateError> {
        match self {
            Self::Text(s) => Ok(Value::String(s)),
            Self::Integer(n) => Ok(Value::from(n)),
            Self::Bool(b) => Ok(Value::Bool(b)),
            Self::Decimal(d) => d
                .to_f64()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or(GenerateError::Decimal(d)),
            Self::Date(d) => Ok(Value::String(d.to_string())),
            Self::DateTime(dt) => Ok(Value::String(dt.format(&Rfc3339)?)),
        }
    }
}

fn text<F, R>(faker: F, rng: &mut R) -> SemanticValue
where
    String: Dummy<F>,
    R: Rng,
{
    SemanticValue::Text(faker.fake_with_rng(rng))
}

fn word<R: Rng>(rng: &mut R) -> String {
    Word().fake_with_rng(rng)
}

/// Random instant between the Unix epoch and now.
fn instant_since_epoch<R: Rng>(rng: &mut R) -> OffsetDateTime {
    DateTimeBetween(OffsetDateTime::UNIX_EPOCH, OffsetDateTime::now_utc()).fake_with_rng(rng)
}

/// A coordinate rounded to six fractional digits.
fn coordinate(degrees: f64) -> Result<Decimal, GenerateError> {
    Decimal::from_f64_retain(degrees)
        .map(|d| d.round_dp(6))
        .ok_or(GenerateError::Coordinate(degrees))
}

impl Semantic {
    /// Invokes the generator.
    pub fn generate<R: Rng>(self, rng: &mut R) -> Result<SemanticValue, GenerateError> {
        let value = match self {
            Self::Name => text(Name(), rng),
            Self::FirstName => text(FirstName(), rng),
            Self::LastName => text(LastName(), rng),
            Self::Prefix => text(Title(), rng),
            Self::Suffix => text(Suffix(), rng),

            Self::Address => {
                let street = street_address(rng);
                let city: String = CityName().fake_with_rng(rng);
                let state: String = StateAbbr().fake_with_rng(rng);
                let zip: String = PostCode().fake_with_rng(rng);
                SemanticValue::Text(format!("{street}, {city}, {state} {zip}"))
            }
            Self::StreetAddress => SemanticValue::Text(street_address(rng)),
            Self::StreetName => text(StreetName(), rng),
            Self::StreetSuffix => text(StreetSuffix(), rng),
            Self::BuildingNumber => text(BuildingNumber(), rng),
            Self::SecondaryAddress => text(SecondaryAddress(), rng),
            Self::City => text(CityName(), rng),
            Self::State => text(StateName(), rng),
            Self::StateAbbr => text(StateAbbr(), rng),
            Self::Country => text(CountryName(), rng),
            Self::CountryCode => text(CountryCode(), rng),
            Self::Postcode => text(PostCode(), rng),
            Self::Timezone => text(TimeZone(), rng),
            Self::Latitude => {
                let lat: f64 = LatitudeFaker().fake_with_rng(rng);
                SemanticValue::Decimal(coordinate(lat)?)
            }
            Self::Longitude => {
                // fake draws longitudes from [-90, 270).
                let lon: f64 = LongitudeFaker().fake_with_rng(rng);
                let lon = if lon >= 180.0 { lon - 360.0 } else { lon };
                SemanticValue::Decimal(coordinate(lon)?)
            }

            Self::Company => text(CompanyName(), rng),
            Self::CompanySuffix => text(CompanySuffix(), rng),
            Self::CatchPhrase => text(CatchPhrase(), rng),
            Self::Bs => text(Bs(), rng),
            Self::Buzzword => text(Buzzword(), rng),
            Self::Industry => text(Industry(), rng),
            Self::Job => {
                if rng.gen_bool(0.5) {
                    text(JobTitle(), rng)
                } else {
                    text(Profession(), rng)
                }
            }

            Self::Username => text(Username(), rng),
            Self::Password => text(Password(10..17), rng),
            Self::DomainName => SemanticValue::Text(domain_name(rng)),
            Self::Tld => text(DomainSuffix(), rng),
            Self::Url => SemanticValue::Text(format!("https://www.{}/", domain_name(rng))),
            Self::Uri => {
                let domain = domain_name(rng);
                let (dir, page) = (word(rng), word(rng));
                SemanticValue::Text(format!("https://www.{domain}/{dir}/{page}.html"))
            }
            Self::Hostname => {
                let host = word(rng);
                let n: u8 = (1..100).fake_with_rng(rng);
                SemanticValue::Text(format!("{host}-{n:02}.{}", domain_name(rng)))
            }
            Self::UserAgent => text(UserAgent(), rng),
            Self::MacAddress => text(MACAddress(), rng),

            Self::PhoneNumber => text(PhoneNumber(), rng),
            Self::CellNumber => text(CellNumber(), rng),

            Self::Word => SemanticValue::Text(word(rng)),
            Self::Sentence => text(Sentence(4..10), rng),
            Self::Paragraph => text(Paragraph(3..6), rng),
            Self::Text => text(Paragraph(1..4), rng),

            Self::CreditCardNumber => text(CreditCardNumber(), rng),
            Self::CurrencyCode => text(CurrencyCode(), rng),
            Self::CurrencyName => text(CurrencyName(), rng),
            Self::CurrencySymbol => text(CurrencySymbol(), rng),
            Self::Bic => text(Bic(), rng),

            Self::Isbn => text(Isbn(), rng),
            Self::Isbn10 => text(Isbn10(), rng),
            Self::Isbn13 => text(Isbn13(), rng),

            Self::FileName => text(FileName(), rng),
            Self::FileExtension => text(FileExtension(), rng),
            Self::FilePath => text(FilePath(), rng),
            Self::MimeType => text(MimeType(), rng),

            Self::Date => SemanticValue::Date(instant_since_epoch(rng).date()),
            Self::DateOfBirth => {
                let now = OffsetDateTime::now_utc();
                let oldest = now - Duration::days(365 * MAX_AGE_YEARS);
                let born: OffsetDateTime = DateTimeBetween(oldest, now).fake_with_rng(rng);
                SemanticValue::Date(born.date())
            }
            Self::DateTime => SemanticValue::DateTime(instant_since_epoch(rng)),
            Self::Iso8601 => SemanticValue::Text(instant_since_epoch(rng).format(&Rfc3339)?),
            Self::Time => {
                let t: time::Time = TimeFaker().fake_with_rng(rng);
                SemanticValue::Text(format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second()))
            }
            Self::Year => SemanticValue::Text(instant_since_epoch(rng).year().to_string()),
            Self::Month => {
                let day: Date = DateFaker().fake_with_rng(rng);
                SemanticValue::Text(format!("{:02}", u8::from(day.month())))
            }
            Self::MonthName => {
                let day: Date = DateFaker().fake_with_rng(rng);
                SemanticValue::Text(day.month().to_string())
            }
            Self::DayOfWeek => {
                let day: Date = DateFaker().fake_with_rng(rng);
                SemanticValue::Text(day.weekday().to_string())
            }
            Self::DayOfMonth => {
                let day: Date = DateFaker().fake_with_rng(rng);
                SemanticValue::Text(format!("{:02}", day.day()))
            }
            Self::UnixTime => SemanticValue::Integer(instant_since_epoch(rng).unix_timestamp()),
            Self::AmPm => SemanticValue::Text(if rng.gen_bool(0.5) { "AM" } else { "PM" }.into()),

            Self::Uuid4 => {
                let id: Uuid = UUIDv4.fake_with_rng(rng);
                SemanticValue::Text(id.to_string())
            }
            Self::HexColor => text(HexColor(), rng),
            Self::RgbColor => text(RgbColor(), rng),
            Self::Boolean => SemanticValue::Bool(rng.gen_bool(0.5)),
            Self::Integer => SemanticValue::Integer((0..=9999i64).fake_with_rng(rng)),
            Self::Decimal => {
                let cents: i64 = (-99_999_999..=99_999_999).fake_with_rng(rng);
                SemanticValue::Decimal(Decimal::new(cents, 2))
            }
        };

        Ok(value)
    }
}

fn street_address<R: Rng>(rng: &mut R) -> String {
    let number: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    let suffix: String = StreetSuffix().fake_with_rng(rng);
    format!("{number} {street} {suffix}")
}

fn domain_name<R: Rng>(rng: &mut R) -> String {
    let suffix: String = DomainSuffix().fake_with_rng(rng);
    format!("{}.{suffix}", word(rng))
}

/// Normalized field names recognized by the catalog.
///
/// Names containing `gender`, `email` or `ip` never reach the catalog because
/// the name overrides claim them first, so none are listed here (`zip_code`
/// included).
const ENTRIES: &[(&str, Semantic)] = &[
    ("name", Semantic::Name),
    ("full_name", Semantic::Name),
    ("first_name", Semantic::FirstName),
    ("last_name", Semantic::LastName),
    ("prefix", Semantic::Prefix),
    ("suffix", Semantic::Suffix),
    ("address", Semantic::Address),
    ("street_address", Semantic::StreetAddress),
    ("street_name", Semantic::StreetName),
    ("street_suffix", Semantic::StreetSuffix),
    ("building_number", Semantic::BuildingNumber),
    ("secondary_address", Semantic::SecondaryAddress),
    ("city", Semantic::City),
    ("state", Semantic::State),
    ("state_abbr", Semantic::StateAbbr),
    ("country", Semantic::Country),
    ("country_code", Semantic::CountryCode),
    ("postcode", Semantic::Postcode),
    ("postal_code", Semantic::Postcode),
    ("timezone", Semantic::Timezone),
    ("latitude", Semantic::Latitude),
    ("longitude", Semantic::Longitude),
    ("company", Semantic::Company),
    ("company_suffix", Semantic::CompanySuffix),
    ("catch_phrase", Semantic::CatchPhrase),
    ("bs", Semantic::Bs),
    ("buzzword", Semantic::Buzzword),
    ("industry", Semantic::Industry),
    ("job", Semantic::Job),
    ("user_name", Semantic::Username),
    ("username", Semantic::Username),
    ("password", Semantic::Password),
    ("domain_name", Semantic::DomainName),
    ("tld", Semantic::Tld),
    ("url", Semantic::Url),
    ("uri", Semantic::Uri),
    ("hostname", Semantic::Hostname),
    ("host_name", Semantic::Hostname),
    ("user_agent", Semantic::UserAgent),
    ("mac_address", Semantic::MacAddress),
    ("phone_number", Semantic::PhoneNumber),
    ("cell_number", Semantic::CellNumber),
    ("word", Semantic::Word),
    ("sentence", Semantic::Sentence),
    ("paragraph", Semantic::Paragraph),
    ("text", Semantic::Text),
    ("credit_card_number", Semantic::CreditCardNumber),
    ("currency_code", Semantic::CurrencyCode),
    ("currency_name", Semantic::CurrencyName),
    ("currency_symbol", Semantic::CurrencySymbol),
    ("bic", Semantic::Bic),
    ("swift_code", Semantic::Bic),
    ("isbn", Semantic::Isbn),
    ("isbn10", Semantic::Isbn10),
    ("isbn13", Semantic::Isbn13),
    ("file_name", Semantic::FileName),
    ("file_extension", Semantic::FileExtension),
    ("file_path", Semantic::FilePath),
    ("mime_type", Semantic::MimeType),
    ("date", Semantic::Date),
    ("date_of_birth", Semantic::DateOfBirth),
    ("date_time", Semantic::DateTime),
    ("iso8601", Semantic::Iso8601),
    ("time", Semantic::Time),
    ("year", Semantic::Year),
    ("month", Semantic::Month),
    ("month_name", Semantic::MonthName),
    ("day_of_week", Semantic::DayOfWeek),
    ("day_of_month", Semantic::DayOfMonth),
    ("unix_time", Semantic::UnixTime),
    ("am_pm", Semantic::AmPm),
    ("uuid4", Semantic::Uuid4),
    ("hex_color", Semantic::HexColor),
    ("color", Semantic::HexColor),
    ("rgb_color", Semantic::RgbColor),
    ("boolean", Semantic::Boolean),
    ("integer", Semantic::Integer),
    ("decimal", Semantic::Decimal),
];

/// Lookup table from normalized field name to semantic generator.
#[derive(Debug, Clone)]
pub struct SemanticCatalog {
    generators: HashMap<&'static str, Semantic>,
}

impl SemanticCatalog {
    /// Builds the catalog from the built-in table.
    pub fn new() -> Self {
        Self {
            generators: ENTRIES.iter().copied().collect(),
        }
    }

    /// Exact lookup of an already normalized field name.
    pub fn lookup(&self, normalized: &str) -> Option<Semantic> {
        self.generators.get(normalized).copied()
    }

    /// All recognized names, unordered.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.generators.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl Default for SemanticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_catalog_names_are_normalized() {
        let catalog = SemanticCatalog::new();
        assert_eq!(catalog.len(), ENTRIES.len());
        for name in catalog.names() {
            assert_eq!(name, crate::schema::normalize_field_name(name));
        }
    }

    #[test]
    fn test_catalog_names_not_shadowed_by_overrides() {
        let catalog = SemanticCatalog::new();
        for name in catalog.names() {
            for claimed in ["gender", "email", "ip"] {
                assert!(!name.contains(claimed), "{name} is unreachable");
            }
        }
    }

    #[test]
    fn test_every_generator_converts() {
        let mut rng = StdRng::seed_from_u64(7);
        for &(name, semantic) in ENTRIES {
            for _ in 0..20 {
                let value = semantic.generate(&mut rng).unwrap();
                let json = value.into_json().unwrap();
                assert!(!json.is_null(), "{name} produced null");
            }
        }
    }

    #[test]
    fn test_date_of_birth_is_iso_date() {
        let mut rng = rand::thread_rng();
        let json = Semantic::DateOfBirth
            .generate(&mut rng)
            .unwrap()
            .into_json()
            .unwrap();
        let s = json.as_str().unwrap();
        assert_eq!(s.len(), 10);
        assert_eq!(&s[4..5], "-");
        assert_eq!(&s[7..8], "-");
    }

    #[test]
    fn test_coordinates_become_floats() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let lat = Semantic::Latitude
                .generate(&mut rng)
                .unwrap()
                .into_json()
                .unwrap();
            let lat = lat.as_f64().unwrap();
            assert!((-90.0..=90.0).contains(&lat));

            let lon = Semantic::Longitude
                .generate(&mut rng)
                .unwrap()
                .into_json()
                .unwrap();
            let lon = lon.as_f64().unwrap();
            assert!((-180.0..=180.0).contains(&lon));
        }
    }

    #[test]
    fn test_date_is_iso_date_since_epoch() {
        let format = time::macros::format_description!("[year]-[month]-[day]");
        let today = OffsetDateTime::now_utc().date();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let json = Semantic::Date.generate(&mut rng).unwrap().into_json().unwrap();
            let date = Date::parse(json.as_str().unwrap(), &format).unwrap();
            assert!(date.year() >= 1970 && date <= today, "{date}");
        }
    }

    #[test]
    fn test_calendar_names() {
        let months = [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ];
        let days = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..30 {
            let SemanticValue::Text(month) = Semantic::MonthName.generate(&mut rng).unwrap() else {
                panic!("month name is not text");
            };
            assert!(months.contains(&month.as_str()), "{month}");

            let SemanticValue::Text(day) = Semantic::DayOfWeek.generate(&mut rng).unwrap() else {
                panic!("day of week is not text");
            };
            assert!(days.contains(&day.as_str()), "{day}");

            let SemanticValue::Text(time) = Semantic::Time.generate(&mut rng).unwrap() else {
                panic!("time is not text");
            };
            assert_eq!(time.len(), 8, "{time}");
        }
    }

    #[test]
    fn test_network_and_color_values() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let SemanticValue::Text(host) = Semantic::Hostname.generate(&mut rng).unwrap() else {
                panic!("hostname is not text");
            };
            assert!(host.split('.').count() >= 3, "{host}");
            assert!(!host.contains(' '));

            let SemanticValue::Text(uri) = Semantic::Uri.generate(&mut rng).unwrap() else {
                panic!("uri is not text");
            };
            assert!(uri.starts_with("https://www.") && uri.ends_with(".html"), "{uri}");

            let SemanticValue::Text(color) = Semantic::HexColor.generate(&mut rng).unwrap() else {
                panic!("hex color is not text");
            };
            assert!(color.starts_with('#'), "{color}");
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()), "{color}");

            let SemanticValue::Text(id) = Semantic::Uuid4.generate(&mut rng).unwrap() else {
                panic!("uuid is not text");
            };
            assert_eq!(Uuid::parse_str(&id).unwrap().get_version_num(), 4);
        }
    }

    #[test]
    fn test_seeded_semantics_repeat() {
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            [Semantic::Date, Semantic::Uuid4, Semantic::HexColor, Semantic::Latitude]
                .into_iter()
                .map(|s| s.generate(&mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(21), run(21));
    }

    #[test]
    fn test_date_time_is_rfc3339() {
        let json = SemanticValue::DateTime(OffsetDateTime::UNIX_EPOCH)
            .into_json()
            .unwrap();
        assert_eq!(json, Value::String("1970-01-01T00:00:00Z".to_string()));
    }

    #[test]
    fn test_lookup() {
        let catalog = SemanticCatalog::new();
        assert_eq!(catalog.lookup("address"), Some(Semantic::Address));
        assert_eq!(catalog.lookup("user_name"), Some(Semantic::Username));
        assert_eq!(catalog.lookup("date"), Some(Semantic::Date));
        assert_eq!(catalog.lookup("hostname"), Some(Semantic::Hostname));
        assert_eq!(catalog.lookup("Address"), None);
        assert_eq!(catalog.lookup("favourite_cheese"), None);
    }
}
