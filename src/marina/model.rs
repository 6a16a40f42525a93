use crate::error::ParseError;

/// Longest boat name accepted, in characters.
pub const MAX_NAME_LENGTH: usize = 127;

/// Longest trailer license tag kept; longer tags are truncated.
pub const MAX_TAG_LENGTH: usize = 19;

/// Where a boat is kept, together with the identifier that only makes sense for that place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    /// Slip number, 1-85 by convention.
    Slip(u32),
    /// Bay letter, A-Z by convention.
    Land(char),
    /// Trailer license tag.
    Trailer(String),
    /// Storage space number, 1-50 by convention.
    Storage(u32),
    /// The type text did not name a known kind of storage.
    Unknown,
}

impl StorageLocation {
    /// Builds a location from its type token and payload text.
    ///
    /// The type token is matched ignoring case and surrounding whitespace. Any token other
    /// than `slip`, `land`, `trailer` or `storage` yields [`StorageLocation::Unknown`] and the
    /// payload is ignored.
    pub fn parse(type_text: &str, payload_text: &str) -> Result<Self, ParseError> {
        let payload = payload_text.trim();
        match type_text.trim().to_ascii_lowercase().as_str() {
            "slip" => parse_number("slip number", payload).map(StorageLocation::Slip),
            "land" => payload
                .chars()
                .next()
                .map(StorageLocation::Land)
                .ok_or(ParseError::MissingPayload("bay letter")),
            "trailer" => {
                if payload.is_empty() {
                    return Err(ParseError::MissingPayload("trailer tag"));
                }
                Ok(StorageLocation::Trailer(
                    payload.chars().take(MAX_TAG_LENGTH).collect(),
                ))
            }
            "storage" => parse_number("storage number", payload).map(StorageLocation::Storage),
            _ => Ok(StorageLocation::Unknown),
        }
    }

    /// Whether the token names one of the four kinds of storage.
    pub fn is_known_type(type_text: &str) -> bool {
        matches!(
            type_text.trim().to_ascii_lowercase().as_str(),
            "slip" | "land" | "trailer" | "storage"
        )
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            StorageLocation::Slip(_) => "slip",
            StorageLocation::Land(_) => "land",
            StorageLocation::Trailer(_) => "trailer",
            StorageLocation::Storage(_) => "storage",
            StorageLocation::Unknown => "unknown",
        }
    }

    /// Payload as written to the data file. Empty for `Unknown`.
    pub fn format_payload(&self) -> String {
        match self {
            StorageLocation::Slip(n) | StorageLocation::Storage(n) => n.to_string(),
            StorageLocation::Land(bay) => bay.to_string(),
            StorageLocation::Trailer(tag) => tag.clone(),
            StorageLocation::Unknown => String::new(),
        }
    }
}

fn parse_number(field: &'static str, text: &str) -> Result<u32, ParseError> {
    text.parse().map_err(|_| ParseError::InvalidNumber {
        field,
        value: text.to_string(),
    })
}

/// A single boat on the books.
///
/// Two records are equal when their names match ignoring case, which is the identity the
/// inventory enforces.
#[derive(Debug, Clone)]
pub struct BoatRecord {
    name: String,
    length: f64,
    location: StorageLocation,
    amount_owed: f64,
}

impl BoatRecord {
    pub fn new(
        name: impl Into<String>,
        length: f64,
        location: StorageLocation,
        amount_owed: f64,
    ) -> Result<Self, ParseError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ParseError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(ParseError::NameTooLong {
                max: MAX_NAME_LENGTH,
            });
        }
        if !length.is_finite() || length <= 0.0 {
            return Err(ParseError::NonPositiveLength(length));
        }
        if !amount_owed.is_finite() || amount_owed < 0.0 {
            return Err(ParseError::NegativeAmount(amount_owed));
        }
        Ok(Self {
            name,
            length,
            location,
            amount_owed: round_cents(amount_owed),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn location(&self) -> &StorageLocation {
        &self.location
    }

    pub fn amount_owed(&self) -> f64 {
        self.amount_owed
    }

    pub fn matches_name(&self, candidate: &str) -> bool {
        names_equal(&self.name, candidate)
    }

    /// Only billing moves the balance.
    pub(crate) fn set_amount_owed(&mut self, amount: f64) {
        self.amount_owed = round_cents(amount);
    }
}

impl PartialEq for BoatRecord {
    fn eq(&self, other: &Self) -> bool {
        self.matches_name(&other.name)
    }
}

impl Eq for BoatRecord {}

/// Lowercased form of a name used for lookups and ordering.
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

pub fn names_equal(a: &str, b: &str) -> bool {
    name_key(a) == name_key(b)
}

/// Rounds to whole cents. Amounts too large to scale have no fractional cents and are
/// returned as given.
pub(crate) fn round_cents(amount: f64) -> f64 {
    let cents = amount * 100.0;
    if !cents.is_finite() {
        return amount;
    }
    cents.round() / 100.0
}
