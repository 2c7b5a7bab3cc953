//! Text-to-filter planner for the assistant endpoint.
//!
//! Maps free chat text to a structured listing filter with a handful of
//! keyword/regex probes. Intentionally one-shot: no tokenization, no
//! negation handling, no ranking. Ambiguous text defaults to
//! accommodation, and any field that fails to extract is simply omitted,
//! so planning can never fail.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Words that classify a message as food intent.
const FOOD_KEYWORDS_PATTERN: &str = r"\b(mess|canteen|tiffin|food|cafe|restaurant)\b";

/// Institution-name prefixes used to anchor university extraction.
const UNIVERSITY_PATTERN: &str = r"\b(iit|iiit|nit|university|college)[\w\s\-]*";

/// Price ceiling phrased as "under/below/<=/less than <amount>".
const MAX_PRICE_PATTERN: &str = r"(?:under|below|<=|less than)\s*₹?\s*([0-9]{3,6})";

static FOOD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FOOD_KEYWORDS_PATTERN).expect("valid regex"));
static UNIVERSITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(UNIVERSITY_PATTERN).expect("valid regex"));
static MAX_PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MAX_PRICE_PATTERN).expect("valid regex"));
static WIFI_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bwifi\b").expect("valid regex"));
static AC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bac\b").expect("valid regex"));

/// Which listing table a plan targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Accommodation,
    Food,
}

/// Filter dimensions extracted from the message.
///
/// Every field is optional; an empty filter is a valid (under-constrained)
/// plan and simply matches everything. Serializes in camelCase since the
/// plan is echoed in API response bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanFilter {
    /// University token matched against `nearby_universities` entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    /// Monthly rent ceiling. Only populated for accommodation intent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rent: Option<i64>,
    /// Amenity keywords the listing must contain, in detection order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
}

/// The result of planning one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub kind: ListingKind,
    pub filter: PlanFilter,
}

/// Map free text to a structured listing filter.
///
/// The price ceiling is dropped for food intent even when one was parsed:
/// food listings carry a categorical price range rather than a numeric
/// rent, so the ceiling has nothing to compare against.
pub fn plan(text: &str) -> Plan {
    let t = text.to_lowercase();

    let kind = if FOOD_RE.is_match(&t) {
        ListingKind::Food
    } else {
        ListingKind::Accommodation
    };

    let university = UNIVERSITY_RE
        .find(&t)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty());

    let max_rent = MAX_PRICE_RE
        .captures(&t)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .filter(|_| kind == ListingKind::Accommodation);

    let mut amenities = Vec::new();
    if WIFI_RE.is_match(&t) {
        amenities.push("wifi".to_string());
    }
    if AC_RE.is_match(&t) {
        amenities.push("ac".to_string());
    }

    Plan {
        kind,
        filter: PlanFilter {
            university,
            max_rent,
            amenities,
        },
    }
}
