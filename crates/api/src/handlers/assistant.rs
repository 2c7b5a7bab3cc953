//! Rule-based assistant: plan the free-text message into listing filters,
//! run the search, and format a short text reply.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use campusnest_core::planner::{self, ListingKind, Plan};
use campusnest_db::models::accommodation::AccommodationFilter;
use campusnest_db::models::food_service::FoodServiceFilter;
use campusnest_db::repositories::{AccommodationRepo, FoodServiceRepo};
use campusnest_db::DbPool;

use crate::state::AppState;

const NO_MATCH_REPLY: &str = "I couldn't find matches. Try widening distance or removing filters.";
const MAX_RESULTS: i64 = 20;
const REPLY_LINES: usize = 5;

#[derive(Debug, Deserialize)]
pub struct AssistantRequest {
    pub message: String,
}

/// A single formatted match line: name, price, and distance when known.
struct Match {
    name: String,
    price: Option<String>,
    distance_km: Option<f64>,
}

impl Match {
    fn to_line(&self) -> String {
        let mut line = format!("• {}", self.name);
        if let Some(price) = &self.price {
            line.push_str(&format!(" — {price}"));
        }
        if let Some(dist) = self.distance_km {
            line.push_str(&format!(" • {dist:.1} km"));
        }
        line
    }
}

/// POST /api/v1/assistant
pub async fn assistant(
    State(state): State<AppState>,
    Json(payload): Json<AssistantRequest>,
) -> Response {
    let plan = planner::plan(&payload.message);

    match run_search(&state.pool, &plan).await {
        Ok(matches) => {
            let reply = format_reply(&matches);
            Json(json!({
                "ok": true,
                "reply": reply,
                "count": matches.len(),
                "plan": plan,
            }))
            .into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "assistant search failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "ok": false, "reply": "⚠️ Server error." })),
            )
                .into_response()
        }
    }
}

async fn run_search(pool: &DbPool, plan: &Plan) -> Result<Vec<Match>, sqlx::Error> {
    match plan.kind {
        ListingKind::Accommodation => {
            let filter = AccommodationFilter {
                university: plan.filter.university.clone(),
                max_rent: plan.filter.max_rent,
                amenities: plan.filter.amenities.clone(),
                limit: Some(MAX_RESULTS),
                ..Default::default()
            };
            let listings = AccommodationRepo::search(pool, &filter).await?;
            Ok(listings
                .into_iter()
                .map(|l| Match {
                    name: l.property_name,
                    price: l.monthly_rent.map(|rent| format!("₹{rent}/mo")),
                    distance_km: l.distance_from_uni,
                })
                .collect())
        }
        // Food listings have no university or rent columns, so only the
        // kind survives planning for them.
        ListingKind::Food => {
            let filter = FoodServiceFilter {
                limit: Some(MAX_RESULTS),
                ..Default::default()
            };
            let listings = FoodServiceRepo::search(pool, &filter).await?;
            Ok(listings
                .into_iter()
                .map(|l| Match {
                    name: l.service_name,
                    price: Some(l.price_range.as_str().to_string()),
                    distance_km: None,
                })
                .collect())
        }
    }
}

fn format_reply(matches: &[Match]) -> String {
    if matches.is_empty() {
        return NO_MATCH_REPLY.to_string();
    }
    let lines: Vec<String> = matches
        .iter()
        .take(REPLY_LINES)
        .map(Match::to_line)
        .collect();
    format!("Here are some matches:\n{}", lines.join("\n"))
}
