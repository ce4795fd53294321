use serde_json::Value;

use crate::features::itinerary::dto::{DayPlan, ItineraryDocument, ItineraryRequest};
use crate::features::itinerary::helpers::display_text;

pub const MOCK_DAYS: u32 = 3;
pub const MOCK_BUDGET: &str = "Medium";

// Known inconsistency: day two is a fixed literal, not derived from the
// requested date range.
pub const MOCK_DAY_TWO_DATE: &str = "2025-11-09";

/// Builds the fixed template itinerary. Only the destination and the two
/// trip dates come from the request.
pub fn build_mock_itinerary(request: &ItineraryRequest) -> ItineraryDocument {
    ItineraryDocument {
        title: format!("Mock Itinerary for {}", display_text(&request.destination)),
        destination: request.destination.clone(),
        start_date: request.start_date.clone(),
        end_date: request.end_date.clone(),
        days: MOCK_DAYS,
        budget: MOCK_BUDGET.to_string(),
        items: vec![
            day_plan(
                1,
                &request.start_date,
                &["Arrival", "Explore city center", "Try local food"],
                &[
                    "Breakfast at hotel",
                    "Lunch in city square",
                    "Dinner at rooftop cafe",
                ],
                "Take it easy after travel.",
            ),
            day_plan(
                2,
                &Value::from(MOCK_DAY_TWO_DATE),
                &["Visit museum", "Boat tour", "Evening market"],
                &["Breakfast buffet", "Lunch by river", "Dinner street food"],
                "Carry water and comfortable shoes.",
            ),
            day_plan(
                3,
                &request.end_date,
                &["Morning walk", "Souvenir shopping", "Departure"],
                &["Breakfast at cafe", "Lunch at airport"],
                "Check out by 11 AM.",
            ),
        ],
    }
}

fn day_plan(day: u32, date: &Value, highlights: &[&str], meals: &[&str], notes: &str) -> DayPlan {
    DayPlan {
        day,
        date: date.clone(),
        highlights: highlights.iter().map(|item| item.to_string()).collect(),
        meals: meals.iter().map(|item| item.to_string()).collect(),
        notes: notes.to_string(),
    }
}
