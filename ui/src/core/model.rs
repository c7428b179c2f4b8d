//! Wire types for the two display payloads served by the company backend.

use serde::Deserialize;

/// Headline figures for the about section, `GET {backend}/api/stats`.
///
/// Every field is a pre-formatted display string; the backend owns the
/// formatting ("40+", "99.2%", "4.9★") and the client renders it verbatim.
/// The endpoint also returns daily-impact fields we render from static
/// content instead, so unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompanyStats {
    pub team_members: String,
    pub years_experience: String,
    pub on_time_delivery: String,
    pub customer_rating: String,
}

/// One customer quote, `GET {backend}/api/testimonials` (JSON array).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub location: String,
    pub quote: String,
    /// Star rating, 1–5.
    pub rating: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_decode_ignores_extra_backend_fields() {
        let body = serde_json::json!({
            "team_members": "25+",
            "years_experience": "5+",
            "on_time_delivery": "99.2%",
            "customer_rating": "4.9★",
            "daily_packages": "200+",
            "daily_miles": "150+",
            "service_days": "7",
            "updated_at": "2026-01-04T09:00:00Z"
        });
        let stats: CompanyStats = serde_json::from_value(body).unwrap();
        assert_eq!(stats.team_members, "25+");
        assert_eq!(stats.customer_rating, "4.9★");
    }

    #[test]
    fn testimonials_decode_preserves_order() {
        let body = serde_json::json!([
            { "name": "A", "location": "Boca Raton, FL", "quote": "First.", "rating": 5 },
            { "name": "B", "location": "Wellington, FL", "quote": "Second.", "rating": 4 }
        ]);
        let list: Vec<Testimonial> = serde_json::from_value(body).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "A");
        assert_eq!(list[1].rating, 4);
    }
}
