// Itinerary endpoints and timezone-aware stop display.
//
// Stops are stored as naive date/time strings in the itinerary's named
// timezone; display renders each stop both in that destination timezone and
// converted into the viewer's timezone.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};

fn default_timezone() -> String {
    "UTC".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryItem {
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM, empty when the stop has no fixed time.
    #[serde(default)]
    pub time: String,
    pub location: String,
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Itinerary {
    pub id: i64,
    pub title: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub items: Vec<ItineraryItem>,
}

#[derive(Debug, Serialize)]
pub struct NewItinerary {
    pub title: String,
    pub items: Vec<ItineraryItem>,
}

#[derive(Debug, Serialize)]
pub struct ItineraryUpdate {
    pub title: String,
    pub timezone: String,
    pub items: Vec<ItineraryItem>,
}

/// A stop rendered in two clocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopTimes {
    /// In the viewer's timezone.
    pub viewer: String,
    /// In the itinerary's destination timezone.
    pub destination: String,
}

const STOP_FORMAT: &str = "%a, %b %-d · %-I:%M %p %Z";

/// Render a stop's date/time in the destination timezone and the viewer's.
///
/// An empty timezone means UTC, matching what older itineraries carry. Yields
/// None for unparseable dates or unknown timezone names rather than guessing.
pub fn format_stop_times(item: &ItineraryItem, timezone: &str, viewer: Tz) -> Option<StopTimes> {
    let tz: Tz = if timezone.is_empty() {
        Tz::UTC
    } else {
        timezone.parse().ok()?
    };

    let date = NaiveDate::parse_from_str(&item.date, "%Y-%m-%d").ok()?;
    let time = if item.time.is_empty() {
        NaiveTime::from_hms_opt(0, 0, 0)?
    } else {
        NaiveTime::parse_from_str(&item.time, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&item.time, "%H:%M:%S"))
            .ok()?
    };
    let naive = NaiveDateTime::new(date, time);
    let at_destination = tz.from_local_datetime(&naive).earliest()?;

    Some(StopTimes {
        viewer: at_destination
            .with_timezone(&viewer)
            .format(STOP_FORMAT)
            .to_string(),
        destination: at_destination.format(STOP_FORMAT).to_string(),
    })
}

impl ApiClient {
    pub async fn create_itinerary(&self, itinerary: &NewItinerary) -> Result<Itinerary, ApiError> {
        if !self.is_authenticated() {
            return Err(ApiError::Auth);
        }
        self.execute(self.post_json("/api/itinerary/", itinerary))
            .await
    }

    pub async fn my_itineraries(&self) -> Result<Vec<Itinerary>, ApiError> {
        if !self.is_authenticated() {
            return Err(ApiError::Auth);
        }
        self.execute(self.get("/api/my-itineraries/")).await
    }

    pub async fn update_itinerary(
        &self,
        id: i64,
        update: &ItineraryUpdate,
    ) -> Result<Itinerary, ApiError> {
        if !self.is_authenticated() {
            return Err(ApiError::Auth);
        }
        self.execute(self.put_json(&format!("/api/update-itinerary/{}/", id), update))
            .await
    }

    pub async fn delete_itinerary(&self, id: i64) -> Result<(), ApiError> {
        if !self.is_authenticated() {
            return Err(ApiError::Auth);
        }
        self.execute_empty(self.delete(&format!("/api/delete-itinerary/{}/", id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(date: &str, time: &str) -> ItineraryItem {
        ItineraryItem {
            date: date.to_string(),
            time: time.to_string(),
            location: "Shibuya".to_string(),
            activity: "Crossing".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn renders_destination_and_viewer_clocks() {
        // 09:30 in Tokyo is 00:30 the same day in UTC.
        let times = format_stop_times(&stop("2026-03-14", "09:30"), "Asia/Tokyo", Tz::UTC).unwrap();
        assert_eq!(times.destination, "Sat, Mar 14 · 9:30 AM JST");
        assert_eq!(times.viewer, "Sat, Mar 14 · 12:30 AM UTC");
    }

    #[test]
    fn viewer_conversion_can_cross_midnight() {
        // 23:00 in New York on the 1st is already the 2nd in Paris.
        let times = format_stop_times(
            &stop("2026-07-01", "23:00"),
            "America/New_York",
            "Europe/Paris".parse().unwrap(),
        )
        .unwrap();
        assert!(times.destination.starts_with("Wed, Jul 1"));
        assert!(times.viewer.starts_with("Thu, Jul 2"));
    }

    #[test]
    fn empty_time_defaults_to_midnight() {
        let times = format_stop_times(&stop("2026-03-14", ""), "UTC", Tz::UTC).unwrap();
        assert_eq!(times.destination, "Sat, Mar 14 · 12:00 AM UTC");
    }

    #[test]
    fn empty_timezone_means_utc() {
        let with_empty = format_stop_times(&stop("2026-03-14", "10:00"), "", Tz::UTC).unwrap();
        let with_utc = format_stop_times(&stop("2026-03-14", "10:00"), "UTC", Tz::UTC).unwrap();
        assert_eq!(with_empty, with_utc);
    }

    #[test]
    fn invalid_input_yields_none() {
        assert!(format_stop_times(&stop("not-a-date", "10:00"), "UTC", Tz::UTC).is_none());
        assert!(format_stop_times(&stop("2026-03-14", "25:99"), "UTC", Tz::UTC).is_none());
        assert!(format_stop_times(&stop("2026-03-14", "10:00"), "Mars/Olympus", Tz::UTC).is_none());
    }

    #[test]
    fn itinerary_without_timezone_defaults_to_utc() {
        let json = r#"{"id": 1, "title": "Japan", "items": []}"#;
        let itinerary: Itinerary = serde_json::from_str(json).unwrap();
        assert_eq!(itinerary.timezone, "UTC");
    }
}
