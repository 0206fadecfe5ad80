// Favourite countries and booking deep-links.
//
// Favourites are stored server-side as bare country codes; booking links are
// built client-side from the selected country's display name.

use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};

#[derive(Debug, Clone, Deserialize)]
pub struct Favourite {
    pub country_code: String,
}

#[derive(Serialize)]
struct AddFavourite<'a> {
    country_code: &'a str,
}

/// Outbound booking links for one country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingLinks {
    pub flights: String,
    pub hotels: String,
    pub activities: String,
    pub reviews: String,
}

/// Build the booking deep-links shown next to a favourite country. Flights
/// search is not country-scoped; the rest carry the country name as a query.
pub fn booking_links(country_name: &str) -> BookingLinks {
    let with_query = |base: &str, key: &str| -> String {
        Url::parse_with_params(base, &[(key, country_name)])
            .map(String::from)
            .unwrap_or_else(|_| base.to_string())
    };
    BookingLinks {
        flights: "https://www.skyscanner.net/".to_string(),
        hotels: with_query("https://www.booking.com/search.html", "ss"),
        activities: with_query("https://www.getyourguide.com/s/", "q"),
        reviews: with_query("https://www.tripadvisor.com/Search", "q"),
    }
}

impl ApiClient {
    pub async fn list_favourites(&self) -> Result<Vec<Favourite>, ApiError> {
        if !self.is_authenticated() {
            return Err(ApiError::Auth);
        }
        self.execute(self.get("/country-favorites/")).await
    }

    pub async fn add_favourite(&self, country_code: &str) -> Result<(), ApiError> {
        if !self.is_authenticated() {
            return Err(ApiError::Auth);
        }
        let code = country_code.to_uppercase();
        self.execute_empty(self.post_json("/favorites/add/", &AddFavourite { country_code: &code }))
            .await
    }

    pub async fn remove_favourite(&self, country_code: &str) -> Result<(), ApiError> {
        if !self.is_authenticated() {
            return Err(ApiError::Auth);
        }
        self.execute_empty(self.delete(&format!(
            "/favorites/remove/{}/",
            country_code.to_uppercase()
        )))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_links_carry_the_country_name() {
        let links = booking_links("New Zealand");
        assert_eq!(links.flights, "https://www.skyscanner.net/");
        assert_eq!(
            links.hotels,
            "https://www.booking.com/search.html?ss=New+Zealand"
        );
        assert_eq!(links.activities, "https://www.getyourguide.com/s/?q=New+Zealand");
        assert_eq!(links.reviews, "https://www.tripadvisor.com/Search?q=New+Zealand");
    }

    #[test]
    fn booking_links_encode_special_characters() {
        let links = booking_links("Côte d'Ivoire");
        assert!(links.hotels.contains("search.html?ss="));
        assert!(!links.hotels.contains(' '));
    }
}
