//! Relative request paths for every GeoDB endpoint.
//!
//! Identifiers are formatted in verbatim: no validation, no escaping.

use std::fmt::Display;

// ─── Admin divisions ────────────────────────────────────────────

pub const ADMIN_DIVISIONS: &str = "geo/adminDivisions";

pub fn admin_division(division_id: impl Display) -> String {
    format!("geo/adminDivisions/{}", division_id)
}

pub fn cities_near_division(division_id: impl Display) -> String {
    format!("geo/adminDivisions/{}/nearbyCities", division_id)
}

pub fn divisions_near_division(division_id: impl Display) -> String {
    format!("geo/adminDivisions/{}/nearbyDivisions", division_id)
}

pub fn places_near_division(division_id: impl Display) -> String {
    format!("geo/adminDivisions/{}/nearbyPlaces", division_id)
}

// ─── Cities ─────────────────────────────────────────────────────

pub const CITIES: &str = "geo/cities";

pub fn city(city_id: impl Display) -> String {
    format!("geo/cities/{}", city_id)
}

pub fn cities_near_city(city_id: impl Display) -> String {
    format!("geo/cities/{}/nearbyCities", city_id)
}

pub fn divisions_near_city(city_id: impl Display) -> String {
    format!("geo/cities/{}/nearbyDivisions", city_id)
}

pub fn places_near_city(city_id: impl Display) -> String {
    format!("geo/cities/{}/nearbyPlaces", city_id)
}

pub fn city_distance(city_id: impl Display, to_city_id: impl Display) -> String {
    format!("geo/cities/{}/distance?toCityId={}", city_id, to_city_id)
}

pub fn city_datetime(city_id: impl Display) -> String {
    format!("geo/cities/{}/dateTime", city_id)
}

pub fn city_located_in(city_id: impl Display) -> String {
    format!("geo/cities/{}/locatedIn", city_id)
}

pub fn city_time(city_id: impl Display) -> String {
    format!("geo/cities/{}/time", city_id)
}

// ─── Countries & regions ────────────────────────────────────────

pub const COUNTRIES: &str = "geo/countries";

pub fn country(country_id: impl Display) -> String {
    format!("geo/countries/{}", country_id)
}

pub fn country_places(country_id: impl Display) -> String {
    format!("geo/countries/{}/places", country_id)
}

pub fn country_regions(country_id: impl Display) -> String {
    format!("geo/countries/{}/regions", country_id)
}

pub fn region(country_id: impl Display, region_code: impl Display) -> String {
    format!("geo/countries/{}/regions/{}", country_id, region_code)
}

pub fn region_admin_divisions(country_id: impl Display, region_code: impl Display) -> String {
    format!("{}/adminDivisions", region(country_id, region_code))
}

pub fn region_cities(country_id: impl Display, region_code: impl Display) -> String {
    format!("{}/cities", region(country_id, region_code))
}

pub fn region_places(country_id: impl Display, region_code: impl Display) -> String {
    format!("{}/places", region(country_id, region_code))
}

// ─── Locations (ISO-6709) ───────────────────────────────────────

pub fn cities_near_location(location_id: impl Display) -> String {
    format!("geo/locations/{}/nearbyCities", location_id)
}

pub fn divisions_near_location(location_id: impl Display) -> String {
    format!("geo/locations/{}/nearbyDivisions", location_id)
}

pub fn places_near_location(location_id: impl Display) -> String {
    format!("geo/locations/{}/nearbyPlaces", location_id)
}

// ─── Places ─────────────────────────────────────────────────────

pub const PLACES: &str = "geo/places";

pub fn place(place_id: impl Display) -> String {
    format!("geo/places/{}", place_id)
}

pub fn places_near_place(place_id: impl Display) -> String {
    format!("geo/places/{}/nearbyPlaces", place_id)
}

pub fn place_distance(place_id: impl Display, to_place_id: impl Display) -> String {
    format!("geo/places/{}/distance?toPlaceId={}", place_id, to_place_id)
}

pub fn place_datetime(place_id: impl Display) -> String {
    format!("geo/places/{}/dateTime", place_id)
}

pub fn place_located_in(place_id: impl Display) -> String {
    format!("geo/places/{}/locatedIn", place_id)
}

pub fn place_time(place_id: impl Display) -> String {
    format!("geo/places/{}/time", place_id)
}

// ─── Locale ─────────────────────────────────────────────────────

pub const LANGUAGES: &str = "locale/languages";
pub const LOCALES: &str = "locale/locales";
pub const TIMEZONES: &str = "locale/timezones";

pub fn currencies(country_id: impl Display) -> String {
    format!("locale/currencies?countryId={}", country_id)
}

pub fn timezone(zone_id: impl Display) -> String {
    format!("locale/timezones/{}", zone_id)
}

pub fn timezone_datetime(zone_id: impl Display) -> String {
    format!("locale/timezones/{}/dateTime", zone_id)
}

pub fn timezone_time(zone_id: impl Display) -> String {
    format!("locale/timezones/{}/time", zone_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_division_paths() {
        assert_eq!(admin_division(3301438), "geo/adminDivisions/3301438");
        assert_eq!(cities_near_division("Q99"), "geo/adminDivisions/Q99/nearbyCities");
        assert_eq!(divisions_near_division(7), "geo/adminDivisions/7/nearbyDivisions");
        assert_eq!(places_near_division(7), "geo/adminDivisions/7/nearbyPlaces");
    }

    #[test]
    fn test_city_paths() {
        assert_eq!(city(123), "geo/cities/123");
        assert_eq!(divisions_near_city(5), "geo/cities/5/nearbyDivisions");
        assert_eq!(places_near_city(5), "geo/cities/5/nearbyPlaces");
        assert_eq!(city_datetime(5), "geo/cities/5/dateTime");
        assert_eq!(city_located_in(5), "geo/cities/5/locatedIn");
        assert_eq!(city_time(5), "geo/cities/5/time");
    }

    #[test]
    fn test_cities_near_city_interpolates_id() {
        assert_eq!(cities_near_city(3350606), "geo/cities/3350606/nearbyCities");
        assert!(!cities_near_city(1).contains("{}"));
    }

    #[test]
    fn test_distance_paths_embed_query() {
        assert_eq!(city_distance(1, 2), "geo/cities/1/distance?toCityId=2");
        assert_eq!(place_distance("Q60", "Q65"), "geo/places/Q60/distance?toPlaceId=Q65");
    }

    #[test]
    fn test_country_and_region_paths() {
        assert_eq!(country("US"), "geo/countries/US");
        assert_eq!(country_places("US"), "geo/countries/US/places");
        assert_eq!(country_regions("US"), "geo/countries/US/regions");
        assert_eq!(region("US", "CA"), "geo/countries/US/regions/CA");
        assert_eq!(region_admin_divisions("US", "CA"), "geo/countries/US/regions/CA/adminDivisions");
        assert_eq!(region_cities("US", "CA"), "geo/countries/US/regions/CA/cities");
        assert_eq!(region_places("US", "CA"), "geo/countries/US/regions/CA/places");
    }

    #[test]
    fn test_location_paths_verbatim() {
        let loc = "+40.7128-074.0060";
        assert_eq!(cities_near_location(loc), "geo/locations/+40.7128-074.0060/nearbyCities");
        assert_eq!(divisions_near_location(loc), "geo/locations/+40.7128-074.0060/nearbyDivisions");
        assert_eq!(places_near_location(loc), "geo/locations/+40.7128-074.0060/nearbyPlaces");
    }

    #[test]
    fn test_place_paths() {
        assert_eq!(place("Q60"), "geo/places/Q60");
        assert_eq!(places_near_place("Q60"), "geo/places/Q60/nearbyPlaces");
        assert_eq!(place_datetime("Q60"), "geo/places/Q60/dateTime");
        assert_eq!(place_located_in("Q60"), "geo/places/Q60/locatedIn");
        assert_eq!(place_time("Q60"), "geo/places/Q60/time");
    }

    #[test]
    fn test_locale_paths() {
        assert_eq!(currencies("FR"), "locale/currencies?countryId=FR");
        assert_eq!(timezone("Europe__Paris"), "locale/timezones/Europe__Paris");
        assert_eq!(timezone_datetime("UTC"), "locale/timezones/UTC/dateTime");
        assert_eq!(timezone_time("UTC"), "locale/timezones/UTC/time");
    }

    #[test]
    fn test_collection_paths() {
        assert_eq!(ADMIN_DIVISIONS, "geo/adminDivisions");
        assert_eq!(CITIES, "geo/cities");
        assert_eq!(COUNTRIES, "geo/countries");
        assert_eq!(PLACES, "geo/places");
        assert_eq!(LANGUAGES, "locale/languages");
        assert_eq!(LOCALES, "locale/locales");
        assert_eq!(TIMEZONES, "locale/timezones");
    }
}
