//! Geo endpoints: admin divisions, cities, countries, regions, locations, places.

use std::fmt::Display;

use tracing::info;

use super::paths;
use super::{ApiResponse, GeoDbClient, QueryParams, Result};

impl GeoDbClient {
    // ─── Admin divisions ────────────────────────────────────────

    /// Find administrative divisions, filtering by optional criteria.
    pub fn get_admin_divisions(&self, params: &QueryParams) -> Result<ApiResponse> {
        info!(parent: &self.span, "find administrative divisions");
        self.get_with_params(paths::ADMIN_DIVISIONS, params)
    }

    pub fn get_admin_division_details(&self, division_id: impl Display) -> Result<ApiResponse> {
        info!(parent: &self.span, %division_id, "get administrative division details");
        self.get_plain(&paths::admin_division(&division_id))
    }

    pub fn get_cities_near_division(
        &self,
        division_id: impl Display,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        info!(parent: &self.span, %division_id, "find cities near administrative division");
        self.get_with_params(&paths::cities_near_division(&division_id), params)
    }

    pub fn get_admin_divisions_near_division(
        &self,
        division_id: impl Display,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        info!(parent: &self.span, %division_id, "find administrative divisions near administrative division");
        self.get_with_params(&paths::divisions_near_division(&division_id), params)
    }

    pub fn get_places_near_division(
        &self,
        division_id: impl Display,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        info!(parent: &self.span, %division_id, "find places near administrative division");
        self.get_with_params(&paths::places_near_division(&division_id), params)
    }

    // ─── Cities ─────────────────────────────────────────────────

    /// Find cities, filtering by optional criteria (`namePrefix`,
    /// `countryIds`, `minPopulation`, `limit`, `offset`, ...).
    pub fn get_cities(&self, params: &QueryParams) -> Result<ApiResponse> {
        info!(parent: &self.span, "find cities");
        self.get_with_params(paths::CITIES, params)
    }

    pub fn get_cities_near_city(&self, city_id: impl Display, params: &QueryParams) -> Result<ApiResponse> {
        info!(parent: &self.span, %city_id, "find cities near city");
        self.get_with_params(&paths::cities_near_city(&city_id), params)
    }

    pub fn get_admin_divisions_near_city(
        &self,
        city_id: impl Display,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        info!(parent: &self.span, %city_id, "find administrative divisions near city");
        self.get_with_params(&paths::divisions_near_city(&city_id), params)
    }

    pub fn get_places_near_city(&self, city_id: impl Display, params: &QueryParams) -> Result<ApiResponse> {
        info!(parent: &self.span, %city_id, "find places near city");
        self.get_with_params(&paths::places_near_city(&city_id), params)
    }

    pub fn get_city_details(&self, city_id: impl Display, params: &QueryParams) -> Result<ApiResponse> {
        info!(parent: &self.span, %city_id, "get city details");
        self.get_with_params(&paths::city(&city_id), params)
    }

    /// Distance from one city to another. `toCityId` is part of the path;
    /// extra filters (e.g. `distanceUnit`) are appended after it.
    pub fn get_city_distance(
        &self,
        city_id: impl Display,
        to_city_id: impl Display,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        info!(parent: &self.span, %city_id, %to_city_id, "get distance between cities");
        self.get_with_params(&paths::city_distance(&city_id, &to_city_id), params)
    }

    pub fn get_city_datetime(&self, city_id: impl Display) -> Result<ApiResponse> {
        info!(parent: &self.span, %city_id, "get city date-time");
        self.get_plain(&paths::city_datetime(&city_id))
    }

    /// Details of the region containing the city.
    pub fn get_city_containing_region(
        &self,
        city_id: impl Display,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        info!(parent: &self.span, %city_id, "get region containing city");
        self.get_with_params(&paths::city_located_in(&city_id), params)
    }

    pub fn get_city_time(&self, city_id: impl Display) -> Result<ApiResponse> {
        info!(parent: &self.span, %city_id, "get city time");
        self.get_plain(&paths::city_time(&city_id))
    }

    // ─── Countries & regions ────────────────────────────────────

    pub fn get_countries(&self, params: &QueryParams) -> Result<ApiResponse> {
        info!(parent: &self.span, "find countries");
        self.get_with_params(paths::COUNTRIES, params)
    }

    /// `country_id` is an ISO-3166 code or a WikiData id.
    pub fn get_country_details(&self, country_id: impl Display, params: &QueryParams) -> Result<ApiResponse> {
        info!(parent: &self.span, %country_id, "get country details");
        self.get_with_params(&paths::country(&country_id), params)
    }

    pub fn get_country_places(&self, country_id: impl Display, params: &QueryParams) -> Result<ApiResponse> {
        info!(parent: &self.span, %country_id, "get country places");
        self.get_with_params(&paths::country_places(&country_id), params)
    }

    pub fn get_country_regions(&self, country_id: impl Display, params: &QueryParams) -> Result<ApiResponse> {
        info!(parent: &self.span, %country_id, "get country regions");
        self.get_with_params(&paths::country_regions(&country_id), params)
    }

    /// `region_code` is an ISO-3166 or FIPS region code.
    pub fn get_region_details(
        &self,
        country_id: impl Display,
        region_code: impl Display,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        info!(parent: &self.span, %country_id, %region_code, "get region details");
        self.get_with_params(&paths::region(&country_id, &region_code), params)
    }

    pub fn get_country_region_admin_divisions(
        &self,
        country_id: impl Display,
        region_code: impl Display,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        info!(parent: &self.span, %country_id, %region_code, "get region administrative divisions");
        self.get_with_params(&paths::region_admin_divisions(&country_id, &region_code), params)
    }

    pub fn get_country_region_cities(
        &self,
        country_id: impl Display,
        region_code: impl Display,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        info!(parent: &self.span, %country_id, %region_code, "get region cities");
        self.get_with_params(&paths::region_cities(&country_id, &region_code), params)
    }

    pub fn get_country_region_places(
        &self,
        country_id: impl Display,
        region_code: impl Display,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        info!(parent: &self.span, %country_id, %region_code, "get region places");
        self.get_with_params(&paths::region_places(&country_id, &region_code), params)
    }

    // ─── Locations ──────────────────────────────────────────────

    /// `location_id` is an ISO-6709 coordinate, e.g. `+40.7128-074.0060`.
    pub fn get_cities_near_location(
        &self,
        location_id: impl Display,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        info!(parent: &self.span, %location_id, "find cities near location");
        self.get_with_params(&paths::cities_near_location(&location_id), params)
    }

    pub fn get_admin_divisions_near_location(
        &self,
        location_id: impl Display,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        info!(parent: &self.span, %location_id, "find administrative divisions near location");
        self.get_with_params(&paths::divisions_near_location(&location_id), params)
    }

    pub fn get_places_near_location(
        &self,
        location_id: impl Display,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        info!(parent: &self.span, %location_id, "find places near location");
        self.get_with_params(&paths::places_near_location(&location_id), params)
    }

    // ─── Places ─────────────────────────────────────────────────

    pub fn get_places(&self, params: &QueryParams) -> Result<ApiResponse> {
        info!(parent: &self.span, "find places");
        self.get_with_params(paths::PLACES, params)
    }

    /// `place_id` is either the native id or a WikiData id.
    pub fn get_places_near_place(&self, place_id: impl Display, params: &QueryParams) -> Result<ApiResponse> {
        info!(parent: &self.span, %place_id, "find places near place");
        self.get_with_params(&paths::places_near_place(&place_id), params)
    }

    pub fn get_place_details(&self, place_id: impl Display, params: &QueryParams) -> Result<ApiResponse> {
        info!(parent: &self.span, %place_id, "get place details");
        self.get_with_params(&paths::place(&place_id), params)
    }

    pub fn get_place_distance(
        &self,
        place_id: impl Display,
        to_place_id: impl Display,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        info!(parent: &self.span, %place_id, %to_place_id, "get distance between places");
        self.get_with_params(&paths::place_distance(&place_id, &to_place_id), params)
    }

    pub fn get_place_datetime(&self, place_id: impl Display) -> Result<ApiResponse> {
        info!(parent: &self.span, %place_id, "get place date-time");
        self.get_plain(&paths::place_datetime(&place_id))
    }

    /// Details of the populated place containing this place.
    pub fn get_place_containing_region(
        &self,
        place_id: impl Display,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        info!(parent: &self.span, %place_id, "get populated place containing place");
        self.get_with_params(&paths::place_located_in(&place_id), params)
    }

    pub fn get_place_time(&self, place_id: impl Display) -> Result<ApiResponse> {
        info!(parent: &self.span, %place_id, "get place time");
        self.get_plain(&paths::place_time(&place_id))
    }
}
