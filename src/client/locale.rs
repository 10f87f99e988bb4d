//! Locale endpoints: currencies, languages, locales, time-zones.

use std::fmt::Display;

use tracing::info;

use super::paths;
use super::{ApiResponse, GeoDbClient, QueryParams, Result};

impl GeoDbClient {
    /// Currencies used by a country. `countryId` is part of the path; other
    /// filters are appended after it.
    pub fn get_currencies(&self, country_id: impl Display, params: &QueryParams) -> Result<ApiResponse> {
        info!(parent: &self.span, %country_id, "find currencies for country");
        self.get_with_params(&paths::currencies(&country_id), params)
    }

    pub fn get_languages(&self, params: &QueryParams) -> Result<ApiResponse> {
        info!(parent: &self.span, "get all supported languages");
        self.get_with_params(paths::LANGUAGES, params)
    }

    pub fn get_locales(&self, params: &QueryParams) -> Result<ApiResponse> {
        info!(parent: &self.span, "get all supported locales");
        self.get_with_params(paths::LOCALES, params)
    }

    pub fn get_timezones(&self, params: &QueryParams) -> Result<ApiResponse> {
        info!(parent: &self.span, "get all supported time-zones");
        self.get_with_params(paths::TIMEZONES, params)
    }

    pub fn get_timezone(&self, zone_id: impl Display) -> Result<ApiResponse> {
        info!(parent: &self.span, %zone_id, "get time-zone");
        self.get_plain(&paths::timezone(&zone_id))
    }

    pub fn get_timezone_datetime(&self, zone_id: impl Display) -> Result<ApiResponse> {
        info!(parent: &self.span, %zone_id, "get time-zone date-time");
        self.get_plain(&paths::timezone_datetime(&zone_id))
    }

    pub fn get_timezone_time(&self, zone_id: impl Display) -> Result<ApiResponse> {
        info!(parent: &self.span, %zone_id, "get time-zone time");
        self.get_plain(&paths::timezone_time(&zone_id))
    }
}
