use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{DashboardError, Result};
use crate::utils::constants::MAX_SELECTED_CITIES;

/// The cities and date range the user is currently comparing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    cities: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl FilterSelection {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            cities: Vec::with_capacity(MAX_SELECTED_CITIES),
            start_date,
            end_date,
        }
    }

    /// Build the initial selection from configured presets.
    ///
    /// Preset cities missing from `available` are left out, as is anything
    /// past the selection limit.
    pub fn preset(
        cities: &[String],
        start_date: NaiveDate,
        end_date: NaiveDate,
        available: &[String],
    ) -> Self {
        let mut selection = Self::new(start_date, end_date);
        for city in cities {
            if let Err(e) = selection.select_city(city, available) {
                tracing::warn!("Skipping preset city '{}': {}", city, e);
            }
        }
        selection
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cities.len() >= MAX_SELECTED_CITIES
    }

    /// Add a city to the selection.
    ///
    /// Returns `Ok(false)` when the city was already selected. A city outside
    /// `available`, or one that would exceed the limit, is rejected and the
    /// selection is left untouched.
    pub fn select_city(&mut self, city: &str, available: &[String]) -> Result<bool> {
        if !available.iter().any(|c| c == city) {
            return Err(DashboardError::UnknownCity(city.to_string()));
        }

        if self.cities.iter().any(|c| c == city) {
            return Ok(false);
        }

        if self.is_full() {
            return Err(DashboardError::TooManyCities {
                max: MAX_SELECTED_CITIES,
            });
        }

        self.cities.push(city.to_string());
        Ok(true)
    }

    /// Remove a city, returning whether it was selected
    pub fn deselect_city(&mut self, city: &str) -> bool {
        let before = self.cities.len();
        self.cities.retain(|c| c != city);
        self.cities.len() != before
    }

    pub fn clear(&mut self) {
        self.cities.clear();
    }

    pub fn set_start_date(&mut self, date: NaiveDate) {
        self.start_date = date;
    }

    pub fn set_end_date(&mut self, date: NaiveDate) {
        self.end_date = date;
    }

    /// False when the start date lies after the end date; every series is
    /// empty in that case.
    pub fn has_valid_range(&self) -> bool {
        self.start_date <= self.end_date
    }
}
