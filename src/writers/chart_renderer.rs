use crate::error::{DashboardError, Result};
use crate::models::FilterSelection;
use crate::processors::FilteredSeries;
use crate::utils::constants::{
    CHART_X_LABEL, CHART_Y_LABEL, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH,
};
use chrono::NaiveDate;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// Y axis used when there is nothing to plot
const EMPTY_VALUE_RANGE: (f64, f64) = (-10.0, 40.0);

fn chart_error<E: std::fmt::Display>(e: E) -> DashboardError {
    DashboardError::Chart(e.to_string())
}

/// Draws the city comparison line chart as SVG
pub struct ChartRenderer {
    width: u32,
    height: u32,
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
        }
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn title(selection: &FilterSelection) -> String {
        format!(
            "Temperature for selected cities ({} to {})",
            selection.start_date, selection.end_date
        )
    }

    /// Write the chart to `path`.
    ///
    /// Returns `Ok(None)` without touching the file system when no city is
    /// selected.
    pub fn render_to_file(
        &self,
        series: &FilteredSeries,
        selection: &FilterSelection,
        path: &Path,
    ) -> Result<Option<PathBuf>> {
        if series.is_empty() {
            tracing::debug!("No cities selected, skipping chart");
            return Ok(None);
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        {
            let root = SVGBackend::new(path, (self.width, self.height)).into_drawing_area();
            self.draw(&root, series, selection)?;
        }

        tracing::info!(
            path = %path.display(),
            cities = series.len(),
            points = series.total_points(),
            "Rendered chart"
        );

        Ok(Some(path.to_path_buf()))
    }

    /// Render the chart to an in-memory SVG document
    pub fn render_to_string(
        &self,
        series: &FilteredSeries,
        selection: &FilterSelection,
    ) -> Result<Option<String>> {
        if series.is_empty() {
            return Ok(None);
        }

        let mut svg = String::new();
        {
            let root =
                SVGBackend::with_string(&mut svg, (self.width, self.height)).into_drawing_area();
            self.draw(&root, series, selection)?;
        }

        Ok(Some(svg))
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        series: &FilteredSeries,
        selection: &FilterSelection,
    ) -> Result<()> {
        root.fill(&WHITE).map_err(chart_error)?;

        let (first_date, last_date) = Self::date_bounds(series, selection);
        let (low, high) = Self::value_bounds(series);

        let mut chart = ChartBuilder::on(root)
            .caption(Self::title(selection), ("sans-serif", 28))
            .margin(10)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(first_date..last_date, low..high)
            .map_err(chart_error)?;

        chart
            .configure_mesh()
            .x_desc(CHART_X_LABEL)
            .y_desc(CHART_Y_LABEL)
            .x_labels(10)
            .draw()
            .map_err(chart_error)?;

        for (index, city_series) in series.iter().enumerate() {
            let color = Palette99::pick(index).to_rgba();
            chart
                .draw_series(LineSeries::new(
                    city_series.points.iter().copied(),
                    color.stroke_width(2),
                ))
                .map_err(chart_error)?
                .label(city_series.city.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
        Ok(())
    }

    /// X axis spans the plotted points, or the selected range when there are none
    fn date_bounds(series: &FilteredSeries, selection: &FilterSelection) -> (NaiveDate, NaiveDate) {
        let dates = series.iter().flat_map(|s| s.points.iter().map(|&(d, _)| d));
        let (first, last) = match (dates.clone().min(), dates.max()) {
            (Some(first), Some(last)) => (first, last),
            _ => (
                selection.start_date.min(selection.end_date),
                selection.start_date.max(selection.end_date),
            ),
        };

        // A single day still needs a non-empty axis
        if first == last {
            (first, last.succ_opt().unwrap_or(last))
        } else {
            (first, last)
        }
    }

    fn value_bounds(series: &FilteredSeries) -> (f64, f64) {
        match series.value_range() {
            Some((low, high)) => {
                let padding = ((high - low) * 0.05).max(1.0);
                (low - padding, high + padding)
            }
            None => EMPTY_VALUE_RANGE,
        }
    }
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dataset, TemperatureRecord};
    use crate::processors::{derive_celsius, filter_series};
    use tempfile::TempDir;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2009, 1, d).unwrap()
    }

    fn dataset() -> Dataset {
        derive_celsius(&Dataset::new(vec![
            TemperatureRecord::new("Buenos Aires".to_string(), date(1), 50.0),
            TemperatureRecord::new("Dakar".to_string(), date(1), 86.0),
            TemperatureRecord::new("Buenos Aires".to_string(), date(2), 55.0),
            TemperatureRecord::new("Dakar".to_string(), date(2), 84.0),
        ]))
    }

    fn selection(cities: &[&str], start: NaiveDate, end: NaiveDate) -> FilterSelection {
        let available = vec!["Buenos Aires".to_string(), "Dakar".to_string()];
        FilterSelection::preset(
            &cities.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            start,
            end,
            &available,
        )
    }

    #[test]
    fn test_title_reflects_range() {
        let selection = selection(&[], date(1), date(2));
        assert_eq!(
            ChartRenderer::title(&selection),
            "Temperature for selected cities (2009-01-01 to 2009-01-02)"
        );
    }

    #[test]
    fn test_svg_contains_title_and_legend() {
        let selection = selection(&["Buenos Aires", "Dakar"], date(1), date(2));
        let series = filter_series(&dataset(), &selection);

        let svg = ChartRenderer::new()
            .render_to_string(&series, &selection)
            .unwrap()
            .unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Temperature for selected cities (2009-01-01 to 2009-01-02)"));
        assert!(svg.contains("Buenos Aires"));
        assert!(svg.contains("Dakar"));
        assert!(svg.contains(CHART_Y_LABEL));
    }

    #[test]
    fn test_no_cities_renders_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("chart.svg");
        let selection = selection(&[], date(1), date(2));
        let series = filter_series(&dataset(), &selection);

        let renderer = ChartRenderer::new();
        assert_eq!(renderer.render_to_file(&series, &selection, &path).unwrap(), None);
        assert_eq!(renderer.render_to_string(&series, &selection).unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn test_degenerate_ranges_still_render() {
        let renderer = ChartRenderer::with_size(640, 320);

        let single_day = selection(&["Dakar"], date(1), date(1));
        let series = filter_series(&dataset(), &single_day);
        assert!(renderer.render_to_string(&series, &single_day).unwrap().is_some());

        let inverted = selection(&["Dakar"], date(2), date(1));
        let series = filter_series(&dataset(), &inverted);
        assert_eq!(series.total_points(), 0);
        assert!(renderer.render_to_string(&series, &inverted).unwrap().is_some());
    }

    #[test]
    fn test_render_to_file_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("chart.svg");
        let selection = selection(&["Buenos Aires"], date(1), date(2));
        let series = filter_series(&dataset(), &selection);

        let written = ChartRenderer::new()
            .render_to_file(&series, &selection, &path)
            .unwrap();

        assert_eq!(written, Some(path.clone()));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Buenos Aires"));
    }
}
