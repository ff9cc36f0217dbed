use crate::config::DashboardConfig;
use crate::dashboard::events::{InputEvent, HELP_TEXT};
use crate::dashboard::page::{compose, PageContent};
use crate::error::{DashboardError, Result};
use crate::models::{FilterSelection, SummaryStats};
use crate::processors::{derive_celsius, extract_summary, filter_series, FilteredSeries};
use crate::readers::{DatasetCache, DatasetReader, DatasetSource};
use crate::writers::ChartRenderer;
use std::path::PathBuf;

/// Output of one full pass through the pipeline
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub text: String,
    pub summary: Option<SummaryStats>,
    pub series: FilteredSeries,
    pub chart: Option<PathBuf>,
}

/// One running dashboard.
///
/// Holds only transient input state; every render reloads the dataset
/// through the cache and recomputes everything downstream of it.
pub struct DashboardSession<'a, S: DatasetSource = DatasetReader> {
    cache: &'a DatasetCache<S>,
    config: DashboardConfig,
    renderer: ChartRenderer,
    selection: Option<FilterSelection>,
    table_expanded: bool,
    notice: Option<String>,
    last_chart: Option<PathBuf>,
}

impl<'a, S: DatasetSource> DashboardSession<'a, S> {
    pub fn new(cache: &'a DatasetCache<S>, config: DashboardConfig) -> Self {
        let renderer = ChartRenderer::with_size(config.chart_width, config.chart_height);
        Self {
            cache,
            config,
            renderer,
            selection: None,
            table_expanded: false,
            notice: None,
            last_chart: None,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn set_table_expanded(&mut self, expanded: bool) {
        self.table_expanded = expanded;
    }

    /// Current selection, creating it from the configured presets on first use
    pub fn selection(&mut self) -> Result<&mut FilterSelection> {
        let selection = match self.selection.take() {
            Some(selection) => selection,
            None => {
                let available = self.available_cities()?;
                FilterSelection::preset(
                    &self.config.default_cities,
                    self.config.default_start,
                    self.config.default_end,
                    &available,
                )
            }
        };

        Ok(self.selection.insert(selection))
    }

    /// Cities offered by the multi-select, in first-seen order
    pub fn available_cities(&self) -> Result<Vec<String>> {
        let dataset = self.cache.load(&self.config.data_path)?;
        match extract_summary(&dataset) {
            Ok(stats) => Ok(stats.unique_cities),
            Err(DashboardError::EmptyDataset) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    /// Apply an event to the input state.
    ///
    /// Returns `Ok(false)` for `Quit`. Rejected input comes back as an error
    /// and leaves the state unchanged.
    pub fn apply(&mut self, event: InputEvent) -> Result<bool> {
        tracing::debug!(?event, "Applying input event");

        match event {
            InputEvent::SelectCity(city) => {
                let available = self.available_cities()?;
                if !self.selection()?.select_city(&city, &available)? {
                    self.notice = Some(format!("{} is already selected", city));
                }
            }
            InputEvent::DeselectCity(city) => {
                if !self.selection()?.deselect_city(&city) {
                    self.notice = Some(format!("{} is not selected", city));
                }
            }
            InputEvent::ClearCities => self.selection()?.clear(),
            InputEvent::SetStartDate(date) => self.selection()?.set_start_date(date),
            InputEvent::SetEndDate(date) => self.selection()?.set_end_date(date),
            InputEvent::ToggleTable => self.table_expanded = !self.table_expanded,
            InputEvent::Refresh => {}
            InputEvent::Help => self.notice = Some(HELP_TEXT.to_string()),
            InputEvent::Quit => return Ok(false),
        }

        Ok(true)
    }

    /// Apply an event and re-render.
    ///
    /// Input rejections become a notice on the returned page. Returns
    /// `Ok(None)` when the user quits.
    pub fn handle(&mut self, event: InputEvent) -> Result<Option<RenderedPage>> {
        match self.apply(event) {
            Ok(false) => return Ok(None),
            Ok(true) => {}
            Err(e) if e.is_input_rejection() => {
                tracing::debug!("Rejected input: {}", e);
                self.notice = Some(e.to_string());
            }
            Err(e) => return Err(e),
        }

        self.render().map(Some)
    }

    /// Show a message on the next render, e.g. for input that failed to parse
    pub fn reject(&mut self, error: &DashboardError) {
        self.notice = Some(error.to_string());
    }

    /// A chart left over from an earlier render must not outlive the selection
    fn discard_stale_chart(&mut self, current: Option<&PathBuf>) -> Result<()> {
        match current {
            Some(path) => self.last_chart = Some(path.clone()),
            None => {
                if let Some(stale) = self.last_chart.take() {
                    if stale.exists() {
                        std::fs::remove_file(&stale)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Run the whole pipeline once and lay out the page
    pub fn render(&mut self) -> Result<RenderedPage> {
        let raw = self.cache.load(&self.config.data_path)?;
        let dataset = derive_celsius(&raw);

        let summary = match extract_summary(&dataset) {
            Ok(stats) => Some(stats),
            Err(DashboardError::EmptyDataset) => None,
            Err(e) => return Err(e),
        };

        let selection = self.selection()?.clone();
        let series = filter_series(&dataset, &selection);
        let chart = self
            .renderer
            .render_to_file(&series, &selection, &self.config.chart_output)?;
        self.discard_stale_chart(chart.as_ref())?;

        let notice = self.notice.take();
        let text = compose(&PageContent {
            dataset: &raw,
            summary: summary
                .as_ref()
                .ok_or_else(|| DashboardError::EmptyDataset.to_string()),
            selection: &selection,
            series: &series,
            chart: chart.as_deref(),
            table_expanded: self.table_expanded,
            notice: notice.as_deref(),
        });

        Ok(RenderedPage {
            text,
            summary,
            series,
            chart,
        })
    }
}
