//! # Executive Dashboard
//!
//! The single owning context of the dashboard engine. `Dashboard` holds the
//! canonical period series, the durable entry repository, the KPI engine and
//! the active range filter, and exposes the consumer contract used by every
//! rendering collaborator.
//!
//! ## Public API
//!
//! - `Dashboard`: KPIs, chart data, pipeline breakdown, team roster, custom
//!   entries and the theme preference.
//! - `charts` / `display`: renderer-neutral projections and display text.
//! - `DashboardError`: The specific error types that can be returned from this crate.

use analytics::{decompose, KpiEngine, KpiSet, StageBucket};
use chrono::Utc;
use configuration::Config;
use core_types::{
    CustomEntry, EntryId, NewEntry, PeriodRecord, RangeToken, TeamMember, Theme, YearMonth,
};
use series::{SequenceGenerator, Series};
use storage::{KeyValueStore, LocalRepository};

pub mod charts;
pub mod display;
pub mod error;
pub mod team;

pub use charts::{ChartData, Dataset};
pub use error::DashboardError;
pub use team::{initials, VelocityTier, ROSTER};

/// The central owning context. Every mutation goes through `&mut self`, so
/// there is exactly one writer of the series and the entry list at a time.
#[derive(Debug)]
pub struct Dashboard<S> {
    series: Series,
    repo: LocalRepository<S>,
    kpi_engine: KpiEngine,
    range: RangeToken,
}

impl<S: KeyValueStore> Dashboard<S> {
    /// Generates the series ending at `anchor` and attaches the durable store.
    ///
    /// With `storage.reconcile_on_open` set, stored entries are re-applied to
    /// the fresh series in storage order, so the newest entry for a month wins.
    pub fn open(config: &Config, anchor: YearMonth, store: S) -> Self {
        let series = SequenceGenerator::new(config.generator.clone()).generate(anchor);
        let mut dashboard = Self {
            series,
            repo: LocalRepository::new(store),
            kpi_engine: KpiEngine::new(config.forecast_accuracy.clone()),
            range: RangeToken::default(),
        };
        if config.storage.reconcile_on_open {
            dashboard.replay_entries();
        }
        tracing::info!(anchor = %anchor, "Dashboard opened.");
        dashboard
    }

    fn replay_entries(&mut self) {
        let entries = self.repo.list_entries();
        let mut applied = 0;
        for entry in &entries {
            if self.series.apply_override(&entry.label(), entry.revenue, entry.expenditure) {
                applied += 1;
            }
        }
        tracing::info!(stored = entries.len(), applied, "Replayed custom entries.");
    }

    /// Remembers the active filter for subsequent `current_*` queries.
    pub fn set_range(&mut self, range: RangeToken) {
        tracing::debug!(range = %range, "Range filter changed.");
        self.range = range;
    }

    pub fn current_range(&self) -> RangeToken {
        self.range
    }

    pub fn current_kpis(&self) -> Result<KpiSet, DashboardError> {
        self.kpis(self.range)
    }

    pub fn current_chart_data(&self) -> &[PeriodRecord] {
        self.chart_data(self.range)
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    /// The six headline KPIs over the `range` window.
    pub fn kpis(&self, range: RangeToken) -> Result<KpiSet, DashboardError> {
        Ok(self.kpi_engine.compute(self.series.window(range))?)
    }

    /// The period records selected by `range`, in chronological order.
    pub fn chart_data(&self, range: RangeToken) -> &[PeriodRecord] {
        self.series.window(range)
    }

    /// Stage buckets over the latest month, ignoring the range filter.
    pub fn pipeline_breakdown(&self) -> Vec<StageBucket> {
        self.series.latest().map(decompose).unwrap_or_default()
    }

    pub fn team_data(&self) -> &'static [TeamMember] {
        &ROSTER
    }

    /// Validates and stores an entry, then overrides the matching month.
    ///
    /// The override is applied only after the entry is durably stored.
    pub fn add_entry(
        &mut self,
        month: &str,
        year: &str,
        revenue: &str,
        expenditure: &str,
    ) -> Result<EntryId, DashboardError> {
        let entry = NewEntry::parse(month, year, revenue, expenditure)?;
        let label = entry.label();
        let created = self.repo.add_entry(entry, Utc::now())?;
        self.series.apply_override(&label, created.revenue, created.expenditure);
        Ok(created.id)
    }

    /// Deletes a stored entry. Overrides already applied to the series stay.
    pub fn remove_entry(&mut self, id: &EntryId) -> Result<bool, DashboardError> {
        Ok(self.repo.remove_entry(id)?)
    }

    pub fn custom_entries(&self) -> Vec<CustomEntry> {
        self.repo.list_entries()
    }

    /// Deletes all stored entries. Overrides already applied to the series stay.
    pub fn clear_custom_entries(&mut self) -> Result<(), DashboardError> {
        Ok(self.repo.clear_entries()?)
    }

    pub fn theme(&self, prefers_light: bool) -> Theme {
        self.repo.load_theme(prefers_light)
    }

    /// Flips the effective theme and persists the result.
    pub fn toggle_theme(&mut self, prefers_light: bool) -> Result<Theme, DashboardError> {
        let next = self.theme(prefers_light).toggled();
        self.repo.save_theme(next)?;
        tracing::info!(theme = %next, "Theme changed.");
        Ok(next)
    }
}
