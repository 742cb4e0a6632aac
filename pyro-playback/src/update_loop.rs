//! The reactive update loop: events in, frames out.

use crate::chart::{build_chart, build_heatmap, ChartConfig, ChartDescription, HeatmapConfig, HeatmapDescription};
use crate::event::{reduce, Event};
use crate::slider::SliderConfig;
use pyro_data::{Dataset, IndexOutOfRange, SelectedIndex};
use serde::Serialize;
use std::sync::Arc;

/// One line-chart panel: a dataset plus how to draw it.
#[derive(Debug, Clone)]
pub struct Panel {
    pub dataset: Arc<Dataset>,
    pub config: ChartConfig,
}

impl Panel {
    pub fn new(dataset: Arc<Dataset>, config: ChartConfig) -> Self {
        Self { dataset, config }
    }

    pub fn chart(&self, index: SelectedIndex) -> ChartDescription {
        build_chart(self.dataset.select(index), &self.config)
    }
}

/// Output of one update: the new time step and every panel redrawn at it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub index: SelectedIndex,
    /// Source of the event that produced this frame.
    pub source: &'static str,
    pub charts: Vec<ChartDescription>,
}

/// Owns the selected time step and turns events into frames.
///
/// All panels share one index, so the slider range is bounded by the panel
/// with the fewest time steps.
#[derive(Debug, Clone)]
pub struct UpdateLoop {
    panels: Vec<Panel>,
    heatmap: Option<(Arc<Dataset>, HeatmapConfig)>,
    current: SelectedIndex,
}

impl UpdateLoop {
    /// Fails when there are no panels (nothing to index).
    pub fn new(panels: Vec<Panel>) -> Result<Self, IndexOutOfRange> {
        let column_count = panels
            .iter()
            .map(|p| p.dataset.column_count())
            .min()
            .unwrap_or(0);
        let current = SelectedIndex::first(column_count)?;

        if panels
            .iter()
            .any(|p| p.dataset.column_count() != column_count)
        {
            log::warn!(
                "update_loop: panels have different time-step counts, limiting slider to {}",
                column_count
            );
        }

        Ok(Self {
            panels,
            heatmap: None,
            current,
        })
    }

    /// Standard dashboard: density and kinetic-rate panels plus a density heatmap.
    pub fn pyrolysis(rho_char: Arc<Dataset>, r_kin: Arc<Dataset>) -> Result<Self, IndexOutOfRange> {
        let panels = vec![
            Panel::new(rho_char.clone(), crate::panels::density(&rho_char)),
            Panel::new(r_kin.clone(), crate::panels::kinetic(&r_kin)),
        ];
        Ok(Self::new(panels)?.with_heatmap(rho_char, crate::panels::density_heatmap()))
    }

    pub fn with_heatmap(mut self, dataset: Arc<Dataset>, config: HeatmapConfig) -> Self {
        self.heatmap = Some((dataset, config));
        self
    }

    pub fn current(&self) -> SelectedIndex {
        self.current
    }

    pub fn column_count(&self) -> usize {
        self.current.column_count()
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn slider(&self) -> SliderConfig {
        SliderConfig::for_columns(self.column_count())
    }

    /// Apply one event to the owned index and redraw.
    ///
    /// On error the index is left unchanged.
    pub fn dispatch(&mut self, event: Event) -> Result<Frame, IndexOutOfRange> {
        let next = reduce(event, self.current)?;
        log::debug!(
            "update_loop: {} moved index {} -> {}",
            event.name(),
            self.current.get(),
            next.get()
        );
        self.current = next;
        Ok(self.render(next, event))
    }

    /// Apply one event to an index supplied by the caller, without touching
    /// the owned index. Used where the client holds the state (HTTP).
    pub fn step(&self, event: Event, current: usize) -> Result<Frame, IndexOutOfRange> {
        let current = SelectedIndex::new(current, self.column_count())?;
        let next = reduce(event, current)?;
        Ok(self.render(next, event))
    }

    /// Frame for a slider position, as if the slider had been moved there.
    pub fn frame_at(&self, index: usize) -> Result<Frame, IndexOutOfRange> {
        self.step(Event::SliderMoved { index }, self.current.get())
    }

    pub fn heatmap(&self) -> Option<HeatmapDescription> {
        self.heatmap
            .as_ref()
            .map(|(dataset, config)| build_heatmap(dataset, config, Some(self.current)))
    }

    fn render(&self, index: SelectedIndex, event: Event) -> Frame {
        Frame {
            index,
            source: event.name(),
            charts: self.panels.iter().map(|p| p.chart(index)).collect(),
        }
    }
}
