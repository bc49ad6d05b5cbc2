use anyhow::Result;

use super::series::ThroughputSeries;
use crate::{canvas::DisplaySurface, collection::Sample};

/// Owns the [`ThroughputSeries`] and pushes it to a [`DisplaySurface`] every
/// time a new sample comes in.
///
/// This lives on the UI thread; samples reach it via a channel.
pub struct Presenter<D: DisplaySurface> {
    series: ThroughputSeries,
    surface: D,
}

impl<D: DisplaySurface> Presenter<D> {
    pub fn new(surface: D) -> Self {
        Self {
            series: ThroughputSeries::default(),
            surface,
        }
    }

    /// Appends the sample, hands the whole window to the surface, rescales
    /// and redraws. Drawing errors are not handled here.
    pub fn present(&mut self, sample: Sample) -> Result<()> {
        self.series.push(sample);

        self.surface
            .set_line_data(&self.series.x_values(), &self.series.y_values());
        self.surface.autoscale();
        self.surface.redraw()
    }

    /// Redraws without any new data, e.g. after a resize.
    pub fn refresh(&mut self) -> Result<()> {
        self.surface.redraw()
    }

    pub fn series(&self) -> &ThroughputSeries {
        &self.series
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }
}
