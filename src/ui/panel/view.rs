//! Derived view of the panel
//!
//! Everything drawn is computed here from `PanelState` alone, so the
//! terminal components never look at the state machine directly.

use super::presentation::Presentation;
use super::state::PanelState;
use super::utils::{border_color_name, fill_color_name};
use crate::docente::Docente;
use serde::Serialize;

/// Dataset label shown in the chart legend.
pub const CHART_DATASET_LABEL: &str = "IDs de Docentes";

/// One card in the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub index: usize,
    pub docente: Docente,
    /// Palette color name for the card background
    pub background: &'static str,
}

/// Input for the chart widget, shaped like a Chart.js `data` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<i64>,
    pub background_color: Vec<String>,
    pub border_color: Vec<String>,
    pub border_width: u16,
}

impl ChartData {
    /// Build the single aggregate chart for a record set.
    pub fn from_records(records: &[Docente]) -> Self {
        Self {
            labels: records.iter().map(Docente::chart_label).collect(),
            datasets: vec![ChartDataset {
                label: CHART_DATASET_LABEL.to_string(),
                data: records.iter().map(|d| d.id).collect(),
                background_color: (0..records.len())
                    .map(|i| fill_color_name(i).to_string())
                    .collect(),
                border_color: (0..records.len())
                    .map(|i| border_color_name(i).to_string())
                    .collect(),
                border_width: 1,
            }],
        }
    }
}

/// The modal to draw, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayView {
    RecordDetail(Docente),
    ChartDetail { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub cards: Vec<CardView>,
    pub chart: ChartData,
    pub overlay: Option<OverlayView>,
    /// Mount the card confetti
    pub card_effect: bool,
    /// Mount the chart confetti
    pub chart_effect: bool,
}

pub fn build_view(state: &PanelState) -> PanelView {
    let records = state.records();
    let cards = records
        .iter()
        .enumerate()
        .map(|(index, docente)| CardView {
            index,
            docente: docente.clone(),
            background: fill_color_name(index),
        })
        .collect();

    let overlay = match state.presentation() {
        Presentation::Idle => None,
        Presentation::RecordDetail(docente) => Some(OverlayView::RecordDetail(docente.clone())),
        Presentation::ChartDetail(index) => Some(OverlayView::ChartDetail { index: *index }),
    };

    PanelView {
        cards,
        chart: ChartData::from_records(records),
        overlay,
        card_effect: state.is_card_effect_active(),
        chart_effect: state.is_chart_effect_active(),
    }
}
