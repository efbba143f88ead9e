//! Which overlay, if any, the panel is showing.

use crate::docente::Docente;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Presentation {
    /// No overlay.
    #[default]
    Idle,
    /// One record expanded in the detail modal.
    RecordDetail(Docente),
    /// The chart modal, remembering the index that opened it.
    ChartDetail(usize),
}

impl Presentation {
    pub fn is_idle(&self) -> bool {
        matches!(self, Presentation::Idle)
    }

    /// `RecordDetail(_) -> Idle`, no-op from any other state.
    pub fn close_record_detail(&mut self) -> bool {
        if matches!(self, Presentation::RecordDetail(_)) {
            *self = Presentation::Idle;
            return true;
        }
        false
    }

    /// `ChartDetail(_) -> Idle`, no-op from any other state.
    pub fn close_chart_detail(&mut self) -> bool {
        if matches!(self, Presentation::ChartDetail(_)) {
            *self = Presentation::Idle;
            return true;
        }
        false
    }
}
