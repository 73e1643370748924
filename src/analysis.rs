// src/analysis.rs
//
// Simulated document analysis. Starting an analysis schedules a single
// fixed-delay timer; when it fires the panel flips to the canned result.

use crate::config::get_config;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisState {
    Idle,
    Analyzing,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisTab {
    Strategy,
    Sources,
    Facts,
}

#[derive(Debug)]
pub struct AnalysisPanel {
    pub state: AnalysisState,
    pub tab: AnalysisTab,
}

impl AnalysisPanel {
    pub fn new() -> Self {
        Self {
            state: AnalysisState::Idle,
            tab: AnalysisTab::Strategy,
        }
    }

    /// Starts an analysis run. Returns the artificial delay the caller
    /// should wait before calling [`AnalysisPanel::finish`], or `None`
    /// when a run is already in flight.
    pub fn start(&mut self) -> Option<Duration> {
        if self.state == AnalysisState::Analyzing {
            return None;
        }

        self.state = AnalysisState::Analyzing;
        Some(Duration::from_millis(get_config().analysis_delay_ms))
    }

    pub fn finish(&mut self) {
        self.state = AnalysisState::Complete;
    }

    pub fn reset(&mut self) {
        self.state = AnalysisState::Idle;
        self.tab = AnalysisTab::Strategy;
    }

    pub fn select_tab(&mut self, tab: AnalysisTab) {
        self.tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.tab = match self.tab {
            AnalysisTab::Strategy => AnalysisTab::Sources,
            AnalysisTab::Sources => AnalysisTab::Facts,
            AnalysisTab::Facts => AnalysisTab::Strategy,
        };
    }
}

impl Default for AnalysisPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_moves_to_analyzing() {
        let mut panel = AnalysisPanel::new();
        let delay = panel.start();
        assert!(delay.is_some());
        assert_eq!(panel.state, AnalysisState::Analyzing);
    }

    #[test]
    fn test_start_is_ignored_while_in_flight() {
        let mut panel = AnalysisPanel::new();
        panel.start();
        assert!(panel.start().is_none());
    }

    #[test]
    fn test_finish_then_reset() {
        let mut panel = AnalysisPanel::new();
        panel.start();
        panel.finish();
        assert_eq!(panel.state, AnalysisState::Complete);

        panel.next_tab();
        panel.reset();
        assert_eq!(panel.state, AnalysisState::Idle);
        assert_eq!(panel.tab, AnalysisTab::Strategy);
    }

    #[test]
    fn test_tab_cycle() {
        let mut panel = AnalysisPanel::new();
        panel.next_tab();
        assert_eq!(panel.tab, AnalysisTab::Sources);
        panel.next_tab();
        assert_eq!(panel.tab, AnalysisTab::Facts);
        panel.next_tab();
        assert_eq!(panel.tab, AnalysisTab::Strategy);
    }
}
