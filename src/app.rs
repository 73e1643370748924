use crate::analysis::AnalysisPanel;
use crate::assistant::Assistant;
use crate::status_indicator::StatusIndicator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Cases,
    Analysis,
    Agenda,
}

impl Screen {
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Bureau",
            Screen::Cases => "Dossiers",
            Screen::Analysis => "Stratégie",
            Screen::Agenda => "Agenda",
        }
    }

    pub const ALL: [Screen; 4] = [
        Screen::Dashboard,
        Screen::Cases,
        Screen::Analysis,
        Screen::Agenda,
    ];
}

pub struct App {
    pub screen: Screen,
    pub assistant: Assistant,
    pub analysis: AnalysisPanel,
    pub chat_open: bool,
    pub chat_input: String,
    pub chat_scroll: u16,
    pub status_indicator: StatusIndicator,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> App {
        App {
            screen: Screen::Dashboard,
            assistant: Assistant::new(),
            analysis: AnalysisPanel::new(),
            chat_open: false,
            chat_input: String::new(),
            chat_scroll: 0,
            status_indicator: StatusIndicator::new(),
            should_quit: false,
        }
    }

    pub fn scroll_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
