use crate::analysis::AnalysisState;
use crate::app::{App, Screen};
use crate::data::CHAT_SUGGESTIONS;
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Dispatches a key event. The caller holds the app lock; timer tasks
/// spawned here take their own lock once their delay has elapsed.
pub fn handle_key(app: &mut App, app_arc: Arc<Mutex<App>>, key: KeyEvent) {
    if app.chat_open {
        handle_chat_key(app, app_arc, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') => app.chat_open = true,
        KeyCode::Char('1') => app.screen = Screen::Dashboard,
        KeyCode::Char('2') => app.screen = Screen::Cases,
        KeyCode::Char('3') => app.screen = Screen::Analysis,
        KeyCode::Char('4') => app.screen = Screen::Agenda,
        KeyCode::Enter if app.screen == Screen::Analysis => start_analysis(app, app_arc),
        KeyCode::Tab
            if app.screen == Screen::Analysis
                && app.analysis.state == AnalysisState::Complete =>
        {
            app.analysis.next_tab();
        }
        KeyCode::Char('n') if app.screen == Screen::Analysis => app.analysis.reset(),
        _ => {}
    }
}

fn handle_chat_key(app: &mut App, app_arc: Arc<Mutex<App>>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.chat_open = false,
        KeyCode::Enter => {
            let utterance = std::mem::take(&mut app.chat_input);
            submit_utterance(app, app_arc, utterance);
        }
        KeyCode::F(n @ 1..=3) if app.assistant.suggestions_visible() => {
            let suggestion = CHAT_SUGGESTIONS[(n - 1) as usize].to_string();
            submit_utterance(app, app_arc, suggestion);
        }
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        KeyCode::Backspace => {
            app.chat_input.pop();
        }
        KeyCode::Char(c) => app.chat_input.push(c),
        _ => {}
    }
}

/// Appends the user entry right away, then schedules an independent
/// timer for the delayed assistant reply. A submit while another reply
/// is pending schedules a second timer; both eventually land.
fn submit_utterance(app: &mut App, app_arc: Arc<Mutex<App>>, utterance: String) {
    if let Some(pending) = app.assistant.submit(&utterance) {
        app.status_indicator.set_thinking(true);
        let clone = app_arc.clone();
        tokio::spawn(async move {
            tokio::time::sleep(pending.delay).await;
            let mut app = clone.lock().await;
            app.assistant.deliver_reply(pending.text);
            app.status_indicator.set_thinking(false);
        });
    }
}

fn start_analysis(app: &mut App, app_arc: Arc<Mutex<App>>) {
    if let Some(delay) = app.analysis.start() {
        log::info!("simulated analysis started, completes in {:?}", delay);
        let clone = app_arc.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            clone.lock().await.analysis.finish();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Author;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[tokio::test]
    async fn test_typing_then_enter_appends_user_entry() {
        let app_arc = Arc::new(Mutex::new(App::new()));
        let mut app = app_arc.lock().await;
        app.chat_open = true;

        for c in "merci".chars() {
            handle_key(&mut app, app_arc.clone(), key(KeyCode::Char(c)));
        }
        assert_eq!(app.chat_input, "merci");

        let before = app.assistant.entries().len();
        handle_key(&mut app, app_arc.clone(), key(KeyCode::Enter));

        assert!(app.chat_input.is_empty());
        assert_eq!(app.assistant.entries().len(), before + 1);
        assert_eq!(app.assistant.entries().last().unwrap().author, Author::User);
        assert!(app.status_indicator.is_thinking());
    }

    #[tokio::test]
    async fn test_enter_on_blank_input_appends_nothing() {
        let app_arc = Arc::new(Mutex::new(App::new()));
        let mut app = app_arc.lock().await;
        app.chat_open = true;
        app.chat_input = "   ".to_string();

        let before = app.assistant.entries().len();
        handle_key(&mut app, app_arc.clone(), key(KeyCode::Enter));

        assert_eq!(app.assistant.entries().len(), before);
        assert!(!app.status_indicator.is_thinking());
    }

    #[tokio::test]
    async fn test_reply_lands_after_the_delay() {
        let app_arc = Arc::new(Mutex::new(App::new()));
        {
            let mut app = app_arc.lock().await;
            app.chat_open = true;
            app.chat_input = "bonjour".to_string();
            handle_key(&mut app, app_arc.clone(), key(KeyCode::Enter));
            assert_eq!(app.assistant.entries().last().unwrap().author, Author::User);
        }

        // Default reply delay is 1000 ms.
        tokio::time::sleep(Duration::from_millis(1_500)).await;

        let app = app_arc.lock().await;
        let last = app.assistant.entries().last().unwrap();
        assert_eq!(last.author, Author::Assistant);
        assert_eq!(last.text, "Bonjour Maître ! Prêt pour vos audiences ?");
        assert!(!app.status_indicator.is_thinking());
    }

    #[tokio::test]
    async fn test_screen_switching_and_quit() {
        let app_arc = Arc::new(Mutex::new(App::new()));
        let mut app = app_arc.lock().await;

        handle_key(&mut app, app_arc.clone(), key(KeyCode::Char('4')));
        assert_eq!(app.screen, Screen::Agenda);

        handle_key(&mut app, app_arc.clone(), key(KeyCode::Char('c')));
        assert!(app.chat_open);
        handle_key(&mut app, app_arc.clone(), key(KeyCode::Esc));
        assert!(!app.chat_open);

        handle_key(&mut app, app_arc.clone(), key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
