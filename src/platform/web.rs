//! Browser display: DOM panels, `window.alert` and the WebGPU canvas

use web_sys::{Document, Element, Window};

use crate::game::{GameDisplay, Notice};
use crate::leaderboard::LeaderboardEntry;
use crate::renderer::{RenderState, frame_vertices};
use crate::sim::{GameState, Question};

/// DOM element ids the page must provide
pub mod ids {
    pub const CANVAS: &str = "gameCanvas";
    pub const NAME_AREA: &str = "nameArea";
    pub const PLAYER_NAME: &str = "playerName";
    pub const START_BUTTON: &str = "startGameButton";
    pub const LIVES: &str = "lives";
    pub const CORRECT_ANSWERS: &str = "correctAnswers";
    pub const QUESTION_AREA: &str = "questionArea";
    pub const QUESTION_TEXT: &str = "questionText";
    pub const ANSWER_INPUT: &str = "answerInput";
    pub const SUBMIT_ANSWER: &str = "submitAnswer";
    pub const LEADERBOARD_AREA: &str = "leaderboardArea";
    pub const LEADERBOARD_LIST: &str = "leaderboardList";
    pub const RESTART_BUTTON: &str = "restartButton";
}

pub struct WebDisplay {
    window: Window,
    document: Document,
    render_state: Option<RenderState>,
}

impl WebDisplay {
    pub fn new(window: Window, document: Document) -> Self {
        Self {
            window,
            document,
            render_state: None,
        }
    }

    /// Start drawing frames once the GPU device is ready
    pub fn attach_renderer(&mut self, render_state: RenderState) {
        self.render_state = Some(render_state);
    }

    fn element(&self, id: &str) -> Option<Element> {
        let el = self.document.get_element_by_id(id);
        if el.is_none() {
            log::warn!("Missing element #{}", id);
        }
        el
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.element(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_visible(&self, id: &str, visible: bool) {
        if let Some(el) = self.element(id) {
            let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
        }
    }
}

impl GameDisplay for WebDisplay {
    fn draw(&mut self, state: &GameState) {
        if let Some(ref mut render_state) = self.render_state {
            match render_state.render(&frame_vertices(state)) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    fn update_counters(&mut self, lives: u32, correct_answers: u32) {
        self.set_text(ids::LIVES, &lives.to_string());
        self.set_text(ids::CORRECT_ANSWERS, &correct_answers.to_string());
    }

    fn show_question(&mut self, question: &Question) {
        self.set_text(ids::QUESTION_TEXT, &question.text());
        self.set_visible(ids::QUESTION_AREA, true);
    }

    fn hide_question(&mut self) {
        self.set_visible(ids::QUESTION_AREA, false);
    }

    fn show_leaderboard(&mut self, entries: &[LeaderboardEntry]) {
        if let Some(list) = self.element(ids::LEADERBOARD_LIST) {
            list.set_inner_html("");
            for entry in entries {
                if let Ok(item) = self.document.create_element("li") {
                    item.set_text_content(Some(&entry.display_line()));
                    let _ = list.append_child(&item);
                }
            }
        }
        self.set_visible(ids::LEADERBOARD_AREA, true);
    }

    fn set_session_active(&mut self, active: bool) {
        if active {
            self.set_visible(ids::NAME_AREA, false);
            self.set_visible(ids::LEADERBOARD_AREA, false);
        }
        self.set_visible(ids::RESTART_BUTTON, !active);
    }

    fn notify(&mut self, notice: &Notice) {
        let _ = self.window.alert_with_message(&notice.to_string());
    }
}
