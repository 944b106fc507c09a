use fltk::{prelude::*, window::Window};

use super::article::ArticleState;
use crate::ui::article_view::ArticleView;

/// Main application coordinator: owns the window, the article view and the
/// last applied selection. The panel's draft never appears here; the view
/// changes only when a committed selection arrives on the channel.
pub struct AppState {
    pub window: Window,
    pub article: ArticleView,
    applied: ArticleState,
}

impl AppState {
    pub fn new(window: Window, article: ArticleView, initial: ArticleState) -> Self {
        let mut state = Self {
            window,
            article,
            applied: initial,
        };
        state.apply_params(initial);
        state
    }

    pub fn applied(&self) -> ArticleState {
        self.applied
    }

    /// Put a committed selection on screen. The window background follows
    /// the article background so the margins match the column.
    pub fn apply_params(&mut self, state: ArticleState) {
        self.applied = state;
        self.article.apply(&state);
        self.window.set_color(state.background_color.color());
        self.window.redraw();
    }
}
