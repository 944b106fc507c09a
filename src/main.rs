use fltk::{
    app,
    dialog, // for alert_default
    prelude::*,
    window::Window,
};

use page_setter::app::article::ArticleState;
use page_setter::app::article_source::load_article;
use page_setter::app::messages::Message;
use page_setter::app::state::AppState;
use page_setter::ui::article_view::ArticleView;
use page_setter::ui::outside_click;
use page_setter::ui::params_panel::ParamsPanel;

const WIN_W: i32 = 1280;
const WIN_H: i32 = 860;

fn main() {
    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let article_text = match load_article(std::env::args().nth(1).as_deref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Failed to load article: {e}");
            dialog::alert_default(&format!("Failed to load article: {e}"));
            return;
        }
    };

    let mut wind = Window::new(100, 100, WIN_W, WIN_H, "PageSetter");
    wind.set_xclass("PageSetter");

    let initial = ArticleState::default();
    let article = ArticleView::new(WIN_W, WIN_H, &article_text);
    // The panel goes in after the article so it draws on top of the column.
    let _panel = ParamsPanel::new(WIN_W, WIN_H, initial, sender);

    wind.end();
    wind.make_resizable(false);

    // Single dispatch point for outside-interaction pushes; the panel arms
    // and releases the actual watch as it opens and closes.
    outside_click::install(&mut wind);

    wind.show();

    let mut state = AppState::new(wind, article, initial);

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::ApplyArticleParams(params) => {
                    state.apply_params(params);
                }
                Message::ResetArticleParams => {
                    // The baseline already arrived via the apply message;
                    // pin the host state back to the defaults regardless.
                    state.apply_params(ArticleState::default());
                }
            }
        }
    }
}
