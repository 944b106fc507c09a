use fltk::{
    enums::FrameType,
    prelude::*,
    text::{TextBuffer, TextDisplay, WrapMode},
};

use crate::app::article::ArticleState;

const V_MARGIN: i32 = 40;
const MIN_SIDE_MARGIN: i32 = 60;

/// The article column: a read-only text display centered in the window,
/// restyled atomically whenever the host receives an applied selection.
pub struct ArticleView {
    display: TextDisplay,
    area_w: i32,
    area_h: i32,
}

impl ArticleView {
    pub fn new(area_w: i32, area_h: i32, text: &str) -> Self {
        let mut buffer = TextBuffer::default();
        buffer.set_text(text);

        let mut display = TextDisplay::new(0, V_MARGIN, area_w, area_h - 2 * V_MARGIN, None);
        display.set_buffer(buffer);
        display.wrap_mode(WrapMode::AtBounds, 0);
        display.set_frame(FrameType::FlatBox);
        display.set_scrollbar_size(12);

        Self {
            display,
            area_w,
            area_h,
        }
    }

    /// Restyle and re-center the column for the given selection.
    pub fn apply(&mut self, state: &ArticleState) {
        let width = state
            .content_width
            .pixels()
            .min(self.area_w - 2 * MIN_SIDE_MARGIN);
        let x = (self.area_w - width) / 2;
        self.display
            .resize(x, V_MARGIN, width, self.area_h - 2 * V_MARGIN);

        self.display.set_text_font(state.font_family.font());
        self.display.set_text_size(state.font_size.points());
        self.display.set_text_color(state.font_color.color());
        self.display.set_color(state.background_color.color());
        self.display.redraw();
    }
}
