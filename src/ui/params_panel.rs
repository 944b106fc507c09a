use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    button::{Button, RadioRoundButton},
    enums::{Align, Color, Font, FrameType},
    frame::Frame,
    group::Group,
    menu::Choice,
    prelude::*,
};

use crate::app::article::{
    ArticleState, BackgroundColor, ContentWidth, FontColor, FontFamily, FontSize, ParamChange,
};
use crate::app::messages::Message;
use crate::app::params_form::ParamsForm;
use crate::ui::outside_click;

pub const PANEL_WIDTH: i32 = 380;
const ARROW_SIZE: i32 = 48;
const PAD: i32 = 20;
const CONTROL_H: i32 = 28;
const RADIO_H: i32 = 24;

struct PanelState {
    form: ParamsForm,
    surface: Group,
    arrow: Button,
    font_choice: Choice,
    size_radios: Vec<RadioRoundButton>,
    color_choice: Choice,
    background_choice: Choice,
    width_radios: Vec<RadioRoundButton>,
    watch: Option<outside_click::Guard>,
    win_w: i32,
    win_h: i32,
}

impl PanelState {
    /// Push the current draft into the controls. FLTK's `set_value` does not
    /// fire callbacks, so this never loops back into the form.
    fn sync_controls(&mut self) {
        let draft = self.form.draft();
        self.font_choice
            .set_value(position_of(FontFamily::all(), &draft.font_family));
        self.color_choice
            .set_value(position_of(FontColor::all(), &draft.font_color));
        self.background_choice
            .set_value(position_of(BackgroundColor::all(), &draft.background_color));
        for (radio, size) in self.size_radios.iter_mut().zip(FontSize::all()) {
            radio.set_value(draft.font_size == *size);
        }
        for (radio, width) in self.width_radios.iter_mut().zip(ContentWidth::all()) {
            radio.set_value(draft.content_width == *width);
        }
    }
}

fn position_of<T: PartialEq>(options: &[T], value: &T) -> i32 {
    options
        .iter()
        .position(|o| o == value)
        .map(|i| i as i32)
        .unwrap_or(0)
}

/// The slide-out parameters panel plus its arrow toggle. Edits stay in the
/// panel's own draft; the host only hears about them through the channel
/// when the user applies or resets.
pub struct ParamsPanel {
    state: Rc<RefCell<PanelState>>,
}

impl ParamsPanel {
    /// Build the panel docked to the right edge of a `win_w` x `win_h`
    /// window. Must be called inside the window's group so the widgets
    /// attach to it; create it after the article view so it draws on top.
    pub fn new(win_w: i32, win_h: i32, initial: ArticleState, sender: Sender<Message>) -> Self {
        let px = win_w - PANEL_WIDTH;

        let mut surface = Group::new(px, 0, PANEL_WIDTH, win_h, None);
        surface.set_frame(FrameType::FlatBox);
        surface.set_color(Color::from_rgb(247, 247, 247));

        let mut title = Frame::new(px + PAD, PAD, PANEL_WIDTH - 2 * PAD, 30, "Page settings");
        title.set_label_font(Font::HelveticaBold);
        title.set_label_size(18);
        title.set_align(Align::Left | Align::Inside);

        let mut y = 76;
        section_label(px, y, "Font");
        let mut font_choice = Choice::new(px + PAD, y + 24, PANEL_WIDTH - 2 * PAD, CONTROL_H, None);
        for family in FontFamily::all() {
            font_choice.add_choice(family.display_name());
        }

        y += 74;
        section_label(px, y, "Font size");
        // Radios are exclusive within their parent, so each set gets its own
        // group.
        let size_group = Group::new(
            px + PAD + 10,
            y + 24,
            PANEL_WIDTH - 2 * PAD - 10,
            FontSize::all().len() as i32 * (RADIO_H + 2),
            None,
        );
        let mut size_radios = Vec::new();
        for (i, size) in FontSize::all().iter().enumerate() {
            let radio = RadioRoundButton::new(
                px + PAD + 10,
                y + 24 + i as i32 * (RADIO_H + 2),
                PANEL_WIDTH - 2 * PAD - 10,
                RADIO_H,
                None,
            )
            .with_label(size.display_name());
            size_radios.push(radio);
        }
        size_group.end();

        y += 24 + FontSize::all().len() as i32 * (RADIO_H + 2) + 20;
        section_label(px, y, "Text color");
        let mut color_choice = Choice::new(px + PAD, y + 24, PANEL_WIDTH - 2 * PAD, CONTROL_H, None);
        for color in FontColor::all() {
            color_choice.add_choice(color.display_name());
        }

        y += 74;
        section_label(px, y, "Background color");
        let mut background_choice =
            Choice::new(px + PAD, y + 24, PANEL_WIDTH - 2 * PAD, CONTROL_H, None);
        for color in BackgroundColor::all() {
            background_choice.add_choice(color.display_name());
        }

        y += 74;
        section_label(px, y, "Content width");
        let width_group = Group::new(
            px + PAD + 10,
            y + 24,
            PANEL_WIDTH - 2 * PAD - 10,
            ContentWidth::all().len() as i32 * (RADIO_H + 2),
            None,
        );
        let mut width_radios = Vec::new();
        for (i, width) in ContentWidth::all().iter().enumerate() {
            let radio = RadioRoundButton::new(
                px + PAD + 10,
                y + 24 + i as i32 * (RADIO_H + 2),
                PANEL_WIDTH - 2 * PAD - 10,
                RADIO_H,
                None,
            )
            .with_label(width.display_name());
            width_radios.push(radio);
        }
        width_group.end();

        let mut reset_btn = Button::new(px + PAD, win_h - 60, 160, 32, "Reset");
        let mut apply_btn = Button::new(px + PANEL_WIDTH - PAD - 160, win_h - 60, 160, 32, "Apply");

        surface.end();
        surface.hide();

        // The toggle lives outside the sliding surface so it stays visible
        // while the panel is closed.
        let mut arrow = Button::new(
            win_w - ARROW_SIZE,
            (win_h - ARROW_SIZE) / 2,
            ARROW_SIZE,
            ARROW_SIZE,
            "@<",
        );
        arrow.set_label_size(16);

        let mut form = ParamsForm::new(initial);
        form.set_on_apply(move |state| sender.send(Message::ApplyArticleParams(state)));
        form.set_on_reset(move || sender.send(Message::ResetArticleParams));

        let state = Rc::new(RefCell::new(PanelState {
            form,
            surface,
            arrow: arrow.clone(),
            font_choice: font_choice.clone(),
            size_radios: size_radios.clone(),
            color_choice: color_choice.clone(),
            background_choice: background_choice.clone(),
            width_radios: width_radios.clone(),
            watch: None,
            win_w,
            win_h,
        }));
        state.borrow_mut().sync_controls();

        // Control callbacks stage one field each into the draft.
        let st = state.clone();
        font_choice.set_callback(move |c| {
            if let Some(family) = option_at(FontFamily::all(), c.value()) {
                st.borrow_mut().form.set(ParamChange::FontFamily(family));
            }
        });

        let st = state.clone();
        color_choice.set_callback(move |c| {
            if let Some(color) = option_at(FontColor::all(), c.value()) {
                st.borrow_mut().form.set(ParamChange::FontColor(color));
            }
        });

        let st = state.clone();
        background_choice.set_callback(move |c| {
            if let Some(color) = option_at(BackgroundColor::all(), c.value()) {
                st.borrow_mut()
                    .form
                    .set(ParamChange::BackgroundColor(color));
            }
        });

        for (radio, size) in size_radios.iter_mut().zip(FontSize::all()) {
            let st = state.clone();
            let size = *size;
            radio.set_callback(move |_| {
                st.borrow_mut().form.set(ParamChange::FontSize(size));
            });
        }

        for (radio, width) in width_radios.iter_mut().zip(ContentWidth::all()) {
            let st = state.clone();
            let width = *width;
            radio.set_callback(move |_| {
                st.borrow_mut().form.set(ParamChange::ContentWidth(width));
            });
        }

        let st = state.clone();
        arrow.set_callback(move |_| {
            st.borrow_mut().form.toggle();
            sync_visibility(&st);
        });

        let st = state.clone();
        apply_btn.set_callback(move |_| {
            st.borrow_mut().form.submit();
            sync_visibility(&st);
        });

        let st = state.clone();
        reset_btn.set_callback(move |_| {
            {
                let mut panel = st.borrow_mut();
                panel.form.reset();
                panel.sync_controls();
            }
            sync_visibility(&st);
        });

        Self { state }
    }

    /// The host supplied a new starting selection: overwrite the baseline and
    /// any in-progress draft, and show the new values in the controls.
    pub fn resync(&self, initial: ArticleState) {
        let mut panel = self.state.borrow_mut();
        panel.form.resync(initial);
        panel.sync_controls();
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().form.is_open()
    }
}

fn option_at<T: Copy>(options: &[T], index: i32) -> Option<T> {
    if index < 0 {
        return None;
    }
    options.get(index as usize).copied()
}

fn section_label(px: i32, y: i32, text: &str) {
    let mut label = Frame::new(px + PAD, y, PANEL_WIDTH - 2 * PAD, 22, None).with_label(text);
    label.set_align(Align::Left | Align::Inside);
    label.set_label_size(13);
}

/// Mirror the form's open flag onto the widgets and the outside-click watch.
/// Opening arms the watch; every path that closes the panel releases it.
fn sync_visibility(state: &Rc<RefCell<PanelState>>) {
    let mut panel = state.borrow_mut();
    let open = panel.form.is_open();
    let (win_w, win_h) = (panel.win_w, panel.win_h);

    if open {
        panel.surface.show();
        panel
            .arrow
            .set_pos(win_w - PANEL_WIDTH - ARROW_SIZE, (win_h - ARROW_SIZE) / 2);
        panel.arrow.set_label("@>");

        let surface = panel.surface.clone();
        let arrow = panel.arrow.clone();
        let st = state.clone();
        panel.watch = Some(outside_click::arm(
            move || {
                fltk::app::event_inside_widget(&surface) || fltk::app::event_inside_widget(&arrow)
            },
            move || {
                st.borrow_mut().form.dismiss();
                sync_visibility(&st);
            },
        ));
    } else {
        panel.watch = None;
        panel.surface.hide();
        panel
            .arrow
            .set_pos(win_w - ARROW_SIZE, (win_h - ARROW_SIZE) / 2);
        panel.arrow.set_label("@<");
    }

    if let Some(mut parent) = panel.arrow.parent() {
        parent.redraw();
    }
}
