use super::article::{ArticleState, ParamChange};

/// Interaction state for the article parameters panel.
///
/// Edits are staged in `draft` and never observed by the host until the user
/// explicitly applies or resets, so the article view changes atomically. The
/// `open` flag is owned here too; the widget layer only mirrors it.
pub struct ParamsForm {
    baseline: ArticleState,
    draft: ArticleState,
    open: bool,
    on_apply: Option<Box<dyn FnMut(ArticleState)>>,
    on_reset: Option<Box<dyn FnMut()>>,
}

impl ParamsForm {
    pub fn new(initial: ArticleState) -> Self {
        Self {
            baseline: initial,
            draft: initial,
            open: false,
            on_apply: None,
            on_reset: None,
        }
    }

    /// Called with the committed state on every apply and reset.
    pub fn set_on_apply(&mut self, cb: impl FnMut(ArticleState) + 'static) {
        self.on_apply = Some(Box::new(cb));
    }

    /// Called on user reset only, after the apply callback.
    pub fn set_on_reset(&mut self, cb: impl FnMut() + 'static) {
        self.on_reset = Some(Box::new(cb));
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> ArticleState {
        self.draft
    }

    pub fn baseline(&self) -> ArticleState {
        self.baseline
    }

    /// Arrow button: flip between open and closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Pointer interaction outside the panel and its toggle. Hides the panel
    /// but keeps the draft; reopening shows the uncommitted edits again.
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Stage one edit from a control. Local only, nothing leaves the panel.
    pub fn set(&mut self, change: ParamChange) {
        self.draft = self.draft.with(change);
    }

    /// Apply: forward the draft to the host and close. The baseline is not
    /// touched; whether the applied value becomes the next baseline is the
    /// host's call.
    pub fn submit(&mut self) {
        let state = self.draft;
        if let Some(cb) = self.on_apply.as_mut() {
            cb(state);
        }
        self.open = false;
    }

    /// Reset: revert the draft to the baseline, apply it immediately (a reset
    /// is effective, not just a form clear), notify the host separately that
    /// this was a reset, and close.
    pub fn reset(&mut self) {
        self.draft = self.baseline;
        let state = self.baseline;
        if let Some(cb) = self.on_apply.as_mut() {
            cb(state);
        }
        if let Some(cb) = self.on_reset.as_mut() {
            cb();
        }
        self.open = false;
    }

    /// The host supplied a new starting state. Replaces both the baseline and
    /// the draft, discarding any in-progress edits. Reacts to external state
    /// changes; not to be confused with the user-initiated `reset`.
    pub fn resync(&mut self, initial: ArticleState) {
        self.baseline = initial;
        self.draft = initial;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::article::{BackgroundColor, ContentWidth, FontColor, FontFamily, FontSize};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_form(
        initial: ArticleState,
    ) -> (ParamsForm, Rc<RefCell<Vec<ArticleState>>>, Rc<RefCell<u32>>) {
        let mut form = ParamsForm::new(initial);
        let applied = Rc::new(RefCell::new(Vec::new()));
        let resets = Rc::new(RefCell::new(0u32));
        let applied_rec = applied.clone();
        form.set_on_apply(move |s| applied_rec.borrow_mut().push(s));
        let resets_rec = resets.clone();
        form.set_on_reset(move || *resets_rec.borrow_mut() += 1);
        (form, applied, resets)
    }

    #[test]
    fn test_starts_closed_with_draft_equal_baseline() {
        let form = ParamsForm::new(ArticleState::default());
        assert!(!form.is_open());
        assert_eq!(form.draft(), form.baseline());
    }

    #[test]
    fn test_toggle_cycles_visibility() {
        let mut form = ParamsForm::new(ArticleState::default());
        form.toggle();
        assert!(form.is_open());
        form.toggle();
        assert!(!form.is_open());
    }

    #[test]
    fn test_edits_keep_last_value_per_field() {
        let (mut form, _, _) = recording_form(ArticleState::default());
        form.toggle();
        form.set(ParamChange::FontSize(FontSize::Medium));
        form.set(ParamChange::FontSize(FontSize::Large));
        form.set(ParamChange::FontColor(FontColor::Slate));

        let draft = form.draft();
        assert_eq!(draft.font_size, FontSize::Large);
        assert_eq!(draft.font_color, FontColor::Slate);
        // Unedited fields retain the baseline's values.
        assert_eq!(draft.font_family, form.baseline().font_family);
        assert_eq!(draft.background_color, form.baseline().background_color);
        assert_eq!(draft.content_width, form.baseline().content_width);
    }

    #[test]
    fn test_edits_are_local_until_submit() {
        let (mut form, applied, resets) = recording_form(ArticleState::default());
        form.toggle();
        form.set(ParamChange::FontFamily(FontFamily::FiraCode));
        assert!(applied.borrow().is_empty());
        assert_eq!(*resets.borrow(), 0);
    }

    #[test]
    fn test_submit_applies_draft_and_closes() {
        let (mut form, applied, resets) = recording_form(ArticleState::default());
        form.toggle();
        form.set(ParamChange::FontSize(FontSize::Medium));
        form.submit();

        assert!(!form.is_open());
        let expected = ArticleState {
            font_size: FontSize::Medium,
            ..ArticleState::default()
        };
        assert_eq!(applied.borrow().as_slice(), &[expected]);
        assert_eq!(*resets.borrow(), 0);
        // Baseline is not rewritten by an apply.
        assert_eq!(form.baseline(), ArticleState::default());
    }

    #[test]
    fn test_submit_closes_even_when_already_closed() {
        let (mut form, applied, _) = recording_form(ArticleState::default());
        form.submit();
        assert!(!form.is_open());
        assert_eq!(applied.borrow().len(), 1);
    }

    #[test]
    fn test_reset_reverts_applies_baseline_and_closes() {
        let initial = ArticleState {
            font_family: FontFamily::Ubuntu,
            content_width: ContentWidth::Narrow,
            ..ArticleState::default()
        };
        let (mut form, applied, resets) = recording_form(initial);
        form.toggle();
        form.set(ParamChange::FontFamily(FontFamily::DaysOne));
        form.set(ParamChange::BackgroundColor(BackgroundColor::Charcoal));
        form.reset();

        assert!(!form.is_open());
        assert_eq!(form.draft(), initial);
        assert_eq!(applied.borrow().as_slice(), &[initial]);
        assert_eq!(*resets.borrow(), 1);
    }

    #[test]
    fn test_reset_is_idempotent_outwardly() {
        let (mut form, applied, resets) = recording_form(ArticleState::default());
        form.reset();
        form.reset();
        assert_eq!(applied.borrow().len(), 2);
        assert_eq!(applied.borrow()[0], applied.borrow()[1]);
        assert_eq!(*resets.borrow(), 2);
    }

    #[test]
    fn test_dismiss_hides_but_keeps_draft() {
        let (mut form, applied, _) = recording_form(ArticleState::default());
        form.toggle();
        form.set(ParamChange::FontColor(FontColor::Crimson));
        form.dismiss();

        assert!(!form.is_open());
        // No implicit apply on outside dismissal.
        assert!(applied.borrow().is_empty());
        // Reopening shows the uncommitted edit, not the baseline.
        form.toggle();
        assert_eq!(form.draft().font_color, FontColor::Crimson);
    }

    #[test]
    fn test_dismiss_when_closed_is_noop() {
        let mut form = ParamsForm::new(ArticleState::default());
        form.dismiss();
        assert!(!form.is_open());
    }

    #[test]
    fn test_no_edits_lost_across_toggle_cycle() {
        let (mut form, _, _) = recording_form(ArticleState::default());
        form.toggle();
        form.set(ParamChange::ContentWidth(ContentWidth::Narrow));
        form.toggle();
        form.toggle();
        assert_eq!(form.draft().content_width, ContentWidth::Narrow);
    }

    #[test]
    fn test_resync_overwrites_baseline_and_draft() {
        let (mut form, applied, resets) = recording_form(ArticleState::default());
        form.toggle();
        form.set(ParamChange::FontSize(FontSize::Large));

        let external = ArticleState {
            background_color: BackgroundColor::Mint,
            ..ArticleState::default()
        };
        form.resync(external);

        // In-progress edits are discarded, even while open.
        assert_eq!(form.draft(), external);
        assert_eq!(form.baseline(), external);
        // Resync is silent: no apply, no reset notification.
        assert!(applied.borrow().is_empty());
        assert_eq!(*resets.borrow(), 0);

        // A later reset reverts to the resynced baseline.
        form.set(ParamChange::FontColor(FontColor::Forest));
        form.reset();
        assert_eq!(applied.borrow().as_slice(), &[external]);
    }

    #[test]
    fn test_missing_callbacks_do_not_panic() {
        let mut form = ParamsForm::new(ArticleState::default());
        form.toggle();
        form.set(ParamChange::FontSize(FontSize::Medium));
        form.submit();
        form.reset();
        assert!(!form.is_open());
    }

    #[test]
    fn test_apply_then_dismiss_scenario() {
        // Open, change the size, apply: one notification with only the size
        // changed; panel closed.
        let (mut form, applied, _) = recording_form(ArticleState::default());
        form.toggle();
        form.set(ParamChange::FontSize(FontSize::Medium));
        form.submit();
        assert_eq!(applied.borrow().len(), 1);
        assert_eq!(applied.borrow()[0].font_size, FontSize::Medium);
        assert_eq!(applied.borrow()[0].font_family, FontFamily::OpenSans);
        assert!(!form.is_open());

        // Reopen, change the text color without applying, click outside:
        // panel closes, nothing applied, the edit survives reopening.
        form.toggle();
        form.set(ParamChange::FontColor(FontColor::Crimson));
        form.dismiss();
        assert_eq!(applied.borrow().len(), 1);
        form.toggle();
        assert_eq!(form.draft().font_color, FontColor::Crimson);
        assert_eq!(form.draft().font_size, FontSize::Medium);
    }
}
