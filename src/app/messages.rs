use super::article::ArticleState;

/// All messages that can be sent through the FLTK channel.
/// Panel callbacks send these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// The user committed a selection (apply button, or the apply half of a
    /// reset). Carries the full state to put on the article view.
    ApplyArticleParams(ArticleState),

    /// The user hit reset, as opposed to a normal apply. Always preceded by
    /// an `ApplyArticleParams` carrying the baseline.
    ResetArticleParams,
}
