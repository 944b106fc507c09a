use fltk::enums::{Color, Font};

/// Typeface options for the article body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    #[default]
    OpenSans,
    Ubuntu,
    CormorantGaramond,
    DaysOne,
    FiraCode,
}

impl FontFamily {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OpenSans => "Open Sans",
            Self::Ubuntu => "Ubuntu",
            Self::CormorantGaramond => "Cormorant Garamond",
            Self::DaysOne => "Days One",
            Self::FiraCode => "Fira Code",
        }
    }

    /// CSS-style value reported to the host.
    pub fn value(&self) -> &'static str {
        self.display_name()
    }

    /// Closest FLTK built-in face for rendering the article.
    pub fn font(&self) -> Font {
        match self {
            Self::OpenSans => Font::Helvetica,
            Self::Ubuntu => Font::Screen,
            Self::CormorantGaramond => Font::Times,
            Self::DaysOne => Font::HelveticaBold,
            Self::FiraCode => Font::Courier,
        }
    }

    pub fn all() -> &'static [FontFamily] {
        &[
            Self::OpenSans,
            Self::Ubuntu,
            Self::CormorantGaramond,
            Self::DaysOne,
            Self::FiraCode,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl FontSize {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Small => "18px",
            Self::Medium => "24px",
            Self::Large => "38px",
        }
    }

    pub fn value(&self) -> &'static str {
        self.display_name()
    }

    pub fn points(&self) -> i32 {
        match self {
            Self::Small => 18,
            Self::Medium => 24,
            Self::Large => 38,
        }
    }

    pub fn all() -> &'static [FontSize] {
        &[Self::Small, Self::Medium, Self::Large]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontColor {
    #[default]
    Black,
    White,
    Slate,
    Crimson,
    Forest,
}

impl FontColor {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::White => "White",
            Self::Slate => "Slate",
            Self::Crimson => "Crimson",
            Self::Forest => "Forest",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            Self::Black => "#000000",
            Self::White => "#FFFFFF",
            Self::Slate => "#546E7A",
            Self::Crimson => "#D32F2F",
            Self::Forest => "#2E7D32",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Black => Color::from_hex(0x000000),
            Self::White => Color::from_hex(0xFFFFFF),
            Self::Slate => Color::from_hex(0x546E7A),
            Self::Crimson => Color::from_hex(0xD32F2F),
            Self::Forest => Color::from_hex(0x2E7D32),
        }
    }

    pub fn all() -> &'static [FontColor] {
        &[
            Self::Black,
            Self::White,
            Self::Slate,
            Self::Crimson,
            Self::Forest,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundColor {
    #[default]
    White,
    Ivory,
    Mint,
    Charcoal,
    Black,
}

impl BackgroundColor {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Ivory => "Ivory",
            Self::Mint => "Mint",
            Self::Charcoal => "Charcoal",
            Self::Black => "Black",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            Self::White => "#FFFFFF",
            Self::Ivory => "#FFF8E7",
            Self::Mint => "#E8F5E9",
            Self::Charcoal => "#263238",
            Self::Black => "#000000",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::White => Color::from_hex(0xFFFFFF),
            Self::Ivory => Color::from_hex(0xFFF8E7),
            Self::Mint => Color::from_hex(0xE8F5E9),
            Self::Charcoal => Color::from_hex(0x263238),
            Self::Black => Color::from_hex(0x000000),
        }
    }

    pub fn all() -> &'static [BackgroundColor] {
        &[
            Self::White,
            Self::Ivory,
            Self::Mint,
            Self::Charcoal,
            Self::Black,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentWidth {
    #[default]
    Wide,
    Medium,
    Narrow,
}

impl ContentWidth {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Wide => "Wide (1120px)",
            Self::Medium => "Medium (920px)",
            Self::Narrow => "Narrow (700px)",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            Self::Wide => "1120px",
            Self::Medium => "920px",
            Self::Narrow => "700px",
        }
    }

    pub fn pixels(&self) -> i32 {
        match self {
            Self::Wide => 1120,
            Self::Medium => 920,
            Self::Narrow => 700,
        }
    }

    pub fn all() -> &'static [ContentWidth] {
        &[Self::Wide, Self::Medium, Self::Narrow]
    }
}

/// The full set of presentation choices for the article view.
///
/// Values are always members of the corresponding option set above; the
/// controls only ever offer catalog values, so no re-validation happens here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArticleState {
    pub font_family: FontFamily,
    pub font_size: FontSize,
    pub font_color: FontColor,
    pub background_color: BackgroundColor,
    pub content_width: ContentWidth,
}

/// A single-field edit coming from one of the panel controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamChange {
    FontFamily(FontFamily),
    FontSize(FontSize),
    FontColor(FontColor),
    BackgroundColor(BackgroundColor),
    ContentWidth(ContentWidth),
}

impl ArticleState {
    /// Return a new state differing from `self` in exactly the edited field.
    pub fn with(&self, change: ParamChange) -> ArticleState {
        let mut next = *self;
        match change {
            ParamChange::FontFamily(v) => next.font_family = v,
            ParamChange::FontSize(v) => next.font_size = v,
            ParamChange::FontColor(v) => next.font_color = v,
            ParamChange::BackgroundColor(v) => next.background_color = v,
            ParamChange::ContentWidth(v) => next.content_width = v,
        }
        next
    }
}
