//! Semantic color tokens and the render-time theme context.

use leptos::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic color keywords understood by the widget layer.
pub enum SemanticColor {
    /// Default body-text tone.
    TextBlack,
    /// Inverted text tone for dark surfaces.
    TextWhite,
    /// Muted neutral text.
    TextGrey,
    /// Disabled neutral text.
    TextDisabled,
    /// Hyperlink text.
    TextLink,
    /// Primary interactive color.
    Main,
    /// Destructive/error color.
    Danger,
    /// Caution color.
    Warning,
    /// Brand accent color.
    Brand,
}

impl SemanticColor {
    /// Every semantic color, in keyword order.
    pub const ALL: [SemanticColor; 9] = [
        Self::TextBlack,
        Self::TextWhite,
        Self::TextGrey,
        Self::TextDisabled,
        Self::TextLink,
        Self::Main,
        Self::Danger,
        Self::Warning,
        Self::Brand,
    ];

    /// The keyword accepted wherever a color string is taken.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::TextBlack => "TEXT_BLACK",
            Self::TextWhite => "TEXT_WHITE",
            Self::TextGrey => "TEXT_GREY",
            Self::TextDisabled => "TEXT_DISABLED",
            Self::TextLink => "TEXT_LINK",
            Self::Main => "MAIN",
            Self::Danger => "DANGER",
            Self::Warning => "WARNING",
            Self::Brand => "BRAND",
        }
    }

    /// Parses a keyword. Anything else is treated as a literal color value.
    pub fn from_keyword(raw: &str) -> Option<Self> {
        match raw {
            "TEXT_BLACK" => Some(Self::TextBlack),
            "TEXT_WHITE" => Some(Self::TextWhite),
            "TEXT_GREY" => Some(Self::TextGrey),
            "TEXT_DISABLED" => Some(Self::TextDisabled),
            "TEXT_LINK" => Some(Self::TextLink),
            "MAIN" => Some(Self::Main),
            "DANGER" => Some(Self::Danger),
            "WARNING" => Some(Self::Warning),
            "BRAND" => Some(Self::Brand),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Concrete color values behind the semantic keywords.
pub struct ThemeColors {
    /// Value for [`SemanticColor::TextBlack`].
    pub text_black: String,
    /// Value for [`SemanticColor::TextWhite`].
    pub text_white: String,
    /// Value for [`SemanticColor::TextGrey`].
    pub text_grey: String,
    /// Value for [`SemanticColor::TextDisabled`].
    pub text_disabled: String,
    /// Value for [`SemanticColor::TextLink`].
    pub text_link: String,
    /// Value for [`SemanticColor::Main`].
    pub main: String,
    /// Value for [`SemanticColor::Danger`].
    pub danger: String,
    /// Value for [`SemanticColor::Warning`].
    pub warning: String,
    /// Value for [`SemanticColor::Brand`].
    pub brand: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            text_black: "#23221e".to_string(),
            text_white: "#ffffff".to_string(),
            text_grey: "#706d65".to_string(),
            text_disabled: "#c1bdb7".to_string(),
            text_link: "#0071c1".to_string(),
            main: "#0077c7".to_string(),
            danger: "#e01e5a".to_string(),
            warning: "#ff8800".to_string(),
            brand: "#00c4cc".to_string(),
        }
    }
}

impl ThemeColors {
    /// The concrete value for a semantic color.
    pub fn semantic(&self, color: SemanticColor) -> &str {
        match color {
            SemanticColor::TextBlack => &self.text_black,
            SemanticColor::TextWhite => &self.text_white,
            SemanticColor::TextGrey => &self.text_grey,
            SemanticColor::TextDisabled => &self.text_disabled,
            SemanticColor::TextLink => &self.text_link,
            SemanticColor::Main => &self.main,
            SemanticColor::Danger => &self.danger,
            SemanticColor::Warning => &self.warning,
            SemanticColor::Brand => &self.brand,
        }
    }

    /// Resolves a color string: semantic keywords map through the theme,
    /// anything else passes through unchanged as a literal value.
    pub fn resolve(&self, raw: &str) -> String {
        match SemanticColor::from_keyword(raw) {
            Some(color) => self.semantic(color).to_string(),
            None => raw.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Theme payload read by widgets at render time.
pub struct Theme {
    /// Semantic color mapping.
    pub color: ThemeColors,
}

/// Installs a reactive theme into context and returns the signal so hosts
/// can swap themes at runtime.
pub fn provide_theme(theme: Theme) -> RwSignal<Theme> {
    let theme = create_rw_signal(theme);
    provide_context(theme);
    theme
}

/// The active theme, or the default palette when no host installed one.
pub fn use_theme() -> Signal<Theme> {
    match use_context::<RwSignal<Theme>>() {
        Some(theme) => theme.into(),
        None => Signal::derive(Theme::default),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_semantic_keyword_resolves_through_the_theme() {
        let colors = ThemeColors::default();
        for color in SemanticColor::ALL {
            assert_eq!(colors.resolve(color.keyword()), colors.semantic(color));
        }
    }

    #[test]
    fn literal_colors_pass_through_unchanged() {
        let colors = ThemeColors::default();
        assert_eq!(colors.resolve("#ff0000"), "#ff0000");
        assert_eq!(colors.resolve("rebeccapurple"), "rebeccapurple");
        // Keyword matching is case-sensitive.
        assert_eq!(colors.resolve("main"), "main");
    }

    #[test]
    fn keywords_round_trip() {
        for color in SemanticColor::ALL {
            assert_eq!(SemanticColor::from_keyword(color.keyword()), Some(color));
        }
        assert_eq!(SemanticColor::from_keyword("TEXT_PINK"), None);
    }

    #[test]
    fn theme_round_trips_through_json() {
        let theme = Theme::default();
        let serialized = serde_json::to_string(&theme).expect("serialize theme");
        let restored: Theme = serde_json::from_str(&serialized).expect("deserialize theme");
        assert_eq!(restored, theme);
    }
}
