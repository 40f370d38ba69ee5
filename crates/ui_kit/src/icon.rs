//! Icon factory: inline vector glyphs with semantic color, companion text,
//! and accessible labeling.

use leptos::*;

use crate::merge_layout_class;
use crate::spacing::Space;
use crate::text::VisuallyHiddenText;
use crate::theme::use_theme;

const DEFAULT_ICON_GAP: Space = Space::Char(0.25);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An inline vector glyph: a viewBox plus a single fill-only path outline.
pub struct IconGlyph {
    /// SVG viewBox attribute value.
    pub view_box: &'static str,
    /// Path outline data, rendered with the inherited text color.
    pub path: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Built-in glyph catalog.
pub enum IconName {
    /// Checkmark.
    Check,
    /// Dismiss cross.
    Dismiss,
    /// Information ring.
    Info,
    /// Warning triangle.
    Warning,
    /// Magnifier.
    Search,
    /// Downward chevron.
    ChevronDown,
    /// Plus sign.
    Plus,
    /// Trash can.
    Trash,
}

impl IconName {
    /// The glyph outline for this name.
    pub fn glyph(self) -> IconGlyph {
        let path = match self {
            Self::Check => "M9 16.2 4.8 12l-1.4 1.4L9 19 21 7l-1.4-1.4z",
            Self::Dismiss => {
                "M19 6.4 17.6 5 12 10.6 6.4 5 5 6.4 10.6 12 5 17.6 6.4 19 12 13.4 17.6 19 19 17.6 13.4 12z"
            }
            Self::Info => {
                "M11 7h2v2h-2zm0 4h2v6h-2zm1-9a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm0 18a8 8 0 1 1 0-16 8 8 0 0 1 0 16z"
            }
            Self::Warning => "M1 21h22L12 2zm12-3h-2v-2h2zm0-4h-2v-4h2z",
            Self::Search => {
                "M15.5 14h-.8l-.3-.3a6.5 6.5 0 1 0-.7.7l.3.3v.8l5 5 1.5-1.5zm-6 0a4.5 4.5 0 1 1 0-9 4.5 4.5 0 0 1 0 9z"
            }
            Self::ChevronDown => "M7.4 8.6 12 13.2l4.6-4.6L18 10l-6 6-6-6z",
            Self::Plus => "M19 13h-6v6h-2v-6H5v-2h6V5h2v6h6z",
            Self::Trash => {
                "M6 19a2 2 0 0 0 2 2h8a2 2 0 0 0 2-2V7H6zM19 4h-3.5l-1-1h-5l-1 1H5v2h14z"
            }
        };
        IconGlyph {
            view_box: "0 0 24 24",
            path,
        }
    }
}

impl From<IconName> for IconGlyph {
    fn from(name: IconName) -> Self {
        name.glyph()
    }
}

/// Whether the glyph element is hidden from assistive tech when the caller
/// supplied no explicit flag: decorative unless an ARIA label names it.
fn hidden_from_assistive_tech(aria_hidden: Option<bool>, has_label_by_aria: bool) -> bool {
    aria_hidden.unwrap_or(!has_label_by_aria)
}

/// The final `aria-hidden` state of the glyph element. Alt text always hides
/// the glyph, because the visually-hidden alt node is the accessible surface.
fn glyph_aria_hidden(aria_hidden: Option<bool>, has_label_by_aria: bool, has_alt: bool) -> bool {
    hidden_from_assistive_tech(aria_hidden, has_label_by_aria) || has_alt
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct IconLayout {
    text_first: bool,
    wrapper_style: Option<String>,
    glyph_style: Option<String>,
}

/// Companion-text arrangement: glyph-then-text with a trailing column gap,
/// or text-then-glyph with a leading margin on the glyph.
fn icon_layout(right: bool, gap: Option<Space>) -> IconLayout {
    let gap = gap.unwrap_or(DEFAULT_ICON_GAP).css();
    if right {
        IconLayout {
            text_first: true,
            wrapper_style: None,
            glyph_style: Some(format!("margin-inline-start: {gap};")),
        }
    } else {
        IconLayout {
            text_first: false,
            wrapper_style: Some(format!(
                "display: inline-flex; align-items: baseline; column-gap: {gap};"
            )),
            glyph_style: None,
        }
    }
}

#[component]
/// Shared icon widget over any [`IconGlyph`].
///
/// The glyph always renders with the inherited text color (`currentColor`
/// stroke and fill, zero stroke width) at `1em`, so it tracks the
/// surrounding font. `color` accepts a semantic keyword or any literal CSS
/// color; keywords re-resolve whenever the active theme changes.
pub fn Icon(
    /// Glyph to render; [`IconName`] values convert directly.
    #[prop(into)]
    icon: IconGlyph,
    /// Semantic color keyword or literal CSS color.
    #[prop(optional, into)]
    color: String,
    /// Fixed dimension passthrough. Deprecated: icons track the inherited
    /// font size, so fixed values are discouraged.
    #[prop(optional, into)]
    size: String,
    /// Description announced by assistive tech, rendered as a
    /// visually-hidden text node ahead of the icon content.
    #[prop(optional, into)]
    alt: String,
    /// Companion text laid out next to the glyph.
    #[prop(optional, into)]
    text: String,
    /// Gap between glyph and companion text. Defaults to a quarter em.
    #[prop(optional)]
    icon_gap: Option<Space>,
    /// Render the companion text before the glyph.
    #[prop(optional)]
    right: bool,
    /// Layout-only class hook for host-specific placement.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    /// ARIA role of the glyph element.
    #[prop(default = "img")]
    role: &'static str,
    /// Explicit assistive-tech visibility override.
    #[prop(optional)]
    aria_hidden: Option<bool>,
    /// Accessible name for the glyph element.
    #[prop(optional, into)]
    aria_label: String,
    /// Id reference naming the glyph element.
    #[prop(optional, into)]
    aria_labelledby: String,
) -> impl IntoView {
    let has_label_by_aria = !aria_label.is_empty() || !aria_labelledby.is_empty();
    let has_alt = !alt.is_empty();
    let hidden = glyph_aria_hidden(aria_hidden, has_label_by_aria, has_alt);
    let dimension = if size.is_empty() {
        "1em".to_string()
    } else {
        size
    };

    let theme = use_theme();
    let resolved_color = move || (!color.is_empty()).then(|| theme.get().color.resolve(&color));

    let layout = icon_layout(right, icon_gap);
    let glyph_style = (!text.is_empty()).then(|| layout.glyph_style.clone()).flatten();

    let svg = view! {
        <svg
            class=merge_layout_class("ui-icon", layout_class)
            viewBox=icon.view_box
            width=dimension.clone()
            height=dimension
            stroke="currentColor"
            fill="currentColor"
            stroke-width="0"
            color=resolved_color
            style=glyph_style
            role=role
            aria-hidden=hidden.then_some("true")
            aria-label=(!aria_label.is_empty()).then_some(aria_label)
            aria-labelledby=(!aria_labelledby.is_empty()).then_some(aria_labelledby)
            focusable="false"
            data-ui-primitive="true"
            data-ui-kind="icon"
        >
            <path d=icon.path></path>
        </svg>
    };

    let alt_node = has_alt.then(|| view! { <VisuallyHiddenText>{alt}</VisuallyHiddenText> });

    if text.is_empty() {
        return view! {
            {alt_node}
            {svg}
        }
        .into_view();
    }

    let text_node = view! { <span class="ui-icon-text">{text}</span> };
    if layout.text_first {
        view! {
            <span
                class="ui-icon-with-text"
                data-ui-primitive="true"
                data-ui-kind="icon-with-text"
            >
                {alt_node}
                {text_node}
                {svg}
            </span>
        }
        .into_view()
    } else {
        view! {
            <span
                class="ui-icon-with-text"
                style=layout.wrapper_style
                data-ui-primitive="true"
                data-ui-kind="icon-with-text"
            >
                {alt_node}
                {svg}
                {text_node}
            </span>
        }
        .into_view()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unlabeled_icons_default_to_hidden() {
        assert_eq!(glyph_aria_hidden(None, false, false), true);
    }

    #[test]
    fn aria_labels_expose_the_glyph_by_default() {
        assert_eq!(glyph_aria_hidden(None, true, false), false);
    }

    #[test]
    fn explicit_flag_overrides_the_default() {
        assert_eq!(glyph_aria_hidden(Some(false), false, false), false);
        assert_eq!(glyph_aria_hidden(Some(true), true, false), true);
    }

    #[test]
    fn alt_text_always_hides_the_glyph() {
        assert_eq!(glyph_aria_hidden(None, true, true), true);
        assert_eq!(glyph_aria_hidden(Some(false), false, true), true);
    }

    #[test]
    fn text_follows_glyph_with_a_trailing_column_gap() {
        let layout = icon_layout(false, None);
        assert_eq!(
            layout,
            IconLayout {
                text_first: false,
                wrapper_style: Some(
                    "display: inline-flex; align-items: baseline; column-gap: 0.25em;".to_string()
                ),
                glyph_style: None,
            }
        );
    }

    #[test]
    fn right_flag_leads_with_text_and_pads_the_glyph() {
        let layout = icon_layout(true, None);
        assert_eq!(
            layout,
            IconLayout {
                text_first: true,
                wrapper_style: None,
                glyph_style: Some("margin-inline-start: 0.25em;".to_string()),
            }
        );
    }

    #[test]
    fn explicit_gaps_replace_the_quarter_em_default() {
        let layout = icon_layout(false, Some(Space::Char(0.5)));
        assert_eq!(
            layout.wrapper_style,
            Some("display: inline-flex; align-items: baseline; column-gap: 0.5em;".to_string())
        );
        let layout = icon_layout(true, Some(Space::Abstract(crate::AbstractSpace::Xs)));
        assert_eq!(
            layout.glyph_style,
            Some("margin-inline-start: 8px;".to_string())
        );
    }

    #[test]
    fn names_expose_fill_only_glyphs() {
        let glyph = IconName::Check.glyph();
        assert_eq!(glyph.view_box, "0 0 24 24");
        assert!(!glyph.path.is_empty());
        assert_eq!(IconGlyph::from(IconName::Trash), IconName::Trash.glyph());
    }
}
