//! Shared dialog and icon widget layer for browser-rendered surfaces.
//!
//! The crate owns the trigger-bound action dialog composite, the icon
//! factory, and the token modules they consume (semantic colors, spacing,
//! identifier allocation), all emitting the stable `data-ui-*` DOM contract
//! consumed by host CSS layers. Hosts should compose these widgets instead
//! of emitting ad hoc dialog or icon markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod dialog;
mod icon;
mod id;
mod spacing;
mod text;
mod theme;

pub use dialog::{ActionDialog, ActionDialogWithTrigger, DialogToggleAction, DialogTrigger};
pub use icon::{Icon, IconGlyph, IconName};
pub use id::{provide_id_allocator, IdAllocator};
pub use spacing::{AbstractSpace, Space};
pub use text::VisuallyHiddenText;
pub use theme::{provide_theme, use_theme, SemanticColor, Theme, ThemeColors};

/// Convenience imports for application crates consuming the widget layer.
pub mod prelude {
    pub use crate::{
        provide_id_allocator, provide_theme, use_theme, AbstractSpace, ActionDialog,
        ActionDialogWithTrigger, DialogToggleAction, DialogTrigger, Icon, IconGlyph, IconName,
        IdAllocator, SemanticColor, Space, Theme, ThemeColors, VisuallyHiddenText,
    };
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}
