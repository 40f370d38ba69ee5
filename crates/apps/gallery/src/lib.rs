//! Gallery app for the shared dialog and icon widget layer.
//!
//! Renders every public widget through `ui_kit` so color resolution,
//! labeling, text layout, and dialog wiring can be reviewed in a
//! production-shaped surface.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::ev::MouseEvent;
use leptos::*;
use serde::{Deserialize, Serialize};
use ui_kit::prelude::*;

const DARK_THEME_JSON: &str = r##"{
  "color": {
    "text_black": "#f5f4f0",
    "text_white": "#23221e",
    "text_grey": "#a8a49b",
    "text_disabled": "#5c5952",
    "text_link": "#63b4e8",
    "main": "#3399db",
    "danger": "#ff5c8a",
    "warning": "#ffaa33",
    "brand": "#2ad4dc"
  }
}"##;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum ActiveTheme {
    Light,
    Dark,
}

impl ActiveTheme {
    fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

fn dark_theme() -> Theme {
    match serde_json::from_str::<Theme>(DARK_THEME_JSON) {
        Ok(theme) => theme,
        Err(err) => {
            logging::warn!("gallery: dark theme payload invalid: {err}");
            Theme::default()
        }
    }
}

#[component]
/// Widget gallery window contents.
pub fn WidgetGallery() -> impl IntoView {
    provide_id_allocator(IdAllocator::new());
    let theme = provide_theme(Theme::default());
    let active = create_rw_signal(ActiveTheme::Light);
    let deletions = create_rw_signal(0u32);
    let locked = create_rw_signal(false);

    let toggle_theme = Callback::new(move |_: MouseEvent| {
        let next = active.get().toggled();
        active.set(next);
        theme.set(match next {
            ActiveTheme::Light => Theme::default(),
            ActiveTheme::Dark => dark_theme(),
        });
    });

    let delete_trigger =
        DialogTrigger::new("Delete profile").attr("data-test-id", "delete-profile-trigger");
    let export_trigger = DialogTrigger::new("Export data");

    view! {
        <div class="gallery" data-app="widget-gallery">
            <section class="gallery-panel">
                <h2>"Icons"</h2>
                <button type="button" class="ui-button" on:click=move |ev| toggle_theme.call(ev)>
                    {move || format!("Theme: {}", active.get().label())}
                </button>
                <div class="gallery-row">
                    {SemanticColor::ALL
                        .into_iter()
                        .map(|color| {
                            view! {
                                <Icon
                                    icon=IconName::Check
                                    color=color.keyword()
                                    text=color.keyword()
                                />
                            }
                        })
                        .collect_view()}
                </div>
                <div class="gallery-row">
                    <Icon icon=IconName::Warning color="#7a26c9" alt="Custom literal color"/>
                    <Icon icon=IconName::Search aria_label="Search the catalog"/>
                    <Icon
                        icon=IconName::Info
                        color="TEXT_LINK"
                        text="Details"
                        right=true
                        icon_gap=Space::Char(0.5)
                    />
                    <Icon
                        icon=IconName::ChevronDown
                        text="More"
                        icon_gap=Space::Abstract(AbstractSpace::Xs)
                    />
                </div>
            </section>

            <section class="gallery-panel">
                <h2>"Dialogs"</h2>
                <p>{move || format!("Profiles deleted: {}", deletions.get())}</p>
                <ActionDialogWithTrigger
                    trigger=delete_trigger
                    id="delete-profile-dialog"
                    title="Delete profile"
                    action_text="Delete"
                    on_click_action=Callback::new(move |_| {
                        deletions.update(|count| *count += 1);
                        logging::log!("gallery: profile deleted");
                    })
                >
                    <p>
                        <Icon icon=IconName::Warning color="WARNING" text="This cannot be undone."/>
                    </p>
                </ActionDialogWithTrigger>

                <label class="gallery-lock">
                    <input
                        type="checkbox"
                        prop:checked=move || locked.get()
                        on:change=move |_| locked.update(|locked| *locked = !*locked)
                    />
                    "Lock exports"
                </label>
                <ActionDialogWithTrigger
                    trigger=export_trigger
                    title="Export data"
                    action_text="Export"
                    close_text="Not now"
                    on_click_trigger=Callback::new(move |open: DialogToggleAction| {
                        if locked.get() {
                            logging::log!("gallery: export trigger ignored while locked");
                        } else {
                            open.call(());
                        }
                    })
                    on_click_close=Callback::new(move |close: DialogToggleAction| {
                        logging::log!("gallery: export dialog closing");
                        close.call(());
                    })
                >
                    <p>"Exports include every profile and its settings."</p>
                </ActionDialogWithTrigger>
            </section>
        </div>
    }
}
