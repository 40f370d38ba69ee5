//! Action dialog primitive and the trigger-bound composite.

use std::collections::BTreeMap;

use leptos::ev::{self, MouseEvent};
use leptos::*;

use crate::icon::{Icon, IconName};
use crate::id::use_widget_id;
use crate::merge_layout_class;

/// Zero-argument visibility action handed to the open/close hooks. Invoking
/// it performs the state transition; a hook that never invokes it leaves the
/// dialog where it is.
pub type DialogToggleAction = Callback<()>;

#[derive(Clone)]
/// Declarative descriptor for the clickable element that opens a dialog.
///
/// The composite rebuilds the rendered trigger from this value on mount,
/// overwriting the click-handler slot and the `aria-haspopup` /
/// `aria-controls` attributes; everything else carries through untouched.
pub struct DialogTrigger {
    label: String,
    attrs: BTreeMap<String, String>,
    on_click: Option<Callback<MouseEvent>>,
    layout_class: Option<&'static str>,
}

impl DialogTrigger {
    /// A trigger rendered as a button with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            attrs: BTreeMap::new(),
            on_click: None,
            layout_class: None,
        }
    }

    /// Adds an arbitrary attribute to the rendered trigger.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Sets the click-handler slot. A composite always replaces this slot
    /// with its own open operation; it only fires when the descriptor is
    /// rendered standalone.
    pub fn on_click(mut self, on_click: Callback<MouseEvent>) -> Self {
        self.on_click = Some(on_click);
        self
    }

    /// Layout-only class hook for host-specific placement.
    pub fn layout_class(mut self, layout_class: &'static str) -> Self {
        self.layout_class = Some(layout_class);
        self
    }
}

impl IntoView for DialogTrigger {
    fn into_view(self) -> View {
        let Self {
            label,
            attrs,
            on_click,
            layout_class,
        } = self;
        let mut el = html::button()
            .attr("type", "button")
            .attr("class", merge_layout_class("ui-button", layout_class))
            .attr("data-ui-primitive", "true")
            .attr("data-ui-kind", "dialog-trigger");
        for (name, value) in attrs {
            el = el.attr(name, value);
        }
        if let Some(on_click) = on_click {
            el = el.on(ev::click, move |ev| on_click.call(ev));
        }
        el.child(label).into_view()
    }
}

/// The trigger's attribute map augmented for dialog control. Pre-existing
/// `aria-haspopup` / `aria-controls` entries are overwritten, never merged.
fn augment_trigger_attrs(
    attrs: &BTreeMap<String, String>,
    dialog_id: &str,
) -> BTreeMap<String, String> {
    let mut augmented = attrs.clone();
    augmented.insert("aria-haspopup".to_string(), "true".to_string());
    augmented.insert("aria-controls".to_string(), dialog_id.to_string());
    augmented
}

/// Caller-supplied ids are used verbatim; empty means "generate one".
fn resolve_dialog_id(id: String, generated: String) -> String {
    if id.is_empty() {
        generated
    } else {
        id
    }
}

/// Runs the hook with the raw action when supplied, otherwise performs the
/// transition immediately.
fn dispatch_toggle(hook: Option<Callback<DialogToggleAction>>, action: DialogToggleAction) {
    match hook {
        Some(hook) => hook.call(action),
        None => action.call(()),
    }
}

fn render_trigger(
    trigger: DialogTrigger,
    dialog_id: &str,
    on_open: Callback<MouseEvent>,
) -> HtmlElement<html::Button> {
    let DialogTrigger {
        label,
        attrs,
        layout_class,
        ..
    } = trigger;
    let mut el = html::button()
        .attr("type", "button")
        .attr("class", merge_layout_class("ui-button", layout_class))
        .attr("data-ui-primitive", "true")
        .attr("data-ui-kind", "dialog-trigger");
    for (name, value) in augment_trigger_attrs(&attrs, dialog_id) {
        el = el.attr(name, value);
    }
    el.on(ev::click, move |ev| on_open.call(ev)).child(label)
}

#[component]
/// Shared action dialog surface: header with title and close icon, body
/// content, and a footer with close and primary action buttons.
///
/// Visibility is controlled: the dialog never owns its own open flag and
/// routes every close request (backdrop, close icon, close button) through
/// `on_click_close`. Focus trapping and scroll locking belong to the host
/// shell.
pub fn ActionDialog(
    /// Dialog heading shown in the header.
    #[prop(into)]
    title: String,
    /// Label for the primary action button.
    #[prop(into)]
    action_text: String,
    /// Called when the primary action button is activated; the dialog then
    /// issues a close request.
    #[prop(optional)]
    on_click_action: Option<Callback<MouseEvent>>,
    /// Called for every close request.
    #[prop(optional)]
    on_click_close: Option<Callback<MouseEvent>>,
    /// Controlled visibility flag.
    #[prop(optional, into)]
    open: MaybeSignal<bool>,
    /// DOM identifier linking the dialog to its trigger. Empty means none.
    #[prop(optional, into)]
    id: String,
    /// Label for the secondary close button. Defaults to "Cancel".
    #[prop(optional, into)]
    close_text: String,
    /// Layout-only class hook for host-specific placement.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    /// Dialog body content.
    children: Children,
) -> impl IntoView {
    let section_id = (!id.is_empty()).then_some(id);
    let title_id = section_id.as_ref().map(|id| format!("{id}-title"));
    let close_label = if close_text.is_empty() {
        "Cancel".to_string()
    } else {
        close_text
    };

    let request_close = Callback::new(move |ev: MouseEvent| {
        if let Some(on_click_close) = on_click_close.as_ref() {
            on_click_close.call(ev);
        }
    });
    let run_action = Callback::new(move |ev: MouseEvent| {
        if let Some(on_click_action) = on_click_action.as_ref() {
            on_click_action.call(ev.clone());
        }
        request_close.call(ev);
    });

    view! {
        <div
            class=merge_layout_class("ui-dialog-layer", layout_class)
            hidden=move || !open.get()
            data-ui-primitive="true"
            data-ui-kind="dialog-layer"
            data-ui-state=move || if open.get() { "open" } else { "closed" }
        >
            <div class="ui-dialog-backdrop" on:click=move |ev| request_close.call(ev)></div>
            <section
                class="ui-dialog"
                role="dialog"
                aria-modal="true"
                id=section_id
                aria-labelledby=title_id.clone()
                on:click=|ev| ev.stop_propagation()
            >
                <header class="ui-dialog-header">
                    <h2 class="ui-dialog-title" id=title_id>
                        {title}
                    </h2>
                    <button
                        type="button"
                        class="ui-dialog-close"
                        data-ui-primitive="true"
                        data-ui-kind="icon-button"
                        aria-label="Close"
                        on:click=move |ev| request_close.call(ev)
                    >
                        <Icon icon=IconName::Dismiss/>
                    </button>
                </header>
                <div class="ui-dialog-body">{children()}</div>
                <footer class="ui-dialog-footer">
                    <button
                        type="button"
                        class="ui-button"
                        data-ui-primitive="true"
                        data-ui-kind="button"
                        data-ui-variant="secondary"
                        on:click=move |ev| request_close.call(ev)
                    >
                        {close_label}
                    </button>
                    <button
                        type="button"
                        class="ui-button"
                        data-ui-primitive="true"
                        data-ui-kind="button"
                        data-ui-variant="primary"
                        on:click=move |ev| run_action.call(ev)
                    >
                        {action_text}
                    </button>
                </footer>
            </section>
        </div>
    }
}

#[component]
/// An [`ActionDialog`] bound to a rendered trigger element.
///
/// The composite owns the open/closed flag exclusively. The trigger is
/// rebuilt from its descriptor with the open operation in the click slot,
/// `aria-haspopup="true"`, and `aria-controls` pointing at the dialog id
/// (caller-supplied, or allocated once for the component's lifetime). The
/// optional hooks receive the raw open/close action and decide whether and
/// when to invoke it; without a hook the transition runs immediately.
pub fn ActionDialogWithTrigger(
    /// Descriptor for the clickable element that opens the dialog.
    trigger: DialogTrigger,
    /// Dialog heading shown in the header.
    #[prop(into)]
    title: String,
    /// Label for the primary action button.
    #[prop(into)]
    action_text: String,
    /// Called when the primary action button is activated.
    #[prop(optional)]
    on_click_action: Option<Callback<MouseEvent>>,
    /// Explicit dialog identifier; generated when empty.
    #[prop(optional, into)]
    id: String,
    /// Label for the secondary close button. Defaults to "Cancel".
    #[prop(optional, into)]
    close_text: String,
    /// Hook receiving the raw open action when the trigger is activated.
    #[prop(optional)]
    on_click_trigger: Option<Callback<DialogToggleAction>>,
    /// Hook receiving the raw close action when the dialog requests closing.
    #[prop(optional)]
    on_click_close: Option<Callback<DialogToggleAction>>,
    /// Layout-only class hook for host-specific placement.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    /// Dialog body content.
    children: Children,
) -> impl IntoView {
    let dialog_id = resolve_dialog_id(id, use_widget_id("ui-dialog"));
    let (is_open, set_is_open) = create_signal(false);

    let open_action: DialogToggleAction = Callback::new(move |_| set_is_open.set(true));
    let close_action: DialogToggleAction = Callback::new(move |_| set_is_open.set(false));
    let on_open = Callback::new(move |_ev: MouseEvent| dispatch_toggle(on_click_trigger, open_action));
    let on_close = Callback::new(move |_ev: MouseEvent| dispatch_toggle(on_click_close, close_action));
    let forwarded_action = Callback::new(move |ev: MouseEvent| {
        if let Some(on_click_action) = on_click_action.as_ref() {
            on_click_action.call(ev);
        }
    });

    let trigger_el = render_trigger(trigger, &dialog_id, on_open);

    view! {
        {trigger_el}
        <ActionDialog
            open=is_open
            id=dialog_id
            title=title
            action_text=action_text
            on_click_action=forwarded_action
            close_text=close_text
            on_click_close=on_close
            layout_class=layout_class.unwrap_or_default()
        >
            {children()}
        </ActionDialog>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn supplied_ids_are_used_verbatim() {
        assert_eq!(
            resolve_dialog_id("profile-dialog".to_string(), "ui-dialog-1".to_string()),
            "profile-dialog"
        );
        assert_eq!(
            resolve_dialog_id(String::new(), "ui-dialog-1".to_string()),
            "ui-dialog-1"
        );
    }

    #[test]
    fn trigger_controls_reference_always_matches_the_dialog_id() {
        let attrs = BTreeMap::from([
            ("data-test".to_string(), "keep-me".to_string()),
            ("aria-haspopup".to_string(), "menu".to_string()),
            ("aria-controls".to_string(), "stale-id".to_string()),
        ]);

        let augmented = augment_trigger_attrs(&attrs, "ui-dialog-7");

        assert_eq!(augmented.get("aria-controls"), Some(&"ui-dialog-7".to_string()));
        assert_eq!(augmented.get("aria-haspopup"), Some(&"true".to_string()));
        assert_eq!(augmented.get("data-test"), Some(&"keep-me".to_string()));
        // Original descriptor untouched.
        assert_eq!(attrs.get("aria-controls"), Some(&"stale-id".to_string()));
    }

    #[test]
    fn activation_without_a_hook_opens_synchronously() {
        let runtime = create_runtime();

        let (is_open, set_is_open) = create_signal(false);
        let open: DialogToggleAction = Callback::new(move |_| set_is_open.set(true));
        dispatch_toggle(None, open);
        assert_eq!(is_open.get_untracked(), true);

        runtime.dispose();
    }

    #[test]
    fn an_open_hook_defers_the_transition_until_it_invokes_the_action() {
        let runtime = create_runtime();

        let (is_open, set_is_open) = create_signal(false);
        let open: DialogToggleAction = Callback::new(move |_| set_is_open.set(true));
        let captured: Rc<RefCell<Option<DialogToggleAction>>> = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&captured);
        let hook = Callback::new(move |action| {
            *slot.borrow_mut() = Some(action);
        });

        dispatch_toggle(Some(hook), open);
        assert_eq!(is_open.get_untracked(), false);

        let action = captured.borrow_mut().take().expect("hook received the open action");
        action.call(());
        assert_eq!(is_open.get_untracked(), true);

        runtime.dispose();
    }

    #[test]
    fn close_dispatch_mirrors_open_dispatch() {
        let runtime = create_runtime();

        let (is_open, set_is_open) = create_signal(true);
        let close: DialogToggleAction = Callback::new(move |_| set_is_open.set(false));

        dispatch_toggle(None, close);
        assert_eq!(is_open.get_untracked(), false);

        set_is_open.set(true);
        let captured: Rc<RefCell<Option<DialogToggleAction>>> = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&captured);
        dispatch_toggle(
            Some(Callback::new(move |action| {
                *slot.borrow_mut() = Some(action);
            })),
            close,
        );
        assert_eq!(is_open.get_untracked(), true);

        let action = captured.borrow_mut().take().expect("hook received the close action");
        action.call(());
        assert_eq!(is_open.get_untracked(), false);

        runtime.dispose();
    }
}
