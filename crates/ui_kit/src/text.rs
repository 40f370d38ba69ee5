//! Screen-reader-only text.

use leptos::*;

#[component]
/// Text that is clipped from the visual layout but announced by assistive
/// technology. Used for icon alt content and similar off-screen labels.
pub fn VisuallyHiddenText(children: Children) -> impl IntoView {
    view! {
        <span
            class="ui-visually-hidden"
            style="position: absolute; width: 1px; height: 1px; margin: -1px; padding: 0; border: 0; overflow: hidden; clip: rect(0 0 0 0); white-space: nowrap;"
            data-ui-primitive="true"
            data-ui-kind="visually-hidden"
        >
            {children()}
        </span>
    }
}
