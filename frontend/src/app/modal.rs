use leptos::{
    component, create_effect, create_node_ref, ev::MouseEvent, html::Dialog, logging::warn, view,
    Fragment, IntoView, Signal, SignalGet,
};

#[component]
pub fn Modal<C>(
    /// A signal that determines whether the modal is currently open.
    #[prop(into)]
    open: Signal<bool>,
    /// A callback to be called when the modal is closed.
    on_close: C,
    /// Content of the modal.
    children: impl FnOnce() -> Fragment + 'static,
) -> impl IntoView
where
    C: Fn() + Clone + 'static,
{
    let dialog_el = create_node_ref::<Dialog>();

    // clicking on ::backdrop lands outside the dialog's box
    let on_click = move |ev: MouseEvent| {
        let Some(dialog) = dialog_el.get() else {
            return;
        };
        let rect = dialog.get_bounding_client_rect();
        let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        let click_is_in_dialog = rect.top() <= y
            && y <= rect.top() + rect.height()
            && rect.left() <= x
            && x <= rect.left() + rect.width();
        if !click_is_in_dialog {
            dialog.close();
        }
    };

    create_effect(move |_| {
        if let Some(dialog) = dialog_el.get() {
            if open.get() {
                if dialog.show_modal().is_err() {
                    warn!("<Modal/> error while calling HTMLDialogElement.showModal()");
                    dialog.set_open(true);
                }
            } else {
                dialog.close();
            }
        }
    });

    view! {
        <dialog
            node_ref=dialog_el
            // call the on_close callback when the close event fires
            on:close={
                let on_close = on_close.clone();
                move |_| (on_close.clone())()
            }
            on:click=on_click
        >
            <main class="Modal-content">{children()}</main>
            <form method="dialog" on:submit=move |_| (on_close.clone())()>
                <button class="Modal-header-close" aria-label="Close">
                    "Close"
                </button>
            </form>
        </dialog>
    }
}
