use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct PointerPosition {
    x: i32,
    y: i32,
}

/// Decorative element mirroring the pointer; transparent while the pointer is
/// outside the viewport. One update per pointer-move event, no throttling.
#[component]
pub(super) fn CursorGlow() -> impl IntoView {
    let position = create_rw_signal(PointerPosition::default());
    let visible = create_rw_signal(true);

    let move_listener = window_event_listener(ev::mousemove, move |ev| {
        position.set(PointerPosition {
            x: ev.client_x(),
            y: ev.client_y(),
        });
    });
    on_cleanup(move || move_listener.remove());

    let leave_listener = window_event_listener(ev::mouseleave, move |_| visible.set(false));
    on_cleanup(move || leave_listener.remove());

    let enter_listener = window_event_listener(ev::mouseenter, move |_| visible.set(true));
    on_cleanup(move || enter_listener.remove());

    view! {
        <div
            class="cursor-animation"
            aria-hidden="true"
            style=move || {
                let point = position.get();
                let opacity = if visible.get() { "1" } else { "0" };
                format!("left:{}px;top:{}px;opacity:{opacity};", point.x, point.y)
            }
        ></div>
    }
}
