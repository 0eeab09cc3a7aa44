use leptos::prelude::*;

/// Password input with a show/hide toggle
#[component]
pub fn PasswordField(
    id: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="input-wrap">
            <span class="input-icon">"🔒"</span>
            <input
                id=id
                class="input with-icon"
                placeholder=placeholder
                autocomplete="off"
                type=move || if visible.get() { "text" } else { "password" }
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <button
                type="button"
                class="input-toggle"
                aria-label="Tampilkan password"
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                {move || if visible.get() { "🙈" } else { "👁️" }}
            </button>
        </div>
    }
}
