//! Button with variant styling, optional full width, and a loading spinner.

use leptos::prelude::*;

#[component]
pub fn Button(
    #[prop(default = "primary")] variant: &'static str,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = move || {
        let mut class = format!("btn btn--{variant}");
        if full_width {
            class.push_str(" btn--full");
        }
        if loading.get() {
            class.push_str(" btn--loading");
        }
        class
    };

    view! {
        <button
            type=button_type
            class=class
            disabled=move || disabled.get() || loading.get()
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {move || {
                loading
                    .get()
                    .then(|| view! { <span class="btn__spinner" aria-hidden="true"></span> })
            }}
            {children()}
        </button>
    }
}
