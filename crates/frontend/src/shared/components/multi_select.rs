use crate::shared::icons::icon;
use leptos::prelude::*;

/// Text on the closed control
fn selection_summary(selected: &[String]) -> String {
    match selected {
        [] => "All".to_string(),
        [only] => only.clone(),
        many => format!("{} selected", many.len()),
    }
}

/// Dropdown of checkboxes; an empty selection means no filtering
#[component]
pub fn MultiSelect(
    #[prop(into)]
    label: String,

    #[prop(into)]
    options: Signal<Vec<String>>,

    #[prop(into)]
    selected: Signal<Vec<String>>,

    on_toggle: Callback<String>,

    on_clear: Callback<()>,
) -> impl IntoView {
    let is_open = RwSignal::new(false);

    view! {
        <div class="multi-select">
            <span class="multi-select__label">{label}</span>
            <button
                class=move || {
                    if selected.with(|s| s.is_empty()) {
                        "multi-select__trigger"
                    } else {
                        "multi-select__trigger multi-select__trigger--active"
                    }
                }
                on:click=move |_| is_open.update(|o| *o = !*o)
            >
                <span>{move || selected.with(|s| selection_summary(s))}</span>
                {icon("chevron-down")}
            </button>

            <Show when=move || is_open.get()>
                <div class="multi-select__menu">
                    <button
                        class="multi-select__clear"
                        disabled=move || selected.with(|s| s.is_empty())
                        on:click=move |_| on_clear.run(())
                    >
                        "Clear"
                    </button>
                    {move || options.get().into_iter().map(|option| {
                        let value = option.clone();
                        let checked = option.clone();
                        view! {
                            <label class="multi-select__option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || selected.with(|s| s.contains(&checked))
                                    on:change=move |_| on_toggle.run(value.clone())
                                />
                                <span>{option}</span>
                            </label>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
