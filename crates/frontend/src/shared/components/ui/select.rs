use leptos::prelude::*;

/// Select с группами опций (`<optgroup>`), двухуровневый выбор.
///
/// Значение опции совпадает с её подписью. Пустое значение — плейсхолдер.
#[component]
pub fn GroupedSelect(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    on_change: Callback<String>,
    /// Groups: Vec of (group label, option values)
    #[prop(into)]
    groups: Signal<Vec<(String, Vec<String>)>>,
    /// Text of the empty option
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(into)]
    disabled: Signal<bool>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                prop:disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" disabled=true prop:selected=move || value.get().is_empty()>
                    {move || placeholder.get().unwrap_or_default()}
                </option>
                {move || {
                    groups
                        .get()
                        .into_iter()
                        .map(|(group, options)| {
                            view! {
                                <optgroup label=group>
                                    {options
                                        .into_iter()
                                        .map(|option| {
                                            let option_value = option.clone();
                                            let is_selected = move || value.get() == option_value;
                                            let option_label = option.clone();
                                            view! {
                                                <option value=option prop:selected=is_selected>
                                                    {option_label}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </optgroup>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
