use shared::display::capitalize;
use shared::query::{FilterField, FilterInput, FilterValues};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub fields: &'static [FilterField],
    pub values: FilterValues,
    /// Emits `(key, value)`; an empty value clears the filter.
    pub on_change: Callback<(String, String)>,
    pub on_reset: Callback<()>,
}

const CONTROL: &str = "w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:ring-2 focus:ring-blue-500";

fn render_control(field: &FilterField, value: &str, on_change: &Callback<(String, String)>) -> Html {
    let key = field.key;
    match field.input {
        FilterInput::Select { options } => {
            let onchange = on_change.reform(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                (key.to_string(), select.value())
            });
            html! {
                <select id={key} class={CONTROL} {onchange}>
                    <option value="" selected={value.is_empty()}>{"All"}</option>
                    {for options.iter().map(|option| html! {
                        <option value={*option} selected={value == *option}>{capitalize(option)}</option>
                    })}
                </select>
            }
        }
        FilterInput::Text { placeholder } => {
            let oninput = on_change.reform(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                (key.to_string(), input.value())
            });
            html! {
                <input
                    id={key}
                    type="text"
                    class={CONTROL}
                    {placeholder}
                    value={value.to_string()}
                    {oninput}
                />
            }
        }
    }
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let active = props.values.active_count();

    html! {
        <div class="bg-white dark:bg-gray-900 rounded-lg border border-gray-200 dark:border-gray-700 p-4">
            <div class="flex items-center justify-between mb-3">
                <h3 class="text-sm font-medium text-gray-700 dark:text-gray-300">
                    {"Filters"}
                    if active > 0 {
                        <span class="ml-2 inline-flex items-center justify-center rounded-full bg-blue-600 text-white text-xs w-5 h-5">
                            {active}
                        </span>
                    }
                </h3>
                <button
                    class="text-sm text-blue-600 hover:text-blue-700 disabled:opacity-50"
                    disabled={active == 0}
                    onclick={props.on_reset.reform(|_| ())}
                >
                    {"Reset filters"}
                </button>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {for props.fields.iter().map(|field| html! {
                    <div key={field.key}>
                        <label for={field.key} class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                            {field.label}
                        </label>
                        {render_control(field, props.values.get(field.key), &props.on_change)}
                    </div>
                })}
            </div>
        </div>
    }
}
