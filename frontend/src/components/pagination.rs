use log::warn;
use shared::query::{PageInfo, PageSize};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub info: PageInfo,
    pub on_page: Callback<usize>,
    pub on_page_size: Callback<PageSize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let info = props.info;

    let on_size_change = {
        let on_page_size = props.on_page_size.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<usize>().map(PageSize::try_from) {
                Ok(Ok(size)) => on_page_size.emit(size),
                _ => warn!("Ignoring page size '{}'", select.value()),
            }
        })
    };

    let button = classes!(
        "px-3", "py-1", "rounded", "border", "border-gray-300", "dark:border-gray-600",
        "text-sm", "disabled:opacity-50", "disabled:cursor-not-allowed"
    );

    html! {
        <div class="flex flex-col sm:flex-row items-center justify-between gap-4 px-6 py-4 border-t border-gray-200 dark:border-gray-700">
            <div class="flex items-center gap-2 text-sm text-gray-600 dark:text-gray-400">
                <span>{"Rows per page:"}</span>
                <select
                    class="px-2 py-1 border border-gray-300 dark:border-gray-600 rounded bg-white dark:bg-gray-800"
                    onchange={on_size_change}
                >
                    {for PageSize::ALLOWED.iter().map(|size| html! {
                        <option value={size.to_string()} selected={*size == info.page_size}>
                            {size.to_string()}
                        </option>
                    })}
                </select>
                <span class="ml-4">{info.range_label()}</span>
            </div>
            <div class="flex items-center gap-1">
                <button
                    class={button.clone()}
                    disabled={!info.has_previous()}
                    onclick={props.on_page.reform(move |_| info.page - 1)}
                >
                    {"Previous"}
                </button>
                {for info.page_numbers().map(|number| {
                    let current = number == info.page;
                    html! {
                        <button
                            key={number}
                            class={classes!(
                                "px-3", "py-1", "rounded", "text-sm",
                                if current {
                                    classes!("bg-blue-600", "text-white")
                                } else {
                                    classes!("hover:bg-gray-100", "dark:hover:bg-gray-700")
                                }
                            )}
                            onclick={props.on_page.reform(move |_| number)}
                        >
                            {number}
                        </button>
                    }
                })}
                <button
                    class={button}
                    disabled={!info.has_next()}
                    onclick={props.on_page.reform(move |_| info.page + 1)}
                >
                    {"Next"}
                </button>
            </div>
        </div>
    }
}
