use shared::Trend;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub change: AttrValue,
    /// Without a trend the change is shown in neutral green.
    #[prop_or_default]
    pub trend: Option<Trend>,
}

#[function_component(MetricCard)]
pub fn metric_card(props: &MetricCardProps) -> Html {
    let (arrow, tint) = match props.trend {
        Some(Trend::Down) => ("↓", classes!("text-red-600", "dark:text-red-400")),
        Some(Trend::Up) => ("↑", classes!("text-green-600", "dark:text-green-400")),
        None => ("", classes!("text-green-600", "dark:text-green-400")),
    };

    html! {
        <div class="bg-white dark:bg-gray-900 rounded-lg border border-gray-200 dark:border-gray-700 p-6">
            <p class="text-sm font-medium text-gray-600 dark:text-gray-400">{props.label.clone()}</p>
            <p class="mt-2 text-3xl font-bold text-gray-900 dark:text-white">{props.value.clone()}</p>
            <p class={classes!("mt-2", "text-sm", "font-medium", tint)}>
                {arrow}{" "}{props.change.clone()}
                <span class="ml-1 text-gray-500 dark:text-gray-400 font-normal">{"vs last month"}</span>
            </p>
        </div>
    }
}
