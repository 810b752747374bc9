use log::debug;
use shared::display::{capitalize, Tone};
use shared::{Period, Snapshot};
use yew::prelude::*;

use crate::components::charts::{BarChart, LineChart};
use crate::components::metric_card::MetricCard;
use crate::components::notice::Notice;

#[function_component(Analytics)]
pub fn analytics() -> Html {
    let period = use_state(Period::default);

    let snapshot = match Snapshot::shared() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            return html! { <Notice tone={Tone::Danger} message={e.to_string()} /> };
        }
    };

    let period_buttons = Period::ALL.iter().map(|option| {
        let selected = *option == *period;
        let onclick = {
            let period = period.clone();
            let option = *option;
            Callback::from(move |_: MouseEvent| {
                debug!("Analytics period set to {}", option.as_str());
                period.set(option);
            })
        };
        html! {
            <button
                key={option.as_str()}
                {onclick}
                class={classes!(
                    "px-4", "py-2", "text-sm", "font-medium", "rounded-lg", "transition-colors",
                    if selected {
                        classes!("bg-blue-600", "text-white")
                    } else {
                        classes!("text-gray-700", "dark:text-gray-300", "hover:bg-gray-100", "dark:hover:bg-gray-800")
                    }
                )}
            >
                {capitalize(option.as_str())}
            </button>
        }
    });

    html! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <p class="text-gray-600 dark:text-gray-400">{"Detailed performance for the selected period"}</p>
                <div class="flex gap-1 bg-white dark:bg-gray-900 border border-gray-200 dark:border-gray-700 rounded-lg p-1">
                    {for period_buttons}
                </div>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {for snapshot.key_metrics.iter().map(|metric| html! {
                    <MetricCard
                        key={metric.title.clone()}
                        label={metric.title.clone()}
                        value={metric.value.clone()}
                        change={metric.change.clone()}
                    />
                })}
            </div>
            <section class="bg-white dark:bg-gray-900 rounded-lg border border-gray-200 dark:border-gray-700 p-6">
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">{"Revenue Over Time"}</h2>
                <LineChart points={snapshot.charts.revenue.clone()} />
            </section>
            <section class="bg-white dark:bg-gray-900 rounded-lg border border-gray-200 dark:border-gray-700 p-6">
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">{"Active vs Inactive Users"}</h2>
                <BarChart points={snapshot.charts.users.clone()} />
            </section>
        </div>
    }
}
