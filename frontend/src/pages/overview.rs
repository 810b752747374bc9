use shared::display::Tone;
use shared::Snapshot;
use yew::prelude::*;

use crate::components::charts::{BarChart, LineChart};
use crate::components::metric_card::MetricCard;
use crate::components::notice::Notice;

#[function_component(Overview)]
pub fn overview() -> Html {
    let snapshot = match Snapshot::shared() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            return html! { <Notice tone={Tone::Danger} message={e.to_string()} /> };
        }
    };

    html! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {for snapshot.metrics.iter().map(|metric| html! {
                    <MetricCard
                        key={metric.label.clone()}
                        label={metric.label.clone()}
                        value={metric.value.clone()}
                        change={metric.change.clone()}
                        trend={Some(metric.trend)}
                    />
                })}
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <section class="bg-white dark:bg-gray-900 rounded-lg border border-gray-200 dark:border-gray-700 p-6">
                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">{"Revenue Trend"}</h2>
                    <LineChart points={snapshot.charts.revenue.clone()} />
                </section>
                <section class="bg-white dark:bg-gray-900 rounded-lg border border-gray-200 dark:border-gray-700 p-6">
                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">{"User Activity"}</h2>
                    <BarChart points={snapshot.charts.users.clone()} />
                </section>
            </div>
        </div>
    }
}
