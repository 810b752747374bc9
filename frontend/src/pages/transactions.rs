use shared::display::{Tone, TRANSACTION_COLUMNS};
use shared::{Snapshot, Transaction, TRANSACTION_FILTERS};
use yew::prelude::*;

use crate::components::notice::Notice;
use crate::components::record_table::RecordTable;
use crate::config::ConfigContext;

#[function_component(Transactions)]
pub fn transactions() -> Html {
    let config = use_context::<ConfigContext>().expect("Config context not found");

    match Snapshot::shared() {
        Ok(snapshot) => html! {
            <div class="space-y-4">
                <p class="text-gray-600 dark:text-gray-400">{"View and manage all transactions"}</p>
                <RecordTable<Transaction>
                    records={snapshot.transactions.as_slice()}
                    columns={TRANSACTION_COLUMNS}
                    filters={TRANSACTION_FILTERS}
                    page_size={config.default_page_size}
                />
            </div>
        },
        Err(e) => html! { <Notice tone={Tone::Danger} message={e.to_string()} /> },
    }
}
