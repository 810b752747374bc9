use shared::display::{Tone, USER_COLUMNS};
use shared::{Snapshot, User, USER_FILTERS};
use yew::prelude::*;

use crate::components::notice::Notice;
use crate::components::record_table::RecordTable;
use crate::config::ConfigContext;

#[function_component(Users)]
pub fn users() -> Html {
    let config = use_context::<ConfigContext>().expect("Config context not found");

    match Snapshot::shared() {
        Ok(snapshot) => html! {
            <div class="space-y-4">
                <p class="text-gray-600 dark:text-gray-400">{"Manage customer accounts"}</p>
                <RecordTable<User>
                    records={snapshot.users.as_slice()}
                    columns={USER_COLUMNS}
                    filters={USER_FILTERS}
                    page_size={config.default_page_size}
                />
            </div>
        },
        Err(e) => html! { <Notice tone={Tone::Danger} message={e.to_string()} /> },
    }
}
