use std::rc::Rc;

use log::debug;
use shared::display::Column;
use shared::query::{FilterField, PageSize, Record, TableAction, TableQuery};
use yew::prelude::*;

use crate::components::data_table::{table_rows, DataTable};
use crate::components::filter_bar::FilterBar;
use crate::components::pagination::Pagination;

/// Filter and page position of a table, driven by [`TableAction`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct TableState(pub TableQuery);

impl Reducible for TableState {
    type Action = TableAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        debug!("table action: {:?}", action);
        Rc::new(TableState(self.0.reduced(action)))
    }
}

#[derive(Properties, PartialEq)]
pub struct RecordTableProps<R: Record + PartialEq + 'static> {
    pub records: &'static [R],
    pub columns: &'static [Column],
    pub filters: &'static [FilterField],
    pub page_size: PageSize,
}

/// Filter bar, data table and pagination over a static record collection.
#[function_component(RecordTable)]
pub fn record_table<R: Record + PartialEq + 'static>(props: &RecordTableProps<R>) -> Html {
    let page_size = props.page_size;
    let state = use_reducer_eq(move || TableState(TableQuery::new(page_size)));

    let page = state.0.run(props.records, props.filters);
    let rows = table_rows(props.columns, &page.items);

    let on_change = {
        let state = state.clone();
        Callback::from(move |(key, value): (String, String)| {
            state.dispatch(TableAction::SetFilter { key, value })
        })
    };
    let on_reset = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(TableAction::ResetFilters))
    };
    let on_page = {
        let state = state.clone();
        Callback::from(move |page: usize| state.dispatch(TableAction::SetPage(page)))
    };
    let on_page_size = {
        let state = state.clone();
        Callback::from(move |size: PageSize| state.dispatch(TableAction::SetPageSize(size)))
    };

    html! {
        <div class="space-y-4">
            <FilterBar
                fields={props.filters}
                values={state.0.filters().clone()}
                {on_change}
                {on_reset}
            />
            <div class="bg-white dark:bg-gray-900 rounded-lg border border-gray-200 dark:border-gray-700 overflow-hidden">
                <DataTable columns={props.columns} {rows} />
                <Pagination info={page.info()} {on_page} {on_page_size} />
            </div>
        </div>
    }
}
