use shared::display::{Cell, Column, TextStyle, Tone};
use shared::Record;
use yew::prelude::*;

/// One rendered table row, keyed by record id.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub key: String,
    pub cells: Vec<Cell>,
}

/// Formats every column of every record.
pub fn table_rows<R: Record>(columns: &[Column], records: &[R]) -> Vec<TableRow> {
    records
        .iter()
        .map(|record| TableRow {
            key: record.id().to_string(),
            cells: columns.iter().map(|column| column.render(record)).collect(),
        })
        .collect()
}

pub fn tone_classes(tone: Tone) -> Classes {
    match tone {
        Tone::Success => classes!("bg-green-100", "text-green-800", "border-green-200"),
        Tone::Warning => classes!("bg-yellow-100", "text-yellow-800", "border-yellow-200"),
        Tone::Danger => classes!("bg-red-100", "text-red-800", "border-red-200"),
        Tone::Info => classes!("bg-blue-100", "text-blue-800", "border-blue-200"),
        Tone::Neutral => classes!("bg-gray-100", "text-gray-800", "border-gray-200"),
    }
}

fn render_cell(cell: &Cell) -> Html {
    match cell {
        Cell::Plain { text, style } => {
            let class = match style {
                TextStyle::Normal => classes!("text-gray-700", "dark:text-gray-300"),
                TextStyle::Strong => classes!("font-medium", "text-gray-900", "dark:text-white"),
                TextStyle::Code => classes!("font-mono", "text-sm", "text-gray-900", "dark:text-white"),
                TextStyle::Muted => classes!("text-sm", "text-gray-500", "dark:text-gray-400"),
            };
            html! { <span class={class}>{text}</span> }
        }
        Cell::Badge { label, tone } => html! {
            <span class={classes!(
                "inline-flex", "items-center", "px-2.5", "py-0.5", "rounded-full",
                "text-xs", "font-medium", "border", tone_classes(*tone)
            )}>
                {label}
            </span>
        },
        Cell::Pill { label, tone } => {
            let tint = match tone {
                Some(tone) => tone_classes(*tone),
                None => classes!("bg-gray-100", "text-gray-700"),
            };
            html! {
                <span class={classes!("px-2", "py-1", "rounded", "text-xs", "font-medium", tint)}>
                    {label}
                </span>
            }
        }
        Cell::Link { href, label } => html! {
            <a href={href.clone()} class="text-blue-600 hover:text-blue-700 dark:text-blue-400">
                {label}
            </a>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct DataTableProps {
    pub columns: &'static [Column],
    pub rows: Vec<TableRow>,
    #[prop_or(AttrValue::Static("No data available"))]
    pub empty_message: AttrValue,
}

#[function_component(DataTable)]
pub fn data_table(props: &DataTableProps) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class="w-full">
                <thead class="bg-gray-50 dark:bg-gray-800">
                    <tr>
                        {for props.columns.iter().map(|column| html! {
                            <th key={column.key} class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                {column.label}
                            </th>
                        })}
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                    if props.rows.is_empty() {
                        <tr>
                            <td colspan={props.columns.len().to_string()} class="px-6 py-12 text-center text-gray-500 dark:text-gray-400">
                                {props.empty_message.clone()}
                            </td>
                        </tr>
                    } else {
                        {for props.rows.iter().map(|row| html! {
                            <tr key={row.key.clone()} class="hover:bg-gray-50 dark:hover:bg-gray-800 transition-colors">
                                {for row.cells.iter().map(|cell| html! {
                                    <td class="px-6 py-4 whitespace-nowrap">{render_cell(cell)}</td>
                                })}
                            </tr>
                        })}
                    }
                </tbody>
            </table>
        </div>
    }
}
