use shared::display::Tone;
use yew::prelude::*;

use crate::components::data_table::tone_classes;

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub tone: Tone,
    pub message: AttrValue,
}

/// Inline banner for errors and confirmations.
#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    html! {
        <div role="alert" class={classes!("px-4", "py-3", "rounded-lg", "border", "text-sm", tone_classes(props.tone))}>
            {props.message.clone()}
        </div>
    }
}
