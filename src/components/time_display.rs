use crate::util::format_time;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TimeDisplayProps {
    pub remaining_secs: u32,
    pub running: bool,
}

#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    // last seconds in red while the round is live
    let color = if props.running && props.remaining_secs <= 3 { "#f85149" } else { "#e6edf3" };
    html! {<div style="position:absolute; top:12px; left:50%; transform:translateX(-50%); display:flex; flex-direction:column; align-items:center; gap:6px;">
        <div style="font-size:12px; opacity:0.7;">{"Time left"}</div>
        <div id="timer" style={format!("font-size:20px; font-weight:600; color:{};", color)}>{ format_time(props.remaining_secs) }</div>
    </div>}
}
