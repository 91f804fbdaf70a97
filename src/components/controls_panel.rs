use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub running: bool,
    pub on_start: Callback<()>,
    pub on_open_settings: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let start_cb = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let settings_cb = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let start_label = if props.running { "Restart" } else { "Start" };
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:160px; display:flex; flex-direction:column; gap:6px;">
        <button id="start" onclick={start_cb}>{ start_label }</button>
        <button onclick={settings_cb} disabled={props.running}>{"Settings"}</button>
        <div style="font-size:11px; opacity:0.7;">{"Hotkey: Enter starts a round"}</div>
    </div>}
}
