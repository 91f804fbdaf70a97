use crate::model::{Difficulty, GameConfig, MAX_DURATION_SECS, MIN_DURATION_SECS};
use log::warn;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub config: GameConfig,
    pub on_save: Callback<GameConfig>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    let draft = use_state(|| props.config);
    let error = use_state(|| None::<String>);

    // Re-seed the draft whenever the modal is reopened
    {
        let draft = draft.clone();
        let error = error.clone();
        let config = props.config;
        use_effect_with((props.show, config), move |_| {
            draft.set(config);
            error.set(None);
            || ()
        });
    }

    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let difficulty_cb = {
        let draft = draft.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            match select.value().parse::<Difficulty>() {
                Ok(difficulty) => draft.set(GameConfig { difficulty, ..*draft }),
                Err(err) => {
                    warn!("{err}");
                    error.set(Some(err.to_string()));
                }
            }
        })
    };
    let duration_cb = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            // empty or non-numeric input is caught by validate() on save
            let duration_secs = input.value().trim().parse::<u32>().unwrap_or(0);
            draft.set(GameConfig { duration_secs, ..*draft });
        })
    };
    let save_cb = {
        let draft = draft.clone();
        let error = error.clone();
        let cb = props.on_save.clone();
        Callback::from(move |_| match draft.validate() {
            Ok(cfg) => cb.emit(cfg),
            Err(err) => error.set(Some(err.to_string())),
        })
    };

    let options = Difficulty::ALL.iter().map(|d| {
        html! { <option value={d.label()} selected={*d == draft.difficulty}>{ d.label() }</option> }
    });

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:320px; max-width:420px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px;">
                    <span style="flex:1;">{"Difficulty"}</span>
                    <select onchange={difficulty_cb}>{ for options }</select>
                </label>
                <label style="display:flex; align-items:center; gap:8px;">
                    <span style="flex:1;">{ format!("Round length ({}-{}s)", MIN_DURATION_SECS, MAX_DURATION_SECS) }</span>
                    <input type="number" min={MIN_DURATION_SECS.to_string()} max={MAX_DURATION_SECS.to_string()}
                        value={draft.duration_secs.to_string()} onchange={duration_cb} style="width:64px;" />
                </label>
            </div>
            { if let Some(msg) = &*error {
                html!{ <div style="font-size:12px; color:#f85149;">{ msg.clone() }</div> }
            } else { html!{} } }
            <div style="display:flex; gap:8px;">
                <button onclick={save_cb} style="flex:1;">{"Save"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Cancel"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Easy moles stay 1.5s, normal 1s, hard between 0.6s and 1.2s."}</div>
        </div>
    </div>}
}
