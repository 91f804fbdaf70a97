use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    pub show: bool,
    pub score: u32,
    pub duration_secs: u32,
    pub restart: Callback<()>,
}

#[function_component]
pub fn GameOverOverlay(props: &GameOverOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |_| restart_cb.emit(()));
    html! {
        <div style="position:absolute; left:50%; bottom:32px; transform:translateX(-50%); background:rgba(0,0,0,0.85); border:2px solid #f85149; padding:18px 28px; border-radius:12px; text-align:center; min-width:280px;">
            <h2 style="margin:0 0 12px 0; color:#f85149;">{"Time's Up"}</h2>
            <p style="margin:4px 0;">{ format!("Score: {}", props.score) }</p>
            <p style="margin:4px 0; opacity:0.7;">{ format!("Round length: {}s", props.duration_secs) }</p>
            <div style="margin-top:16px; display:flex; gap:12px; justify-content:center;">
                <button onclick={restart_btn}>{"Play Again"}</button>
            </div>
        </div>
    }
}
