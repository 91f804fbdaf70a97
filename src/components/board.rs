use crate::model::{BOARD_COLUMNS, TARGET_COUNT};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardProps {
    /// Slot whose mole is up, if any.
    pub active: Option<usize>,
    pub on_whack: Callback<usize>,
}

#[function_component]
pub fn Board(props: &BoardProps) -> Html {
    let grid_style = format!(
        "position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); display:grid; grid-template-columns:repeat({}, 120px); gap:18px;",
        BOARD_COLUMNS
    );
    let holes = (0..TARGET_COUNT).map(|slot| {
        let shown = props.active == Some(slot);
        // any hole click counts, shown or not
        let onclick = {
            let cb = props.on_whack.clone();
            Callback::from(move |_: MouseEvent| cb.emit(slot))
        };
        let mole_offset = if shown { "10%" } else { "100%" };
        html! {
            <div key={slot} class={classes!("hole", shown.then_some("show"))} {onclick}
                style="position:relative; width:120px; height:120px; border-radius:50%; background:#3b2a1a; border:3px solid #20160d; overflow:hidden; cursor:pointer;">
                <div class="mole" style={format!("position:absolute; left:15%; width:70%; height:80%; top:{}; border-radius:45% 45% 10% 10%; background:#8b5a2b; transition:top 0.1s;", mole_offset)}></div>
            </div>
        }
    });
    html! {<div class="grid" style={grid_style}>{ for holes }</div>}
}
