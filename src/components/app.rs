use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::{
    board::Board, controls_panel::ControlsPanel, game_over_overlay::GameOverOverlay,
    settings_modal::SettingsModal, stats_panel::StatsPanel, time_display::TimeDisplay,
};
use crate::model::GameConfig;
use crate::state::{BrowserScheduler, BrowserSession, GameSession, JsRandom, Phase};
use crate::storage;

type SharedSession = Rc<RefCell<BrowserSession>>;

// Timer callbacks reach the session through a weak ref so the scheduler it
// owns does not keep it alive.
fn build_session(config: GameConfig, redraw: UseForceUpdateHandle) -> SharedSession {
    Rc::new_cyclic(|weak: &Weak<RefCell<BrowserSession>>| {
        let weak = weak.clone();
        let scheduler = BrowserScheduler::new(move |task| {
            let Some(session) = weak.upgrade() else {
                return;
            };
            session.borrow_mut().handle(task);
            redraw.force_update();
        });
        RefCell::new(GameSession::new(config, scheduler, JsRandom))
    })
}

#[function_component(App)]
pub fn app() -> Html {
    let redraw = use_force_update();
    let session = {
        let redraw = redraw.clone();
        use_state(move || build_session(storage::load_config(), redraw))
    };
    let show_settings = use_state(|| false);
    let settings_open_flag = use_mut_ref(|| false);

    // Mirror for the keydown listener, which outlives this render
    {
        let flag = *show_settings;
        let settings_open_flag = settings_open_flag.clone();
        use_effect_with(flag, move |_| {
            *settings_open_flag.borrow_mut() = flag;
            || ()
        });
    }

    // Cancel all timers on unmount
    {
        let session = (*session).clone();
        use_effect_with((), move |_| move || session.borrow_mut().shutdown());
    }

    // Enter starts a round
    {
        let session = (*session).clone();
        let redraw = redraw.clone();
        let settings_open_flag = settings_open_flag.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().and_then(|window| {
                let key_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.key() == "Enter" && !*settings_open_flag.borrow() {
                        e.prevent_default();
                        session.borrow_mut().start();
                        redraw.force_update();
                    }
                }) as Box<dyn FnMut(_)>);
                window
                    .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
                    .ok()?;
                Some((window, key_cb))
            });
            move || {
                if let Some((window, key_cb)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "keydown",
                        key_cb.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let on_start = {
        let session = (*session).clone();
        let redraw = redraw.clone();
        Callback::from(move |_| {
            session.borrow_mut().start();
            redraw.force_update();
        })
    };
    let on_whack = {
        let session = (*session).clone();
        let redraw = redraw.clone();
        Callback::from(move |slot: usize| {
            if session.borrow_mut().register_hit(slot) {
                redraw.force_update();
            }
        })
    };
    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(true))
    };
    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(false))
    };
    let save_settings = {
        let session = (*session).clone();
        let show_settings = show_settings.clone();
        Callback::from(move |config: GameConfig| {
            session.borrow_mut().apply_config(config);
            if let Err(e) = storage::save_config(&config) {
                warn!("settings not saved: {e}");
            }
            show_settings.set(false);
        })
    };

    let (score, remaining, active, running, phase, difficulty, config) = {
        let s = session.borrow();
        (
            s.score(),
            s.remaining_secs(),
            s.active_target(),
            s.is_running(),
            s.phase(),
            s.difficulty(),
            s.config(),
        )
    };

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; background:#0e1116; color:#e6edf3; font-family:sans-serif;">
            <StatsPanel {score} {difficulty} />
            <TimeDisplay remaining_secs={remaining} {running} />
            <ControlsPanel {running} on_start={on_start.clone()} on_open_settings={open_settings} />
            <Board {active} {on_whack} />
            <GameOverOverlay show={phase == Phase::Stopped} {score} duration_secs={config.duration_secs} restart={on_start} />
            <SettingsModal show={*show_settings} {config} on_save={save_settings} on_close={close_settings} />
        </div>
    }
}
