mod components;
mod model;
mod state;
mod storage;
mod util;

use components::App;

fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    util::init_logger();
    yew::Renderer::<App>::new().render();
}
