pub mod random;
pub mod scheduler;
pub mod session;

pub use random::JsRandom;
pub use scheduler::BrowserScheduler;
pub use session::{GameSession, Phase};

/// The session as wired into the browser.
pub type BrowserSession = GameSession<BrowserScheduler, JsRandom>;
