mod clock;
mod config;
mod session;

pub use clock::TickClock;
pub use config::Config;
pub use session::Session;
