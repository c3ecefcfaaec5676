pub mod capability;
pub mod constants;
pub mod effect;
pub mod fallback;
pub mod follower;
pub mod letters;
pub mod particles;
pub mod presets;
pub mod reveal;
pub mod selectors;
pub mod submit;
pub mod tickers;

pub use capability::*;
pub use effect::*;
pub use fallback::*;
pub use follower::*;
pub use letters::*;
pub use particles::*;
pub use reveal::*;
pub use submit::*;
pub use tickers::*;
