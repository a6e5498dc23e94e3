pub use preview::*;
pub use selection::*;
pub use toolbar::*;

mod preview;
mod selection;
mod toolbar;
