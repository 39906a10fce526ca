pub mod celebration;
pub mod constants;
pub mod debounce;
pub mod evasion;
pub mod geometry;
pub mod growth;
pub mod input;
pub mod particles;
pub mod prompt;
pub mod responsive;
pub mod widget;

pub use celebration::*;
pub use geometry::*;
pub use growth::*;
pub use input::*;
pub use particles::*;
pub use responsive::*;
pub use widget::*;
