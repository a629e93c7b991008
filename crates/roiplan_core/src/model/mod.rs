mod inputs;
mod presets;
mod results;
mod scenario;

pub use inputs::{InputBounds, InputField};
pub use presets::Preset;
pub use results::{FIELD_NAMES, RoiResult};
pub use scenario::RoiScenario;
