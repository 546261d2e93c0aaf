pub mod sequence;
pub mod timeline;
pub mod timing;
pub mod visual;

pub use sequence::{ScheduledStep, ThrowSequence, ThrowStep};
pub use timeline::VirtualTimeline;
pub use timing::{ThrowTimings, FLIGHT_MS, WINDUP_MS};
pub use visual::ThrowVisual;
