pub mod capture;
pub mod history;
pub mod input;
pub mod session;
pub mod shortcuts;
pub mod tools;

pub use capture::{DrawingState, GestureCapture};
pub use history::StrokeHistory;
pub use input::InputEvent;
pub use session::{AnnotationSession, DispatchOutcome};
pub use shortcuts::{ShortcutAction, ShortcutMap};
pub use tools::{DrawMode, ToolSettings};
