//! UI state machines behind the page components.
//!
//! Nothing in here touches the DOM except the browser backends of the theme
//! manager, so everything can be exercised with plain `cargo test`.

pub mod contact;
pub mod cursor;
pub mod loader;
pub mod observable;
pub mod scroll;
pub mod section;
pub mod theme;
pub mod toast;

pub use contact::{ContactController, ContactField, SubmitStatus};
pub use cursor::{CursorState, CursorVariant};
pub use loader::LoaderPhase;
pub use scroll::{ActiveSection, Parallax, SectionBounds};
pub use section::{ScrollAnimationOptions, SectionId, SectionVisibility, VisibilityTracker};
pub use theme::{Theme, ThemeManager};
pub use toast::{ToastKind, ToastQueue};
