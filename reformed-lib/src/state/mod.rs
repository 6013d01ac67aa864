//! Form state store.
//!
//! Holds the model, the last input event and the per-field interaction
//! flags. Every mutation replaces the affected value with a fresh one, so a
//! [`FormSnapshot`] taken before a mutation keeps describing the old state.
//!
//! # Example
//!
//! ```
//! use reformed_lib::state::FormStore;
//!
//! let mut store = FormStore::default();
//! let name = store.bind_input("name");
//!
//! store.on_input_event(name.focus());
//! store.on_input_event(name.change("Ada"));
//!
//! let flags = store.input_flags().get("name");
//! assert!(flags.touched && flags.dirty);
//! ```

mod binding;
mod events;
mod flags;
mod snapshot;
mod store;

pub use binding::InputBinding;
pub use events::{ControlType, EventTarget, EventType, InputEvent, LastInputEvent};
pub use flags::{FieldFlags, FlagsPatch, InputFlags};
pub use snapshot::FormSnapshot;
pub use store::FormStore;
