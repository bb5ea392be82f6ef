pub mod keyboard;
pub mod lifecycle;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use lifecycle::wire_teardown;
pub use pointer::wire_pointer_tracking;
