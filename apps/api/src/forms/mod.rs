// Section editors: pure list operations plus the whole-section replacement
// callback contract carried over HTTP. No editor ever sees another section.

pub mod handlers;
pub mod ops;
