pub use artdex_core::prelude::*;

// vim: ts=4
