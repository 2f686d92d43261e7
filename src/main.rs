//! Browser entry point for the portfolio app.

// Dependencies are used by the library half of the package.
#![allow(unused_crate_dependencies)]

use leptos::prelude::*;
use neural_portfolio::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App)
}
