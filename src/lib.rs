//! WebAssembly component wrapper for greeter-rs
//!
//! Exports the `cairo` resource from wit/world.wit. Every method forwards to
//! `greeter_rs::Greeter` so the host sees the library's strings untouched.

mod bindings {
    //! Generated bindings for the cairo world defined in wit/world.wit
    wit_bindgen::generate!({
        path: "wit/world.wit",
    });
}

use bindings::exports::example::cairo::greeter::{Guest, GuestCairo};
use greeter_rs::Greeter;

struct Component;

impl Guest for Component {
    type Cairo = CairoResource;
}

/// Host-owned handle around a `Greeter`
pub struct CairoResource {
    greeter: Greeter,
}

impl GuestCairo for CairoResource {
    fn new(label: String) -> Self {
        tracing::debug!(label = %label, "cairo resource constructed");
        Self {
            greeter: Greeter::new(label),
        }
    }

    fn hello(&self) -> String {
        tracing::trace!("cairo.hello");
        self.greeter.hello().to_owned()
    }

    fn bye(&self) -> String {
        tracing::trace!("cairo.bye");
        self.greeter.bye()
    }

    fn hi() -> String {
        Greeter::hi().to_owned()
    }
}

bindings::export!(Component with_types_in bindings);
