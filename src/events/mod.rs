pub mod pointer;
pub mod visibility;

pub use pointer::{
    wire_about_cursor, wire_button_ripple, wire_cursor_states, wire_particle_burst,
    wire_project_tilt,
};
pub use visibility::{wire_page_teardown, wire_visibility_gate};
