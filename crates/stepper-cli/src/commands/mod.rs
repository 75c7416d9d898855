//! Command handlers.

mod classes;
mod render;

pub(crate) use classes::handle_classes;
pub(crate) use render::handle_render;

use stepper_ui::theme::stylesheet;

pub(crate) fn handle_stylesheet() {
    print!("{}", stylesheet());
}
