pub mod compute_escape_grid;
pub mod render_frame;
