/// One active finger as reported by the host input system. Ephemeral:
/// a fresh set arrives with every touch event.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TouchPoint {
    pub id: u64,
    pub client_x: f64,
    pub client_y: f64,
}
