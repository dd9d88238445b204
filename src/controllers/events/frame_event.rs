use crate::controllers::data::frame_data::FrameData;

#[derive(Debug)]
pub struct RenderError {
    pub generation: u64,
    pub message: String,
}

#[derive(Debug)]
pub enum FrameEvent {
    Frame(FrameData),
    Error(RenderError),
}
