pub mod frame_event;
