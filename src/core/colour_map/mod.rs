pub mod hue_ramp;
