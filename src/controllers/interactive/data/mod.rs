pub mod frame_summary;
