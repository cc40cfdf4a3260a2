pub mod dart_board;
pub mod notice;
pub mod result_overlay;
