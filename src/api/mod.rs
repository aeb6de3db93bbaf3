pub mod sofascore;
pub mod sofascore_dto;
pub mod utils;
