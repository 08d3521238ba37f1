mod region_code;
mod language_code;

pub use region_code::RegionCode;
pub use language_code::LanguageCode;
