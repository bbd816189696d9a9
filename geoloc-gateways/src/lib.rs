pub mod google_maps;
pub mod opencage;

mod http;
