pub mod analysis_service;
pub mod text_pools;
