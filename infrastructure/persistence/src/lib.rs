pub mod file_store;
pub mod memory_store;
pub mod store;
pub mod catalog {
    pub mod entity;
    pub mod repository;
}
pub mod session {
    pub mod repository;
}
